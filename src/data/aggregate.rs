//! Read-only summaries over a [`FilteredView`].
//!
//! Every function is total: an empty view yields `0` or an empty list.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::filter::FilteredView;
use super::model::Column;

/// One entry of the genre ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Number of titles of one type released in one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub release_year: i32,
    pub kind: String,
    pub count: usize,
}

/// Share of the view held by one type.
#[derive(Debug, Clone, PartialEq)]
pub struct KindShare {
    pub kind: String,
    pub count: usize,
    /// `count / view size`, in `[0, 1]`.
    pub fraction: f64,
}

pub fn count(view: &FilteredView<'_>) -> usize {
    view.len()
}

/// Number of distinct non-null values of `column`.
pub fn distinct_count(view: &FilteredView<'_>, column: Column) -> usize {
    view.iter()
        .filter_map(|t| t.field(column))
        .collect::<HashSet<_>>()
        .len()
}

/// Largest release year in the view.
pub fn max_release_year(view: &FilteredView<'_>) -> Option<i32> {
    view.iter().map(|t| t.release_year).max()
}

/// The `k` most frequent genres of the exploded `listed_in` column.
///
/// A title listed under several genres counts once for each. Equal counts
/// keep the order in which the genres were first seen.
pub fn top_genres(view: &FilteredView<'_>, k: usize) -> Vec<GenreCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<GenreCount> = Vec::new();

    for genre in view.iter().flat_map(|t| t.genres()) {
        match slots.get(genre) {
            Some(&slot) => tally[slot].count += 1,
            None => {
                slots.insert(genre, tally.len());
                tally.push(GenreCount {
                    genre: genre.to_string(),
                    count: 1,
                });
            }
        }
    }

    // `sort_by` is stable, which gives the first-seen tie-break.
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally.truncate(k);
    tally
}

/// Counts grouped by `(release_year, type)`.
///
/// Points come out ordered by year, then by first-seen type, but callers
/// should treat the list as unordered.
pub fn trend_by_year_and_kind(view: &FilteredView<'_>) -> Vec<TrendPoint> {
    let mut kind_order: Vec<&str> = Vec::new();
    let mut groups: BTreeMap<(i32, usize), usize> = BTreeMap::new();

    for t in view.iter() {
        let kind_idx = match kind_order.iter().position(|k| *k == t.kind) {
            Some(i) => i,
            None => {
                kind_order.push(&t.kind);
                kind_order.len() - 1
            }
        };
        *groups.entry((t.release_year, kind_idx)).or_default() += 1;
    }

    groups
        .into_iter()
        .map(|((release_year, kind_idx), count)| TrendPoint {
            release_year,
            kind: kind_order[kind_idx].to_string(),
            count,
        })
        .collect()
}

/// Count and proportion per type, in first-seen order.
pub fn kind_breakdown(view: &FilteredView<'_>) -> Vec<KindShare> {
    let total = view.len();
    let mut shares: Vec<KindShare> = Vec::new();

    for t in view.iter() {
        match shares.iter_mut().find(|s| s.kind == t.kind) {
            Some(share) => share.count += 1,
            None => shares.push(KindShare {
                kind: t.kind.clone(),
                count: 1,
                fraction: 0.0,
            }),
        }
    }
    for share in &mut shares {
        share.fraction = share.count as f64 / total as f64;
    }
    shares
}

/// Titles per `year_added`, ascending. Titles without a parsed
/// `date_added` are left out.
pub fn added_by_year(view: &FilteredView<'_>) -> Vec<(i32, usize)> {
    let mut years: BTreeMap<i32, usize> = BTreeMap::new();
    for year in view.iter().filter_map(|t| t.year_added()) {
        *years.entry(year).or_default() += 1;
    }
    years.into_iter().collect()
}
