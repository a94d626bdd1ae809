use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::model::{Catalog, Title};

// ---------------------------------------------------------------------------
// Filter criteria: selected types and an inclusive release-year range
// ---------------------------------------------------------------------------

/// Inclusive `[lo, hi]` range of release years.
///
/// Constructing with `lo > hi` swaps the bounds, so a range is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    lo: i32,
    hi: i32,
}

impl YearRange {
    pub fn new(lo: i32, hi: i32) -> Self {
        if lo > hi {
            YearRange { lo: hi, hi: lo }
        } else {
            YearRange { lo, hi }
        }
    }

    pub fn lo(&self) -> i32 {
        self.lo
    }

    pub fn hi(&self) -> i32 {
        self.hi
    }

    pub fn contains(&self, year: i32) -> bool {
        self.lo <= year && year <= self.hi
    }

    /// Clamp both bounds into `[min, max]`.
    pub fn clamp_to(self, min: i32, max: i32) -> Self {
        let (min, max) = (min.min(max), min.max(max));
        YearRange::new(self.lo.clamp(min, max), self.hi.clamp(min, max))
    }
}

impl From<RangeInclusive<i32>> for YearRange {
    fn from(r: RangeInclusive<i32>) -> Self {
        YearRange::new(*r.start(), *r.end())
    }
}

/// Everything that decides membership of a [`FilteredView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// `type` values to keep. Empty means nothing passes.
    pub selected_kinds: BTreeSet<String>,
    pub years: YearRange,
}

impl FilterCriteria {
    /// All observed types, and `default_years` clamped to the catalog's span.
    pub fn defaults(catalog: &Catalog, default_years: YearRange) -> Self {
        let years = match catalog.release_years {
            Some((min, max)) => default_years.clamp_to(min, max),
            None => default_years,
        };
        FilterCriteria {
            selected_kinds: catalog.kinds.iter().cloned().collect(),
            years,
        }
    }

    /// Whether `title` passes both predicates.
    pub fn matches(&self, title: &Title) -> bool {
        self.selected_kinds.contains(&title.kind) && self.years.contains(title.release_year)
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// The titles currently in scope, in catalog order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    rows: Vec<(usize, &'a Title)>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Title> + '_ {
        self.rows.iter().map(|(_, t)| *t)
    }

    /// Catalog indices of the first `n` titles in the view.
    pub fn preview(&self, n: usize) -> Vec<usize> {
        self.rows.iter().take(n).map(|(i, _)| *i).collect()
    }

    /// Catalog indices of every title in the view.
    #[cfg(test)]
    pub fn indices(&self) -> Vec<usize> {
        self.rows.iter().map(|(i, _)| *i).collect()
    }
}

/// Return the titles that satisfy `criteria`, preserving catalog order.
pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> FilteredView<'a> {
    let rows = catalog
        .titles
        .iter()
        .enumerate()
        .filter(|(_, t)| criteria.matches(t))
        .collect();
    FilteredView { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{catalog, title};

    fn sample() -> Catalog {
        catalog(vec![
            title("Movie", 2015, "Drama"),
            title("TV Show", 2008, "Comedy"),
            title("Movie", 2015, "Drama, Comedy"),
            title("TV Show", 2020, "Comedy"),
            title("Movie", 2021, "Horror"),
            title("Movie", 1999, "Drama"),
        ])
    }

    fn kinds(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn view_is_ordered_subsequence_satisfying_predicates() {
        let cat = sample();
        let criteria = FilterCriteria {
            selected_kinds: kinds(&["Movie"]),
            years: YearRange::new(2010, 2021),
        };
        let view = filter(&cat, &criteria);
        assert_eq!(view.indices(), vec![0, 2, 4]);
        assert!(view.iter().all(|t| criteria.matches(t)));
    }

    #[test]
    fn all_kinds_and_full_span_is_identity() {
        let cat = sample();
        let (min, max) = cat.release_years.unwrap();
        let criteria = FilterCriteria {
            selected_kinds: cat.kinds.iter().cloned().collect(),
            years: YearRange::new(min, max),
        };
        let view = filter(&cat, &criteria);
        assert_eq!(view.indices(), (0..cat.len()).collect::<Vec<_>>());
        assert!(view.iter().zip(&cat.titles).all(|(a, b)| a == b));
    }

    #[test]
    fn empty_kind_selection_gives_empty_view() {
        let cat = sample();
        let criteria = FilterCriteria {
            selected_kinds: BTreeSet::new(),
            years: YearRange::new(1900, 2100),
        };
        assert!(filter(&cat, &criteria).is_empty());
    }

    #[test]
    fn unknown_kind_matches_nothing() {
        let cat = sample();
        let criteria = FilterCriteria {
            selected_kinds: kinds(&["Podcast"]),
            years: YearRange::new(1900, 2100),
        };
        assert_eq!(filter(&cat, &criteria).len(), 0);
    }

    #[test]
    fn single_year_range_keeps_exact_year() {
        let cat = sample();
        let criteria = FilterCriteria {
            selected_kinds: cat.kinds.iter().cloned().collect(),
            years: YearRange::new(2015, 2015),
        };
        let view = filter(&cat, &criteria);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|t| t.release_year == 2015));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let cat = sample();
        let criteria = FilterCriteria {
            selected_kinds: cat.kinds.iter().cloned().collect(),
            years: YearRange::new(2008, 2020),
        };
        assert_eq!(filter(&cat, &criteria).indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let r = YearRange::new(2021, 2010);
        assert_eq!((r.lo(), r.hi()), (2010, 2021));
        assert_eq!(r, YearRange::from(2010..=2021));

        let cat = sample();
        let swapped = FilterCriteria {
            selected_kinds: cat.kinds.iter().cloned().collect(),
            years: YearRange::new(2021, 2010),
        };
        let ordered = FilterCriteria {
            years: YearRange::new(2010, 2021),
            ..swapped.clone()
        };
        assert_eq!(filter(&cat, &swapped).indices(), filter(&cat, &ordered).indices());
    }

    #[test]
    fn defaults_clamp_to_catalog_span() {
        let cat = catalog(vec![title("Movie", 2012, "Drama"), title("TV Show", 2019, "Comedy")]);
        let criteria = FilterCriteria::defaults(&cat, YearRange::new(2010, 2021));
        assert_eq!(criteria.years, YearRange::new(2012, 2019));
        assert_eq!(criteria.selected_kinds, kinds(&["Movie", "TV Show"]));
    }

    #[test]
    fn clamp_outside_span_collapses_to_edge() {
        let r = YearRange::new(1950, 1960).clamp_to(2000, 2020);
        assert_eq!(r, YearRange::new(2000, 2000));
    }

    #[test]
    fn preview_takes_leading_rows() {
        let cat = sample();
        let criteria = FilterCriteria::defaults(&cat, YearRange::new(1900, 2100));
        let view = filter(&cat, &criteria);
        assert_eq!(view.preview(2), vec![0, 1]);
        assert_eq!(view.preview(100).len(), cat.len());
    }
}
