use super::aggregate::{self, GenreCount, KindShare, TrendPoint};
use super::filter::{filter, FilterCriteria};
use super::model::{Catalog, Column};

/// Everything the dashboard draws for one set of filter criteria.
///
/// Owned, so it can outlive the borrow of the catalog. A new snapshot is
/// computed from scratch on every control change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub total_titles: usize,
    pub countries: usize,
    pub latest_release_year: Option<i32>,
    pub kinds: Vec<KindShare>,
    pub top_genres: Vec<GenreCount>,
    pub trend: Vec<TrendPoint>,
    pub added_by_year: Vec<(i32, usize)>,
    /// Catalog indices of the rows shown by the raw-data table.
    pub preview_rows: Vec<usize>,
}

impl Snapshot {
    pub fn compute(catalog: &Catalog, criteria: &FilterCriteria, top_n: usize, preview_rows: usize) -> Self {
        let view = filter(catalog, criteria);
        log::debug!(
            "Recomputed view: {} of {} titles ({:?}, {}..={})",
            view.len(),
            catalog.len(),
            criteria.selected_kinds,
            criteria.years.lo(),
            criteria.years.hi()
        );

        Snapshot {
            total_titles: aggregate::count(&view),
            countries: aggregate::distinct_count(&view, Column::Country),
            latest_release_year: aggregate::max_release_year(&view),
            kinds: aggregate::kind_breakdown(&view),
            top_genres: aggregate::top_genres(&view, top_n),
            trend: aggregate::trend_by_year_and_kind(&view),
            added_by_year: aggregate::added_by_year(&view),
            preview_rows: view.preview(preview_rows),
        }
    }
}
