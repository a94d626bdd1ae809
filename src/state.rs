use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{FilterCriteria, YearRange};
use crate::data::model::Catalog;
use crate::data::summary::Snapshot;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded catalog (None when the initial load failed).
    pub catalog: Option<Arc<Catalog>>,

    /// Current type and release-year selection.
    pub criteria: FilterCriteria,

    /// Aggregates for `criteria`, replaced on every change.
    pub snapshot: Snapshot,

    /// Series colour per content type.
    pub colors: ColorMap,

    /// Whether the raw-data table is shown.
    pub show_raw: bool,

    /// Fatal load error; nothing but this message is drawn while set.
    pub load_error: Option<String>,

    /// Non-fatal status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            criteria: FilterCriteria {
                selected_kinds: Default::default(),
                years: config.default_years,
            },
            config,
            catalog: None,
            snapshot: Snapshot::default(),
            colors: ColorMap::new(&[]),
            show_raw: false,
            load_error: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded catalog, reset filters and recompute.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.criteria = FilterCriteria::defaults(&catalog, self.config.default_years);
        self.colors = ColorMap::new(&catalog.kinds);
        self.catalog = Some(catalog);
        self.load_error = None;
        self.status_message = None;
        self.refresh();
    }

    /// Recompute the snapshot from the current criteria.
    pub fn refresh(&mut self) {
        self.snapshot = match &self.catalog {
            Some(catalog) => Snapshot::compute(
                catalog,
                &self.criteria,
                self.config.top_n,
                self.config.preview_rows,
            ),
            None => Snapshot::default(),
        };
    }

    /// Toggle a single type in the selection.
    pub fn toggle_kind(&mut self, kind: &str) {
        if !self.criteria.selected_kinds.remove(kind) {
            self.criteria.selected_kinds.insert(kind.to_string());
        }
        self.refresh();
    }

    /// Select every type observed in the catalog.
    pub fn select_all(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.criteria.selected_kinds = catalog.kinds.iter().cloned().collect();
            self.refresh();
        }
    }

    /// Deselect all types.
    pub fn select_none(&mut self) {
        self.criteria.selected_kinds.clear();
        self.refresh();
    }

    /// Replace the release-year range.
    pub fn set_years(&mut self, lo: i32, hi: i32) {
        let years = YearRange::new(lo, hi);
        if years != self.criteria.years {
            self.criteria.years = years;
            self.refresh();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{catalog, title};

    fn loaded() -> AppState {
        let mut state = AppState::new(DashboardConfig::default());
        state.set_catalog(Arc::new(catalog(vec![
            title("Movie", 2015, "Drama"),
            title("Movie", 2015, "Drama, Comedy"),
            title("TV Show", 2020, "Comedy"),
            title("Movie", 1990, "Classic"),
        ])));
        state
    }

    #[test]
    fn set_catalog_applies_defaults() {
        let state = loaded();
        assert_eq!(state.criteria.years, YearRange::new(2010, 2020));
        assert_eq!(state.criteria.selected_kinds.len(), 2);
        assert_eq!(state.snapshot.total_titles, 3);
    }

    #[test]
    fn every_change_refreshes_snapshot() {
        let mut state = loaded();

        state.toggle_kind("TV Show");
        assert_eq!(state.snapshot.total_titles, 2);
        assert_eq!(state.snapshot.top_genres[0].genre, "Drama");

        state.set_years(1990, 1990);
        assert_eq!(state.snapshot.total_titles, 1);

        state.select_none();
        assert_eq!(state.snapshot, Snapshot::default());

        state.select_all();
        state.set_years(2021, 1980);
        assert_eq!(state.criteria.years, YearRange::new(1980, 2021));
        assert_eq!(state.snapshot.total_titles, 4);
    }

    #[test]
    fn without_catalog_snapshot_stays_empty() {
        let mut state = AppState::new(DashboardConfig::default());
        state.toggle_kind("Movie");
        assert_eq!(state.snapshot, Snapshot::default());
    }
}
