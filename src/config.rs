use crate::data::filter::YearRange;
use crate::data::loader::DataSource;

/// Environment variable naming the dataset location (URL or path).
pub const SOURCE_ENV: &str = "CATALOG_INSIGHTS_SOURCE";

pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/lex-p-98/netflix_titles_visualisation/main/netflix_titles.csv";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub source: DataSource,
    /// Initial release-year selection, clamped to the data once loaded.
    pub default_years: YearRange,
    /// Length of the genre ranking.
    pub top_n: usize,
    /// Rows shown by the raw-data table.
    pub preview_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DataSource::parse(DEFAULT_SOURCE),
            default_years: YearRange::new(2010, 2021),
            top_n: 10,
            preview_rows: 100,
        }
    }
}

impl DashboardConfig {
    /// Defaults, with the source overridden by [`SOURCE_ENV`] when set.
    pub fn from_env() -> Self {
        Self::with_source_override(std::env::var(SOURCE_ENV).ok().as_deref())
    }

    fn with_source_override(source: Option<&str>) -> Self {
        let mut config = Self::default();
        match source.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => {
                config.source = DataSource::parse(s);
                log::info!("Using dataset source from {SOURCE_ENV}: {}", config.source);
            }
            None => log::debug!("{SOURCE_ENV} not set, using {}", config.source),
        }
        config
    }
}
