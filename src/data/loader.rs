use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Catalog, Title, REQUIRED_COLUMNS};

const USER_AGENT: &str = concat!("catalog-insights/", env!("CARGO_PKG_VERSION"));
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Formats tried, in order, on the trimmed `date_added` cell.
const DATE_FORMATS: [&str; 3] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: release_year '{value}' is not an integer")]
    InvalidReleaseYear { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where the catalog CSV lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(String),
    File(PathBuf),
}

impl DataSource {
    /// `http://` / `https://` locations are fetched, anything else is a path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Remote(s.to_string())
        } else {
            DataSource::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

static CATALOG_CACHE: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Load the catalog once per process.
///
/// The first successful load is kept and handed out for every later call,
/// whatever `source` those calls name. A failed load leaves the cache empty.
pub fn load_cached(source: &DataSource) -> Result<Arc<Catalog>, LoadError> {
    if let Some(catalog) = CATALOG_CACHE.get() {
        return Ok(Arc::clone(catalog));
    }
    let catalog = Arc::new(load_source(source)?);
    Ok(Arc::clone(CATALOG_CACHE.get_or_init(|| catalog)))
}

/// Load a catalog from `source`, bypassing the process cache.
pub fn load_source(source: &DataSource) -> Result<Catalog, LoadError> {
    let catalog = match source {
        DataSource::Remote(url) => {
            let body = fetch_remote(url)?;
            parse_catalog(body.as_slice())?
        }
        DataSource::File(path) => load_file(path)?,
    };

    log::info!(
        "Loaded {} titles from {source} (types {:?}, release years {:?})",
        catalog.len(),
        catalog.kinds,
        catalog.release_years
    );
    Ok(catalog)
}

/// Load a catalog CSV from disk.
pub fn load_file(path: &Path) -> Result<Catalog, LoadError> {
    let file = std::fs::File::open(path)?;
    parse_catalog(std::io::BufReader::new(file))
}

fn fetch_remote(url: &str) -> Result<Vec<u8>, LoadError> {
    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(http_err)?;

    log::debug!("GET {url}");
    let body = client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .map_err(http_err)?;

    Ok(body.to_vec())
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Columns read into typed fields. Every other column is only kept verbatim.
#[derive(Debug, Deserialize)]
struct RawTitle {
    #[serde(rename = "type")]
    kind: String,
    country: Option<String>,
    release_year: String,
    date_added: Option<String>,
    listed_in: Option<String>,
}

/// Parse a catalog CSV with a header row.
///
/// The header row is checked against [`REQUIRED_COLUMNS`] before any data
/// row is read.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Catalog, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }
    // Tolerate stray whitespace around header names.
    let trimmed_headers = csv::StringRecord::from(headers.iter().map(str::trim).collect::<Vec<_>>());

    let mut titles = Vec::new();
    let mut bad_dates = 0usize;

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = result?;
        let raw: RawTitle = record.deserialize(Some(&trimmed_headers))?;

        let release_year = raw
            .release_year
            .trim()
            .parse::<i32>()
            .map_err(|_| LoadError::InvalidReleaseYear {
                row,
                value: raw.release_year.clone(),
            })?;

        let date_added = raw.date_added.as_deref().and_then(|s| {
            let parsed = parse_date_added(s);
            if parsed.is_none() && !s.trim().is_empty() {
                bad_dates += 1;
            }
            parsed
        });

        titles.push(Title {
            kind: raw.kind.trim().to_string(),
            country: non_blank(raw.country),
            release_year,
            date_added,
            listed_in: non_blank(raw.listed_in),
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    if bad_dates > 0 {
        log::warn!("{bad_dates} rows have an unparseable date_added; their year_added is null");
    }

    let headers = trimmed_headers.iter().map(str::to_string).collect();
    Ok(Catalog::from_titles(headers, titles))
}

/// Parse a `date_added` cell such as `" September 25, 2021"`.
pub fn parse_date_added(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
show_id,type,title,country,date_added,release_year,listed_in
s1,Movie,Dick Johnson Is Dead,United States,\"September 25, 2021\",2020,Documentaries
s2,TV Show,Blood & Water,South Africa,\" September 24, 2021\",2021,\"International TV Shows, TV Dramas, TV Mysteries\"
s3,TV Show,Ganglands,,\"September 24, 2021\",2021,\"Crime TV Shows, International TV Shows\"
s4,Movie,Untitled,\"India, France\",,1993,
";

    #[test]
    fn parses_typed_fields_and_keeps_raw_cells() {
        let cat = parse_catalog(SAMPLE.as_bytes()).unwrap();
        assert_eq!(cat.len(), 4);
        assert_eq!(cat.kinds, vec!["Movie".to_string(), "TV Show".to_string()]);
        assert_eq!(cat.release_years, Some((1993, 2021)));

        let second = &cat.titles[1];
        assert_eq!(second.kind, "TV Show");
        assert_eq!(second.country.as_deref(), Some("South Africa"));
        assert_eq!(second.date_added, NaiveDate::from_ymd_opt(2021, 9, 24));
        assert_eq!(second.year_added(), Some(2021));
        assert_eq!(second.cells[2], "Blood & Water");
        assert_eq!(second.cells[4], " September 24, 2021");
        assert_eq!(cat.headers.len(), 7);
    }

    #[test]
    fn blank_cells_become_null() {
        let cat = parse_catalog(SAMPLE.as_bytes()).unwrap();
        assert_eq!(cat.titles[2].country, None);
        let last = &cat.titles[3];
        assert_eq!(last.country.as_deref(), Some("India, France"));
        assert_eq!(last.date_added, None);
        assert_eq!(last.year_added(), None);
        assert_eq!(last.listed_in, None);
    }

    #[test]
    fn missing_column_fails_before_reading_rows() {
        let csv = "type,country,release_year,date_added\nMovie,US,2020,\n";
        match parse_catalog(csv.as_bytes()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "listed_in"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn bad_release_year_reports_row() {
        let csv = "type,country,release_year,date_added,listed_in\n\
                   Movie,US,2020,,Dramas\n\
                   Movie,US,soon,,Dramas\n";
        match parse_catalog(csv.as_bytes()) {
            Err(LoadError::InvalidReleaseYear { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "soon");
            }
            other => panic!("expected InvalidReleaseYear, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_date_leaves_year_added_null() {
        let csv = "type,country,release_year,date_added,listed_in\n\
                   Movie,US,2020,someday,Dramas\n";
        let cat = parse_catalog(csv.as_bytes()).unwrap();
        assert_eq!(cat.titles[0].date_added, None);
        assert_eq!(cat.titles[0].release_year, 2020);
    }

    #[test]
    fn date_formats() {
        assert_eq!(
            parse_date_added("  August 4, 2017 "),
            NaiveDate::from_ymd_opt(2017, 8, 4)
        );
        assert_eq!(parse_date_added("Aug 4, 2017"), NaiveDate::from_ymd_opt(2017, 8, 4));
        assert_eq!(parse_date_added("2017-08-04"), NaiveDate::from_ymd_opt(2017, 8, 4));
        assert_eq!(parse_date_added("   "), None);
        assert_eq!(parse_date_added("4/8/17"), None);
    }

    #[test]
    fn data_source_parse() {
        assert_eq!(
            DataSource::parse(" https://example.org/titles.csv "),
            DataSource::Remote("https://example.org/titles.csv".to_string())
        );
        assert_eq!(
            DataSource::parse("HTTP://example.org/a.csv"),
            DataSource::Remote("HTTP://example.org/a.csv".to_string())
        );
        assert_eq!(
            DataSource::parse("data/titles.csv"),
            DataSource::File(PathBuf::from("data/titles.csv"))
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_source(&DataSource::File(PathBuf::from("/nonexistent/titles.csv"))).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn cached_load_reuses_first_catalog() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "{SAMPLE}").unwrap();
        let source = DataSource::File(tmp.path().to_path_buf());

        let first = load_cached(&source).unwrap();
        let second = load_cached(&DataSource::File(PathBuf::from("/nonexistent.csv"))).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 4);
    }
}
