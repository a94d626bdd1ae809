use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Schema – the columns the dashboard relies on
// ---------------------------------------------------------------------------

/// Header names that must be present in the source CSV.
/// Checked once when the header row is read.
pub const REQUIRED_COLUMNS: [&str; 5] = ["type", "country", "release_year", "date_added", "listed_in"];

/// Columns that aggregations can be keyed on.
///
/// A closed enum rather than a header string, so asking for a column the
/// schema doesn't have cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Type,
    Country,
    ReleaseYear,
    YearAdded,
    ListedIn,
}

// ---------------------------------------------------------------------------
// FieldValue – a single non-null cell of a typed column
// ---------------------------------------------------------------------------

/// Borrowed view of one field. Nulls are represented by the absence of a
/// `FieldValue`, so they never end up in a distinct set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Year(i32),
}

// ---------------------------------------------------------------------------
// Title – one row of the catalog
// ---------------------------------------------------------------------------

/// One catalog entry (a movie or a show).
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    /// Value of the `type` column, e.g. "Movie" / "TV Show".
    pub kind: String,
    /// Possibly comma-joined list of countries; `None` when blank.
    pub country: Option<String>,
    pub release_year: i32,
    /// Parsed `date_added`; `None` when blank or unparseable.
    pub date_added: Option<NaiveDate>,
    /// Comma-separated genre list; `None` when blank.
    pub listed_in: Option<String>,
    /// The untouched source row, in header order.
    pub cells: Vec<String>,
}

impl Title {
    /// Year component of `date_added`.
    pub fn year_added(&self) -> Option<i32> {
        use chrono::Datelike;
        self.date_added.map(|d| d.year())
    }

    /// Value of `column` for this title, or `None` for a null field.
    pub fn field(&self, column: Column) -> Option<FieldValue<'_>> {
        match column {
            Column::Type => Some(FieldValue::Text(&self.kind)),
            Column::Country => self.country.as_deref().map(FieldValue::Text),
            Column::ReleaseYear => Some(FieldValue::Year(self.release_year)),
            Column::YearAdded => self.year_added().map(FieldValue::Year),
            Column::ListedIn => self.listed_in.as_deref().map(FieldValue::Text),
        }
    }

    /// Individual genres of `listed_in`, split on `", "` and trimmed.
    pub fn genres(&self) -> impl Iterator<Item = &str> + '_ {
        self.listed_in
            .as_deref()
            .into_iter()
            .flat_map(|s| s.split(", "))
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed facet domains.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Header row of the source file, in order.
    pub headers: Vec<String>,
    /// All titles (rows), in file order.
    pub titles: Vec<Title>,
    /// Distinct `type` values in first-seen order.
    pub kinds: Vec<String>,
    /// Smallest and largest `release_year`, `None` when there are no rows.
    pub release_years: Option<(i32, i32)>,
}

impl Catalog {
    /// Build facet domains from the loaded titles.
    pub fn from_titles(headers: Vec<String>, titles: Vec<Title>) -> Self {
        let mut kinds: Vec<String> = Vec::new();
        let mut release_years: Option<(i32, i32)> = None;

        for t in &titles {
            if !kinds.iter().any(|k| *k == t.kind) {
                kinds.push(t.kind.clone());
            }
            release_years = Some(match release_years {
                None => (t.release_year, t.release_year),
                Some((lo, hi)) => (lo.min(t.release_year), hi.max(t.release_year)),
            });
        }

        Catalog {
            headers,
            titles,
            kinds,
            release_years,
        }
    }

    /// Number of titles.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
