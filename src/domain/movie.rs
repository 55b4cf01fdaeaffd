//! Movie domain model.
//!
//! [`MovieSummary`] is the minimal display record shared by search results,
//! home feeds and the favorites set. [`MovieDetails`] extends it with the
//! fields only the detail lookup returns.
//!
//! The serialized form of a summary keeps the provider's field names
//! (`imdbID`, `Title`, `Year`, `Poster`, `Type`) so a persisted favorites blob
//! and a search result share one shape.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel the provider uses for "no value".
pub const NOT_AVAILABLE: &str = "N/A";

/// Minimal display record for one title.
///
/// Identity is `id`; every other field is display metadata and is treated as
/// immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Unique external identifier (IMDb id, e.g. `tt1160419`).
    #[serde(rename = "imdbID")]
    pub id: String,

    #[serde(rename = "Title")]
    pub title: String,

    /// Release year as reported, which may be a range for series (`2019–2022`).
    #[serde(rename = "Year", default)]
    pub year: String,

    /// Poster URL, `None` when the provider reported `N/A`.
    #[serde(
        rename = "Poster",
        default,
        serialize_with = "serialize_poster",
        deserialize_with = "deserialize_optional"
    )]
    pub poster: Option<String>,

    /// Title kind: `movie`, `series`, `episode`, `game`.
    #[serde(rename = "Type", default)]
    pub kind: String,
}

impl MovieSummary {
    /// Creates a summary with no poster.
    ///
    /// # Examples
    ///
    /// ```
    /// use reelmark::MovieSummary;
    ///
    /// let movie = MovieSummary::new("tt1160419", "Dune", "2021", "movie");
    /// assert_eq!(movie.id, "tt1160419");
    /// assert!(movie.poster.is_none());
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster: None,
            kind: kind.into(),
        }
    }

    /// Sets the poster URL, mapping the `N/A` sentinel and blanks to `None`.
    #[must_use]
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = available(poster.into());
        self
    }
}

/// Extended single-title record returned by a details lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub summary: MovieSummary,
    pub director: Option<String>,
    pub plot: Option<String>,
    pub runtime: Option<String>,
    /// Content rating (`PG-13`, `R`, ...).
    pub rated: Option<String>,
    pub genres: Vec<String>,
    /// Aggregate user rating as reported (`8.0`).
    pub rating: Option<String>,
    pub cast: Vec<String>,
    pub writer: Option<String>,
}

impl MovieDetails {
    /// Reduces the record to the summary stored in the favorites set.
    #[must_use]
    pub fn to_summary(&self) -> MovieSummary {
        self.summary.clone()
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.summary.id
    }
}

/// Maps the `N/A` sentinel and blank strings to `None`.
#[must_use]
pub fn available(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

/// Splits a provider list field (`"Drama, Sci-Fi"`) into its entries.
#[must_use]
pub fn split_list(value: Option<String>) -> Vec<String> {
    value
        .and_then(available)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn serialize_poster<S: Serializer>(poster: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(poster.as_deref().unwrap_or(NOT_AVAILABLE))
}

fn deserialize_optional<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(available))
}
