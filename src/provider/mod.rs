//! Remote movie metadata provider.
//!
//! The provider is consumed through two lookups: a paged free-text search and
//! a single-title details lookup. [`MovieProvider`] abstracts over the
//! transport so the fetch worker can be driven by the HTTP client in
//! production and by canned data in tests.
//!
//! # Modules
//!
//! - `omdb`: reqwest-based client for OMDb-compatible endpoints
//! - `wire`: response envelopes and their decoding rules

pub mod omdb;
pub mod wire;

pub use omdb::OmdbClient;

use crate::domain::{MovieDetails, MovieSummary, Result};
use futures_util::future::BoxFuture;

/// Parameters of one search page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    /// 1-based page number.
    pub page: u32,
    /// Optional release-year filter.
    pub year: Option<u16>,
}

impl SearchQuery {
    /// Creates a query for `term` at `page` with no year filter.
    pub fn new(term: impl Into<String>, page: u32) -> Self {
        Self {
            term: term.into(),
            page: page.max(1),
            year: None,
        }
    }

    #[must_use]
    pub const fn with_year(mut self, year: Option<u16>) -> Self {
        self.year = year;
        self
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    /// Items in provider order.
    pub items: Vec<MovieSummary>,
    /// Total matches the provider reports for the term across all pages.
    pub total_results: usize,
}

/// Source of movie metadata.
///
/// Futures are boxed so the trait stays object safe; the worker holds an
/// `Arc<dyn MovieProvider>`.
pub trait MovieProvider: Send + Sync {
    /// Fetches one page of results for a free-text term.
    ///
    /// # Errors
    ///
    /// Transport, decode and provider-reported failures.
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BoxFuture<'a, Result<SearchPage>>;

    /// Fetches the extended record for one title.
    ///
    /// # Errors
    ///
    /// Transport, decode and provider-reported failures.
    fn details<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<MovieDetails>>;
}
