//! Paged search result accumulation.
//!
//! [`PagedResults`] turns independently fetched, possibly overlapping result
//! pages into one deduplicated display list for the active search term.
//!
//! Pages are expected to arrive in ascending order; every response carries the
//! term it was requested for, and responses for any other term are dropped.
//! That guard is what makes late responses for an abandoned search harmless
//! without cancelling requests in flight.
//!
//! # Example
//!
//! ```rust
//! use reelmark::app::paging::{MergeOutcome, PagedResults};
//! use reelmark::MovieSummary;
//!
//! let movie = |id: &str| MovieSummary::new(id, id, "2021", "movie");
//!
//! let mut results = PagedResults::default();
//! results.set_search_term("dune");
//! results.merge_page("dune", 1, vec![movie("tt1"), movie("tt2")]);
//! results.request_next_page();
//! results.merge_page("dune", 2, vec![movie("tt2"), movie("tt3")]);
//!
//! let ids: Vec<_> = results.items().iter().map(|m| m.id.as_str()).collect();
//! assert_eq!(ids, ["tt1", "tt2", "tt3"]);
//! assert_eq!(results.merge_page("arrival", 1, vec![]), MergeOutcome::Stale);
//! ```

use crate::domain::MovieSummary;
use std::collections::HashSet;

/// Result of offering a page to [`PagedResults::merge_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The page belonged to the active term and was merged.
    Merged {
        /// Items appended to the list.
        added: usize,
        /// Items dropped as duplicates.
        dropped: usize,
    },
    /// The page was requested for a term that is no longer active.
    Stale,
}

/// Accumulated results for one active search term.
#[derive(Debug, Clone)]
pub struct PagedResults {
    term: String,
    current_page: u32,
    accumulated: Vec<MovieSummary>,
    /// Ids present in `accumulated`.
    seen: HashSet<String>,
}

impl Default for PagedResults {
    fn default() -> Self {
        Self {
            term: String::new(),
            current_page: 1,
            accumulated: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl PagedResults {
    /// Switches the active term.
    ///
    /// A different term clears the list and rewinds to page 1. Setting the
    /// current term again leaves everything untouched. Returns `true` when the
    /// state was reset.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        if term == self.term {
            return false;
        }

        tracing::debug!(old = %self.term, new = %term, "search term changed, resetting results");
        self.term = term.to_string();
        self.current_page = 1;
        self.accumulated.clear();
        self.seen.clear();
        true
    }

    /// Advances the page cursor and returns the new page number.
    ///
    /// Does not fetch anything; the caller uses the returned page to
    /// parameterize the next request.
    pub fn request_next_page(&mut self) -> u32 {
        self.current_page = self.current_page.saturating_add(1);
        self.current_page
    }

    /// Merges one page of results fetched for `term`.
    ///
    /// - A `term` other than the active one is discarded.
    /// - Page 1 replaces the list with `items`, keeping the first occurrence
    ///   of any repeated id.
    /// - Later pages append only items whose id is not already listed, in the
    ///   order received.
    pub fn merge_page(&mut self, term: &str, page: u32, items: Vec<MovieSummary>) -> MergeOutcome {
        if term != self.term {
            tracing::debug!(
                active = %self.term,
                response_term = %term,
                page = page,
                "discarding stale page"
            );
            return MergeOutcome::Stale;
        }

        if page <= 1 {
            self.accumulated.clear();
            self.seen.clear();
        }

        let received = items.len();
        let mut added = 0;
        for movie in items {
            if self.seen.insert(movie.id.clone()) {
                self.accumulated.push(movie);
                added += 1;
            }
        }

        let dropped = received - added;
        tracing::debug!(term = %term, page = page, added = added, dropped = dropped, "page merged");
        MergeOutcome::Merged { added, dropped }
    }

    /// Returns `true` while fewer items are listed than the provider reports.
    #[must_use]
    pub fn has_more(&self, total_count: usize) -> bool {
        self.accumulated.len() < total_count
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Accumulated items in first-seen order.
    #[must_use]
    pub fn items(&self) -> &[MovieSummary] {
        &self.accumulated
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accumulated.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accumulated.is_empty()
    }
}
