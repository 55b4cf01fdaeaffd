//! Persistent favorites store.
//!
//! [`FavoritesStore`] is the single source of truth for bookmarked movies. It
//! keeps an insertion-ordered, id-unique list of [`MovieSummary`] records in
//! memory and writes the whole list to its storage slot after every mutation.
//!
//! # Failure Model
//!
//! Storage never makes the store unusable:
//!
//! - A missing, unreadable or malformed slot at startup yields an empty set.
//! - A failed write leaves the in-memory set as the authority for the rest of
//!   the process; the failure is logged and counted, never returned.

use crate::domain::MovieSummary;
use crate::storage::backend::Storage;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::HashSet;

/// Storage slot holding the serialized favorites list.
pub const FAVORITES_SLOT: &str = "favorites";

/// Which way a [`FavoritesStore::toggle`] call went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Bookmarked movies backed by a storage slot.
///
/// # Examples
///
/// ```
/// use reelmark::storage::{FavoritesStore, MemoryStorage, Toggled};
/// use reelmark::MovieSummary;
///
/// let mut store = FavoritesStore::initialize(Box::new(MemoryStorage::default()));
/// let dune = MovieSummary::new("tt1160419", "Dune", "2021", "movie");
///
/// assert!(store.add(dune.clone()));
/// assert!(!store.add(dune.clone()));
/// assert_eq!(store.toggle(dune), Toggled::Removed);
/// assert!(store.is_empty());
/// ```
pub struct FavoritesStore {
    storage: Box<dyn Storage>,
    favorites: Vec<MovieSummary>,
    persist_failures: u64,
}

impl FavoritesStore {
    /// Loads the favorites set from storage.
    ///
    /// Never fails: a missing slot, a read error or an unparsable blob all
    /// produce an empty set. Duplicate ids inside a stored blob are collapsed,
    /// keeping the first occurrence.
    #[must_use]
    pub fn initialize(storage: Box<dyn Storage>) -> Self {
        let _span = tracing::debug_span!("favorites_initialize").entered();

        let favorites = match storage.read(FAVORITES_SLOT) {
            Ok(Some(contents)) => match serde_json::from_str::<Vec<MovieSummary>>(&contents) {
                Ok(stored) => dedup_by_id(stored),
                Err(e) => {
                    tracing::warn!(error = %e, "stored favorites are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::debug!("no stored favorites");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load favorites, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(count = favorites.len(), "favorites loaded");

        Self {
            storage,
            favorites,
            persist_failures: 0,
        }
    }

    /// Returns `true` iff a movie with this id is bookmarked.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|movie| movie.id == id)
    }

    /// Appends `movie` unless its id is already present.
    ///
    /// Returns `true` if the set changed. Persists only on change.
    pub fn add(&mut self, movie: MovieSummary) -> bool {
        if self.is_favorite(&movie.id) {
            tracing::trace!(id = %movie.id, "already a favorite");
            return false;
        }

        tracing::debug!(id = %movie.id, title = %movie.title, "adding favorite");
        self.favorites.push(movie);
        self.persist();
        true
    }

    /// Removes the entry with this id if present.
    ///
    /// Returns `true` if the set changed. Persists only on change.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(position) = self.favorites.iter().position(|movie| movie.id == id) else {
            tracing::trace!(id = %id, "not a favorite");
            return false;
        };

        tracing::debug!(id = %id, "removing favorite");
        self.favorites.remove(position);
        self.persist();
        true
    }

    /// Removes `movie` if bookmarked, adds it otherwise.
    pub fn toggle(&mut self, movie: MovieSummary) -> Toggled {
        if self.remove(&movie.id) {
            Toggled::Removed
        } else {
            self.add(movie);
            Toggled::Added
        }
    }

    /// Bookmarked movies in insertion order.
    #[must_use]
    pub fn favorites(&self) -> &[MovieSummary] {
        &self.favorites
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MovieSummary> {
        self.favorites.iter().find(|movie| movie.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Number of writes that failed since startup.
    #[must_use]
    pub const fn persist_failures(&self) -> u64 {
        self.persist_failures
    }

    /// Filters favorites by title with fuzzy matching.
    ///
    /// The query is split on whitespace and every token must fuzzy-match the
    /// lowercased title. An empty query returns every favorite. Order is the
    /// favorites order, not match score.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&MovieSummary> {
        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return self.favorites.iter().collect();
        }

        let matcher = SkimMatcherV2::default();
        self.favorites
            .iter()
            .filter(|movie| {
                let title = movie.title.to_lowercase();
                tokens.iter().all(|token| matcher.fuzzy_match(&title, token).is_some())
            })
            .collect()
    }

    /// Writes the full set to storage, overwriting the previous value.
    fn persist(&mut self) {
        let _span = tracing::debug_span!("favorites_persist", count = self.favorites.len()).entered();

        let result = serde_json::to_string(&self.favorites)
            .map_err(crate::ReelmarkError::from)
            .and_then(|json| self.storage.write(FAVORITES_SLOT, &json));

        if let Err(e) = result {
            self.persist_failures += 1;
            tracing::error!(error = %e, failures = self.persist_failures, "failed to persist favorites");
        }
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("favorites", &self.favorites)
            .field("persist_failures", &self.persist_failures)
            .finish_non_exhaustive()
    }
}

fn dedup_by_id(movies: Vec<MovieSummary>) -> Vec<MovieSummary> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.id.clone()))
        .collect()
}
