//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the user can see: the
//! favorites store, the paged search accumulator, the two home feeds and the
//! open details record. It is mutated only by
//! [`handle_event`](crate::app::handle_event), one event at a time.
//!
//! # Numbering
//!
//! Commands address list entries by their 1-based position in the current
//! view. [`AppState::visible_items`] is the one definition of that list, and
//! the view model numbers rows from the same sequence, so the number a user
//! reads is the number they type.

use super::modes::{FeedStatus, ViewMode};
use super::paging::PagedResults;
use crate::domain::{MovieDetails, MovieSummary};
use crate::storage::FavoritesStore;
use crate::ui::helpers::compute_highlight_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailsInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ListSection, StatusLine,
    UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Most titles shown in the trending feed.
pub const TRENDING_LIMIT: usize = 5;

/// A remotely fetched list with its request status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub items: Vec<MovieSummary>,
    pub status: FeedStatus,
}

impl Feed {
    /// Replaces the items and marks the feed ready.
    pub fn fill(&mut self, items: Vec<MovieSummary>) {
        self.items = items;
        self.status = FeedStatus::Ready;
    }
}

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    /// Bookmarked titles, persisted on every change.
    pub favorites: FavoritesStore,

    /// Accumulated pages for the active search term.
    pub results: PagedResults,

    /// Total matches the provider last reported for the active term.
    pub search_total: usize,

    pub search_status: FeedStatus,

    pub popular: Feed,

    /// Capped at [`TRENDING_LIMIT`] entries.
    pub trending: Feed,

    /// Id of the title shown in the details view, set as soon as it is opened.
    pub details_id: Option<String>,

    /// Loaded record for `details_id`.
    pub details: Option<MovieDetails>,

    pub details_status: FeedStatus,

    pub view_mode: ViewMode,

    /// List view to return to when leaving details.
    pub previous_view: ViewMode,

    /// Fuzzy filter applied to the favorites list.
    pub favorites_query: String,

    pub theme: Theme,
}

impl AppState {
    /// Creates the state around an initialized favorites store.
    ///
    /// Starts on the home view with every feed idle.
    #[must_use]
    pub fn new(favorites: FavoritesStore, theme: Theme) -> Self {
        Self {
            favorites,
            results: PagedResults::default(),
            search_total: 0,
            search_status: FeedStatus::Idle,
            popular: Feed::default(),
            trending: Feed::default(),
            details_id: None,
            details: None,
            details_status: FeedStatus::Idle,
            view_mode: ViewMode::Home,
            previous_view: ViewMode::Home,
            favorites_query: String::new(),
            theme,
        }
    }

    /// Entries of the current list view in display order.
    ///
    /// The home view lists popular titles followed by trending titles. The
    /// details view has no list.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&MovieSummary> {
        match self.view_mode {
            ViewMode::Home => self
                .popular
                .items
                .iter()
                .chain(self.trending.items.iter())
                .collect(),
            ViewMode::Search => self.results.items().iter().collect(),
            ViewMode::Favorites => self.favorites.search(&self.favorites_query),
            ViewMode::Details => Vec::new(),
        }
    }

    /// Entry number `n` (1-based) of the current list view.
    #[must_use]
    pub fn item_at(&self, n: usize) -> Option<&MovieSummary> {
        n.checked_sub(1)
            .and_then(|index| self.visible_items().get(index).copied())
    }

    /// Whether another search page can be requested.
    ///
    /// False while a page is loading or after a page failed; a failed page is
    /// re-requested with retry so no page is skipped.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.results.term().is_empty()
            && !self.search_status.is_loading()
            && !self.search_status.is_failed()
            && self.results.has_more(self.search_total)
    }

    /// Switches to a list view, remembering it for [`ViewMode::Details`].
    pub fn show_list(&mut self, view: ViewMode) {
        self.view_mode = view;
        if view.is_list() {
            self.previous_view = view;
        }
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", view_mode = ?self.view_mode).entered();

        let mut sections = Vec::new();
        let mut details = None;

        match self.view_mode {
            ViewMode::Home => {
                let popular = self.display_items(&self.popular.items, 1, None);
                let trending_start = popular.len() + 1;
                sections.push(ListSection {
                    title: Some("Popular".to_string()),
                    items: popular,
                    status: Self::status_line(&self.popular.status),
                });
                sections.push(ListSection {
                    title: Some("Trending".to_string()),
                    items: self.display_items(&self.trending.items, trending_start, None),
                    status: Self::status_line(&self.trending.status),
                });
            }
            ViewMode::Search => {
                let status = Self::status_line(&self.search_status).or_else(|| {
                    self.results.has_more(self.search_total).then(|| StatusLine::More {
                        shown: self.results.len(),
                        total: self.search_total,
                    })
                });
                sections.push(ListSection {
                    title: None,
                    items: self.display_items(self.results.items(), 1, None),
                    status,
                });
            }
            ViewMode::Favorites => {
                let query = self.favorites_query.trim();
                let matches: Vec<MovieSummary> = self
                    .favorites
                    .search(query)
                    .into_iter()
                    .cloned()
                    .collect();
                let highlight = (!query.is_empty()).then_some(query);
                sections.push(ListSection {
                    title: None,
                    items: self.display_items(&matches, 1, highlight),
                    status: None,
                });
            }
            ViewMode::Details => {
                details = self.details.as_ref().map(|record| self.details_info(record));
                if details.is_none() {
                    sections.push(ListSection {
                        title: None,
                        items: Vec::new(),
                        status: Self::status_line(&self.details_status),
                    });
                }
            }
        }

        let empty_state = self.compute_empty_state(&sections, details.is_some());

        UIViewModel {
            header: self.compute_header(),
            sections,
            details,
            footer: self.compute_footer(),
            empty_state,
        }
    }

    fn display_items(
        &self,
        movies: &[MovieSummary],
        first_number: usize,
        highlight: Option<&str>,
    ) -> Vec<DisplayItem> {
        let matcher = highlight.map(|_| SkimMatcherV2::default());

        movies
            .iter()
            .enumerate()
            .map(|(offset, movie)| {
                let highlight_ranges = match (&matcher, highlight) {
                    (Some(m), Some(query)) => compute_highlight_ranges(&movie.title, query, m),
                    _ => Vec::new(),
                };

                DisplayItem {
                    number: first_number + offset,
                    title: movie.title.clone(),
                    year: movie.year.clone(),
                    kind: movie.kind.clone(),
                    is_favorite: self.favorites.is_favorite(&movie.id),
                    highlight_ranges,
                }
            })
            .collect()
    }

    fn details_info(&self, record: &MovieDetails) -> DetailsInfo {
        let mut fields = Vec::new();
        let mut push = |label: &'static str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                fields.push((label, value));
            }
        };

        push("Rated", record.rated.clone());
        push("Runtime", record.runtime.clone());
        push("Genre", Some(record.genres.join(", ")));
        push("Rating", record.rating.as_ref().map(|r| format!("{r}/10")));
        push("Director", record.director.clone());
        push("Writer", record.writer.clone());
        push("Cast", Some(record.cast.join(", ")));

        DetailsInfo {
            title: record.summary.title.clone(),
            year: record.summary.year.clone(),
            is_favorite: self.favorites.is_favorite(record.id()),
            fields,
            plot: record.plot.clone(),
        }
    }

    fn status_line(status: &FeedStatus) -> Option<StatusLine> {
        match status {
            FeedStatus::Loading => Some(StatusLine::Loading),
            FeedStatus::Failed(message) => Some(StatusLine::Failed(message.clone())),
            FeedStatus::Idle | FeedStatus::Ready => None,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.view_mode {
            ViewMode::Home => " Reelmark ".to_string(),
            ViewMode::Search => format!(
                " Search: {} ({} of {}) ",
                self.results.term(),
                self.results.len(),
                self.search_total
            ),
            ViewMode::Favorites if self.favorites_query.trim().is_empty() => {
                format!(" Favorites ({}) ", self.favorites.len())
            }
            ViewMode::Favorites => format!(
                " Favorites matching \"{}\" ({} of {}) ",
                self.favorites_query.trim(),
                self.favorites.search(&self.favorites_query).len(),
                self.favorites.len()
            ),
            ViewMode::Details => " Details ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.view_mode {
            ViewMode::Home => "/term: search  o N: open  f N: favorite  l: favorites  r: retry  q: quit",
            ViewMode::Search if self.can_load_more() => {
                "m: more  o N: open  f N: favorite  h: home  r: retry  q: quit"
            }
            ViewMode::Search => "/term: search  o N: open  f N: favorite  h: home  r: retry  q: quit",
            ViewMode::Favorites => "filter q: filter  o N: open  f N: remove  h: home  q: quit",
            ViewMode::Details => "f: favorite  b: back  r: retry  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self, sections: &[ListSection], has_details: bool) -> Option<EmptyState> {
        let nothing_shown = !has_details
            && sections
                .iter()
                .all(|section| section.items.is_empty() && section.status.is_none());
        if !nothing_shown {
            return None;
        }

        let (message, subtitle) = match self.view_mode {
            ViewMode::Home => ("Nothing to show yet", "Search with /term"),
            ViewMode::Search if self.results.term().is_empty() => ("No search", "Search with /term"),
            ViewMode::Search => ("No results", "Try a different title"),
            ViewMode::Favorites if self.favorites.is_empty() => {
                ("No favorites yet", "Bookmark a title with f N")
            }
            ViewMode::Favorites => ("No matching favorites", "Clear the filter with: filter"),
            ViewMode::Details => ("No title selected", "Open one with o N"),
        };

        Some(EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        })
    }
}
