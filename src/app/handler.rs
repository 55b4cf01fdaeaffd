//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user commands
//! and fetch responses, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the command line or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on [`AppState`]
//! 4. Actions are collected and returned for execution
//!
//! # Stale Responses
//!
//! Requests are never cancelled. A response is applied only if the state it
//! was requested for is still current: search pages must carry the active
//! term and the page being loaded, details must carry the id of the open
//! details view. Anything else is
//! logged at debug level and dropped.
//!
//! # Example
//!
//! ```rust
//! use reelmark::app::{handle_event, Action, AppState, Event};
//! use reelmark::storage::{FavoritesStore, MemoryStorage};
//! use reelmark::ui::Theme;
//!
//! let favorites = FavoritesStore::initialize(Box::new(MemoryStorage::default()));
//! let mut state = AppState::new(favorites, Theme::default());
//!
//! let (render, actions) = handle_event(&mut state, &Event::Search("dune".into()))?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), reelmark::ReelmarkError>(())
//! ```

use super::modes::{FeedStatus, ViewMode};
use super::paging::MergeOutcome;
use super::state::TRENDING_LIMIT;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::MovieSummary;
use crate::storage::Toggled;
use crate::worker::{FetchRequest, FetchResponse};

/// Events triggered by user commands or fetch responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Loads the home feeds.
    Start,

    /// Searches for a term. A blank term returns to the home view.
    Search(String),

    /// Requests the next page of the active search.
    LoadMore,

    /// Re-issues whatever failed in the current view.
    Retry,

    ShowHome,
    ShowFavorites,

    /// Filters favorites by title and shows them.
    FilterFavorites(String),

    /// Opens details for entry `n` (1-based) of the current list.
    OpenDetails(usize),

    /// Opens details for a title by id.
    OpenTitle(String),

    /// Toggles the bookmark on entry `n` (1-based) of the current list.
    ///
    /// In the details view the open title is toggled and `n` is ignored.
    ToggleFavorite(usize),

    /// Leaves the details view.
    Back,

    Quit,

    /// A response from the fetch worker.
    Fetched(FetchResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the view needs re-rendering together with the actions to
/// run, in order. Unknown item numbers and out-of-place commands are logged
/// and ignored.
///
/// # Errors
///
/// Reserved for failures that must abort the event loop. Fetch failures are
/// state, not errors, and favorites persistence never fails the caller.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_label(event)).entered();

    match event {
        Event::Start => {
            state.popular.status = FeedStatus::Loading;
            state.trending.status = FeedStatus::Loading;
            Ok((
                true,
                vec![
                    Action::Fetch(FetchRequest::popular()),
                    Action::Fetch(FetchRequest::trending()),
                ],
            ))
        }
        Event::Search(term) => {
            let term = term.trim();

            if term.is_empty() {
                tracing::debug!("empty search term, returning home");
                state.results.set_search_term("");
                state.search_total = 0;
                state.search_status = FeedStatus::Idle;
                state.show_list(ViewMode::Home);
                return Ok((true, vec![]));
            }

            state.show_list(ViewMode::Search);

            if state.results.set_search_term(term) {
                state.search_total = 0;
                state.search_status = FeedStatus::Loading;
                tracing::debug!(term = %term, "starting search");
                return Ok((true, vec![Action::Fetch(FetchRequest::search(term.to_string(), 1))]));
            }

            if state.search_status.is_failed() {
                return Ok((true, vec![retry_search(state)]));
            }

            tracing::debug!(term = %term, "search term unchanged");
            Ok((true, vec![]))
        }
        Event::LoadMore => {
            if state.view_mode != ViewMode::Search || !state.can_load_more() {
                tracing::debug!(
                    view_mode = ?state.view_mode,
                    loaded = state.results.len(),
                    total = state.search_total,
                    status = ?state.search_status,
                    "nothing more to load"
                );
                return Ok((false, vec![]));
            }

            let page = state.results.request_next_page();
            state.search_status = FeedStatus::Loading;
            tracing::debug!(term = %state.results.term(), page = page, "loading next page");
            Ok((
                true,
                vec![Action::Fetch(FetchRequest::search(
                    state.results.term().to_string(),
                    page,
                ))],
            ))
        }
        Event::Retry => {
            let actions = retry_actions(state);
            if actions.is_empty() {
                tracing::debug!(view_mode = ?state.view_mode, "nothing to retry");
            }
            Ok((!actions.is_empty(), actions))
        }
        Event::ShowHome => {
            state.show_list(ViewMode::Home);
            Ok((true, vec![]))
        }
        Event::ShowFavorites => {
            state.show_list(ViewMode::Favorites);
            Ok((true, vec![]))
        }
        Event::FilterFavorites(query) => {
            state.favorites_query = query.trim().to_string();
            state.show_list(ViewMode::Favorites);
            Ok((true, vec![]))
        }
        Event::OpenDetails(n) => {
            let Some(movie) = state.item_at(*n) else {
                tracing::warn!(number = n, view_mode = ?state.view_mode, "no such entry");
                return Ok((false, vec![]));
            };
            tracing::debug!(id = %movie.id, title = %movie.title, "opening details");
            let id = movie.id.clone();
            Ok((true, vec![open_details(state, id)]))
        }
        Event::OpenTitle(id) => {
            let id = id.trim();
            if id.is_empty() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![open_details(state, id.to_string())]))
        }
        Event::ToggleFavorite(n) => {
            let movie = if state.view_mode == ViewMode::Details {
                state.details.as_ref().map(crate::domain::MovieDetails::to_summary)
            } else {
                state.item_at(*n).cloned()
            };

            let Some(movie) = movie else {
                tracing::warn!(number = n, view_mode = ?state.view_mode, "nothing to toggle");
                return Ok((false, vec![]));
            };

            let id = movie.id.clone();
            match state.favorites.toggle(movie) {
                Toggled::Added => tracing::info!(id = %id, "added to favorites"),
                Toggled::Removed => tracing::info!(id = %id, "removed from favorites"),
            }
            Ok((true, vec![]))
        }
        Event::Back => {
            if state.view_mode != ViewMode::Details {
                return Ok((false, vec![]));
            }
            state.details_id = None;
            state.details = None;
            state.details_status = FeedStatus::Idle;
            state.view_mode = state.previous_view;
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::Fetched(response) => Ok((apply_response(state, response), vec![])),
    }
}

/// Applies a fetch response. Returns whether anything visible changed.
fn apply_response(state: &mut AppState, response: &FetchResponse) -> bool {
    match response {
        FetchResponse::SearchPage {
            term,
            page,
            items,
            total,
        } => {
            if !is_awaited_page(state, term, *page) {
                return false;
            }
            apply_search_page(state, term, *page, items, *total)
        }
        FetchResponse::Popular { items } => {
            state.popular.fill(items.clone());
            state.view_mode == ViewMode::Home
        }
        FetchResponse::Trending { items } => {
            state
                .trending
                .fill(items.iter().take(TRENDING_LIMIT).cloned().collect());
            state.view_mode == ViewMode::Home
        }
        FetchResponse::Details { details } => {
            if state.details_id.as_deref() != Some(details.id()) {
                tracing::debug!(id = %details.id(), open = ?state.details_id, "discarding stale details");
                return false;
            }
            state.details = Some(details.clone());
            state.details_status = FeedStatus::Ready;
            state.view_mode == ViewMode::Details
        }
        FetchResponse::Failed { request, message } => apply_failure(state, request, message),
    }
}

fn apply_failure(state: &mut AppState, request: &FetchRequest, message: &str) -> bool {
    let failed = FeedStatus::Failed(message.to_string());

    match request {
        FetchRequest::Search { term, page, .. } => {
            if !is_awaited_page(state, term, *page) {
                return false;
            }
            state.search_status = failed;
            state.view_mode == ViewMode::Search
        }
        FetchRequest::Popular { .. } => {
            state.popular.status = failed;
            state.view_mode == ViewMode::Home
        }
        FetchRequest::Trending { .. } => {
            state.trending.status = failed;
            state.view_mode == ViewMode::Home
        }
        FetchRequest::Details { id, .. } => {
            if state.details_id.as_deref() != Some(id.as_str()) {
                tracing::debug!(id = %id, "discarding stale details failure");
                return false;
            }
            state.details_status = failed;
            state.view_mode == ViewMode::Details
        }
    }
}

/// Whether a search page outcome is the one the accumulator is waiting for.
///
/// Only the active term's current page qualifies. A page from an earlier run
/// of the same term, e.g. a "load more" that was still in flight when the
/// term was searched again, is dropped like any other stale response.
fn is_awaited_page(state: &AppState, term: &str, page: u32) -> bool {
    if term == state.results.term() && page == state.results.current_page() {
        return true;
    }
    tracing::debug!(
        term = %term,
        page = page,
        active = %state.results.term(),
        current_page = state.results.current_page(),
        "discarding stale search outcome"
    );
    false
}

fn apply_search_page(
    state: &mut AppState,
    term: &str,
    page: u32,
    items: &[MovieSummary],
    total: usize,
) -> bool {
    match state.results.merge_page(term, page, items.to_vec()) {
        MergeOutcome::Stale => false,
        MergeOutcome::Merged { .. } => {
            state.search_total = total;
            state.search_status = FeedStatus::Ready;
            state.view_mode == ViewMode::Search
        }
    }
}

fn open_details(state: &mut AppState, id: String) -> Action {
    state.details_id = Some(id.clone());
    state.details = None;
    state.details_status = FeedStatus::Loading;
    state.view_mode = ViewMode::Details;
    Action::Fetch(FetchRequest::details(id))
}

/// Re-requests the page that failed, which is always the current page.
fn retry_search(state: &mut AppState) -> Action {
    state.search_status = FeedStatus::Loading;
    Action::Fetch(FetchRequest::search(
        state.results.term().to_string(),
        state.results.current_page(),
    ))
}

fn retry_actions(state: &mut AppState) -> Vec<Action> {
    let mut actions = Vec::new();

    match state.view_mode {
        ViewMode::Search if state.search_status.is_failed() => {
            actions.push(retry_search(state));
        }
        ViewMode::Home => {
            if state.popular.status.is_failed() {
                state.popular.status = FeedStatus::Loading;
                actions.push(Action::Fetch(FetchRequest::popular()));
            }
            if state.trending.status.is_failed() {
                state.trending.status = FeedStatus::Loading;
                actions.push(Action::Fetch(FetchRequest::trending()));
            }
        }
        ViewMode::Details if state.details_status.is_failed() => {
            if let Some(id) = state.details_id.clone() {
                state.details_status = FeedStatus::Loading;
                actions.push(Action::Fetch(FetchRequest::details(id)));
            }
        }
        _ => {}
    }

    actions
}

/// Event name without payload, for span fields.
const fn event_label(event: &Event) -> &'static str {
    match event {
        Event::Start => "start",
        Event::Search(_) => "search",
        Event::LoadMore => "load_more",
        Event::Retry => "retry",
        Event::ShowHome => "show_home",
        Event::ShowFavorites => "show_favorites",
        Event::FilterFavorites(_) => "filter_favorites",
        Event::OpenDetails(_) => "open_details",
        Event::OpenTitle(_) => "open_title",
        Event::ToggleFavorite(_) => "toggle_favorite",
        Event::Back => "back",
        Event::Quit => "quit",
        Event::Fetched(_) => "fetched",
    }
}
