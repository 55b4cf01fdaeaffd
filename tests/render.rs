use reelmark::app::{handle_event, AppState, Event};
use reelmark::storage::{FavoritesStore, MemoryStorage};
use reelmark::worker::{FetchRequest, FetchResponse};
use reelmark::{MovieSummary, Theme};

fn new_state() -> AppState {
    let favorites = FavoritesStore::initialize(Box::new(MemoryStorage::default()));
    AppState::new(favorites, Theme::default())
}

fn rendered(state: &AppState) -> String {
    let mut out = Vec::new();
    reelmark::ui::render(state, &mut out, 80).expect("render to buffer");
    String::from_utf8(out).expect("utf-8 output")
}

fn apply(state: &mut AppState, event: Event) {
    handle_event(state, &event).expect("event handled");
}

#[test]
fn home_lists_both_feeds_with_running_numbers() {
    let mut state = new_state();
    apply(
        &mut state,
        Event::Fetched(FetchResponse::Popular {
            items: vec![MovieSummary::new("p1", "Iron Man", "2008", "movie")],
        }),
    );
    apply(
        &mut state,
        Event::Fetched(FetchResponse::Trending {
            items: vec![MovieSummary::new("t1", "John Wick: Chapter 4", "2023", "movie")],
        }),
    );

    let screen = rendered(&state);

    assert!(screen.contains("Popular"));
    assert!(screen.contains("Trending"));
    assert!(screen.contains("1. "));
    assert!(screen.contains("Iron Man"));
    assert!(screen.contains("2. "));
    assert!(screen.contains("John Wick: Chapter 4"));
}

#[test]
fn favorites_are_marked() {
    let mut state = new_state();
    state.favorites.add(MovieSummary::new("tt1", "Alien", "1979", "movie"));
    apply(&mut state, Event::ShowFavorites);

    let screen = rendered(&state);

    assert!(screen.contains("★"));
    assert!(screen.contains("Alien"));
    assert!(screen.contains("Favorites (1)"));
}

#[test]
fn empty_favorites_render_empty_state() {
    let mut state = new_state();
    apply(&mut state, Event::ShowFavorites);

    let screen = rendered(&state);

    assert!(screen.contains("No favorites yet"));
    assert!(!screen.contains("★"));
}

#[test]
fn search_shows_progress_and_failures() {
    let mut state = new_state();
    apply(&mut state, Event::Search("dune".to_string()));
    assert!(rendered(&state).contains("Loading..."));

    apply(
        &mut state,
        Event::Fetched(FetchResponse::SearchPage {
            term: "dune".to_string(),
            page: 1,
            items: vec![MovieSummary::new("tt1160419", "Dune", "2021", "movie")],
            total: 27,
        }),
    );
    let screen = rendered(&state);
    assert!(screen.contains("Showing 1 of 27"));
    assert!(screen.contains("m: more"));

    apply(&mut state, Event::LoadMore);
    apply(
        &mut state,
        Event::Fetched(FetchResponse::Failed {
            request: FetchRequest::search("dune".to_string(), 2),
            message: "HTTP error: timed out".to_string(),
        }),
    );
    assert!(rendered(&state).contains("Error: HTTP error: timed out"));
}
