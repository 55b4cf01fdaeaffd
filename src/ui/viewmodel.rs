//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They contain no business logic, only
//! display-ready data: entry numbers, favorite markers and highlight ranges
//! are all resolved before rendering.
//!
//! # Example
//!
//! ```rust
//! use reelmark::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, ListSection, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Favorites (1) ".to_string() },
//!     sections: vec![ListSection {
//!         title: None,
//!         items: vec![DisplayItem {
//!             number: 1,
//!             title: "Dune".to_string(),
//!             year: "2021".to_string(),
//!             kind: "movie".to_string(),
//!             is_favorite: true,
//!             highlight_ranges: vec![(0, 2)],
//!         }],
//!         status: None,
//!     }],
//!     details: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//! };
//! assert_eq!(vm.sections[0].items.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Numbered lists in display order. Numbering continues across sections.
    pub sections: Vec<ListSection>,

    /// Details panel, when a details record is loaded.
    pub details: Option<DetailsInfo>,

    /// Command hints.
    pub footer: FooterInfo,

    /// Shown instead of the body when there is nothing else to display.
    pub empty_state: Option<EmptyState>,
}

/// One titled list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSection {
    pub title: Option<String>,
    pub items: Vec<DisplayItem>,
    /// Line shown under the entries.
    pub status: Option<StatusLine>,
}

/// Display information for a single movie entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// 1-based number accepted by `open N` and `fav N`.
    pub number: usize,

    pub title: String,
    pub year: String,
    pub kind: String,

    /// Whether the entry is bookmarked.
    pub is_favorite: bool,

    /// Character ranges of `title` to highlight (for fuzzy filter matches).
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Request progress shown under a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Loading,
    /// Failure message; the user can retry.
    Failed(String),
    /// More search results are available.
    More { shown: usize, total: usize },
}

/// Extended record of one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsInfo {
    pub title: String,
    pub year: String,
    pub is_favorite: bool,
    /// Labelled fields in display order; absent values are omitted.
    pub fields: Vec<(&'static str, String)>,
    pub plot: Option<String>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hints for the current view.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No favorites yet").
    pub message: String,

    /// Secondary hint (e.g., "Bookmark a title with f N").
    pub subtitle: String,
}
