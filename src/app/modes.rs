//! View and feed status types for the application.
//!
//! [`ViewMode`] selects which list is visible and therefore what a 1-based
//! item number refers to. [`FeedStatus`] tracks the lifecycle of each remote
//! list independently, so a failed trending feed does not hide a loaded
//! popular feed.

/// Screen currently shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Popular and trending feeds.
    #[default]
    Home,

    /// Accumulated results for the active search term.
    Search,

    /// Bookmarked titles, optionally filtered.
    Favorites,

    /// Extended record of one title.
    Details,
}

impl ViewMode {
    /// Whether the view shows a numbered list.
    #[must_use]
    pub const fn is_list(self) -> bool {
        !matches!(self, Self::Details)
    }
}

/// Lifecycle of one remotely fetched list or record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedStatus {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// A request is in flight.
    Loading,

    /// The last request succeeded.
    Ready,

    /// The last request failed with a user-facing message. Cleared by retry.
    Failed(String),
}

impl FeedStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
