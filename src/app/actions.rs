//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O beyond favorites persistence. Network
//! lookups and process control are returned as [`Action`] values and carried
//! out by the binary's event loop.
//!
//! # Example
//!
//! ```rust
//! use reelmark::app::Action;
//! use reelmark::worker::FetchRequest;
//!
//! let actions = vec![
//!     Action::Fetch(FetchRequest::popular()),
//!     Action::Fetch(FetchRequest::trending()),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::FetchRequest;

/// Commands produced by [`handle_event`](crate::app::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a request to the fetch worker.
    ///
    /// The response re-enters the handler as
    /// [`Event::Fetched`](crate::app::Event::Fetched).
    Fetch(FetchRequest),

    /// Ends the interactive session.
    Quit,
}
