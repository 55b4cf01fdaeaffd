//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the binary's event loop and the domain, storage
//! and worker layers. It owns every state transition the user can observe.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Commands → Events → Event Handler → State Mutations → Actions → Fetches
//!                          ↑                                         ↓
//!                          └──────────── Fetch Responses ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`input`]: Interactive command parsing
//! - [`modes`]: View mode and feed status types
//! - [`paging`]: Paged search result accumulation
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod input;
pub mod modes;
pub mod paging;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{FeedStatus, ViewMode};
pub use paging::{MergeOutcome, PagedResults};
pub use state::{AppState, Feed};
