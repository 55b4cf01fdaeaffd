//! Terminal rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled lines through composable
//! rendering components. It provides theme support and fuzzy match
//! highlighting for the favorites filter.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - `components`: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, formatting)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

mod components;

pub use renderer::{render, DEFAULT_COLUMNS};
pub use theme::Theme;
pub use viewmodel::{
    DetailsInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ListSection, StatusLine,
    UIViewModel,
};
