//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Output is line-oriented and never moves the cursor, so it can be written
//! to a terminal, piped to a file, or captured in a buffer.
//!
//! # Example
//!
//! ```rust
//! use reelmark::app::AppState;
//! use reelmark::storage::{FavoritesStore, MemoryStorage};
//! use reelmark::ui::{render, Theme};
//!
//! let favorites = FavoritesStore::initialize(Box::new(MemoryStorage::default()));
//! let state = AppState::new(favorites, Theme::default());
//!
//! let mut out = Vec::new();
//! render(&state, &mut out, 80)?;
//! assert!(String::from_utf8_lossy(&out).contains("Reelmark"));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::app::AppState;
use crate::ui::components;
use std::io::{self, Write};

/// Default render width when the terminal size is unknown.
pub const DEFAULT_COLUMNS: usize = 80;

/// Renders the current view of `state` to `out`.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render<W: Write>(state: &AppState, out: &mut W, cols: usize) -> io::Result<()> {
    let viewmodel = state.compute_viewmodel();
    components::render_screen(out, &viewmodel, &state.theme, cols)?;
    out.flush()
}
