//! Domain layer for Reelmark.
//!
//! Core types independent of storage, transport or presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie summary and details records
//!
//! # Examples
//!
//! ```
//! use reelmark::domain::{MovieSummary, Result};
//!
//! fn pick() -> Result<MovieSummary> {
//!     Ok(MovieSummary::new("tt0816692", "Interstellar", "2014", "movie"))
//! }
//! ```

pub mod error;
pub mod movie;

pub use error::{ReelmarkError, Result};
pub use movie::{MovieDetails, MovieSummary};
