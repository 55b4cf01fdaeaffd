//! Error types for Reelmark.
//!
//! This module defines the centralized error type [`ReelmarkError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Reelmark operations.
///
/// Variants fall into the three failure classes the application distinguishes:
/// provider failures (retryable by the user), storage failures (recovered
/// locally and logged) and configuration problems (reported at startup).
///
/// # Examples
///
/// ```
/// use reelmark::ReelmarkError;
///
/// fn lookup() -> Result<(), ReelmarkError> {
///     Err(ReelmarkError::Provider("Movie not found!".to_string()))
/// }
///
/// assert!(lookup().unwrap_err().is_retryable());
/// ```
#[derive(Debug, Error)]
pub enum ReelmarkError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to a storage slot fails for a reason
    /// other than plain I/O (serialization, missing directory, simulated failure).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failure talking to the metadata provider.
    ///
    /// Covers connection errors, timeouts and non-success status codes.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a body that could not be decoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider answered but reported a failure (`Response: "False"`).
    ///
    /// The string carries the provider's own message, e.g. `"Movie not found!"`.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the fetch worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

impl ReelmarkError {
    /// Returns `true` when repeating the same request may succeed.
    ///
    /// Provider-side failures are surfaced to the user as a retryable error
    /// state; local failures are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Provider(_) | Self::Decode(_))
    }
}

/// A specialized `Result` type for Reelmark operations.
pub type Result<T> = std::result::Result<T, ReelmarkError>;
