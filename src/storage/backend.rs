//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait: a flat key-value store of named
//! slots, each holding one serialized blob. Slots are read whole and
//! overwritten whole; there are no partial updates and no schema versioning.
//!
//! # Implementations
//!
//! - [`JsonStorage`](crate::storage::JsonStorage): one JSON file per slot with atomic writes
//! - [`MemoryStorage`](crate::storage::MemoryStorage): in-process map with failure injection

use crate::domain::error::Result;

/// Abstraction over persistent slot storage.
///
/// # Examples
///
/// ```no_run
/// use reelmark::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/reelmark"))?;
/// storage.write("favorites", "[]")?;
/// assert_eq!(storage.read("favorites")?.as_deref(), Some("[]"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Reads the contents of a slot.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read(&self, slot: &str) -> Result<Option<String>>;

    /// Replaces the contents of a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Backends guarantee the previous
    /// value is left intact when a write fails.
    fn write(&mut self, slot: &str, contents: &str) -> Result<()>;
}
