//! JSON file-based storage backend.
//!
//! Each slot lives in its own file, `<dir>/<slot>.json`. Writes go to a
//! temporary file first and are renamed over the target, so a crash never
//! leaves a half-written blob behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: one file read per call, no caching
//! - **Write**: O(n) in the blob size, whole-file replacement
//! - **Best for**: small blobs written on user actions

use crate::domain::error::{ReelmarkError, Result};
use crate::storage::backend::Storage;
use std::path::{Path, PathBuf};

/// JSON file storage backend.
///
/// # Thread Safety
///
/// This type is `Send` but holds no locks. It is owned by the single
/// application event loop.
///
/// # File Layout
///
/// ```text
/// ~/.local/share/reelmark/
/// └── favorites.json     ← slot "favorites"
/// ```
#[derive(Debug)]
pub struct JsonStorage {
    /// Directory holding one file per slot.
    dir: PathBuf,
}

impl JsonStorage {
    /// Creates or opens a storage directory.
    ///
    /// The directory (and its parents) is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use reelmark::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/reelmark"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(dir: PathBuf) -> Result<Self> {
        tracing::debug!(dir = ?dir, "initializing JSON storage");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory this backend writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves the file backing a slot.
    ///
    /// # Errors
    ///
    /// Rejects slot names that could escape the storage directory.
    fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ReelmarkError::Storage(format!("invalid slot name: {slot:?}")));
        }
        Ok(self.dir.join(format!("{slot}.json")))
    }
}

impl Storage for JsonStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_read", slot = %slot).entered();

        let path = self.slot_path(slot)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(bytes = contents.len(), "slot loaded");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("slot not found");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_write", slot = %slot, bytes = contents.len()).entered();

        let path = self.slot_path(slot)?;
        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, contents)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!("slot saved");
        Ok(())
    }
}
