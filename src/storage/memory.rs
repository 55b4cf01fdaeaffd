//! In-memory storage backend.
//!
//! Keeps slots in a shared map. Clones share the same slots, so a caller can
//! hand one clone to a [`FavoritesStore`](crate::storage::FavoritesStore) and
//! keep another to inspect what was persisted. Reads and writes can be
//! switched to fail, which is how storage failure recovery is exercised.

use crate::domain::error::{ReelmarkError, Result};
use crate::storage::backend::Storage;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Slots {
    contents: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

/// Map-backed [`Storage`] with optional failure injection.
///
/// # Examples
///
/// ```
/// use reelmark::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::default().with_slot("favorites", "not json");
/// assert_eq!(storage.read("favorites")?.as_deref(), Some("not json"));
///
/// storage.set_fail_writes(true);
/// assert!(storage.write("favorites", "[]").is_err());
/// # Ok::<(), reelmark::ReelmarkError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Slots>>,
}

impl MemoryStorage {
    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pre-populates a slot.
    #[must_use]
    pub fn with_slot(self, slot: impl Into<String>, contents: impl Into<String>) -> Self {
        self.lock().contents.insert(slot.into(), contents.into());
        self
    }

    /// Makes every subsequent read fail.
    #[must_use]
    pub fn failing_reads(self) -> Self {
        self.lock().fail_reads = true;
        self
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Current contents of a slot, bypassing failure injection.
    #[must_use]
    pub fn slot(&self, slot: &str) -> Option<String> {
        self.lock().contents.get(slot).cloned()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.lock().writes
    }
}

impl Storage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        let slots = self.lock();
        if slots.fail_reads {
            return Err(ReelmarkError::Storage(format!("read of {slot} failed")));
        }
        Ok(slots.contents.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, contents: &str) -> Result<()> {
        let mut slots = self.lock();
        if slots.fail_writes {
            return Err(ReelmarkError::Storage(format!("write of {slot} failed")));
        }
        slots.contents.insert(slot.to_string(), contents.to_string());
        slots.writes += 1;
        Ok(())
    }
}
