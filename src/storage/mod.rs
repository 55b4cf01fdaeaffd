//! Storage layer for persistent bookmarks.
//!
//! # Modules
//!
//! - `backend`: the slot-based [`Storage`] trait
//! - `json`: one JSON file per slot with atomic writes
//! - `memory`: shared in-memory slots with failure injection
//! - `favorites`: the [`FavoritesStore`] persisted into the `favorites` slot

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;

pub use backend::Storage;
pub use favorites::{FavoritesStore, Toggled, FAVORITES_SLOT};
pub use json::JsonStorage;
pub use memory::MemoryStorage;
