//! Infrastructure layer for filesystem and environment interactions.
//!
//! Platform-specific locations for configuration and data, resolved through
//! the `dirs` crate so the same build follows XDG on Linux and the native
//! conventions on macOS and Windows.

pub mod paths;

pub use paths::{default_config_path, expand_tilde, get_data_dir};
