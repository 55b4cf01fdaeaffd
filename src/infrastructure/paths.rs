//! Path resolution utilities.
//!
//! Functions for locating the configuration file and the data directory, and
//! for expanding `~` in user-supplied paths.

use std::path::{Path, PathBuf};

/// Application directory name under the platform config and data roots.
const APP_DIR: &str = "reelmark";

/// Returns the default data directory for Reelmark storage.
///
/// Resolves to `$XDG_DATA_HOME/reelmark` (usually `~/.local/share/reelmark`)
/// on Linux and the platform equivalent elsewhere. Falls back to
/// `./.reelmark` when no data directory can be determined. The favorites
/// blob `favorites.json` and the trace file live here.
///
/// # Examples
///
/// ```
/// use reelmark::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("reelmark") || get_data_dir().ends_with(".reelmark"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".reelmark"), |dir| dir.join(APP_DIR))
}

/// Returns the default configuration file location, `<config_dir>/reelmark/config.toml`.
///
/// `None` when the platform has no configuration directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use reelmark::infrastructure::expand_tilde;
/// use std::path::Path;
///
/// assert_eq!(expand_tilde("/absolute/path"), Path::new("/absolute/path"));
/// assert!(!expand_tilde("~/films").starts_with("~") || dirs::home_dir().is_none());
/// ```
#[must_use]
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}
