//! Reelmark: a terminal movie browser backed by an OMDb-compatible API.
//!
//! Reelmark provides:
//! - Paged free-text search with deduplicated "load more" accumulation
//! - Popular and trending home feeds
//! - Title details (plot, cast, ratings)
//! - Persistent favorites stored as a local JSON blob

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI and event loop (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and stale-response guards         │
//! │  - Paged result accumulation                        │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON slots  │   │ - Tokio tasks │
//! │ - Theming     │   │ - Favorites   │   │ - Trace ctx   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//!                                         ┌───────────────┐
//!                                         │ Provider      │
//!                                         │ (provider/)   │
//!                                         │ - reqwest     │
//!                                         │ - Wire decode │
//!                                         └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types, movie records (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Configuration is read from `<config_dir>/reelmark/config.toml` (or the
//! path given with `--config`):
//!
//! ```toml
//! api_key = "abcd1234"
//! popular_query = "marvel"
//! trending_query = "action"
//! trending_year = 2023
//! theme = "catppuccin-mocha"
//! trace_level = "debug"
//! ```
//!
//! `REELMARK_API_KEY` and `REELMARK_DATA_DIR` override the file.
//!
//! # Example
//!
//! ```rust
//! use reelmark::{handle_event, initialize, Action, Config, Event};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = Config {
//!     data_dir: dir.path().to_path_buf(),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//! let (_, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(actions.iter().all(|action| matches!(action, Action::Fetch(_))));
//! # Ok::<(), reelmark::ReelmarkError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod provider;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FeedStatus, ViewMode};
pub use domain::{MovieDetails, MovieSummary, ReelmarkError, Result};
pub use ui::Theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use storage::{FavoritesStore, JsonStorage, MemoryStorage, Storage};

/// Environment variable overriding [`Config::api_key`].
pub const ENV_API_KEY: &str = "REELMARK_API_KEY";

/// Environment variable overriding [`Config::data_dir`].
pub const ENV_DATA_DIR: &str = "REELMARK_DATA_DIR";

/// Application configuration.
///
/// Every field has a default, so an empty or missing file is valid. Unknown
/// keys are rejected to surface typos.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Provider API key. Required for anything that touches the network.
    pub api_key: Option<String>,

    /// Provider endpoint. Default: `https://www.omdbapi.com/`
    pub base_url: String,

    /// Per-request timeout in seconds. Default: 10
    pub request_timeout_secs: u64,

    /// Directory for the favorites blob and trace output.
    ///
    /// A leading `~` is expanded. Default: the platform data directory
    /// (see [`infrastructure::get_data_dir`]).
    pub data_dir: PathBuf,

    /// Search term behind the popular feed. Default: `"marvel"`
    pub popular_query: String,

    /// Search term behind the trending feed. Default: `"action"`
    pub trending_query: String,

    /// Release year filter for the trending feed. Default: `2023`
    pub trending_year: Option<u16>,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Tracing level. Options: `trace`, `debug`, `info`, `warn`, `error`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://www.omdbapi.com/".to_string(),
            request_timeout_secs: 10,
            data_dir: infrastructure::get_data_dir(),
            popular_query: "marvel".to_string(),
            trending_query: "action".to_string(),
            trending_year: Some(2023),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("data_dir", &self.data_dir)
            .field("popular_query", &self.popular_query)
            .field("trending_query", &self.trending_query)
            .field("trending_year", &self.trending_year)
            .field("theme_name", &self.theme_name)
            .field("theme_file", &self.theme_file)
            .field("trace_level", &self.trace_level)
            .finish()
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ReelmarkError::Config`] for invalid TOML, wrong value types
    /// and unknown keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reelmark::Config;
    ///
    /// let config = Config::from_toml_str("api_key = \"k\"\ntrending_year = 1999\n")?;
    /// assert_eq!(config.api_key.as_deref(), Some("k"));
    /// assert_eq!(config.trending_year, Some(1999));
    /// assert_eq!(config.popular_query, "marvel");
    /// # Ok::<(), reelmark::ReelmarkError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ReelmarkError::Config(e.to_string()))?;
        config.data_dir = infrastructure::expand_tilde(&config.data_dir);
        Ok(config)
    }

    /// Loads configuration and applies environment overrides.
    ///
    /// With `path` the file must exist. Without it the default location is
    /// tried and a missing file means defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ReelmarkError::Config`] if an explicit file is missing or any
    /// file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let _span = tracing::debug_span!("config_load", explicit = path.is_some()).entered();

        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match infrastructure::default_config_path() {
                Some(default) if default.exists() => Self::from_file(&default)?,
                _ => {
                    tracing::debug!("no configuration file, using defaults");
                    Self::default()
                }
            },
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ReelmarkError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
            .map_err(|e| ReelmarkError::Config(format!("{}: {e}", path.display())))
    }

    /// Applies `REELMARK_*` overrides looked up through `lookup`.
    ///
    /// Blank values are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reelmark::Config;
    ///
    /// let config = Config::default().with_overrides(|key| {
    ///     (key == "REELMARK_API_KEY").then(|| "from-env".to_string())
    /// });
    /// assert_eq!(config.api_key.as_deref(), Some("from-env"));
    /// ```
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(api_key) = lookup(ENV_API_KEY) {
            self.api_key = Some(api_key);
        }
        if let Some(data_dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = infrastructure::expand_tilde(data_dir);
        }
        self
    }

    /// Resolves the configured theme, falling back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Builds the application state from configuration.
///
/// Opens the favorites slot under `config.data_dir`. If the directory cannot
/// be created the favorites live in memory for this run; like every other
/// storage failure this is logged and never fatal.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(data_dir = %config.data_dir.display(), "initializing reelmark");

    let storage: Box<dyn Storage> = match JsonStorage::new(config.data_dir.clone()) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::error!(error = %e, "cannot open data directory, favorites will not be saved");
            Box::new(MemoryStorage::default())
        }
    };

    AppState::new(FavoritesStore::initialize(storage), config.theme())
}
