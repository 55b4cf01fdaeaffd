use reelmark::{Config, ReelmarkError, ENV_API_KEY, ENV_DATA_DIR};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[test]
fn empty_file_yields_defaults() {
    let config = Config::from_toml_str("").expect("empty config");
    let defaults = Config::default();

    assert_eq!(config.api_key, None);
    assert_eq!(config.base_url, "https://www.omdbapi.com/");
    assert_eq!(config.request_timeout_secs, 10);
    assert_eq!(config.popular_query, "marvel");
    assert_eq!(config.trending_query, "action");
    assert_eq!(config.trending_year, Some(2023));
    assert_eq!(config.data_dir, defaults.data_dir);
}

#[test]
fn file_values_override_defaults() {
    let config = Config::from_toml_str(
        r#"
        api_key = "abcd1234"
        popular_query = "pixar"
        trending_year = 1999
        theme = "catppuccin-latte"
        trace_level = "debug"
        "#,
    )
    .expect("valid config");

    assert_eq!(config.api_key.as_deref(), Some("abcd1234"));
    assert_eq!(config.popular_query, "pixar");
    assert_eq!(config.trending_year, Some(1999));
    assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
}

#[test]
fn unknown_keys_are_rejected() {
    let result = Config::from_toml_str("api_kee = \"typo\"\n");

    assert!(matches!(result, Err(ReelmarkError::Config(message)) if message.contains("api_kee")));
}

#[test]
fn wrong_value_type_is_rejected() {
    assert!(matches!(
        Config::from_toml_str("request_timeout_secs = \"ten\"\n"),
        Err(ReelmarkError::Config(_))
    ));
}

#[test]
fn environment_overrides_file() {
    let env: HashMap<&str, &str> = [(ENV_API_KEY, "from-env"), (ENV_DATA_DIR, "/tmp/reelmark-test")]
        .into_iter()
        .collect();

    let config = Config::from_toml_str("api_key = \"from-file\"\n")
        .expect("valid config")
        .with_overrides(|key| env.get(key).map(ToString::to_string));

    assert_eq!(config.api_key.as_deref(), Some("from-env"));
    assert_eq!(config.data_dir, PathBuf::from("/tmp/reelmark-test"));
}

#[test]
fn blank_overrides_are_ignored() {
    let config = Config::from_toml_str("api_key = \"from-file\"\n")
        .expect("valid config")
        .with_overrides(|_| Some("  ".to_string()));

    assert_eq!(config.api_key.as_deref(), Some("from-file"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let result = Config::load(Some(Path::new("/nonexistent/reelmark/config.toml")));

    assert!(matches!(result, Err(ReelmarkError::Config(_))));
}

#[test]
fn explicit_file_is_loaded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "trending_query = \"thriller\"\n").expect("write config");

    let config = Config::load(Some(path.as_path())).expect("load config");

    assert_eq!(config.trending_query, "thriller");
}

#[test]
fn debug_output_redacts_api_key() {
    let config = Config {
        api_key: Some("secret-key".to_string()),
        ..Config::default()
    };

    let debug = format!("{config:?}");

    assert!(!debug.contains("secret-key"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn unknown_theme_falls_back_to_default() {
    let config = Config {
        theme_name: Some("no-such-theme".to_string()),
        ..Config::default()
    };

    assert_eq!(config.theme().name, reelmark::Theme::default().name);
}
