//! Colour themes and ANSI styling.
//!
//! A theme is a named palette of hex colours loaded from TOML. Four Catppuccin
//! flavours are compiled in; any other palette can be loaded from a file with
//! the same shape:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! section_fg = "#cba6f7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! favorite_fg = "#f9e2af"
//! error_fg = "#f38ba8"
//! ```
//!
//! Colours are emitted as 24-bit SGR sequences.
//!
//! ```rust
//! use reelmark::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").unwrap();
//! assert!(Theme::fg(&theme.colors.text_normal).starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::{ReelmarkError, Result};
use serde::Deserialize;
use std::path::Path;

/// Compiled-in palettes, first one is the default.
const BUILTIN_THEMES: [(&str, &str); 4] = [
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("catppuccin-frappe", include_str!("../../themes/catppuccin-frappe.toml")),
    ("catppuccin-macchiato", include_str!("../../themes/catppuccin-macchiato.toml")),
];

/// Colour used when a palette entry is not a valid `#rrggbb` value.
const FALLBACK_RGB: (u8, u8, u8) = (255, 255, 255);

#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Palette entries as `#rrggbb` strings.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeColors {
    pub header_fg: String,
    /// Header bar background; the bar is transparent without it.
    #[serde(default)]
    pub header_bg: Option<String>,
    pub text_normal: String,
    /// Years, kinds, hints, loading lines.
    pub text_dim: String,
    pub border: String,
    /// "Popular" / "Trending" headings.
    pub section_fg: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,
    pub empty_state_fg: String,
    /// The ★ marker on bookmarked titles.
    pub favorite_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Looks up a compiled-in palette by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_THEMES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .and_then(|(_, source)| toml::from_str(source).ok())
    }

    /// Reads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// [`ReelmarkError::Theme`] when the file cannot be read or does not
    /// describe a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ReelmarkError::Theme(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&source)
            .map_err(|e| ReelmarkError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// Foreground colour sequence for a `#rrggbb` value.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        sgr_rgb(38, hex)
    }

    /// Background colour sequence for a `#rrggbb` value.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        sgr_rgb(48, hex)
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    /// Clears colour and weight.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        let (_, source) = BUILTIN_THEMES[0];
        toml::from_str(source).expect("built-in theme must parse")
    }
}

fn sgr_rgb(selector: u8, hex: &str) -> String {
    let (r, g, b) = parse_hex(hex).unwrap_or(FALLBACK_RGB);
    format!("\u{1b}[{selector};2;{r};{g};{b}m")
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_theme_parses() {
        for (name, _) in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, "catppuccin-mocha");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("#1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("oops"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zz0000"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn unreadable_theme_file_is_a_theme_error() {
        let err = Theme::from_file("/nonexistent/reelmark-theme.toml").unwrap_err();
        assert!(matches!(err, ReelmarkError::Theme(_)));
    }

    #[test]
    fn custom_theme_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        let (_, mocha) = BUILTIN_THEMES[0];
        std::fs::write(&path, mocha.replacen("catppuccin-mocha", "mine", 1)).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap().name, "mine");
    }
}
