//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: fuzzy match highlight computation and highlighted text output
//! with proper ANSI escape sequence management.
//!
//! # Example
//!
//! ```rust
//! use fuzzy_matcher::skim::SkimMatcherV2;
//! use reelmark::ui::helpers::compute_highlight_ranges;
//!
//! let matcher = SkimMatcherV2::default();
//! assert_eq!(compute_highlight_ranges("Blade Runner", "blade", &matcher), vec![(0, 5)]);
//! ```

use crate::ui::theme::Theme;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Computes character index ranges to highlight for fuzzy match visualization.
///
/// Each whitespace-separated token of `query` is matched on its own and the
/// matched positions are merged, then consecutive indices are coalesced into
/// `(start, end)` ranges with exclusive end.
#[must_use]
pub fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    let indices: BTreeSet<usize> = query
        .split_whitespace()
        .map(str::to_lowercase)
        .filter_map(|token| matcher.fuzzy_indices(text, &token))
        .flat_map(|(_score, indices)| indices)
        .collect();

    let mut ranges = Vec::new();
    let mut start = None;
    let mut prev = None;

    for &idx in &indices {
        match (start, prev) {
            (None, _) => {
                start = Some(idx);
                prev = Some(idx);
            }
            (Some(_), Some(p)) if idx == p + 1 => {
                prev = Some(idx);
            }
            (Some(s), Some(p)) => {
                ranges.push((s, p + 1));
                start = Some(idx);
                prev = Some(idx);
            }
            _ => {}
        }
    }

    if let (Some(s), Some(p)) = (start, prev) {
        ranges.push((s, p + 1));
    }

    ranges
}

/// Writes text with highlighted character ranges.
///
/// Ranges use UTF-8 character indices, inclusive start and exclusive end.
/// Highlighted sections use `match_highlight_fg` on `match_highlight_bg`;
/// after each one the normal text colour is restored.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_highlighted_text<W: Write>(
    out: &mut W,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
) -> io::Result<()> {
    if ranges.is_empty() {
        return write!(out, "{text}");
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        write!(out, "{normal_section}")?;

        let highlighted_section: String = chars[start..end].iter().collect();
        write!(
            out,
            "{}{}{highlighted_section}{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset(),
            Theme::fg(&theme.colors.text_normal),
        )?;

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    write!(out, "{remaining}")
}

/// Pads or truncates `text` to exactly `width` characters.
///
/// Truncated text ends in `...`.
#[must_use]
pub fn fit_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let head: String = text.chars().take(width - 3).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_token_ranges_merge() {
        let matcher = SkimMatcherV2::default();
        let ranges = compute_highlight_ranges("Star Wars", "star wars", &matcher);
        assert_eq!(ranges, vec![(0, 4), (5, 9)]);
    }

    #[test]
    fn unmatched_query_has_no_ranges() {
        let matcher = SkimMatcherV2::default();
        assert!(compute_highlight_ranges("Dune", "xyz", &matcher).is_empty());
    }

    #[test]
    fn fit_width_pads_and_truncates() {
        assert_eq!(fit_width("Dune", 6), "Dune  ");
        assert_eq!(fit_width("Interstellar", 8), "Inter...");
    }

    #[test]
    fn highlighted_text_keeps_every_character() {
        let theme = Theme::default();
        let mut out = Vec::new();
        write_highlighted_text(&mut out, "Arrival", &[(0, 3)], &theme).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("Arr"));
        assert!(rendered.ends_with("ival"));
    }
}
