//! Header component renderer.
//!
//! Renders the title bar with centered text, theme-aware colors, and optional
//! background styling.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use std::io::{self, Write};

/// Writes the header title bar as one line.
///
/// Padding is split evenly on both sides to center the title. If the width
/// cannot evenly divide, the right padding is slightly larger.
pub fn render_header<W: Write>(out: &mut W, header: &HeaderInfo, theme: &Theme, cols: usize) -> io::Result<()> {
    let title_len = header.title.chars().count();
    let padding = (cols.saturating_sub(title_len)) / 2;

    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    if let Some(bg) = &theme.colors.header_bg {
        write!(out, "{}", Theme::bg(bg))?;
    }

    write!(out, "{}", " ".repeat(padding))?;
    write!(out, "{}", header.title)?;
    write!(out, "{}", " ".repeat(cols.saturating_sub(padding + title_len)))?;

    writeln!(out, "{}", Theme::reset())
}
