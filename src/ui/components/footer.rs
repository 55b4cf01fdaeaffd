//! Footer component renderer.
//!
//! Renders the help line with centered command hints.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use std::io::{self, Write};

/// Writes the footer help line.
///
/// Hints wider than `cols` are truncated to fit.
pub fn render_footer<W: Write>(out: &mut W, footer: &FooterInfo, theme: &Theme, cols: usize) -> io::Result<()> {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let padding = (cols.saturating_sub(help_text.chars().count())) / 2;

    writeln!(
        out,
        "{}{}{help_text}{}",
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(padding),
        Theme::reset()
    )
}
