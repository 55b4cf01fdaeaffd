//! Empty state component renderer.
//!
//! Renders the message displayed when a view has nothing to list.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Writes the empty state message.
///
/// ```text
/// [blank line]
/// [left padding] MESSAGE
/// [left padding] subtitle
/// [blank line]
/// ```
///
/// Both lines are horizontally centered. The message uses the `empty_state_fg`
/// theme color, and the subtitle uses `text_dim` with dim styling.
pub fn render_empty_state<W: Write>(out: &mut W, empty: &EmptyState, theme: &Theme, cols: usize) -> io::Result<()> {
    let msg_padding = (cols.saturating_sub(empty.message.chars().count())) / 2;
    let sub_padding = (cols.saturating_sub(empty.subtitle.chars().count())) / 2;

    writeln!(out)?;
    writeln!(
        out,
        "{}{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        " ".repeat(msg_padding),
        empty.message,
        Theme::reset()
    )?;
    writeln!(
        out,
        "{}{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(sub_padding),
        empty.subtitle,
        Theme::reset()
    )?;
    writeln!(out)
}
