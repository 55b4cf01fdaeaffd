//! List component renderer.
//!
//! Renders numbered movie entries as a table with number, favorite marker,
//! title, year and kind columns, followed by an optional status line.

use crate::ui::helpers::{self, fit_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListSection, StatusLine};
use std::io::{self, Write};

const NUMBER_WIDTH: usize = 4;
const YEAR_WIDTH: usize = 11;
const KIND_WIDTH: usize = 8;
/// Number, marker and spacing columns.
const CHROME_WIDTH: usize = NUMBER_WIDTH + 4 + YEAR_WIDTH + KIND_WIDTH;
const MIN_TITLE_WIDTH: usize = 12;

/// Writes one section: optional title, entries, then the status line.
pub fn render_section<W: Write>(out: &mut W, section: &ListSection, theme: &Theme, cols: usize) -> io::Result<()> {
    if let Some(title) = &section.title {
        writeln!(
            out,
            "{}{}{title}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.section_fg),
            Theme::reset()
        )?;
    }

    let title_width = cols.saturating_sub(CHROME_WIDTH).max(MIN_TITLE_WIDTH);
    for item in &section.items {
        render_row(out, item, theme, title_width)?;
    }

    if let Some(status) = &section.status {
        render_status(out, status, theme)?;
    }

    Ok(())
}

/// Writes a single entry.
///
/// ```text
/// " 12. ★ Title (padded)           2021        movie"
/// ```
///
/// Fuzzy match highlights are applied to the title only, so the padding is
/// written separately to keep columns aligned.
fn render_row<W: Write>(out: &mut W, item: &DisplayItem, theme: &Theme, title_width: usize) -> io::Result<()> {
    write!(out, "{}", Theme::fg(&theme.colors.text_dim))?;
    write!(out, "{:>width$}. ", item.number, width = NUMBER_WIDTH - 1)?;

    if item.is_favorite {
        write!(out, "{}★ ", Theme::fg(&theme.colors.favorite_fg))?;
    } else {
        write!(out, "  ")?;
    }

    write!(out, "{}", Theme::fg(&theme.colors.text_normal))?;
    let title = fit_width(&item.title, title_width);
    let shown = title.trim_end();
    helpers::write_highlighted_text(out, shown, &item.highlight_ranges, theme)?;
    write!(out, "{}", " ".repeat(title.chars().count() - shown.chars().count()))?;

    writeln!(
        out,
        " {}{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        fit_width(&item.year, YEAR_WIDTH),
        item.kind,
        Theme::reset()
    )
}

fn render_status<W: Write>(out: &mut W, status: &StatusLine, theme: &Theme) -> io::Result<()> {
    match status {
        StatusLine::Loading => writeln!(
            out,
            "{}  Loading...{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ),
        StatusLine::Failed(message) => writeln!(
            out,
            "{}  Error: {message} (r to retry){}",
            Theme::fg(&theme.colors.error_fg),
            Theme::reset()
        ),
        StatusLine::More { shown, total } => writeln!(
            out,
            "{}  Showing {shown} of {total}, m for more{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        ),
    }
}
