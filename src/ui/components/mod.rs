//! Composable UI component renderers.
//!
//! Each component writes a specific part of the interface as whole lines to
//! any [`Write`] sink.
//!
//! # Components
//!
//! - `header`: Title bar
//! - `footer`: Command hints
//! - `table`: Numbered movie lists with status lines
//! - `details`: Extended record of one title
//! - `empty`: Empty state message
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Sections and details, or the empty state]
//! [Border]
//! [Footer]
//! ```

mod details;
mod empty;
mod footer;
mod header;
mod table;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use std::io::{self, Write};

use details::render_details;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use table::render_section;

/// Writes a horizontal border line.
fn render_border<W: Write>(out: &mut W, color: &str, cols: usize) -> io::Result<()> {
    writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset())
}

/// Writes the full screen for `vm`.
pub fn render_screen<W: Write>(out: &mut W, vm: &UIViewModel, theme: &Theme, cols: usize) -> io::Result<()> {
    render_header(out, &vm.header, theme, cols)?;
    render_border(out, &theme.colors.border, cols)?;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols)?;
    } else {
        for (index, section) in vm.sections.iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            render_section(out, section, theme, cols)?;
        }
        if let Some(details) = &vm.details {
            render_details(out, details, theme, cols)?;
        }
    }

    render_border(out, &theme.colors.border, cols)?;
    render_footer(out, &vm.footer, theme, cols)
}
