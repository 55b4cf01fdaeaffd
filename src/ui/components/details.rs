//! Details panel renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailsInfo;
use std::io::{self, Write};

/// Width of the field label column.
const LABEL_WIDTH: usize = 10;

/// Writes the title line, labelled fields, and the wrapped plot.
pub fn render_details<W: Write>(out: &mut W, details: &DetailsInfo, theme: &Theme, cols: usize) -> io::Result<()> {
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    write!(out, "{} ({})", details.title, details.year)?;
    if details.is_favorite {
        write!(out, " {}★", Theme::fg(&theme.colors.favorite_fg))?;
    }
    writeln!(out, "{}", Theme::reset())?;

    for (label, value) in &details.fields {
        writeln!(
            out,
            "{}{label:<LABEL_WIDTH$}{}{value}{}",
            Theme::fg(&theme.colors.text_dim),
            Theme::fg(&theme.colors.text_normal),
            Theme::reset()
        )?;
    }

    if let Some(plot) = &details.plot {
        writeln!(out)?;
        write!(out, "{}", Theme::fg(&theme.colors.text_normal))?;
        for line in wrap(plot, cols.max(20)) {
            writeln!(out, "{line}")?;
        }
        write!(out, "{}", Theme::reset())?;
    }

    Ok(())
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() { word.len() } else { line.len() + 1 + word.len() };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("a linguist works with the military", 12),
            vec!["a linguist", "works with", "the military"]
        );
        assert!(wrap("", 10).is_empty());
    }
}
