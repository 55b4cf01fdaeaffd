//! Interactive command parsing.
//!
//! The `browse` loop reads one command per line. Commands are short words or
//! single-letter aliases, optionally followed by an argument:
//!
//! | Command | Event |
//! |---|---|
//! | `/dune`, `search dune` | [`Event::Search`] |
//! | `more`, `m` | [`Event::LoadMore`] |
//! | `open 3`, `o 3` | [`Event::OpenDetails`] |
//! | `fav 3`, `f 3` (`f` alone in details) | [`Event::ToggleFavorite`] |
//! | `back`, `b` | [`Event::Back`] |
//! | `home`, `h` | [`Event::ShowHome`] |
//! | `favorites`, `l` | [`Event::ShowFavorites`] |
//! | `filter dune` | [`Event::FilterFavorites`] |
//! | `retry`, `r` | [`Event::Retry`] |
//! | `quit`, `q` | [`Event::Quit`] |

use super::handler::Event;

/// Parses one command line.
///
/// Returns `None` for blank lines, unknown commands, and missing or
/// non-numeric item numbers.
///
/// # Examples
///
/// ```
/// use reelmark::app::{input::parse_command, Event};
///
/// assert_eq!(parse_command("/blade runner"), Some(Event::Search("blade runner".into())));
/// assert_eq!(parse_command("o 2"), Some(Event::OpenDetails(2)));
/// assert_eq!(parse_command("o two"), None);
/// ```
#[must_use]
pub fn parse_command(line: &str) -> Option<Event> {
    let line = line.trim();

    if let Some(term) = line.strip_prefix('/') {
        return Some(Event::Search(term.trim().to_string()));
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "search" | "s" => Event::Search(argument.to_string()),
        "more" | "m" => Event::LoadMore,
        "open" | "o" => Event::OpenDetails(parse_number(argument)?),
        "fav" | "f" if argument.is_empty() => Event::ToggleFavorite(0),
        "fav" | "f" => Event::ToggleFavorite(parse_number(argument)?),
        "back" | "b" => Event::Back,
        "home" | "h" => Event::ShowHome,
        "favorites" | "l" => Event::ShowFavorites,
        "filter" => Event::FilterFavorites(argument.to_string()),
        "retry" | "r" => Event::Retry,
        "quit" | "q" | "exit" => Event::Quit,
        _ => return None,
    };

    Some(event)
}

fn parse_number(argument: &str) -> Option<usize> {
    argument.parse::<usize>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_and_word_forms_search() {
        assert_eq!(parse_command("/dune"), Some(Event::Search("dune".into())));
        assert_eq!(parse_command("  search  the matrix "), Some(Event::Search("the matrix".into())));
        assert_eq!(parse_command("/"), Some(Event::Search(String::new())));
    }

    #[test]
    fn numbered_commands_need_a_positive_number() {
        assert_eq!(parse_command("open 4"), Some(Event::OpenDetails(4)));
        assert_eq!(parse_command("f 1"), Some(Event::ToggleFavorite(1)));
        assert_eq!(parse_command("open"), None);
        assert_eq!(parse_command("open 0"), None);
        assert_eq!(parse_command("fav -1"), None);
    }

    #[test]
    fn bare_fav_toggles_the_open_title() {
        assert_eq!(parse_command("f"), Some(Event::ToggleFavorite(0)));
    }

    #[test]
    fn aliases_and_case() {
        assert_eq!(parse_command("M"), Some(Event::LoadMore));
        assert_eq!(parse_command("Back"), Some(Event::Back));
        assert_eq!(parse_command("h"), Some(Event::ShowHome));
        assert_eq!(parse_command("l"), Some(Event::ShowFavorites));
        assert_eq!(parse_command("r"), Some(Event::Retry));
        assert_eq!(parse_command("q"), Some(Event::Quit));
        assert_eq!(parse_command("filter  star "), Some(Event::FilterFavorites("star".into())));
        assert_eq!(parse_command("filter"), Some(Event::FilterFavorites(String::new())));
    }

    #[test]
    fn blank_and_unknown_lines_are_ignored() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("dance"), None);
    }
}
