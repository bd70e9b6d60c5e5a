//! Blank line and hard space normalization.

use regex::Regex;
use std::sync::LazyLock;

/// A line holding nothing but ASCII whitespace, with its surrounding breaks
static WHITESPACE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[\t\n\x0B\x0C\r ]+\n").expect("WHITESPACE_LINE: hardcoded regex is valid")
});

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES: hardcoded regex is valid"));

/// Collapse blank lines to at most one and drop leading line breaks.
///
/// Hard spaces (U+00A0) are content, so a line of them is not blank.
#[must_use]
pub fn normalize_blank_lines(text: &str) -> String {
    let text = WHITESPACE_LINE.replace_all(text, "\n\n");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim_start_matches('\n').to_string()
}

/// Turn hard spaces back into ordinary spaces once wrapping is done
#[must_use]
pub fn restore_hard_spaces(text: &str) -> String {
    text.replace('\u{a0}', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_lines_become_blank() {
        assert_eq!(normalize_blank_lines("a\n  \t \nb"), "a\n\nb");
    }

    #[test]
    fn test_runs_of_newlines_collapse() {
        assert_eq!(normalize_blank_lines("a\n\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
        assert_eq!(normalize_blank_lines("a\n \n \n \nb"), "a\n\nb");
    }

    #[test]
    fn test_leading_newlines_trimmed() {
        assert_eq!(normalize_blank_lines("\n\n\nTitle\n"), "Title\n");
        assert_eq!(normalize_blank_lines("  \nTitle"), "  \nTitle");
    }

    #[test]
    fn test_hard_space_line_is_content() {
        assert_eq!(normalize_blank_lines("a\n\u{a0}\u{a0}\nb"), "a\n\u{a0}\u{a0}\nb");
    }

    #[test]
    fn test_restore_hard_spaces() {
        assert_eq!(restore_hard_spaces("a\u{a0}\u{a0}b c"), "a  b c");
    }
}
