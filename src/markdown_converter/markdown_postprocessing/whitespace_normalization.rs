//! Blank-line normalization for markdown content.

use regex::Regex;
use std::sync::LazyLock;

static EXCESSIVE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("EXCESSIVE_NEWLINES: hardcoded regex is valid")
});

/// Collapse every run of three or more newlines to exactly two.
///
/// Lines holding only spaces break a run; they are not blank for this purpose.
#[must_use]
pub fn collapse_blank_lines(markdown: &str) -> String {
    EXCESSIVE_NEWLINES.replace_all(markdown, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_long_runs() {
        assert_eq!(collapse_blank_lines("a\n\n\nb\n\n\n\n\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_keeps_single_blank_line() {
        assert_eq!(collapse_blank_lines("a\nb\n\nc"), "a\nb\n\nc");
    }

    #[test]
    fn test_space_only_lines_break_runs() {
        assert_eq!(collapse_blank_lines("a\n\n \n\nb"), "a\n\n \n\nb");
    }
}
