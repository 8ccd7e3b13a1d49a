//! Final text normalization applied to rendered markdown.
//!
//! Steps, in order:
//! 1. Trim leading and trailing whitespace
//! 2. Delete every literal `\[` and `\]`
//! 3. Collapse runs of three or more newlines to exactly two

mod bracket_unescaping;
mod whitespace_normalization;

pub use bracket_unescaping::strip_escaped_brackets;
pub use whitespace_normalization::collapse_blank_lines;

/// Run every postprocessing step over `markdown`.
///
/// # Examples
///
/// ```rust
/// # use pagemark::markdown_converter::postprocess_markdown;
/// let md = "\n\n# Title\n\n\n\nSee \\[1\\]\n\n";
/// assert_eq!(postprocess_markdown(md), "# Title\n\nSee 1");
/// ```
#[must_use]
pub fn postprocess_markdown(markdown: &str) -> String {
    let trimmed = markdown.trim();
    let unescaped = strip_escaped_brackets(trimmed);
    collapse_blank_lines(&unescaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_run_in_order() {
        // Deleting the escapes happens after trimming, so inner spacing is kept
        let md = "  \\[x\\] \n\n\n\n\ny  ";
        assert_eq!(postprocess_markdown(md), "x \n\ny");
    }

    #[test]
    fn test_is_idempotent() {
        let md = "# A\n\n\n\nb \\[c\\]\n\n\n";
        let once = postprocess_markdown(md);
        assert_eq!(postprocess_markdown(&once), once);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(postprocess_markdown(" \n\t\n"), "");
    }
}
