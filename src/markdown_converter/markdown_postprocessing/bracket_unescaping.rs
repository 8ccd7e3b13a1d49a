//! Removal of escaped bracket artifacts.
//!
//! Some pages embed literal `\[` / `\]` sequences (escaped bracket syntax
//! copied from other markdown). They carry no meaning in the output and are
//! deleted outright, brackets included.

/// Delete every literal `\[` and `\]` sequence.
#[must_use]
pub fn strip_escaped_brackets(markdown: &str) -> String {
    // Fast path: nothing to delete
    if !markdown.contains("\\[") && !markdown.contains("\\]") {
        return markdown.to_string();
    }

    markdown.replace("\\[", "").replace("\\]", "")
}
