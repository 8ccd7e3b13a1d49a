//! Character-count based string helpers
//!
//! Widths here are Unicode scalar counts, not display widths. Wide glyphs
//! (CJK, emoji) count as one character, so blocks aligned with these helpers
//! can look ragged in a terminal. That is the documented behavior.

/// Collapse every run of whitespace into a single ASCII space and trim the ends.
///
/// # Examples
/// ```
/// # use pagemark::utils::string_utils::collapse_whitespace;
/// assert_eq!(collapse_whitespace("  Read\n   the  docs "), "Read the docs");
/// assert_eq!(collapse_whitespace(" \t\n "), "");
/// ```
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Number of characters in `s`.
#[inline]
#[must_use]
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Right-pad `s` with spaces to `width` characters.
///
/// Strings already at or beyond `width` are returned unchanged.
///
/// # Examples
/// ```
/// # use pagemark::utils::string_utils::pad_end;
/// assert_eq!(pad_end("Name", 6), "Name  ");
/// assert_eq!(pad_end("Widget", 3), "Widget");
/// ```
#[must_use]
pub fn pad_end(s: &str, width: usize) -> String {
    let len = char_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(len));
    out.push_str(s);
    for _ in len..width {
        out.push(' ');
    }
    out
}

/// Interpret a query-string flag: `1` and `true` (any case) are on.
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    let v = value.trim();
    v == "1" || v.eq_ignore_ascii_case("true")
}

/// Interpret a query-string flag that defaults to on: `0` and `false` turn it off.
#[must_use]
pub fn is_falsy(value: &str) -> bool {
    let v = value.trim();
    v == "0" || v.eq_ignore_ascii_case("false")
}
