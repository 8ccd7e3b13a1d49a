//! Main content extraction from HTML documents.
//!
//! Picks the element assumed to hold the page's primary content by walking a
//! fixed priority list of CSS selectors. Selection is existence-based: the
//! first selector with any match wins, whatever the size or quality of the
//! matched element. When nothing matches, the whole `<body>` is kept.
//!
//! The winner is returned as a serialized copy, so the caller gets a
//! self-contained fragment that becomes the sole content of the body. The
//! source document is never mutated.

use anyhow::Result;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Selector strings in priority order.
pub const CONTENT_SELECTOR_PRIORITY: [&str; 8] = [
    "main",
    "#main-content",
    "#main-container",
    "article",
    "#article",
    ".article",
    ".content",
    "#content",
];

// Parsed once at first access and cached forever.
static CONTENT_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTENT_SELECTOR_PRIORITY
        .iter()
        .map(|s| {
            Selector::parse(s)
                .unwrap_or_else(|e| panic!("BUG: hardcoded CSS selector '{s}' is invalid: {e}"))
        })
        .collect()
});

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("BUG: hardcoded CSS selector 'body' is invalid")
});

/// Extract main content from HTML.
///
/// # Returns
/// * `Ok(String)` - Outer HTML of the first priority match, or the inner HTML
///   of `<body>` when nothing matches
///
/// # Example
/// ```
/// # use pagemark::markdown_converter::extract_main_content;
/// let html = r#"<html><body><div>chrome</div><main><p>Content</p></main></body></html>"#;
/// let content = extract_main_content(html)?;
/// assert_eq!(content, "<main><p>Content</p></main>");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn extract_main_content(html: &str) -> Result<String> {
    let document = Html::parse_document(html);

    for (selector, source) in CONTENT_SELECTORS.iter().zip(CONTENT_SELECTOR_PRIORITY) {
        if let Some(element) = document.select(selector).next() {
            tracing::debug!(selector = source, "Main content container selected");
            return Ok(element.html());
        }
    }

    // html5ever always synthesizes a body, so this is the normal fallback
    if let Some(body) = document.select(&BODY_SELECTOR).next() {
        tracing::debug!("No main content container found, keeping whole body");
        return Ok(body.inner_html());
    }

    Ok(html.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_wins_over_article() -> Result<()> {
        let html = r"
            <html><body>
                <article><p>Article text</p></article>
                <main><p>Main text</p></main>
            </body></html>
        ";
        let result = extract_main_content(html)?;
        assert!(result.starts_with("<main>"));
        assert!(result.contains("Main text"));
        assert!(!result.contains("Article text"));
        Ok(())
    }

    #[test]
    fn test_priority_is_existence_based() -> Result<()> {
        // A tiny #main-content beats a large <article>
        let html = r#"
            <html><body>
                <article><p>A very long article body with lots of words in it.</p></article>
                <div id="main-content">x</div>
            </body></html>
        "#;
        let result = extract_main_content(html)?;
        assert_eq!(result, r#"<div id="main-content">x</div>"#);
        Ok(())
    }

    #[test]
    fn test_class_content_before_id_content() -> Result<()> {
        let html = r#"
            <html><body>
                <div id="content">by id</div>
                <section class="content">by class</section>
            </body></html>
        "#;
        let result = extract_main_content(html)?;
        assert!(result.contains("by class"));
        assert!(!result.contains("by id"));
        Ok(())
    }

    #[test]
    fn test_first_match_in_document_order() -> Result<()> {
        let html = r"<html><body><article>first</article><article>second</article></body></html>";
        let result = extract_main_content(html)?;
        assert_eq!(result, "<article>first</article>");
        Ok(())
    }

    #[test]
    fn test_body_fallback() -> Result<()> {
        let html = r"
            <html>
                <head><title>T</title></head>
                <body><div><p>Only content</p></div></body>
            </html>
        ";
        let result = extract_main_content(html)?;
        assert!(result.contains("<p>Only content</p>"));
        assert!(!result.contains("<body"));
        assert!(!result.contains("<title>"));
        Ok(())
    }

    #[test]
    fn test_bare_fragment_uses_synthesized_body() -> Result<()> {
        let html = "<p>Malformed HTML without body</p>";
        let result = extract_main_content(html)?;
        assert_eq!(result, html);
        Ok(())
    }
}
