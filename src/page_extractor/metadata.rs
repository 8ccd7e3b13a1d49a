//! Page metadata read from the untouched rendered document.
//!
//! Runs independently of the conversion pipeline; nothing here sees the
//! extracted or filtered content.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::schema::PageMetadata;
use crate::utils::collapse_whitespace;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("BUG: hardcoded selector 'title' is statically valid")
});

/// Meta elements carrying the publication time, in priority order.
static PUBLISHED_TIME_SELECTORS: LazyLock<[Selector; 2]> = LazyLock::new(|| {
    [
        Selector::parse(r#"meta[property="article:published_time"]"#)
            .expect("BUG: hardcoded published time selector is statically valid"),
        Selector::parse(r#"meta[name="dcterms.created"]"#)
            .expect("BUG: hardcoded dcterms selector is statically valid"),
    ]
});

/// Extract title and published time from a full HTML document.
///
/// The title is the first `<title>` element's text with whitespace collapsed,
/// or an empty string. The published time is the `content` of the first
/// `article:published_time` meta, falling back to `dcterms.created`; a meta
/// with an empty or missing `content` does not count.
///
/// # Example
/// ```
/// # use pagemark::page_extractor::extract_metadata;
/// let html = r#"<html><head>
///     <title> Release notes </title>
///     <meta name="dcterms.created" content="2024-01-02">
/// </head><body></body></html>"#;
/// let metadata = extract_metadata(html);
/// assert_eq!(metadata.title, "Release notes");
/// assert_eq!(metadata.published_time.as_deref(), Some("2024-01-02"));
/// ```
#[must_use]
pub fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default();

    let published_time = PUBLISHED_TIME_SELECTORS.iter().find_map(|selector| {
        document
            .select(selector)
            .next()
            .and_then(|meta| meta.value().attr("content"))
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(String::from)
    });

    PageMetadata {
        title,
        published_time,
    }
}
