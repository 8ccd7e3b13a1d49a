//! `<a>` rendering.

use htmd::{
    Element,
    element_handler::{HandlerResult, Handlers},
};

use super::{extract_raw_text, get_attr};
use crate::utils::collapse_whitespace;

/// Render `[text](href)`.
///
/// The text is the anchor's text content with whitespace collapsed. Anchors
/// with no text are dropped; anchors with no href keep only their text.
pub fn link_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let text = collapse_whitespace(&extract_raw_text(element.node));
    if text.is_empty() {
        return Some(HandlerResult::from(String::new()));
    }

    match get_attr(element.attrs, "href") {
        Some(href) => Some(HandlerResult::from(format!("[{text}]({href})"))),
        None => Some(HandlerResult::from(text)),
    }
}

/// Render anchors as their plain text.
pub fn stripped_link_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let text = collapse_whitespace(&extract_raw_text(element.node));
    Some(HandlerResult::from(text))
}

#[cfg(test)]
mod tests {
    use crate::markdown_converter::ConversionOptions;
    use crate::markdown_converter::custom_handlers::create_converter;

    fn render(html: &str, strip_links: bool) -> String {
        let options = ConversionOptions {
            strip_links,
            ..ConversionOptions::default()
        };
        create_converter(&options)
            .convert(html)
            .expect("conversion succeeds")
    }

    #[test]
    fn test_link_text_is_collapsed() {
        let md = render(
            "<p>See <a href=\"https://example.com/docs\">\n  the   <b>docs</b>\n</a> now</p>",
            false,
        );
        assert_eq!(md.trim(), "See [the docs](https://example.com/docs) now");
    }

    #[test]
    fn test_empty_link_is_dropped() {
        let md = render(r#"<p>A<a href="/x">   </a>B</p>"#, false);
        assert_eq!(md.trim(), "AB");
        assert!(!md.contains("]("));
    }

    #[test]
    fn test_anchor_without_href_is_plain_text() {
        let md = render(r#"<p><a name="top">Top</a></p>"#, false);
        assert_eq!(md.trim(), "Top");
    }

    #[test]
    fn test_strip_links() {
        let md = render(r#"<p>Go <a href="/home">home</a></p>"#, true);
        assert_eq!(md.trim(), "Go home");
        assert!(!md.contains("]("));
    }
}
