//! Custom handlers for htmd HTML-to-Markdown conversion
//!
//! The converter uses ATX headings, `-` bullets and fenced code blocks.
//! On top of that base style:
//! - `<a>`: whitespace-collapsed text, dropped when empty, plain text when
//!   links are stripped or the anchor has no href
//! - `<img>`: `![alt](src)`, dropped without alt text or when images are stripped
//! - `<structured-block>`: emitted verbatim as its own block

pub mod image_handler;
pub mod link_handler;

use htmd::{
    Element, HtmlToMarkdown,
    element_handler::{HandlerResult, Handlers},
    options::{BulletListMarker, CodeBlockStyle, HeadingStyle, Options},
};
use std::rc::Rc;

use super::ConversionOptions;
use super::html_preprocessing::STRUCTURED_BLOCK_TAG;

/// Create an htmd converter for the given per-request options.
///
/// Strip flags select which handler is registered, so handlers stay plain
/// functions with no captured state.
#[must_use]
pub fn create_converter(options: &ConversionOptions) -> HtmlToMarkdown {
    let render_options = Options {
        heading_style: HeadingStyle::Atx,
        bullet_list_marker: BulletListMarker::Dash,
        code_block_style: CodeBlockStyle::Fenced,
        ..Default::default()
    };

    let builder = HtmlToMarkdown::builder()
        .options(render_options)
        .add_handler(vec![STRUCTURED_BLOCK_TAG], structured_block_handler);

    let builder = if options.strip_images {
        builder.add_handler(vec!["img"], image_handler::stripped_image_handler)
    } else {
        builder.add_handler(vec!["img"], image_handler::image_handler)
    };

    let builder = if options.strip_links {
        builder.add_handler(vec!["a"], link_handler::stripped_link_handler)
    } else {
        builder.add_handler(vec!["a"], link_handler::link_handler)
    };

    builder.build()
}

/// Handle pre-formatted blocks: raw text, no escaping or re-wrapping
fn structured_block_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let content = extract_raw_text(element.node);
    Some(HandlerResult::from(format!("\n\n{content}\n\n")))
}

// === Helper Functions ===

/// Extract raw text content from a node tree, preserving all whitespace
pub(crate) fn extract_raw_text(node: &Rc<markup5ever_rcdom::Node>) -> String {
    use markup5ever_rcdom::NodeData;

    let mut text = String::new();

    match &node.data {
        NodeData::Text { contents } => {
            text.push_str(&contents.borrow());
        }
        NodeData::Element { .. } | NodeData::Document | NodeData::Doctype { .. } => {
            for child in node.children.borrow().iter() {
                text.push_str(&extract_raw_text(child));
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
    }

    text
}

/// Get attribute value from element
pub(crate) fn get_attr(attrs: &[html5ever::Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
}
