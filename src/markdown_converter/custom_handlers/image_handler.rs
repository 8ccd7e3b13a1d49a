//! `<img>` rendering.
//!
//! Images without alt text are always dropped, whether or not images are
//! being stripped.

use htmd::{
    Element,
    element_handler::{HandlerResult, Handlers},
};

use super::get_attr;
use crate::utils::collapse_whitespace;

/// Render `![alt](src)`, or nothing when the alt text is empty.
pub fn image_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let alt = get_attr(element.attrs, "alt")
        .map(|alt| collapse_whitespace(&alt))
        .unwrap_or_default();

    if alt.is_empty() {
        return Some(HandlerResult::from(String::new()));
    }

    let src = get_attr(element.attrs, "src").unwrap_or_default();
    Some(HandlerResult::from(format!("![{alt}]({src})")))
}

/// Render every image as nothing.
pub fn stripped_image_handler(_handlers: &dyn Handlers, _element: Element) -> Option<HandlerResult> {
    Some(HandlerResult::from(String::new()))
}
