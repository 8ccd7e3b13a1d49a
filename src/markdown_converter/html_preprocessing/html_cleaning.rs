//! Noise filtering for extracted main content.
//!
//! Two passes, each over a snapshot of matching elements:
//! 1. Drop every element whose tag is in [`NOISE_TAGS`].
//! 2. Drop every surviving element whose id, class string or tag contains
//!    (case-insensitive) any term in [`DENYLIST_TERMS`].
//!
//! Pass 2 re-parses the output of pass 1, so it only inspects what survived.

use anyhow::Result;
use scraper::{ElementRef, Html};

use super::dom_serialization::{EditSet, NodeEdit, serialize_children_with_edits};

/// Tags removed outright, together with their content.
pub const NOISE_TAGS: [&str; 7] = [
    "script", "style", "noscript", "nav", "header", "footer", "form",
];

/// Substrings identifying boilerplate UI regions.
pub const DENYLIST_TERMS: [&str; 8] = [
    "breadcrumbs",
    "cookies",
    "popup",
    "sidebar",
    "modal",
    "menu-container",
    "dropdown-menu",
    "header-dropdown",
];

/// Remove boilerplate elements from an HTML fragment.
///
/// # Example
/// ```
/// # use pagemark::markdown_converter::filter_noise;
/// let html = r#"<nav>Menu</nav><div class="Sidebar-left">Links</div><p>Body</p>"#;
/// assert_eq!(filter_noise(html)?, "<p>Body</p>");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn filter_noise(html: &str) -> Result<String> {
    let without_tags = remove_matching(html, |el| NOISE_TAGS.contains(&el.value().name()));
    let cleaned = remove_matching(&without_tags, matches_denylist);

    Ok(cleaned)
}

/// True when the element's tag, id or class string contains a denylist term.
#[must_use]
pub fn matches_denylist(element: ElementRef) -> bool {
    let value = element.value();
    let tag = value.name().to_ascii_lowercase();
    let id = value.id().unwrap_or_default().to_lowercase();
    let classes = value.classes().collect::<Vec<_>>().join(" ").to_lowercase();

    DENYLIST_TERMS
        .iter()
        .any(|term| tag.contains(term) || id.contains(term) || classes.contains(term))
}

/// Parse `html` as a fragment and drop every element matching `predicate`.
fn remove_matching<F>(html: &str, predicate: F) -> String
where
    F: Fn(ElementRef) -> bool,
{
    let fragment = Html::parse_fragment(html);
    let root = fragment.root_element();

    // Snapshot first, serialize second: the tree is never edited while walked
    let edits: EditSet = root
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| predicate(*el))
        .map(|el| (el.id(), NodeEdit::Remove))
        .collect();

    if !edits.is_empty() {
        tracing::debug!(removed = edits.len(), "Noise elements removed");
    }
    serialize_children_with_edits(&root, &edits)
}
