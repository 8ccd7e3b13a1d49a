//! Edit-aware HTML serialization over a scraper DOM.
//!
//! Preprocessing stages never mutate the tree they are inspecting. They first
//! collect a snapshot of `NodeId`s to act on, then serialize the tree once,
//! applying the collected edits on the way out. Removing or replacing an
//! element drops its whole subtree, so edits recorded for descendants of an
//! edited element are never observed.

use ego_tree::{NodeId, NodeRef};
use scraper::node::Node;
use scraper::ElementRef;
use std::collections::HashMap;

/// HTML void elements, which never get a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Edit applied to an element while serializing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeEdit {
    /// Drop the element and all of its descendants.
    Remove,
    /// Emit the given HTML verbatim in place of the element.
    Replace(String),
}

/// Pending edits keyed by element identity.
pub type EditSet = HashMap<NodeId, NodeEdit>;

enum Step<'a> {
    Visit(NodeRef<'a, Node>),
    Close(&'a str),
}

/// Serialize the children of `element`, applying `edits`.
///
/// The element's own tags are not emitted; pass the fragment root to get the
/// fragment content back. The walk uses an explicit stack, so nesting depth
/// is bounded only by memory.
#[must_use]
pub fn serialize_children_with_edits(element: &ElementRef, edits: &EditSet) -> String {
    let mut output = String::new();
    let mut stack: Vec<Step> = element.children().rev().map(Step::Visit).collect();

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Visit(node) => node,
            Step::Close(name) => {
                output.push_str("</");
                output.push_str(name);
                output.push('>');
                continue;
            }
        };

        match node.value() {
            Node::Text(text) => push_escaped_text(&mut output, text),
            Node::Comment(comment) => {
                output.push_str("<!--");
                output.push_str(comment);
                output.push_str("-->");
            }
            Node::Element(element) => {
                match edits.get(&node.id()) {
                    Some(NodeEdit::Remove) => continue,
                    Some(NodeEdit::Replace(html)) => {
                        output.push_str(html);
                        continue;
                    }
                    None => {}
                }

                let name = element.name();
                output.push('<');
                output.push_str(name);
                for (attr, value) in element.attrs() {
                    output.push(' ');
                    output.push_str(attr);
                    output.push_str("=\"");
                    push_escaped_attr(&mut output, value);
                    output.push('"');
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&name) {
                    continue;
                }

                stack.push(Step::Close(name));
                stack.extend(node.children().rev().map(Step::Visit));
            }
            _ => {}
        }
    }

    output
}

fn push_escaped_text(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '&' => output.push_str("&amp;"),
            c => output.push(c),
        }
    }
}

fn push_escaped_attr(output: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '"' => output.push_str("&quot;"),
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            c => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_no_edits_round_trips_structure() {
        let html = r#"<div class="a"><p>Hi <em>there</em></p><br><img src="x.png"></div>"#;
        let fragment = Html::parse_fragment(html);
        let out = serialize_children_with_edits(&fragment.root_element(), &EditSet::new());
        assert_eq!(out, html);
    }

    #[test]
    fn test_remove_and_replace() {
        let fragment = Html::parse_fragment("<p>keep</p><nav>drop</nav><dl><dt>a</dt></dl>");
        let nav = Selector::parse("nav").expect("valid selector");
        let dl = Selector::parse("dl").expect("valid selector");

        let mut edits = EditSet::new();
        for el in fragment.select(&nav) {
            edits.insert(el.id(), NodeEdit::Remove);
        }
        for el in fragment.select(&dl) {
            edits.insert(el.id(), NodeEdit::Replace("<p>swapped</p>".to_string()));
        }

        let out = serialize_children_with_edits(&fragment.root_element(), &edits);
        assert_eq!(out, "<p>keep</p><p>swapped</p>");
    }

    #[test]
    fn test_text_is_reescaped() {
        let fragment = Html::parse_fragment("<p>5 &lt; 10 &amp;&amp; 10 &gt; 5</p>");
        let out = serialize_children_with_edits(&fragment.root_element(), &EditSet::new());
        assert_eq!(out, "<p>5 &lt; 10 &amp;&amp; 10 &gt; 5</p>");
    }

    #[test]
    fn test_deep_nesting_is_kept() {
        let depth = 2_000;
        let html = format!("{}<p>deep text</p>{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let fragment = Html::parse_fragment(&html);
        let out = serialize_children_with_edits(&fragment.root_element(), &EditSet::new());
        assert!(out.contains("<p>deep text</p>"));
        assert_eq!(out.matches("<div>").count(), depth);
        assert_eq!(out.matches("</div>").count(), depth);
    }
}
