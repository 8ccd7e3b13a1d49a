//! Definition list and table formatting.
//!
//! Each `<dl>` and `<table>` in the fragment is either removed, replaced by
//! an aligned text block, replaced by flattened paragraphs, or left exactly as
//! it was. Aligned blocks are wrapped in a [`STRUCTURED_BLOCK_TAG`] element so
//! the renderer can emit them verbatim.
//!
//! Cell text is the element's text content with whitespace collapsed, so any
//! anchors inside a cell are flattened to their text and their href dropped.

use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

use super::dom_serialization::{EditSet, NodeEdit, serialize_children_with_edits};
use super::text_block::render_aligned_block;
use crate::markdown_converter::ConversionOptions;
use crate::utils::collapse_whitespace;

/// Element wrapping a pre-formatted block produced by this stage.
pub const STRUCTURED_BLOCK_TAG: &str = "structured-block";

/// Column labels used for definition list blocks.
const DL_HEADER_LABELS: [&str; 2] = ["Header", "Value"];

/// Cell placeholder used in flattened table paragraphs.
const MISSING_CELL: &str = "N/A";

static DL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("dl").expect("BUG: hardcoded selector 'dl' is statically valid")
});

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table").expect("BUG: hardcoded selector 'table' is statically valid")
});

/// Reformat definition lists and tables according to `options`.
///
/// With `strip_tables` every list and table is dropped. Otherwise
/// `format_tables` selects between aligned blocks and flattened paragraphs.
/// Lists with mismatched or zero `dt`/`dd` counts, and tables without header
/// cells or data rows, pass through untouched.
pub fn format_structured_data(html: &str, options: &ConversionOptions) -> Result<String> {
    let fragment = Html::parse_fragment(html);
    let mut edits = EditSet::new();

    for dl in fragment.select(&DL_SELECTOR) {
        if let Some(edit) = definition_list_edit(dl, options) {
            edits.insert(dl.id(), edit);
        }
    }

    for table in fragment.select(&TABLE_SELECTOR) {
        if let Some(edit) = table_edit(table, options) {
            edits.insert(table.id(), edit);
        }
    }

    Ok(serialize_children_with_edits(&fragment.root_element(), &edits))
}

fn definition_list_edit(dl: ElementRef, options: &ConversionOptions) -> Option<NodeEdit> {
    if options.strip_tables {
        return Some(NodeEdit::Remove);
    }

    let (terms, values): (Vec<ElementRef>, Vec<ElementRef>) =
        definition_items(dl).into_iter().partition(|el| is_tag(el, "dt"));
    let terms: Vec<String> = terms.into_iter().map(cell_text).collect();
    let values: Vec<String> = values.into_iter().map(cell_text).collect();

    if terms.is_empty() || terms.len() != values.len() {
        debug!(
            dt = terms.len(),
            dd = values.len(),
            "Definition list left unmodified: term/value counts do not pair up"
        );
        return None;
    }

    let pairs: Vec<Vec<String>> = terms
        .into_iter()
        .zip(values)
        .map(|(term, value)| vec![term, value])
        .collect();

    if options.format_tables {
        let header = DL_HEADER_LABELS.map(String::from);
        let block = render_aligned_block(&header, &pairs);
        return Some(NodeEdit::Replace(wrap_block(&block)));
    }

    let line = pairs
        .iter()
        .map(|pair| format!("{}: {}", pair[0], pair[1]))
        .collect::<Vec<_>>()
        .join("; ");
    Some(NodeEdit::Replace(wrap_paragraph(line.trim())))
}

fn table_edit(table: ElementRef, options: &ConversionOptions) -> Option<NodeEdit> {
    if options.strip_tables {
        return Some(NodeEdit::Remove);
    }

    let rows = table_rows(table);
    if rows.is_empty() {
        debug!("Table left unmodified: no rows");
        return None;
    }

    let mut headers: Vec<String> = rows.iter().flat_map(|row| row_cells(*row, "th")).collect();
    let mut data_rows = rows.as_slice();
    if headers.is_empty() {
        headers = row_cells(rows[0], "td");
        data_rows = &rows[1..];
    }

    let data: Vec<Vec<String>> = data_rows
        .iter()
        .map(|row| row_cells(*row, "td"))
        .filter(|cells| !cells.is_empty())
        .collect();

    if headers.is_empty() || data.is_empty() {
        debug!(
            headers = headers.len(),
            data_rows = data.len(),
            "Table left unmodified: nothing to pair headers with"
        );
        return None;
    }

    if options.format_tables {
        let block = render_aligned_block(&headers, &data);
        return Some(NodeEdit::Replace(wrap_block(&block)));
    }

    let paragraphs: String = data
        .iter()
        .map(|cells| {
            let line = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = cells.get(i).map_or(MISSING_CELL, String::as_str);
                    format!("{header}: {value}")
                })
                .collect::<Vec<_>>()
                .join("; ");
            wrap_paragraph(line.trim())
        })
        .collect();
    Some(NodeEdit::Replace(paragraphs))
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

fn is_tag(element: &ElementRef, tag: &str) -> bool {
    element.value().name() == tag
}

/// `dt`/`dd` children of a list, including those grouped in `<div>` wrappers.
/// Lists nested inside a `dd` are not descended into.
fn definition_items(dl: ElementRef) -> Vec<ElementRef> {
    let mut items = Vec::new();
    for child in child_elements(dl) {
        if is_tag(&child, "div") {
            items.extend(child_elements(child).filter(|el| is_tag(el, "dt") || is_tag(el, "dd")));
        } else if is_tag(&child, "dt") || is_tag(&child, "dd") {
            items.push(child);
        }
    }
    items
}

/// The table's own rows, in document order. Rows of nested tables are excluded.
fn table_rows(table: ElementRef) -> Vec<ElementRef> {
    let mut rows = Vec::new();
    for child in child_elements(table) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => {
                rows.extend(child_elements(child).filter(|el| is_tag(el, "tr")));
            }
            _ => {}
        }
    }
    rows
}

/// Text of the row's direct `tag` cells.
fn row_cells(row: ElementRef, tag: &str) -> Vec<String> {
    child_elements(row)
        .filter(|el| is_tag(el, tag))
        .map(cell_text)
        .collect()
}

fn cell_text(element: ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn wrap_block(block: &str) -> String {
    format!(
        "<{STRUCTURED_BLOCK_TAG}>{}</{STRUCTURED_BLOCK_TAG}>",
        html_escape::encode_text(block)
    )
}

fn wrap_paragraph(text: &str) -> String {
    format!("<p>{}</p>", html_escape::encode_text(text))
}
