//! Fixed-width, pipe-delimited text blocks.
//!
//! Column widths are character counts (see [`crate::utils::char_width`]).
//! Every line of a block has the same width per column.

use crate::utils::{char_width, pad_end};

/// Render a header row, a dash separator and one line per data row.
///
/// The column count is the larger of `header.len()` and the widest row.
/// Missing cells render as empty padded cells.
///
/// # Example
/// ```
/// # use pagemark::markdown_converter::html_preprocessing::text_block::render_aligned_block;
/// let header = vec!["Header".to_string(), "Value".to_string()];
/// let rows = vec![
///     vec!["Name".to_string(), "Widget".to_string()],
///     vec!["Price".to_string(), "$10".to_string()],
/// ];
/// assert_eq!(
///     render_aligned_block(&header, &rows),
///     "| Header | Value  |\n| ------ | ------ |\n| Name   | Widget |\n| Price  | $10    |"
/// );
/// ```
#[must_use]
pub fn render_aligned_block(header: &[String], rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).fold(header.len(), usize::max);

    let mut widths = vec![0usize; columns];
    for line in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(char_width(cell));
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(header, &widths));
    lines.push(render_separator(&widths));
    for row in rows {
        lines.push(render_row(row, &widths));
    }
    lines.join("\n")
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &width)| pad_end(cells.get(i).map_or("", String::as_str), width))
        .collect();
    format!("| {} |", padded.join(" | "))
}

fn render_separator(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    format!("| {} |", dashes.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_short_rows_are_padded() {
        let header = cells(&["A", "Bee", "C"]);
        let rows = vec![cells(&["1", "2", "3"]), cells(&["long value"])];
        let block = render_aligned_block(&header, &rows);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "| A          | Bee | C |");
        assert_eq!(lines[1], "| ---------- | --- | - |");
        assert_eq!(lines[2], "| 1          | 2   | 3 |");
        assert_eq!(lines[3], "| long value |     |   |");
    }

    #[test]
    fn test_rows_wider_than_header() {
        let header = cells(&["Only"]);
        let rows = vec![cells(&["a", "extra"])];
        let block = render_aligned_block(&header, &rows);
        assert_eq!(block, "| Only |       |\n| ---- | ----- |\n| a    | extra |");
    }

    #[test]
    fn test_widths_count_characters() {
        let header = cells(&["Ünï"]);
        let rows = vec![cells(&["ab"])];
        assert_eq!(render_aligned_block(&header, &rows), "| Ünï |\n| --- |\n| ab  |");
    }
}
