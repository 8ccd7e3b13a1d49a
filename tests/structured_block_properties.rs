use pagemark::markdown_converter::html_preprocessing::text_block::render_aligned_block;
use pagemark::markdown_converter::{ConversionOptions, convert_html_to_markdown_sync};
use proptest::prelude::*;

fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[A-Za-z0-9]{1,12}", "[A-Za-z0-9]{1,12}"), 1..8)
}

fn definition_list(pairs: &[(String, String)]) -> String {
    let items: String = pairs
        .iter()
        .map(|(term, value)| format!("<dt>{term}</dt><dd>{value}</dd>"))
        .collect();
    format!("<html><body><main><dl>{items}</dl></main></body></html>")
}

proptest! {
    #[test]
    fn definition_list_block_has_n_plus_two_equal_lines(pairs in pairs()) {
        let markdown = convert_html_to_markdown_sync(
            &definition_list(&pairs),
            &ConversionOptions::default(),
        ).unwrap();

        let lines: Vec<&str> = markdown.lines().collect();
        prop_assert_eq!(lines.len(), pairs.len() + 2);

        // Header labels are padded like data cells: `| Header | Value  |`
        // when a value is wider than "Value".

        let width = lines[0].chars().count();
        for line in &lines {
            prop_assert_eq!(line.chars().count(), width, "misaligned line {:?}", line);
            prop_assert!(line.starts_with("| ") && line.ends_with(" |"));
        }
    }

    #[test]
    fn unformatted_list_is_one_paragraph(pairs in pairs()) {
        let options = ConversionOptions { format_tables: false, ..ConversionOptions::default() };
        let markdown = convert_html_to_markdown_sync(&definition_list(&pairs), &options).unwrap();

        let expected = pairs
            .iter()
            .map(|(term, value)| format!("{term}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        prop_assert_eq!(markdown, expected);
    }

    #[test]
    fn aligned_block_columns_line_up(
        header in prop::collection::vec("[a-z]{0,6}", 1..4),
        rows in prop::collection::vec(prop::collection::vec("[a-z ]{0,9}", 0..5), 1..5),
    ) {
        let block = render_aligned_block(&header, &rows);
        let lines: Vec<&str> = block.lines().collect();
        prop_assert_eq!(lines.len(), rows.len() + 2);

        let separators: Vec<Vec<usize>> = lines
            .iter()
            .map(|line| line.char_indices().filter(|(_, c)| *c == '|').map(|(i, _)| i).collect())
            .collect();
        for positions in &separators {
            prop_assert_eq!(positions, &separators[0]);
        }
    }

    #[test]
    fn conversion_is_idempotent(pairs in pairs(), strip_links in any::<bool>()) {
        let html = format!(
            "<html><body><main><p><a href=\"https://example.com\">{}</a></p>{}</main></body></html>",
            pairs[0].0,
            definition_list(&pairs),
        );
        let options = ConversionOptions { strip_links, ..ConversionOptions::default() };
        let first = convert_html_to_markdown_sync(&html, &options).unwrap();
        let second = convert_html_to_markdown_sync(&html, &options).unwrap();
        prop_assert_eq!(first, second);
    }
}
