use crate::ui::table_printer::TablePrinter;

fn render(printer: &TablePrinter, headers: &[&str], rows: &[Vec<&str>], empty: Option<&str>) -> String {
    let mut buf = Vec::new();
    printer.render_table(headers, rows, empty, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn table_printer_renders_expected_table_output() {
    let printer = TablePrinter::new();
    let rows = vec![vec!["1", "Alpha"], vec!["20", "Beta"]];
    let output = render(&printer, &["ID", "NAME"], &rows, None);
    let expected = "\
ID | NAME
----------
1  | Alpha
20 | Beta
----------
";
    assert_eq!(output, expected);
}

#[test]
fn table_printer_separator_spans_columns_and_gaps() {
    let printer = TablePrinter::new();
    let rows = vec![vec!["1", "Bob"], vec!["10", "Alice"]];
    // widths: col1 max 2, col2 max 5, plus separator (3) = 10
    let output = render(&printer, &["ID", "NAME"], &rows, None);
    assert_eq!(output.lines().nth(1), Some("-".repeat(10).as_str()));
}

#[test]
fn table_printer_prints_empty_message_without_rows() {
    let printer = TablePrinter::new();
    let rows: Vec<Vec<&str>> = Vec::new();
    let output = render(&printer, &["ID"], &rows, Some("Nothing here."));
    assert_eq!(output, "Nothing here.\n");
}

#[test]
fn table_printer_without_empty_message_prints_header_only() {
    let printer = TablePrinter::new();
    let rows: Vec<Vec<&str>> = Vec::new();
    let output = render(&printer, &["ID", "NAME"], &rows, None);
    assert_eq!(output, "ID | NAME\n---------\n---------\n");
}

#[test]
fn table_printer_truncates_to_max_line_width() {
    let printer = TablePrinter::new().with_max_line_width(Some(8));
    let rows = vec![vec!["1", "A very long station name"]];
    let output = render(&printer, &["ID", "NAME"], &rows, None);
    for line in output.lines() {
        assert!(line.chars().count() <= 8, "{line}");
    }
    assert!(output.contains('…'));
}

#[test]
fn table_printer_renders_counts_in_given_order() {
    let printer = TablePrinter::new();
    let counts = vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)];
    let mut buf = Vec::new();
    printer
        .render_counts("User Type", &counts, "none", &mut buf)
        .unwrap();
    let output = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "User Type  | COUNT");
    assert_eq!(lines[2], "Subscriber | 3");
    assert_eq!(lines[3], "Customer   | 1");
}
