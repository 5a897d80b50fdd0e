use super::error::UiError;
use super::platform::{Document, Element, WindowHost};

/// Standalone page around a table for the print window.
pub fn print_document_html(table_html: &str, stylesheet: &str) -> String {
    format!(
        r#"<html>
    <head>
        <title>Print Report</title>
        <link href="{stylesheet}" rel="stylesheet">
    </head>
    <body>
        <div class="container mt-4">
            {table_html}
        </div>
    </body>
</html>"#
    )
}

/// Opens the table in a new window and prints it. `Ok(false)` when the table is missing.
pub fn print_table<D: Document, W: WindowHost>(
    document: &D,
    window: &W,
    table_id: &str,
    stylesheet: &str,
) -> Result<bool, UiError> {
    let Some(table) = document.element_by_id(table_id) else {
        return Ok(false);
    };
    window.print_html(&print_document_html(&table.outer_html(), stylesheet))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::platform::testing::{FakeDocument, RecordingWindow};
    use crate::shared::table_utils::fixtures::table;

    #[test]
    fn test_print_wraps_table_markup() {
        let doc = FakeDocument::with_body(vec![table("loansTable", &["Loan #"], &[&["LN1"]])]);
        let window = RecordingWindow::default();

        assert_eq!(
            print_table(&doc, &window, "loansTable", "/static/bootstrap.css"),
            Ok(true)
        );

        let printed = window.printed.borrow();
        let html = &printed[0];
        assert!(html.contains("<title>Print Report</title>"));
        assert!(html.contains(r#"<link href="/static/bootstrap.css" rel="stylesheet">"#));
        assert!(html.contains(r#"<div class="container mt-4">"#));
        assert!(html.contains(r#"<table id="loansTable">"#));
        assert!(html.contains("<td>LN1</td>"));
    }

    #[test]
    fn test_missing_table_prints_nothing() {
        let doc = FakeDocument::with_body(vec![]);
        let window = RecordingWindow::default();
        assert_eq!(print_table(&doc, &window, "loansTable", "x.css"), Ok(false));
        assert!(window.printed.borrow().is_empty());
    }
}
