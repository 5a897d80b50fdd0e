//! Client-side row filtering for server-rendered tables.

use super::platform::{Document, Element};

pub const LOANS_TABLE_ID: &str = "loansTable";
/// Search box wired to [`search_rows`] on page load.
pub const LOAN_SEARCH_INPUT_ID: &str = "loanSearch";

/// Whole-row, case-insensitive substring match. An empty query matches everything.
pub fn row_matches(row_text: &str, query: &str) -> bool {
    row_text.to_lowercase().contains(&query.to_lowercase())
}

/// Hides body rows of `table_id` that do not contain `query` and shows the rest.
/// Returns how many rows stay visible.
pub fn search_rows<D: Document>(document: &D, table_id: &str, query: &str) -> usize {
    let Some(table) = document.element_by_id(table_id) else {
        return 0;
    };

    let mut visible = 0;
    for row in table.query_all("tbody tr") {
        if row_matches(&row.text_content(), query) {
            row.set_display("");
            visible += 1;
        } else {
            row.set_display("none");
        }
    }
    visible
}
