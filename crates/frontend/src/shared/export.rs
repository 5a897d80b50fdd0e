/// Экспорт HTML-таблицы в CSV
use super::error::UiError;
use super::platform::{Document, Element, WindowHost};

pub const CSV_MIME: &str = "text/csv";

/// Собирает текст ячеек `td, th` каждой строки таблицы
pub fn table_cells<D: Document>(document: &D, table_id: &str) -> Option<Vec<Vec<String>>> {
    let table = document.element_by_id(table_id)?;
    let rows = table
        .query_all("tr")
        .iter()
        .map(|row| {
            row.query_all("td, th")
                .iter()
                .map(|cell| cell.text_content().trim().to_string())
                .collect()
        })
        .collect();
    Some(rows)
}

/// Каждая ячейка в двойных кавычках, запятая между ячейками, `\n` между строками.
/// Кавычки внутри значения не экранируются.
pub fn rows_to_csv(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{}\"", cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Выгружает таблицу в CSV и инициирует скачивание.
/// Возвращает `Ok(false)`, если таблицы на странице нет.
pub fn export_table_csv<D: Document, W: WindowHost>(
    document: &D,
    window: &W,
    table_id: &str,
    filename: &str,
) -> Result<bool, UiError> {
    let Some(rows) = table_cells(document, table_id) else {
        return Ok(false);
    };
    window.download(filename, CSV_MIME, &rows_to_csv(&rows))?;
    Ok(true)
}
