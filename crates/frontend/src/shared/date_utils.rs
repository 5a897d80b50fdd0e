/// Utilities for date formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";

fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Long US date: "2024-03-15" or "2024-03-15T14:02:26Z" -> "March 15, 2024".
/// Uses the calendar date as written, without shifting into the local zone.
pub fn format_long_date(input: &str) -> String {
    parse_date(input)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
