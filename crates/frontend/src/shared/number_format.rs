//! Форматирование денежных сумм для страниц кредитов

/// Сумма с символом валюты и двумя знаками, без разделителей разрядов: `₹8791.59`.
///
/// Так выводят итоги калькулятора платежей.
pub fn format_plain_amount(symbol: &str, value: f64) -> String {
    if value.is_nan() {
        return format!("{}NaN", symbol);
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}Infinity", symbol, sign);
    }
    format!("{}{:.2}", symbol, value)
}

/// Indian digit grouping: the last three digits, then groups of two.
///
/// ```
/// use frontend::shared::number_format::group_indian;
/// assert_eq!(group_indian("12345678"), "1,23,45,678");
/// ```
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// en-IN currency format: `₹1,00,000.00`, `-₹1,234.50`.
pub fn format_currency(symbol: &str, value: f64) -> String {
    if value.is_nan() {
        return format!("{}NaN", symbol);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}{}∞", sign, symbol);
    }

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}{}{}.{}", sign, symbol, group_indian(integer), fraction)
}
