use chrono::{DateTime, Utc};

const GROUP_SEPARATOR: char = ',';

/// Formats a count as a thousands-grouped integer (`1234567.4` -> `"1,234,567"`).
///
/// Non-finite input renders as `"0"`; ingestion never lets one through.
#[must_use]
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_owned();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (index + 3 - lead) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

/// Full month name and four-digit year, e.g. `"March 2021"`.
#[must_use]
pub fn format_month_year(time: DateTime<Utc>) -> String {
    time.format("%B %Y").to_string()
}
