// Formatting helpers
use chrono::{DateTime, NaiveDate, Utc};

/// Thousand-grouped rendering of a count, e.g. `1000` -> `"1,000"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short weekday name for a `%Y-%m-%d` date key; unparseable keys are
/// returned unchanged so a malformed series still renders something.
pub fn weekday_label(date_key: &str) -> String {
    match NaiveDate::parse_from_str(date_key, "%Y-%m-%d") {
        Ok(date) => date.format("%a").to_string(),
        Err(_) => date_key.to_string(),
    }
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}
