//! Due-date badge text.

use chrono::NaiveDate;

/// Badge text for tasks without a due date.
pub const NO_DATE: &str = "No Date";

/// Badge text for due dates that do not parse.
pub const INVALID_DATE: &str = "Invalid";

/// Formats a `YYYY-MM-DD` due date as `Mon DD`.
///
/// Absent or empty values give [`NO_DATE`]; values that do not parse give
/// [`INVALID_DATE`].
#[must_use]
pub fn format_due_date(due_date: Option<&str>) -> String {
    match due_date {
        None | Some("") => NO_DATE.to_owned(),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_or_else(
            |_| INVALID_DATE.to_owned(),
            |date| date.format("%b %d").to_string(),
        ),
    }
}
