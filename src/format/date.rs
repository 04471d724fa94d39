//! `es-ES` short dates.

use chrono::NaiveDate;

/// Formats a date the way `es-ES` short dates read: `d/m/yyyy`, no padding.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::format::format_date_es;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
/// assert_eq!(format_date_es(date), "5/3/2026");
/// ```
pub fn format_date_es(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}
