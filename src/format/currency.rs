//! `es-ES` euro formatting.
//!
//! Mirrors what a standard internationalisation formatter produces for
//! locale `es-ES`, currency `EUR` and zero fraction digits: the amount is
//! rounded half away from zero, thousands are grouped with `.` only once the
//! integer part has at least five digits, and the symbol follows after a
//! no-break space.

use rust_decimal::{Decimal, RoundingStrategy};

/// Thousands separator for `es-ES`.
pub const GROUP_SEPARATOR: char = '.';

/// Separator between amount and currency symbol (U+00A0).
pub const CURRENCY_SPACING: char = '\u{a0}';

/// Currency symbol appended to every amount.
pub const CURRENCY_SYMBOL: char = '€';

/// Grouping only kicks in at this many integer digits (`es` minimum
/// grouping digits is 2, so 4-digit amounts stay ungrouped).
const MIN_GROUPED_DIGITS: usize = 5;

/// Formats an amount as whole euros.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(2500, 0)), "2500\u{a0}€");
/// assert_eq!(format_currency(Decimal::new(35000, 0)), "35.000\u{a0}€");
/// assert_eq!(format_currency(Decimal::new(243_775, 1)), "24.378\u{a0}€");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();

    format!(
        "{}{}{}{}",
        sign,
        group_digits(&digits),
        CURRENCY_SPACING,
        CURRENCY_SYMBOL
    )
}

/// Formats a whole number with `es-ES` grouping and no currency symbol.
///
/// This is how the salary field echoes what the user typed.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::format::format_salary_input;
///
/// assert_eq!(format_salary_input(35000), "35.000");
/// assert_eq!(format_salary_input(9000), "9000");
/// ```
pub fn format_salary_input(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Reads back an amount produced by [`format_currency`].
///
/// Returns `None` when the text holds no digits.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::format::parse_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_currency("54.003\u{a0}€"), Some(Decimal::new(54003, 0)));
/// assert_eq!(parse_currency("-2500\u{a0}€"), Some(Decimal::new(-2500, 0)));
/// ```
pub fn parse_currency(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    let negative = trimmed.starts_with('-');
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let value: Decimal = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

fn group_digits(digits: &str) -> String {
    if digits.len() < MIN_GROUPED_DIGITS {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (index + 3 - lead) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
