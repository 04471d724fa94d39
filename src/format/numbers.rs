//! Fixed-point number rendering.

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders `value` with exactly `dp` fractional digits, rounding half away
/// from zero and using `.` as the decimal point.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::format::format_fixed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_fixed(Decimal::new(2215, 3), 2), "2.22");
/// assert_eq!(format_fixed(Decimal::new(3, 0), 2), "3.00");
/// ```
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Renders the "pain multiplier": how many euros the employer pays for every
/// euro the employee takes home.
///
/// `net` must be positive; every [`CalculationResult`] guarantees it.
///
/// [`CalculationResult`]: crate::models::CalculationResult
///
/// # Examples
///
/// ```
/// use employer_cost_engine::format::format_multiplier;
/// use rust_decimal::Decimal;
///
/// let total = Decimal::new(540_025, 1);
/// let net = Decimal::new(243_775, 1);
/// assert_eq!(format_multiplier(total, net), "2.22");
/// ```
pub fn format_multiplier(total: Decimal, net: Decimal) -> String {
    format_fixed(total / net, 2)
}

/// Renders a fraction as a percentage with `dp` fractional digits, e.g. the
/// sector rate `0.015` as `1.5%`.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::format::format_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percentage(Decimal::new(15, 3), 1), "1.5%");
/// assert_eq!(format_percentage(Decimal::new(67, 3), 1), "6.7%");
/// ```
pub fn format_percentage(fraction: Decimal, dp: u32) -> String {
    format!("{}%", format_fixed(fraction * Decimal::ONE_HUNDRED, dp))
}
