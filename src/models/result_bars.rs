//! Net-versus-total comparison bars.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_multiplier};

use super::CalculationResult;

/// The two comparison bars: what the employee sees against what the
/// employer pays.
///
/// The total-cost bar is always full width; the net bar is scaled against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBars {
    /// Estimated net salary, formatted.
    pub net_display: String,
    /// Total employer cost, formatted.
    pub total_display: String,
    /// Width of the net bar as a percentage of the total bar, 2 decimals.
    pub net_percentage: Decimal,
    /// Width of the total bar. Always 100.
    pub total_percentage: Decimal,
    /// `total / net` formatted with two decimals.
    pub multiplier: String,
}

impl ResultBars {
    /// Builds the bars for a result.
    ///
    /// # Examples
    ///
    /// ```
    /// use employer_cost_engine::calculation::compute;
    /// use employer_cost_engine::models::{GrossSalary, ResultBars};
    /// use rust_decimal::Decimal;
    ///
    /// let salary = GrossSalary::new(Decimal::new(35000, 0)).unwrap();
    /// let bars = ResultBars::from_result(&compute(salary, Decimal::new(15, 3)));
    ///
    /// assert_eq!(bars.multiplier, "2.22");
    /// assert_eq!(bars.net_percentage, Decimal::new(4514, 2));
    /// ```
    pub fn from_result(result: &CalculationResult) -> Self {
        let net_percentage = (result.estimated_net_salary / result.total_employer_cost
            * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Self {
            net_display: format_currency(result.estimated_net_salary),
            total_display: format_currency(result.total_employer_cost),
            net_percentage,
            total_percentage: Decimal::ONE_HUNDRED,
            multiplier: format_multiplier(result.total_employer_cost, result.estimated_net_salary),
        }
    }
}
