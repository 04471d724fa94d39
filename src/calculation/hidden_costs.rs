//! Hidden employer cost calculation.
//!
//! Costs that never show on a payslip: paid inactive time, a fixed annual
//! operating overhead, and sick-leave provisioning.

use rust_decimal::Decimal;

use crate::config::HiddenCostRates;
use crate::models::{AuditStep, GrossSalary};

use super::audit::{rate_step, sum_step};

/// The three hidden costs and their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenCostsBreakdown {
    /// Vacations and public holidays.
    pub vacations_cost: Decimal,
    /// Fixed operating overhead, independent of salary.
    pub operating_costs: Decimal,
    /// Absence provisioning.
    pub absentism_cost: Decimal,
    /// Sum of the three items.
    pub total: Decimal,
}

/// The result of the hidden-costs stage, including audit steps.
#[derive(Debug, Clone)]
pub struct HiddenCostsResult {
    /// The computed costs.
    pub breakdown: HiddenCostsBreakdown,
    /// One audit step per cost plus one for the total.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the hidden employer costs.
///
/// The operating cost is a flat amount taken straight from `rates`; the
/// other two scale with gross salary.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::calculate_hidden_costs;
/// use employer_cost_engine::config::builtin_rate_table;
/// use employer_cost_engine::models::GrossSalary;
/// use rust_decimal::Decimal;
///
/// let salary = GrossSalary::new(Decimal::new(35000, 0)).unwrap();
/// let result = calculate_hidden_costs(salary, builtin_rate_table().hidden_costs(), 1);
///
/// assert_eq!(result.breakdown.total, Decimal::new(7750, 0));
/// ```
pub fn calculate_hidden_costs(
    gross_salary: GrossSalary,
    rates: &HiddenCostRates,
    step_number: u32,
) -> HiddenCostsResult {
    let gross = gross_salary.amount();

    let vacations_cost = gross * rates.vacations_holidays;
    let operating_costs = rates.operating_costs;
    let absentism_cost = gross * rates.absentism_risk;
    let total = vacations_cost + operating_costs + absentism_cost;

    let operating_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "operating_costs".to_string(),
        rule_name: "Operating Costs".to_string(),
        input: serde_json::json!({
            "fixed_amount": operating_costs.normalize().to_string()
        }),
        output: serde_json::json!({
            "operating_costs": operating_costs.normalize().to_string()
        }),
        reasoning: format!(
            "Fixed annual operating cost of {}, independent of salary",
            operating_costs.normalize()
        ),
    };

    let audit_steps = vec![
        rate_step(
            step_number,
            "vacations_cost",
            "Vacations and Public Holidays",
            gross,
            rates.vacations_holidays,
            vacations_cost,
        ),
        operating_step,
        rate_step(
            step_number + 2,
            "absentism_cost",
            "Absence Provisioning",
            gross,
            rates.absentism_risk,
            absentism_cost,
        ),
        sum_step(
            step_number + 3,
            "total_hidden_costs",
            "Total Hidden Costs",
            &[
                ("vacations_cost", vacations_cost),
                ("operating_costs", operating_costs),
                ("absentism_cost", absentism_cost),
            ],
            total,
        ),
    ];

    HiddenCostsResult {
        breakdown: HiddenCostsBreakdown {
            vacations_cost,
            operating_costs,
            absentism_cost,
            total,
        },
        audit_steps,
    }
}
