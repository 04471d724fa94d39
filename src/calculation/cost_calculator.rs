//! The cost calculator.
//!
//! Turns a gross salary and a sector rate into the full employer-cost
//! breakdown and the estimated net salary. Pure: no I/O, no shared state,
//! and identical inputs always give identical results.

use rust_decimal::Decimal;

use crate::config::{RateTable, builtin_rate_table};
use crate::models::{AuditStep, AuditTrace, CalculationResult, GrossSalary};

use super::audit::sum_step;
use super::hidden_costs::calculate_hidden_costs;
use super::net_salary::estimate_net_salary;
use super::social_security::calculate_social_security;

/// Computes the cost breakdown with the built-in rate table.
///
/// `sector_rate` is the accident-insurance fraction already resolved by
/// [`sector_rate`](super::sector_rate) or [`lookup_sector`](super::lookup_sector).
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::compute;
/// use employer_cost_engine::models::GrossSalary;
/// use rust_decimal::Decimal;
///
/// let salary = GrossSalary::new(Decimal::new(35000, 0)).unwrap();
/// let result = compute(salary, Decimal::new(15, 3));
///
/// assert_eq!(result.total_employer_cost, Decimal::new(540_025, 1));
/// assert_eq!(result.estimated_net_salary, Decimal::new(243_775, 1));
/// ```
pub fn compute(gross_salary: GrossSalary, sector_rate: Decimal) -> CalculationResult {
    compute_with(builtin_rate_table(), gross_salary, sector_rate)
}

/// Computes the cost breakdown with an explicit rate table.
///
/// The steps run in a fixed order: the six social-security items and their
/// total, the three hidden costs and their total, the employer total, then
/// the net-salary estimate. Every step is recorded in the audit trace.
pub fn compute_with(
    table: &RateTable,
    gross_salary: GrossSalary,
    sector_rate: Decimal,
) -> CalculationResult {
    let gross = gross_salary.amount();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let social_security =
        calculate_social_security(gross_salary, sector_rate, table.social_security(), step_number);
    step_number += social_security.audit_steps.len() as u32;
    steps.extend(social_security.audit_steps);
    let ss = social_security.breakdown;

    let hidden_costs = calculate_hidden_costs(gross_salary, table.hidden_costs(), step_number);
    step_number += hidden_costs.audit_steps.len() as u32;
    steps.extend(hidden_costs.audit_steps);
    let hidden = hidden_costs.breakdown;

    let total_employer_cost = gross + ss.total + hidden.total;
    steps.push(sum_step(
        step_number,
        "total_employer_cost",
        "Total Employer Cost",
        &[
            ("gross_salary", gross),
            ("total_social_security", ss.total),
            ("total_hidden_costs", hidden.total),
        ],
        total_employer_cost,
    ));
    step_number += 1;

    let net = estimate_net_salary(gross_salary, table.net_salary(), step_number);
    steps.extend(net.audit_steps);

    CalculationResult {
        gross_salary: gross,
        sector_rate,
        sector_risk: ss.sector_risk,
        contingencias_comunes: ss.contingencias_comunes,
        desempleo: ss.desempleo,
        fogasa: ss.fogasa,
        formacion_profesional: ss.formacion_profesional,
        meei: ss.meei,
        total_social_security: ss.total,
        vacations_cost: hidden.vacations_cost,
        operating_costs: hidden.operating_costs,
        absentism_cost: hidden.absentism_cost,
        total_hidden_costs: hidden.total,
        total_employer_cost,
        irpf_rate: net.irpf_rate,
        employee_social_security: net.employee_social_security,
        estimated_net_salary: net.estimated_net,
        audit_trace: AuditTrace { steps },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn salary(s: &str) -> GrossSalary {
        GrossSalary::new(dec(s)).unwrap()
    }

    #[test]
    fn test_reference_scenario_office_35000() {
        let result = compute(salary("35000"), dec("0.015"));

        assert_eq!(result.gross_salary, dec("35000"));
        assert_eq!(result.sector_risk, dec("525"));
        assert_eq!(result.contingencias_comunes, dec("8260"));
        assert_eq!(result.desempleo, dec("1925"));
        assert_eq!(result.fogasa, dec("70"));
        assert_eq!(result.formacion_profesional, dec("210"));
        assert_eq!(result.meei, dec("262.5"));
        assert_eq!(result.total_social_security, dec("11252.5"));

        assert_eq!(result.vacations_cost, dec("4200"));
        assert_eq!(result.operating_costs, dec("2500"));
        assert_eq!(result.absentism_cost, dec("1050"));
        assert_eq!(result.total_hidden_costs, dec("7750"));

        assert_eq!(result.total_employer_cost, dec("54002.5"));

        assert_eq!(result.irpf_rate, dec("0.24"));
        assert_eq!(result.employee_social_security, dec("2222.5"));
        assert_eq!(result.estimated_net_salary, dec("24377.5"));
    }

    #[test]
    fn test_bracket_boundary_at_60000() {
        assert_eq!(compute(salary("60000"), dec("0.015")).irpf_rate, dec("0.30"));
        assert_eq!(compute(salary("60001"), dec("0.015")).irpf_rate, dec("0.37"));
    }

    #[test]
    fn test_audit_trace_is_sequential() {
        let result = compute(salary("35000"), dec("0.015"));
        let steps = &result.audit_trace.steps;

        // 7 social security + 4 hidden + 1 total + 4 net
        assert_eq!(steps.len(), 16);
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
        assert_eq!(steps[11].rule_id, "total_employer_cost");
        assert_eq!(steps[11].reasoning, "35000 + 11252.5 + 7750 = 54002.5");
        assert_eq!(steps[15].rule_id, "estimated_net_salary");
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let a = compute(salary("41234"), dec("0.037"));
        let b = compute(salary("41234"), dec("0.037"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_very_small_salary_keeps_invariant() {
        let result = compute(salary("0.01"), dec("1"));
        assert!(result.total_employer_cost >= result.gross_salary);
        assert!(result.gross_salary >= result.estimated_net_salary);
        assert!(result.estimated_net_salary > Decimal::ZERO);
    }

    fn gross_strategy() -> impl Strategy<Value = GrossSalary> {
        (1i64..=100_000_000_00).prop_map(|cents| GrossSalary::new(Decimal::new(cents, 2)).unwrap())
    }

    fn rate_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..=1000).prop_map(|permille| Decimal::new(permille, 3))
    }

    proptest! {
        #[test]
        fn prop_totals_are_sums_of_their_items(gross in gross_strategy(), rate in rate_strategy()) {
            let r = compute(gross, rate);

            prop_assert_eq!(
                r.total_social_security,
                r.sector_risk + r.contingencias_comunes + r.desempleo + r.fogasa
                    + r.formacion_profesional + r.meei
            );
            prop_assert_eq!(
                r.total_hidden_costs,
                r.vacations_cost + r.operating_costs + r.absentism_cost
            );
            prop_assert_eq!(
                r.total_employer_cost,
                r.gross_salary + r.total_social_security + r.total_hidden_costs
            );
        }

        #[test]
        fn prop_operating_costs_constant(gross in gross_strategy(), rate in rate_strategy()) {
            prop_assert_eq!(compute(gross, rate).operating_costs, Decimal::new(2500, 0));
        }

        #[test]
        fn prop_cost_ordering_invariant(gross in gross_strategy(), rate in rate_strategy()) {
            let r = compute(gross, rate);
            prop_assert!(r.total_employer_cost >= r.gross_salary);
            prop_assert!(r.gross_salary >= r.estimated_net_salary);
            prop_assert!(r.estimated_net_salary > Decimal::ZERO);
        }

        #[test]
        fn prop_total_cost_strictly_increasing(
            cents in 1i64..=100_000_000_00,
            step in 1i64..=1_000_000,
            rate in rate_strategy(),
        ) {
            let lower = GrossSalary::new(Decimal::new(cents, 2)).unwrap();
            let higher = GrossSalary::new(Decimal::new(cents + step, 2)).unwrap();
            prop_assert!(
                compute(higher, rate).total_employer_cost > compute(lower, rate).total_employer_cost
            );
        }
    }
}
