//! Estimated net salary.
//!
//! A rough flat-bracket approximation: the whole gross salary is taxed at a
//! single income-tax (IRPF) rate picked by bracket, and the employee's own
//! social-security withholding is taken off at a fixed rate.

use rust_decimal::Decimal;

use crate::config::NetSalaryConfig;
use crate::models::{AuditStep, GrossSalary};

use super::audit::rate_step;

/// The result of the net-salary stage, including audit steps.
#[derive(Debug, Clone)]
pub struct NetSalaryResult {
    /// The bracket rate applied.
    pub irpf_rate: Decimal,
    /// Gross salary times the bracket rate.
    pub income_tax: Decimal,
    /// Employee social-security withholding.
    pub employee_social_security: Decimal,
    /// Gross minus income tax minus employee social security.
    pub estimated_net: Decimal,
    /// Audit steps: bracket selection, tax, withholding, net.
    pub audit_steps: Vec<AuditStep>,
}

/// Picks the income-tax rate for a gross salary.
///
/// Brackets are evaluated from the highest threshold down and the first one
/// the salary is strictly above wins; a salary exactly on a threshold falls
/// into the bracket below it.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::irpf_rate_for;
/// use employer_cost_engine::config::builtin_rate_table;
/// use employer_cost_engine::models::GrossSalary;
/// use rust_decimal::Decimal;
///
/// let config = builtin_rate_table().net_salary();
/// let at_threshold = GrossSalary::new(Decimal::new(60000, 0)).unwrap();
/// let above = GrossSalary::new(Decimal::new(60001, 0)).unwrap();
///
/// assert_eq!(irpf_rate_for(at_threshold, config), Decimal::new(30, 2));
/// assert_eq!(irpf_rate_for(above, config), Decimal::new(37, 2));
/// ```
pub fn irpf_rate_for(gross_salary: GrossSalary, config: &NetSalaryConfig) -> Decimal {
    let gross = gross_salary.amount();
    let mut brackets: Vec<_> = config.irpf_brackets.iter().collect();
    brackets.sort_by(|a, b| b.threshold.cmp(&a.threshold));

    brackets
        .into_iter()
        .find(|bracket| gross > bracket.threshold)
        .map(|bracket| bracket.rate)
        .unwrap_or(config.irpf_base_rate)
}

/// Estimates the employee's net annual salary.
///
/// # Arguments
///
/// * `gross_salary` - The gross annual salary
/// * `config` - Bracket table and employee withholding rate
/// * `step_number` - The first step number for audit trail sequencing
pub fn estimate_net_salary(
    gross_salary: GrossSalary,
    config: &NetSalaryConfig,
    step_number: u32,
) -> NetSalaryResult {
    let gross = gross_salary.amount();

    let irpf_rate = irpf_rate_for(gross_salary, config);
    let income_tax = gross * irpf_rate;
    let employee_social_security = gross * config.employee_social_security;
    let estimated_net = gross - income_tax - employee_social_security;

    let bracket_step = AuditStep {
        step_number,
        rule_id: "irpf_bracket".to_string(),
        rule_name: "Income Tax Bracket".to_string(),
        input: serde_json::json!({
            "gross_salary": gross.normalize().to_string()
        }),
        output: serde_json::json!({
            "irpf_rate": irpf_rate.normalize().to_string()
        }),
        reasoning: bracket_reasoning(gross, irpf_rate, config),
    };

    let net_step = AuditStep {
        step_number: step_number + 3,
        rule_id: "estimated_net_salary".to_string(),
        rule_name: "Estimated Net Salary".to_string(),
        input: serde_json::json!({
            "gross_salary": gross.normalize().to_string(),
            "income_tax": income_tax.normalize().to_string(),
            "employee_social_security": employee_social_security.normalize().to_string()
        }),
        output: serde_json::json!({
            "estimated_net_salary": estimated_net.normalize().to_string()
        }),
        reasoning: format!(
            "{} - {} - {} = {}",
            gross.normalize(),
            income_tax.normalize(),
            employee_social_security.normalize(),
            estimated_net.normalize()
        ),
    };

    let audit_steps = vec![
        bracket_step,
        rate_step(
            step_number + 1,
            "income_tax",
            "Income Tax (IRPF)",
            gross,
            irpf_rate,
            income_tax,
        ),
        rate_step(
            step_number + 2,
            "employee_social_security",
            "Employee Social Security",
            gross,
            config.employee_social_security,
            employee_social_security,
        ),
        net_step,
    ];

    NetSalaryResult {
        irpf_rate,
        income_tax,
        employee_social_security,
        estimated_net,
        audit_steps,
    }
}

fn bracket_reasoning(gross: Decimal, irpf_rate: Decimal, config: &NetSalaryConfig) -> String {
    let matched = config
        .irpf_brackets
        .iter()
        .filter(|bracket| gross > bracket.threshold)
        .max_by(|a, b| a.threshold.cmp(&b.threshold));

    match matched {
        Some(bracket) => format!(
            "{} > {}: rate {}",
            gross.normalize(),
            bracket.threshold.normalize(),
            irpf_rate.normalize()
        ),
        None => format!(
            "{} is not above any bracket threshold: base rate {}",
            gross.normalize(),
            irpf_rate.normalize()
        ),
    }
}
