//! Calculation result models for the Employer Cost Engine.
//!
//! This module contains the [`CalculationResult`] type capturing every output
//! of a cost calculation: the employer social-security items, the hidden
//! costs, the totals, the estimated net salary and an audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The audit trace for a calculation, one step per computed figure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

/// The complete result of a cost calculation.
///
/// The result is a plain value: it is rebuilt from scratch on every input
/// change and two calculations with the same inputs compare equal.
///
/// Invariant: `total_employer_cost >= gross_salary >= estimated_net_salary > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The gross annual salary the calculation was run for.
    pub gross_salary: Decimal,
    /// The accident-insurance rate of the applied sector.
    pub sector_rate: Decimal,

    /// Professional contingencies: gross salary times the sector rate.
    pub sector_risk: Decimal,
    /// Common contingencies (sickness, retirement).
    pub contingencias_comunes: Decimal,
    /// Unemployment insurance.
    pub desempleo: Decimal,
    /// Wage-guarantee fund (FOGASA).
    pub fogasa: Decimal,
    /// Vocational training.
    pub formacion_profesional: Decimal,
    /// Intergenerational equity mechanism (MEEI).
    pub meei: Decimal,
    /// Sum of the six employer social-security items above.
    pub total_social_security: Decimal,

    /// Paid inactive time: vacations and public holidays.
    pub vacations_cost: Decimal,
    /// Fixed annual operating overhead (equipment, licences, desk).
    pub operating_costs: Decimal,
    /// Sick-leave provisioning.
    pub absentism_cost: Decimal,
    /// Sum of the three hidden-cost items above.
    pub total_hidden_costs: Decimal,

    /// Gross salary plus social security plus hidden costs.
    pub total_employer_cost: Decimal,

    /// The income-tax (IRPF) bracket rate used for the net estimate.
    pub irpf_rate: Decimal,
    /// The employee's own social-security withholding.
    pub employee_social_security: Decimal,
    /// Gross salary minus income tax minus employee social security.
    pub estimated_net_salary: Decimal,

    /// Audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Returns the six social-security items in display order.
    pub fn social_security_items(&self) -> [Decimal; 6] {
        [
            self.contingencias_comunes,
            self.desempleo,
            self.fogasa,
            self.formacion_profesional,
            self.meei,
            self.sector_risk,
        ]
    }

    /// Returns the three hidden-cost items in display order.
    pub fn hidden_cost_items(&self) -> [Decimal; 3] {
        [self.vacations_cost, self.operating_costs, self.absentism_cost]
    }

    /// Returns the income tax withheld in the net estimate.
    pub fn income_tax(&self) -> Decimal {
        self.gross_salary * self.irpf_rate
    }
}
