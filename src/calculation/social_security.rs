//! Employer social-security contribution calculation.
//!
//! Six contributions, each a fixed fraction of gross salary: the sector's
//! professional-contingencies rate plus the five general employer rates.

use rust_decimal::Decimal;

use crate::config::SocialSecurityRates;
use crate::models::{AuditStep, GrossSalary};

use super::audit::{rate_step, sum_step};

/// The six employer contributions and their sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialSecurityBreakdown {
    /// Professional contingencies (sector risk).
    pub sector_risk: Decimal,
    /// Common contingencies.
    pub contingencias_comunes: Decimal,
    /// Unemployment.
    pub desempleo: Decimal,
    /// Wage-guarantee fund.
    pub fogasa: Decimal,
    /// Vocational training.
    pub formacion_profesional: Decimal,
    /// Intergenerational equity mechanism.
    pub meei: Decimal,
    /// Sum of the six items.
    pub total: Decimal,
}

/// The result of the social-security stage, including audit steps.
#[derive(Debug, Clone)]
pub struct SocialSecurityResult {
    /// The computed contributions.
    pub breakdown: SocialSecurityBreakdown,
    /// One audit step per contribution plus one for the total.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the employer social-security contributions.
///
/// # Arguments
///
/// * `gross_salary` - The gross annual salary
/// * `sector_rate` - The sector's accident-insurance rate
/// * `rates` - The general employer contribution rates
/// * `step_number` - The first step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::calculate_social_security;
/// use employer_cost_engine::config::builtin_rate_table;
/// use employer_cost_engine::models::GrossSalary;
/// use rust_decimal::Decimal;
///
/// let salary = GrossSalary::new(Decimal::new(35000, 0)).unwrap();
/// let rates = builtin_rate_table().social_security();
/// let result = calculate_social_security(salary, Decimal::new(15, 3), rates, 1);
///
/// assert_eq!(result.breakdown.total, Decimal::new(112525, 1));
/// ```
pub fn calculate_social_security(
    gross_salary: GrossSalary,
    sector_rate: Decimal,
    rates: &SocialSecurityRates,
    step_number: u32,
) -> SocialSecurityResult {
    let gross = gross_salary.amount();

    let sector_risk = gross * sector_rate;
    let contingencias_comunes = gross * rates.contingencias_comunes;
    let desempleo = gross * rates.desempleo;
    let fogasa = gross * rates.fogasa;
    let formacion_profesional = gross * rates.formacion_profesional;
    let meei = gross * rates.meei;

    let total = sector_risk + contingencias_comunes + desempleo + fogasa + formacion_profesional + meei;

    let audit_steps = vec![
        rate_step(
            step_number,
            "sector_risk",
            "Professional Contingencies (Sector Risk)",
            gross,
            sector_rate,
            sector_risk,
        ),
        rate_step(
            step_number + 1,
            "contingencias_comunes",
            "Common Contingencies",
            gross,
            rates.contingencias_comunes,
            contingencias_comunes,
        ),
        rate_step(
            step_number + 2,
            "desempleo",
            "Unemployment",
            gross,
            rates.desempleo,
            desempleo,
        ),
        rate_step(
            step_number + 3,
            "fogasa",
            "Wage Guarantee Fund (FOGASA)",
            gross,
            rates.fogasa,
            fogasa,
        ),
        rate_step(
            step_number + 4,
            "formacion_profesional",
            "Vocational Training",
            gross,
            rates.formacion_profesional,
            formacion_profesional,
        ),
        rate_step(
            step_number + 5,
            "meei",
            "Intergenerational Equity Mechanism (MEEI)",
            gross,
            rates.meei,
            meei,
        ),
        sum_step(
            step_number + 6,
            "total_social_security",
            "Total Employer Social Security",
            &[
                ("sector_risk", sector_risk),
                ("contingencias_comunes", contingencias_comunes),
                ("desempleo", desempleo),
                ("fogasa", fogasa),
                ("formacion_profesional", formacion_profesional),
                ("meei", meei),
            ],
            total,
        ),
    ];

    SocialSecurityResult {
        breakdown: SocialSecurityBreakdown {
            sector_risk,
            contingencias_comunes,
            desempleo,
            fogasa,
            formacion_profesional,
            meei,
            total,
        },
        audit_steps,
    }
}
