//! Configuration types for cost calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the [`RateTable`]
//! that aggregates them.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Sector;

/// Metadata about the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorMetadata {
    /// Short code of the rate table (e.g., "es2026").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// The version or effective date of the rates.
    pub version: String,
    /// Locale used for display formatting.
    pub locale: String,
    /// ISO currency code.
    pub currency: String,
}

/// The accident-insurance rate of one sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorRisk {
    /// The sector this entry applies to.
    #[serde(rename = "id")]
    pub sector: Sector,
    /// Display label.
    pub label: String,
    /// Contribution as a fraction of gross salary.
    pub rate: Decimal,
}

/// Sectors configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorsConfig {
    /// Sectors in selector order. The first entry is the fallback.
    pub sectors: Vec<SectorRisk>,
}

/// Employer social-security contribution rates, as fractions of gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityRates {
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
}

/// Hidden employer costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenCostRates {
    /// Paid inactive time, as a fraction of gross salary.
    pub vacations_holidays: Decimal,
    /// Fixed annual operating cost in euros. Not a fraction.
    pub operating_costs: Decimal,
    /// Absence provisioning, as a fraction of gross salary.
    pub absentism_risk: Decimal,
}

/// One income-tax bracket: salaries strictly above `threshold` pay `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxBracket {
    /// Lower bound, exclusive.
    pub threshold: Decimal,
    /// Flat rate applied to the whole gross salary.
    pub rate: Decimal,
}

/// Parameters of the net-salary estimate.
///
/// This is a rough flat-bracket approximation, not a payroll computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSalaryConfig {
    /// Income-tax brackets.
    pub irpf_brackets: Vec<IncomeTaxBracket>,
    /// Rate for salaries not above any bracket threshold.
    pub irpf_base_rate: Decimal,
    /// Employee social-security withholding rate.
    pub employee_social_security: Decimal,
}

/// Rates configuration from rates.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Employer social-security rates.
    pub social_security: SocialSecurityRates,
    /// Hidden costs.
    pub hidden_costs: HiddenCostRates,
    /// Net-salary estimate parameters.
    pub net_salary: NetSalaryConfig,
}

/// The complete rate table used by the calculator.
///
/// Aggregates all configuration loaded from the YAML files in a
/// configuration directory, or the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    metadata: CalculatorMetadata,
    sectors: Vec<SectorRisk>,
    rates: RatesConfig,
}

impl RateTable {
    /// Creates a new RateTable from its component parts.
    ///
    /// Income-tax brackets are stored highest threshold first, which is the
    /// order they are evaluated in.
    pub fn new(metadata: CalculatorMetadata, sectors: Vec<SectorRisk>, rates: RatesConfig) -> Self {
        let mut rates = rates;
        rates
            .net_salary
            .irpf_brackets
            .sort_by(|a, b| b.threshold.cmp(&a.threshold));
        Self {
            metadata,
            sectors,
            rates,
        }
    }

    /// Returns the table metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.metadata
    }

    /// Returns the sectors in selector order.
    pub fn sectors(&self) -> &[SectorRisk] {
        &self.sectors
    }

    /// Returns the employer social-security rates.
    pub fn social_security(&self) -> &SocialSecurityRates {
        &self.rates.social_security
    }

    /// Returns the hidden-cost rates.
    pub fn hidden_costs(&self) -> &HiddenCostRates {
        &self.rates.hidden_costs
    }

    /// Returns the net-salary estimate parameters.
    pub fn net_salary(&self) -> &NetSalaryConfig {
        &self.rates.net_salary
    }

    /// Checks the table for values the calculator cannot work with.
    ///
    /// Rejects an empty sector list, a list that does not start with
    /// `office` (the fallback sector), duplicate sectors, any rate outside
    /// `[0, 1]`, a negative operating cost, duplicate or negative bracket
    /// thresholds, and tax settings under which a net salary could reach
    /// zero.
    pub fn validate(&self) -> EngineResult<()> {
        let first = self.sectors.first().ok_or_else(|| invalid("sectors", "must not be empty"))?;
        if first.sector != Sector::Office {
            return Err(invalid(
                "sectors",
                format!("first entry must be 'office', found '{}'", first.sector),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.sectors {
            if !seen.insert(entry.sector) {
                return Err(invalid(
                    "sectors",
                    format!("duplicate sector '{}'", entry.sector),
                ));
            }
            check_fraction(&format!("sectors.{}.rate", entry.sector), entry.rate)?;
        }

        let ss = &self.rates.social_security;
        check_fraction("social_security.contingencias_comunes", ss.contingencias_comunes)?;
        check_fraction("social_security.desempleo", ss.desempleo)?;
        check_fraction("social_security.fogasa", ss.fogasa)?;
        check_fraction("social_security.formacion_profesional", ss.formacion_profesional)?;
        check_fraction("social_security.meei", ss.meei)?;

        let hidden = &self.rates.hidden_costs;
        check_fraction("hidden_costs.vacations_holidays", hidden.vacations_holidays)?;
        check_fraction("hidden_costs.absentism_risk", hidden.absentism_risk)?;
        if hidden.operating_costs < Decimal::ZERO {
            return Err(invalid("hidden_costs.operating_costs", "must not be negative"));
        }

        let net = &self.rates.net_salary;
        check_fraction("net_salary.irpf_base_rate", net.irpf_base_rate)?;
        check_fraction("net_salary.employee_social_security", net.employee_social_security)?;

        let mut thresholds = HashSet::new();
        let mut highest_rate = net.irpf_base_rate;
        for bracket in &net.irpf_brackets {
            if bracket.threshold < Decimal::ZERO {
                return Err(invalid(
                    "net_salary.irpf_brackets",
                    format!("threshold {} must not be negative", bracket.threshold),
                ));
            }
            if !thresholds.insert(bracket.threshold) {
                return Err(invalid(
                    "net_salary.irpf_brackets",
                    format!("duplicate threshold {}", bracket.threshold),
                ));
            }
            check_fraction("net_salary.irpf_brackets.rate", bracket.rate)?;
            highest_rate = highest_rate.max(bracket.rate);
        }

        if highest_rate + net.employee_social_security >= Decimal::ONE {
            return Err(invalid(
                "net_salary",
                "highest income-tax rate plus employee social security must stay below 1",
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}

fn check_fraction(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(invalid(field, format!("{} is outside [0, 1]", value)));
    }
    Ok(())
}
