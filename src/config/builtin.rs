//! The compiled-in 2026 Spanish rate table.
//!
//! `config/es2026/` ships the same figures as YAML; the loader tests keep the
//! two in sync.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::models::Sector;

use super::types::{
    CalculatorMetadata, HiddenCostRates, IncomeTaxBracket, NetSalaryConfig, RateTable,
    RatesConfig, SectorRisk, SocialSecurityRates,
};

static BUILTIN: LazyLock<RateTable> = LazyLock::new(build);

static OFFICE: LazyLock<SectorRisk> =
    LazyLock::new(|| sector(Sector::Office, "Oficina", Decimal::new(15, 3)));

/// Returns the built-in rate table.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::config::builtin_rate_table;
/// use rust_decimal::Decimal;
///
/// let table = builtin_rate_table();
/// assert_eq!(table.hidden_costs().operating_costs, Decimal::new(2500, 0));
/// ```
pub fn builtin_rate_table() -> &'static RateTable {
    &BUILTIN
}

/// Returns the built-in office entry, the sector of last resort.
pub(crate) fn builtin_office_sector() -> &'static SectorRisk {
    &OFFICE
}

fn sector(sector: Sector, label: &str, rate: Decimal) -> SectorRisk {
    SectorRisk {
        sector,
        label: label.to_string(),
        rate,
    }
}

fn bracket(threshold: i64, rate: Decimal) -> IncomeTaxBracket {
    IncomeTaxBracket {
        threshold: Decimal::new(threshold, 0),
        rate,
    }
}

fn build() -> RateTable {
    let metadata = CalculatorMetadata {
        code: "es2026".to_string(),
        name: "Coste empresa España 2026".to_string(),
        version: "2026-01-01".to_string(),
        locale: "es-ES".to_string(),
        currency: "EUR".to_string(),
    };

    let sectors = vec![
        builtin_office_sector().clone(),
        sector(Sector::Construction, "Construcción", Decimal::new(67, 3)),
        sector(Sector::Transport, "Transporte", Decimal::new(37, 3)),
    ];

    let rates = RatesConfig {
        social_security: SocialSecurityRates {
            contingencias_comunes: Decimal::new(2360, 4),
            desempleo: Decimal::new(550, 4),
            fogasa: Decimal::new(20, 4),
            formacion_profesional: Decimal::new(60, 4),
            meei: Decimal::new(75, 4),
        },
        hidden_costs: HiddenCostRates {
            vacations_holidays: Decimal::new(12, 2),
            operating_costs: Decimal::new(2500, 0),
            absentism_risk: Decimal::new(3, 2),
        },
        net_salary: NetSalaryConfig {
            irpf_brackets: vec![
                bracket(60000, Decimal::new(37, 2)),
                bracket(35000, Decimal::new(30, 2)),
                bracket(20000, Decimal::new(24, 2)),
            ],
            irpf_base_rate: Decimal::new(19, 2),
            employee_social_security: Decimal::new(635, 4),
        },
    };

    RateTable::new(metadata, sectors, rates)
}
