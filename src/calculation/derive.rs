//! The recompute entry point for hosting layers.
//!
//! A host calls [`derive`] every time either input changes and renders
//! whatever comes back. `None` is the empty state: nothing to display.

use crate::config::{RateTable, builtin_rate_table};
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, parse_salary_input};

use super::cost_calculator::compute_with;
use super::sector_lookup::lookup_sector;

/// Derives a result from the raw salary text and sector identifier, using
/// the built-in rate table.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::derive;
/// use rust_decimal::Decimal;
///
/// let result = derive("35.000", "office").unwrap();
/// assert_eq!(result.total_employer_cost, Decimal::new(540_025, 1));
///
/// assert!(derive("", "office").is_none());
/// assert!(derive("0", "office").is_none());
/// ```
pub fn derive(raw_salary: &str, sector_id: &str) -> Option<CalculationResult> {
    derive_with(builtin_rate_table(), raw_salary, sector_id)
}

/// Derives a result using an explicit rate table.
///
/// The salary text is parsed with [`parse_salary_input`]; when it yields
/// nothing the calculator is not invoked at all. The sector falls back to
/// office when the identifier is unknown.
pub fn derive_with(
    table: &RateTable,
    raw_salary: &str,
    sector_id: &str,
) -> Option<CalculationResult> {
    let gross_salary = parse_salary_input(raw_salary)?;
    let sector = lookup_sector(table, sector_id);
    Some(compute_with(table, gross_salary, sector.rate))
}

/// Like [`derive_with`], for callers that need a result to continue.
///
/// The empty state becomes [`EngineError::EmptyResult`].
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::try_derive_with;
/// use employer_cost_engine::config::builtin_rate_table;
/// use employer_cost_engine::error::EngineError;
///
/// let table = builtin_rate_table();
/// assert!(try_derive_with(table, "35000", "office").is_ok());
/// assert!(matches!(
///     try_derive_with(table, "abc", "office"),
///     Err(EngineError::EmptyResult { .. })
/// ));
/// ```
pub fn try_derive_with(
    table: &RateTable,
    raw_salary: &str,
    sector_id: &str,
) -> EngineResult<CalculationResult> {
    derive_with(table, raw_salary, sector_id).ok_or_else(|| EngineError::EmptyResult {
        input: raw_salary.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_unparsable_input_produces_nothing() {
        for raw in ["", "abc", "€", "0", "000", "-0"] {
            assert!(derive(raw, "office").is_none(), "input {:?}", raw);
        }
    }

    #[test]
    fn test_try_derive_reports_empty_input() {
        let table = builtin_rate_table();
        match try_derive_with(table, "0", "office") {
            Err(EngineError::EmptyResult { input }) => assert_eq!(input, "0"),
            other => panic!("Expected EmptyResult, got {:?}", other),
        }
        assert_eq!(
            try_derive_with(table, "35000", "transport").ok(),
            derive("35000", "transport")
        );
    }

    #[test]
    fn test_formatted_input_is_accepted() {
        let result = derive("35.000\u{a0}€", "office").unwrap();
        assert_eq!(result.gross_salary, Decimal::new(35000, 0));
    }

    #[test]
    fn test_unknown_sector_matches_office() {
        let office = derive("35000", "office").unwrap();
        let unknown = derive("35000", "space_mining").unwrap();
        assert_eq!(office, unknown);
        assert_eq!(unknown.sector_rate, Decimal::new(15, 3));
    }

    #[test]
    fn test_sector_changes_only_sector_risk_and_totals() {
        let office = derive("35000", "office").unwrap();
        let construction = derive("35000", "construction").unwrap();

        // 35000 x (0.067 - 0.015) = 1820
        assert_eq!(
            construction.total_employer_cost - office.total_employer_cost,
            Decimal::new(1820, 0)
        );
        assert_eq!(construction.contingencias_comunes, office.contingencias_comunes);
        assert_eq!(construction.estimated_net_salary, office.estimated_net_salary);
    }
}
