//! Core data models for the Employer Cost Engine.
//!
//! This module contains the domain models used throughout the engine and the
//! presentation views derived from a [`CalculationResult`].

mod breakdown;
mod calculation_result;
mod result_bars;
mod salary;
mod sector;

pub use breakdown::{CostBreakdown, CostGroup, CostItem};
pub use calculation_result::{AuditStep, AuditTrace, CalculationResult};
pub use result_bars::ResultBars;
pub use salary::{GrossSalary, parse_salary_input, strip_non_digits};
pub use sector::Sector;
