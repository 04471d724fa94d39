//! Calculation logic for the Employer Cost Engine.
//!
//! This module contains the cost calculator and its stages: employer
//! social-security contributions, hidden costs, the net-salary estimate,
//! sector rate lookup, and the [`derive`] entry point that hosting layers
//! call on every input change.

mod audit;
mod cost_calculator;
mod derive;
mod hidden_costs;
mod net_salary;
mod sector_lookup;
mod social_security;

pub use cost_calculator::{compute, compute_with};
pub use derive::{derive, derive_with, try_derive_with};
pub use hidden_costs::{HiddenCostsBreakdown, HiddenCostsResult, calculate_hidden_costs};
pub use net_salary::{NetSalaryResult, estimate_net_salary, irpf_rate_for};
pub use sector_lookup::{lookup_sector, sector_rate};
pub use social_security::{
    SocialSecurityBreakdown, SocialSecurityResult, calculate_social_security,
};
