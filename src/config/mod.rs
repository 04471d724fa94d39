//! Configuration loading and management for the Employer Cost Engine.
//!
//! The calculator's rates are configuration data rather than a validated
//! tax-law implementation. They are compiled in (see
//! [`builtin_rate_table`]) and can be overridden from a directory of YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use employer_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/es2026").unwrap();
//! println!("Loaded rate table: {}", config.metadata().name);
//! ```

mod builtin;
mod loader;
mod types;

pub use builtin::builtin_rate_table;
pub(crate) use builtin::builtin_office_sector;
pub use loader::ConfigLoader;
pub use types::{
    CalculatorMetadata, HiddenCostRates, IncomeTaxBracket, NetSalaryConfig, RateTable,
    RatesConfig, SectorRisk, SectorsConfig, SocialSecurityRates,
};
