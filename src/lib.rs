//! Employer Cost Engine for Spanish salaries
//!
//! This crate answers "¿Cuánto le cuesto a mi jefe?": given a gross annual
//! salary and a sector, it computes what the employee really costs the
//! company (employer social security, hidden costs) and a rough estimate of
//! the employee's net salary, and renders the shareable texts built from
//! that result.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
