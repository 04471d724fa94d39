//! Error types for the Employer Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rate tables,
//! validating inputs, and handing results to the host platform.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Employer Cost Engine.
///
/// Nothing in the calculation itself can fail once its inputs are valid;
/// these variants cover configuration, input validation, and the platform
/// share boundary.
///
/// # Example
///
/// ```
/// use employer_cost_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the calculator cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A gross salary that is zero or negative.
    #[error("Invalid gross salary {value}: must be greater than zero")]
    InvalidSalary {
        /// The rejected value.
        value: Decimal,
    },

    /// The salary text yields no result, so there is nothing to export or
    /// share.
    #[error("No calculation result for salary input '{input}'")]
    EmptyResult {
        /// The raw salary text.
        input: String,
    },

    /// Both the native share sheet and the clipboard fallback failed.
    #[error("Share failed: {message}")]
    ShareFailed {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "sectors".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'sectors': must not be empty"
        );
    }

    #[test]
    fn test_invalid_salary_displays_value() {
        let error = EngineError::InvalidSalary {
            value: Decimal::new(-5, 0),
        };
        assert_eq!(
            error.to_string(),
            "Invalid gross salary -5: must be greater than zero"
        );
    }

    #[test]
    fn test_empty_result_displays_input() {
        let error = EngineError::EmptyResult {
            input: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No calculation result for salary input 'abc'"
        );
    }

    #[test]
    fn test_share_failed_displays_message() {
        let error = EngineError::ShareFailed {
            message: "clipboard denied".to_string(),
        };
        assert_eq!(error.to_string(), "Share failed: clipboard denied");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
