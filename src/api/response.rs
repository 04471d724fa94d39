//! Response types for the Employer Cost Engine API.
//!
//! This module defines the success envelopes, the error response
//! structures and the mapping from [`EngineError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SectorRisk;
use crate::error::EngineError;
use crate::export::SharePayload;
use crate::format::format_percentage;
use crate::models::{CalculationResult, CostBreakdown, ResultBars, Sector};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error returned when the salary yields no result, so
    /// there is nothing to export or share.
    pub fn empty_result(salary: &str) -> Self {
        Self::with_details(
            "EMPTY_RESULT",
            "No calculation result for the given salary",
            format!("'{}' does not contain a positive salary", salary),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("Field '{}': {}", field, message),
                ),
            },
            EngineError::InvalidSalary { value } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_SALARY",
                    format!("Invalid gross salary {}", value),
                    "The gross salary must be greater than zero",
                ),
            },
            EngineError::EmptyResult { input } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::empty_result(&input),
            },
            EngineError::ShareFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("SHARE_FAILED", "Share failed", message),
            },
        }
    }
}

/// Response body for `/calculate`.
///
/// `result`, `breakdown` and `bars` are all `null` in the empty state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub calculated_at: DateTime<Utc>,
    /// How long the calculation took, in microseconds.
    pub duration_us: u64,
    /// The sector actually applied after fallback.
    pub sector: Sector,
    /// The calculation result.
    pub result: Option<CalculationResult>,
    /// The labelled breakdown of `result`.
    pub breakdown: Option<CostBreakdown>,
    /// The comparison bars for `result`.
    pub bars: Option<ResultBars>,
}

/// One entry of the `/sectors` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorResponse {
    /// Sector identifier.
    pub id: Sector,
    /// Display label.
    pub label: String,
    /// Accident-insurance rate as a fraction.
    pub rate: Decimal,
    /// The rate formatted as a percentage (e.g. "1.5%").
    pub rate_label: String,
}

impl From<&SectorRisk> for SectorResponse {
    fn from(entry: &SectorRisk) -> Self {
        Self {
            id: entry.sector,
            label: entry.label.clone(),
            rate: entry.rate,
            rate_label: format_percentage(entry.rate, 1),
        }
    }
}

/// Response body for `/share`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResponse {
    /// Share sheet title.
    pub title: String,
    /// Message text without the URL.
    pub text: String,
    /// The page URL.
    pub url: String,
    /// Message text followed by the URL, for the clipboard fallback.
    pub clipboard_text: String,
}

impl From<SharePayload> for ShareResponse {
    fn from(payload: SharePayload) -> Self {
        let clipboard_text = payload.clipboard_text();
        Self {
            title: payload.title,
            text: payload.text,
            url: payload.url,
            clipboard_text,
        }
    }
}
