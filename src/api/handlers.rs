//! HTTP request handlers for the Employer Cost Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_with, lookup_sector, try_derive_with};
use crate::export::{ArgumentSheet, SharePayload};
use crate::models::{CostBreakdown, ResultBars, parse_salary_input};

use super::request::{CalculationRequest, ShareRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, SectorResponse, ShareResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/sectors", get(sectors_handler))
        .route("/calculate", post(calculate_handler))
        .route("/export", post(export_handler))
        .route("/share", post(share_handler))
        .with_state(state)
}

/// Handler for GET /sectors.
///
/// Lists the sectors in selector order with their rates.
async fn sectors_handler(State(state): State<AppState>) -> Json<Vec<SectorResponse>> {
    let sectors = state
        .rate_table()
        .sectors()
        .iter()
        .map(SectorResponse::from)
        .collect();
    Json(sectors)
}

/// Handler for POST /calculate.
///
/// Always answers 200 for a well-formed body; a salary that does not parse
/// to a positive amount yields the empty state.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let table = state.rate_table();
    let start_time = Instant::now();
    let sector_risk = lookup_sector(table, &request.sector);
    let sector = sector_risk.sector;
    let result = parse_salary_input(&request.salary)
        .map(|salary| compute_with(table, salary, sector_risk.rate));
    let breakdown = result.as_ref().map(CostBreakdown::from_result);
    let bars = result.as_ref().map(ResultBars::from_result);
    let duration = start_time.elapsed();

    match &result {
        Some(result) => info!(
            correlation_id = %correlation_id,
            sector = %sector,
            gross_salary = %result.gross_salary,
            total_employer_cost = %result.total_employer_cost,
            duration_us = duration.as_micros(),
            "Calculation completed successfully"
        ),
        None => info!(
            correlation_id = %correlation_id,
            "Salary produced no result, returning empty state"
        ),
    }

    let response = CalculationResponse {
        calculation_id: correlation_id,
        calculated_at: Utc::now(),
        duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
        sector,
        result,
        breakdown,
        bars,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /export.
///
/// Returns the argument sheet as a text attachment dated today.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = match try_derive_with(state.rate_table(), &request.salary, &request.sector) {
        Ok(result) => result,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Nothing to export");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let sheet = ArgumentSheet::new(&result, Local::now().date_naive());
    info!(
        correlation_id = %correlation_id,
        file_name = %sheet.file_name,
        bytes = sheet.content.len(),
        "Argument sheet generated"
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, sheet.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", sheet.file_name),
            ),
        ],
        sheet.content,
    )
        .into_response()
}

/// Handler for POST /share.
///
/// Builds the share payload; handing it to a share sheet or clipboard is
/// left to the client.
async fn share_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShareRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing share request");

    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let calculation = &request.calculation;
    let result = match try_derive_with(state.rate_table(), &calculation.salary, &calculation.sector)
    {
        Ok(result) => result,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Nothing to share");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let payload = SharePayload::new(&result, request.url);
    info!(correlation_id = %correlation_id, "Share text generated");

    (StatusCode::OK, Json(ShareResponse::from(payload))).into_response()
}

/// Unwraps a JSON body or turns the rejection into a 400 response.
fn accept_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response())
}
