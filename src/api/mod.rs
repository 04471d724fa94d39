//! HTTP API module for the Employer Cost Engine.
//!
//! This module exposes the calculator, the sector list and the export and
//! share texts as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ShareRequest};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, SectorResponse, ShareResponse,
};
pub use state::AppState;
