//! HTTP API module for the Per-Diem Calculation Engine.
//!
//! This module provides the REST API endpoints for calculating travel
//! allowances and listing the destination catalog.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchCalculationRequest, TripRequestBody};
pub use response::{ApiError, BatchCalculationResponse, CalculationResponse, TripFailureBody};
pub use state::AppState;
