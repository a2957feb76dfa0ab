//! HTTP request handlers for the Per-Diem Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{TripFailure, calculate_batch, calculate_trip};
use crate::models::{Destination, TripRequest, TripTotals};

use super::request::{BatchCalculationRequest, TripRequestBody};
use super::response::{
    ApiError, ApiErrorResponse, BatchCalculationResponse, CalculationResponse, TripFailureBody,
};
use super::state::AppState;

/// The engine version stamped on every response.
const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/batch", post(calculate_batch_handler))
        .route("/destinations", get(destinations_handler))
        .route("/employees/:cedula", get(employee_handler))
        .with_state(state)
}

/// Handler for POST /calculate.
///
/// Accepts a single trip and returns its daily allowance records and totals.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<TripRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing trip calculation request");

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let request: TripRequest = match body.resolve(config.employees()) {
        Ok(request) => request,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Request resolution failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match calculate_trip(&request, config.catalog(), config.rates()) {
        Ok(records) => {
            let totals = TripTotals::from_records(&records);
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                days = records.len(),
                total_expense = %totals.total_expense,
                "Trip calculation completed"
            );
            let response = CalculationResponse {
                calculation_id: correlation_id,
                engine_version: ENGINE_VERSION.to_string(),
                regulation: config.regulation().to_string(),
                records,
                totals,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Trip calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /calculate/batch.
///
/// Accepts several trips and returns the merged, date-sorted records plus
/// per-trip failures. A malformed trip never blocks the rest of the batch,
/// so the endpoint answers 200 even when some trips failed.
async fn calculate_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch calculation request");

    let batch = match payload {
        Ok(Json(batch)) => batch,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    // Resolution failures join the calculation failures so the rest of the
    // batch still goes through.
    let config = state.config();
    let mut requests: Vec<TripRequest> = Vec::with_capacity(batch.trips.len());
    let mut resolution_failures: Vec<TripFailure> = Vec::new();
    let mut positions: Vec<usize> = Vec::with_capacity(batch.trips.len());
    for (trip_index, body) in batch.trips.into_iter().enumerate() {
        match body.resolve(config.employees()) {
            Ok(request) => {
                requests.push(request);
                positions.push(trip_index);
            }
            Err(error) => resolution_failures.push(TripFailure { trip_index, error }),
        }
    }

    let outcome = calculate_batch(&requests, config.catalog(), config.rates());

    let mut failures: Vec<TripFailureBody> = resolution_failures
        .into_iter()
        .map(Into::into)
        .collect();
    failures.extend(outcome.failures.into_iter().map(|failure| {
        // Map positions back to the submitted batch indices.
        TripFailureBody::from(TripFailure {
            trip_index: positions[failure.trip_index],
            error: failure.error,
        })
    }));
    failures.sort_by_key(|f| f.trip_index);

    info!(
        correlation_id = %correlation_id,
        records = outcome.records.len(),
        failures = failures.len(),
        total_expense = %outcome.totals.total_expense,
        "Batch calculation completed"
    );

    let response = BatchCalculationResponse {
        calculation_id: correlation_id,
        engine_version: ENGINE_VERSION.to_string(),
        regulation: config.regulation().to_string(),
        records: outcome.records,
        totals: outcome.totals,
        failures,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /employees/:cedula.
///
/// Looks up an employee record by cedula, e.g. to pre-fill the allowance
/// base in a trip form.
async fn employee_handler(
    State(state): State<AppState>,
    Path(cedula): Path<String>,
) -> impl IntoResponse {
    match state.config().employees().lookup(&cedula) {
        Ok(employee) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(employee.clone()),
        )
            .into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /destinations.
///
/// Returns the active destination catalog entries used to populate trip
/// forms.
async fn destinations_handler(State(state): State<AppState>) -> impl IntoResponse {
    let destinations: Vec<Destination> = state
        .config()
        .catalog()
        .active()
        .into_iter()
        .cloned()
        .collect();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(destinations),
    )
        .into_response()
}

/// Converts an axum JSON rejection into the error response body.
fn json_rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
