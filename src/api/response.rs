//! Response types for the Per-Diem Calculation Engine API.
//!
//! This module defines the success response structures and the error
//! response mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::TripFailure;
use crate::error::EngineError;
use crate::models::{DailyAllowance, TripTotals};

/// Response body for a successful single-trip calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier of this calculation run.
    pub calculation_id: Uuid,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The regulation the configured rates are drawn from.
    pub regulation: String,
    /// One record per calendar day of the trip, ascending by date.
    pub records: Vec<DailyAllowance>,
    /// Totals over the records.
    pub totals: TripTotals,
}

/// Response body for a batch calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationResponse {
    /// Unique identifier of this calculation run.
    pub calculation_id: Uuid,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The regulation the configured rates are drawn from.
    pub regulation: String,
    /// Merged records of all successful trips, ascending by date.
    pub records: Vec<DailyAllowance>,
    /// Totals over the merged records.
    pub totals: TripTotals,
    /// Per-trip failures; the listed indices produced no records.
    pub failures: Vec<TripFailureBody>,
}

/// A per-trip failure as reported in a batch response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripFailureBody {
    /// The position of the failing trip in the submitted batch.
    pub trip_index: usize,
    /// The error that aborted the trip.
    pub error: ApiError,
}

impl From<TripFailure> for TripFailureBody {
    fn from(failure: TripFailure) -> Self {
        let response: ApiErrorResponse = failure.error.into();
        Self {
            trip_index: failure.trip_index,
            error: response.error,
        }
    }
}

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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::MalformedTimeLabel { label } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_TIME_LABEL",
                    format!("Malformed time label: '{}'", label),
                    "Clock times must match 'HH:MM AM/PM' with zero-padded fields",
                ),
            },
            EngineError::MalformedDateValue { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_DATE",
                    format!("Malformed calendar date: '{}'", value),
                    "Calendar dates must match 'YYYY-MM-DD'",
                ),
            },
            EngineError::InvalidDateOrder {
                departure,
                return_date,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_ORDER",
                    format!(
                        "Return date {} precedes departure date {}",
                        return_date, departure
                    ),
                    "The return date must be on or after the departure date",
                ),
            },
            EngineError::DestinationNotFound { id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DESTINATION_NOT_FOUND",
                    format!("Destination not found: {}", id),
                    "The destination identifier is not in the catalog",
                ),
            },
            EngineError::EmployeeNotFound { cedula } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: '{}'", cedula),
                    "The cedula is not in the employee registry",
                ),
            },
            EngineError::MissingAllowanceBase { employee_id } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_ALLOWANCE_BASE",
                    format!(
                        "Missing or non-positive daily allowance base for employee '{}'",
                        employee_id
                    ),
                    "The employee record must supply a positive daily allowance",
                ),
            },
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
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_malformed_time_label_maps_to_bad_request() {
        let engine_error = EngineError::MalformedTimeLabel {
            label: "8:00 am".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "MALFORMED_TIME_LABEL");
        assert!(api_error.error.message.contains("8:00 am"));
    }

    #[test]
    fn test_destination_not_found_maps_to_bad_request() {
        let engine_error = EngineError::DestinationNotFound { id: 42 };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "DESTINATION_NOT_FOUND");
    }

    #[test]
    fn test_employee_not_found_maps_to_not_found() {
        let engine_error = EngineError::EmployeeNotFound {
            cedula: "000-0000000-0".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_trip_failure_conversion_keeps_index() {
        let failure = TripFailure {
            trip_index: 3,
            error: EngineError::DestinationNotFound { id: 7 },
        };
        let body: TripFailureBody = failure.into();
        assert_eq!(body.trip_index, 3);
        assert_eq!(body.error.code, "DESTINATION_NOT_FOUND");
    }
}
