//! Error types for the Per-Diem Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a per-diem calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Per-Diem Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every variant
/// carries the offending field so callers can attribute the failure.
///
/// # Example
///
/// ```
/// use perdiem_engine::error::EngineError;
///
/// let error = EngineError::MalformedTimeLabel {
///     label: "8:00 am".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed time label: '8:00 am'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock label did not match the `HH:MM AM/PM` grammar exactly.
    #[error("Malformed time label: '{label}'")]
    MalformedTimeLabel {
        /// The label that failed to parse.
        label: String,
    },

    /// A calendar date value did not match the `YYYY-MM-DD` grammar.
    #[error("Malformed calendar date: '{value}'")]
    MalformedDateValue {
        /// The value that failed to parse.
        value: String,
    },

    /// The return date of a trip precedes its departure date.
    #[error("Return date {return_date} precedes departure date {departure}")]
    InvalidDateOrder {
        /// The trip's departure date.
        departure: NaiveDate,
        /// The trip's return date.
        return_date: NaiveDate,
    },

    /// No destination with the given identifier exists in the catalog.
    #[error("Destination not found: {id}")]
    DestinationNotFound {
        /// The destination identifier that was not found.
        id: u32,
    },

    /// No employee with the given cedula exists in the registry.
    #[error("Employee not found: '{cedula}'")]
    EmployeeNotFound {
        /// The cedula that was not found.
        cedula: String,
    },

    /// The employee's daily allowance base is absent or non-positive.
    #[error("Missing or non-positive daily allowance base for employee '{employee_id}'")]
    MissingAllowanceBase {
        /// The employee whose allowance base is missing.
        employee_id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_time_label_displays_label() {
        let error = EngineError::MalformedTimeLabel {
            label: "25:00 XM".to_string(),
        };
        assert_eq!(error.to_string(), "Malformed time label: '25:00 XM'");
    }

    #[test]
    fn test_invalid_date_order_displays_both_dates() {
        let error = EngineError::InvalidDateOrder {
            departure: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Return date 2026-01-10 precedes departure date 2026-01-15"
        );
    }

    #[test]
    fn test_destination_not_found_displays_id() {
        let error = EngineError::DestinationNotFound { id: 99 };
        assert_eq!(error.to_string(), "Destination not found: 99");
    }

    #[test]
    fn test_missing_allowance_base_displays_employee() {
        let error = EngineError::MissingAllowanceBase {
            employee_id: "402-1234567-8".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing or non-positive daily allowance base for employee '402-1234567-8'"
        );
    }

    #[test]
    fn test_employee_not_found_displays_cedula() {
        let error = EngineError::EmployeeNotFound {
            cedula: "000-0000000-0".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: '000-0000000-0'");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rates.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rates.yaml"
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
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::DestinationNotFound { id: 1 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
