//! Request types for the Per-Diem Calculation Engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints. Calendar dates arrive as `YYYY-MM-DD` strings and are parsed
//! through the engine's local-calendar codec; clock times stay in their
//! `HH:MM AM/PM` wire format and are validated during calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_calendar_date;
use crate::error::EngineResult;
use crate::models::{EmployeeRegistry, TripRequest};

/// Request body for the `POST /calculate` endpoint: one trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequestBody {
    /// National identity number (cedula) of the travelling employee.
    pub employee_id: String,
    /// The daily allowance base amount in currency units; absent means the
    /// base assigned to the employee in the registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowance_base: Option<Decimal>,
    /// The departure calendar date as `YYYY-MM-DD`.
    pub departure_date: String,
    /// The departure clock time, e.g. `"08:00 AM"`.
    pub departure_time: String,
    /// The return calendar date as `YYYY-MM-DD`.
    pub return_date: String,
    /// The return clock time, e.g. `"05:00 PM"`.
    pub return_time: String,
    /// Identifier of the destination in the catalog.
    pub destination_id: u32,
    /// Overrides the tourist flag derived from the destination category.
    #[serde(default)]
    pub tourist_override: Option<bool>,
    /// Manually entered transport cost; absent means the catalog fare.
    #[serde(default)]
    pub transport_cost: Option<Decimal>,
    /// Whether the employee drove their own vehicle.
    #[serde(default)]
    pub is_driver: bool,
}

/// Request body for the `POST /calculate/batch` endpoint: several trips,
/// possibly for different employees and destinations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationRequest {
    /// The trips to calculate.
    pub trips: Vec<TripRequestBody>,
}

impl TripRequestBody {
    /// Resolves the wire body into an engine [`TripRequest`].
    ///
    /// Calendar dates are parsed, and an absent allowance base is filled in
    /// from the employee registry.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MalformedDateValue`] if a date string is not
    ///   `YYYY-MM-DD`.
    /// - [`EngineError::EmployeeNotFound`] if the base is absent and the
    ///   cedula is not in the registry.
    /// - [`EngineError::MissingAllowanceBase`] if the registry record has a
    ///   non-positive allowance.
    ///
    /// [`EngineError::MalformedDateValue`]: crate::error::EngineError::MalformedDateValue
    /// [`EngineError::EmployeeNotFound`]: crate::error::EngineError::EmployeeNotFound
    /// [`EngineError::MissingAllowanceBase`]: crate::error::EngineError::MissingAllowanceBase
    pub fn resolve(self, employees: &EmployeeRegistry) -> EngineResult<TripRequest> {
        let allowance_base = match self.allowance_base {
            Some(base) => base,
            None => employees.lookup(&self.employee_id)?.allowance_base()?,
        };

        Ok(TripRequest {
            employee_id: self.employee_id,
            allowance_base,
            departure_date: parse_calendar_date(&self.departure_date)?,
            departure_time: self.departure_time,
            return_date: parse_calendar_date(&self.return_date)?,
            return_time: self.return_time,
            destination_id: self.destination_id,
            tourist_override: self.tourist_override,
            transport_cost: self.transport_cost,
            is_driver: self.is_driver,
        })
    }
}
