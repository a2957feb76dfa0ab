//! Trip request model and validation.
//!
//! A [`TripRequest`] describes one continuous travel leg: departure and
//! return calendar dates with clock-time labels, the destination, and the
//! transport arrangement. The engine re-validates every request rather than
//! trusting upstream form state, since batch and report paths bypass the
//! interactive form.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Destination;

/// Represents a request to calculate per-diem allowances for one trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// National identity number (cedula) of the travelling employee.
    pub employee_id: String,
    /// The daily allowance base amount in currency units.
    pub allowance_base: Decimal,
    /// The calendar date the trip starts.
    pub departure_date: NaiveDate,
    /// The departure clock time, e.g. `"08:00 AM"`.
    pub departure_time: String,
    /// The calendar date the trip ends.
    pub return_date: NaiveDate,
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

impl TripRequest {
    /// Validates the request invariants.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidDateOrder`] if the return date precedes the
    ///   departure date. This is an input error and is never corrected.
    /// - [`EngineError::MissingAllowanceBase`] if the allowance base is
    ///   absent or non-positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.return_date < self.departure_date {
            return Err(EngineError::InvalidDateOrder {
                departure: self.departure_date,
                return_date: self.return_date,
            });
        }
        if self.allowance_base <= Decimal::ZERO {
            return Err(EngineError::MissingAllowanceBase {
                employee_id: self.employee_id.clone(),
            });
        }
        Ok(())
    }

    /// Returns true if the trip spans at least one night away.
    pub fn is_overnight(&self) -> bool {
        self.return_date > self.departure_date
    }

    /// Resolves the tourist flag for this trip.
    ///
    /// The flag is derived from the destination category unless the
    /// operator overrode it on the form.
    pub fn tourist_flag(&self, destination: &Destination) -> bool {
        self.tourist_override.unwrap_or(destination.is_tourist())
    }

    /// Resolves the transport cost attached to this trip.
    ///
    /// A driver files their own manually-entered cost; anyone else gets the
    /// destination's catalog fare unless the operator keyed an override.
    pub fn effective_transport_cost(&self, destination: &Destination) -> Decimal {
        if self.is_driver {
            self.transport_cost.unwrap_or(Decimal::ZERO)
        } else {
            self.transport_cost.unwrap_or(destination.transport_cost)
        }
    }
}
