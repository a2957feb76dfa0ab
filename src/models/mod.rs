//! Domain models for the Per-Diem Calculation Engine.
//!
//! This module contains the data structures used throughout the engine:
//! destinations and their catalog, employees, trip requests, and the
//! daily allowance records produced by a calculation.

mod daily_allowance;
mod destination;
mod employee;
mod trip;

pub use daily_allowance::{DailyAllowance, TripTotals};
pub use destination::{Destination, DestinationCatalog, DestinationCategory};
pub use employee::{Employee, EmployeeRegistry};
pub use trip::TripRequest;
