//! Daily allowance records and trip totals.
//!
//! This module contains the [`DailyAllowance`] line item produced for each
//! calendar day of a trip and the [`TripTotals`] aggregate computed over a
//! set of line items. Records are ephemeral: they are recomputed on every
//! invocation and never persisted or mutated in place.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One daily per-diem line item.
///
/// Exactly one record is produced per calendar day of a trip. Transport is
/// attached to the first day only; every other day carries zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAllowance {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of this record.
    pub date: NaiveDate,
    /// The date formatted as `DD/MM/YYYY` for display and export.
    pub date_label: String,
    /// The effective departure time label for this day.
    pub departure_label: String,
    /// The effective return time label for this day.
    pub return_label: String,
    /// The destination name.
    pub destination: String,
    /// Whether the tourist-zone surcharge was applied.
    pub tourist: bool,
    /// Transport cost attached to this day (zero except on the first day).
    pub transport: Decimal,
    /// Breakfast component amount.
    pub breakfast: Decimal,
    /// Lunch component amount.
    pub lunch: Decimal,
    /// Dinner component amount.
    pub dinner: Decimal,
    /// Lodging component amount.
    pub lodging: Decimal,
    /// Sum of the four meal/lodging components.
    pub total_allowance: Decimal,
    /// Total expense for the day: allowance plus transport.
    pub total_expense: Decimal,
}

/// Aggregated totals over the daily allowance records of one or more trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripTotals {
    /// Sum of `total_allowance` across all records.
    pub total_allowance: Decimal,
    /// Sum of `transport` across all records.
    pub total_transport: Decimal,
    /// Sum of `total_expense` across all records.
    pub total_expense: Decimal,
}

impl TripTotals {
    /// Computes totals over a slice of daily allowance records.
    pub fn from_records(records: &[DailyAllowance]) -> Self {
        Self {
            total_allowance: records.iter().map(|r| r.total_allowance).sum(),
            total_transport: records.iter().map(|r| r.transport).sum(),
            total_expense: records.iter().map(|r| r.total_expense).sum(),
        }
    }
}
