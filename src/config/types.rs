//! Configuration types for the per-diem engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Destination, Employee};

/// The allowance component percentages and the tourist-zone surcharge.
///
/// The four percentages partition the daily allowance base exactly: an
/// intermediate (full) day is worth the whole base. Values come from the
/// governing travel-allowance regulation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AllowanceRates {
    /// Fraction of the base paid for breakfast.
    pub breakfast_pct: Decimal,
    /// Fraction of the base paid for lunch.
    pub lunch_pct: Decimal,
    /// Fraction of the base paid for dinner.
    pub dinner_pct: Decimal,
    /// Fraction of the base paid for lodging.
    pub lodging_pct: Decimal,
    /// Multiplier applied to every component for tourist-zone destinations.
    pub tourist_surcharge: Decimal,
}

impl AllowanceRates {
    /// Returns true if the four component percentages sum to exactly 1.
    pub fn percentages_partition_base(&self) -> bool {
        self.breakfast_pct + self.lunch_pct + self.dinner_pct + self.lodging_pct == Decimal::ONE
    }
}

impl Default for AllowanceRates {
    /// The regulation values: breakfast 10%, lunch 25%, dinner 20%,
    /// lodging 45%, tourist surcharge 1.05.
    fn default() -> Self {
        Self {
            breakfast_pct: Decimal::new(10, 2),
            lunch_pct: Decimal::new(25, 2),
            dinner_pct: Decimal::new(20, 2),
            lodging_pct: Decimal::new(45, 2),
            tourist_surcharge: Decimal::new(105, 2),
        }
    }
}

/// Rates configuration file structure (`rates.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// A human-readable reference to the governing regulation.
    pub regulation: String,
    /// The allowance rates.
    pub rates: AllowanceRates,
}

/// Destination catalog file structure (`destinations.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct DestinationsConfig {
    /// The destination reference data.
    pub destinations: Vec<Destination>,
}

/// Employee registry file structure (`employees.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// The employee reference data.
    pub employees: Vec<Employee>,
}
