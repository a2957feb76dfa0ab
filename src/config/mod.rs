//! Configuration loading and types for the per-diem engine.
//!
//! Allowance percentages, the tourist surcharge, the destination catalog
//! and the employee registry are immutable configuration, loaded once from
//! YAML files and passed by reference into the pure calculation functions.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AllowanceRates, DestinationsConfig, EmployeesConfig, RatesConfig};
