//! Per-Diem Calculation Engine
//!
//! This crate computes daily travel-allowance (per-diem) entitlements for
//! official trips: which of breakfast, lunch, dinner and lodging apply on
//! each calendar day of a trip, their monetary value, the tourist-zone
//! surcharge, attached transport cost, and the resulting ordered daily line
//! items and totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
