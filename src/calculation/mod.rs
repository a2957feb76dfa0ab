//! Calculation logic for the Per-Diem Calculation Engine.
//!
//! This module contains the pure calculation pipeline: the clock-label and
//! calendar-date codec, trip decomposition into per-day time windows, meal
//! and lodging eligibility, monetary valuation with the tourist surcharge,
//! and trip-level aggregation with batch merging.

mod day_amounts;
mod day_windows;
mod meal_eligibility;
mod time_codec;
mod trip_calculation;

pub use day_amounts::{DayAmounts, calculate_day_amounts};
pub use day_windows::{DayRole, DayWindow, resolve_day_windows};
pub use meal_eligibility::{MealEligibility, evaluate_meals};
pub use time_codec::{
    END_OF_DAY_LABEL, Meridiem, START_OF_DAY_HOUR, START_OF_DAY_LABEL, end_of_day_hour,
    format_date_label, parse_calendar_date, to_decimal_hour, to_label,
};
pub use trip_calculation::{
    BatchOutcome, TripFailure, calculate_batch, calculate_trip, merge_trip_records,
};
