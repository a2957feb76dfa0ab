//! Trip decomposition into per-day time windows.
//!
//! Given a trip's departure/return dates and clock labels, this module
//! produces one window per calendar day of the trip, classifying each day's
//! role. Departure and return days keep their actual clock time on one side
//! and a virtual end-of-day or start-of-day value on the other; intermediate
//! days span the full day.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::time_codec::{
    END_OF_DAY_LABEL, START_OF_DAY_HOUR, START_OF_DAY_LABEL, end_of_day_hour, to_decimal_hour,
};

/// The role a calendar day plays within a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayRole {
    /// The trip starts and ends on this day.
    Single,
    /// The first day of a multi-day trip.
    Departure,
    /// A full day entirely within a multi-day trip.
    Intermediate,
    /// The last day of a multi-day trip.
    Return,
}

impl std::fmt::Display for DayRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayRole::Single => write!(f, "Single"),
            DayRole::Departure => write!(f, "Departure"),
            DayRole::Intermediate => write!(f, "Intermediate"),
            DayRole::Return => write!(f, "Return"),
        }
    }
}

/// The effective time window of one calendar day of a trip.
///
/// Produced by [`resolve_day_windows`] and consumed once per calculation;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayWindow {
    /// The calendar date of this window.
    pub date: NaiveDate,
    /// The role this day plays within the trip.
    pub role: DayRole,
    /// Effective departure hour on the 0–23.98 decimal scale.
    pub departure_hour: Decimal,
    /// Effective return hour on the 0–23.98 decimal scale.
    pub return_hour: Decimal,
    /// The clock label matching `departure_hour`.
    pub departure_label: String,
    /// The clock label matching `return_hour`.
    pub return_label: String,
}

/// Decomposes a trip into an ordered sequence of per-day windows.
///
/// The sequence is ascending by date and always contains
/// `(return_date - departure_date) + 1` windows: a lone `Single` window for
/// a same-day trip, otherwise a `Departure` window, zero or more
/// `Intermediate` windows, and a `Return` window.
///
/// # Errors
///
/// - [`EngineError::InvalidDateOrder`] if the return date precedes the
///   departure date.
/// - [`EngineError::MalformedTimeLabel`] if either clock label does not
///   match the wire grammar.
///
/// # Examples
///
/// ```
/// use perdiem_engine::calculation::{resolve_day_windows, DayRole};
/// use chrono::NaiveDate;
///
/// let windows = resolve_day_windows(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     "08:00 AM",
///     NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     "05:00 PM",
/// )
/// .unwrap();
///
/// assert_eq!(windows.len(), 3);
/// assert_eq!(windows[0].role, DayRole::Departure);
/// assert_eq!(windows[1].role, DayRole::Intermediate);
/// assert_eq!(windows[2].role, DayRole::Return);
/// ```
pub fn resolve_day_windows(
    departure_date: NaiveDate,
    departure_label: &str,
    return_date: NaiveDate,
    return_label: &str,
) -> EngineResult<Vec<DayWindow>> {
    if return_date < departure_date {
        return Err(EngineError::InvalidDateOrder {
            departure: departure_date,
            return_date,
        });
    }

    let departure_hour = to_decimal_hour(departure_label)?;
    let return_hour = to_decimal_hour(return_label)?;

    let day_count = (return_date - departure_date).num_days();

    if day_count == 0 {
        return Ok(vec![DayWindow {
            date: departure_date,
            role: DayRole::Single,
            departure_hour,
            return_hour,
            departure_label: departure_label.to_string(),
            return_label: return_label.to_string(),
        }]);
    }

    let mut windows = Vec::with_capacity(day_count as usize + 1);
    for i in 0..=day_count {
        let date = departure_date
            .checked_add_days(Days::new(i as u64))
            .expect("trip dates within calendar range");

        let window = if i == 0 {
            DayWindow {
                date,
                role: DayRole::Departure,
                departure_hour,
                return_hour: end_of_day_hour(),
                departure_label: departure_label.to_string(),
                return_label: END_OF_DAY_LABEL.to_string(),
            }
        } else if i == day_count {
            DayWindow {
                date,
                role: DayRole::Return,
                departure_hour: START_OF_DAY_HOUR,
                return_hour,
                departure_label: START_OF_DAY_LABEL.to_string(),
                return_label: return_label.to_string(),
            }
        } else {
            DayWindow {
                date,
                role: DayRole::Intermediate,
                departure_hour: START_OF_DAY_HOUR,
                return_hour: end_of_day_hour(),
                departure_label: START_OF_DAY_LABEL.to_string(),
                return_label: END_OF_DAY_LABEL.to_string(),
            }
        };
        windows.push(window);
    }

    Ok(windows)
}
