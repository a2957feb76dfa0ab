//! Meal and lodging eligibility rules.
//!
//! For each day window this module decides which of breakfast, lunch,
//! dinner and lodging apply. The rules are derived from the governing
//! travel-allowance regulation: a component is either granted in full or
//! not at all, never partially.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::day_windows::{DayRole, DayWindow};

/// Breakfast is granted when the trip leaves between 06:00 and 10:00.
const BREAKFAST_WINDOW: (Decimal, Decimal) =
    (Decimal::from_parts(6, 0, 0, false, 0), Decimal::from_parts(10, 0, 0, false, 0));

/// The lunch service window, 11:00–13:00. Lunch is granted when the trip's
/// presence overlaps this window ("covered when personnel is traveling
/// during the 11 AM–1 PM window").
const LUNCH_WINDOW: (Decimal, Decimal) =
    (Decimal::from_parts(11, 0, 0, false, 0), Decimal::from_parts(13, 0, 0, false, 0));

/// Dinner is granted when the return happens at or after 18:00.
const DINNER_HOUR: Decimal = Decimal::from_parts(18, 0, 0, false, 0);

/// The boolean grant decision for each allowance component of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEligibility {
    /// Whether breakfast applies.
    pub breakfast: bool,
    /// Whether lunch applies.
    pub lunch: bool,
    /// Whether dinner applies.
    pub dinner: bool,
    /// Whether lodging applies.
    pub lodging: bool,
}

impl MealEligibility {
    /// A full day: all four components granted.
    pub const FULL_DAY: MealEligibility = MealEligibility {
        breakfast: true,
        lunch: true,
        dinner: true,
        lodging: true,
    };
}

/// Evaluates which allowance components apply to one day window.
///
/// Intermediate days are fully billable and receive all four components
/// unconditionally. For every other role the decision uses the window's
/// effective departure/return hours:
///
/// - breakfast iff the departure hour falls inside 06:00–10:00 inclusive;
/// - lunch iff the presence overlaps the 11:00–13:00 service window, i.e.
///   departure before 13:00 and return after 11:00;
/// - dinner iff the return hour is 18:00 or later;
/// - lodging iff `overnight`, which must reflect the trip's calendar dates
///   (return date strictly after departure date), not the day's virtual
///   window.
///
/// # Examples
///
/// ```
/// use perdiem_engine::calculation::{evaluate_meals, DayRole, DayWindow};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let window = DayWindow {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     role: DayRole::Single,
///     departure_hour: Decimal::from(8),
///     return_hour: Decimal::from(17),
///     departure_label: "08:00 AM".to_string(),
///     return_label: "05:00 PM".to_string(),
/// };
///
/// let eligibility = evaluate_meals(&window, false);
/// assert!(eligibility.breakfast);
/// assert!(eligibility.lunch);
/// assert!(!eligibility.dinner);
/// assert!(!eligibility.lodging);
/// ```
pub fn evaluate_meals(window: &DayWindow, overnight: bool) -> MealEligibility {
    if window.role == DayRole::Intermediate {
        return MealEligibility::FULL_DAY;
    }

    let departure = window.departure_hour;
    let return_ = window.return_hour;

    MealEligibility {
        breakfast: departure >= BREAKFAST_WINDOW.0 && departure <= BREAKFAST_WINDOW.1,
        lunch: departure < LUNCH_WINDOW.1 && return_ > LUNCH_WINDOW.0,
        dinner: return_ >= DINNER_HOUR,
        lodging: overnight,
    }
}
