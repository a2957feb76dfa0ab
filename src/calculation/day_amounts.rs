//! Monetary valuation of one day's eligibility decisions.
//!
//! Converts the boolean grants of a day into component amounts using fixed
//! percentages of the daily allowance base, applies the tourist-zone
//! surcharge, and totals the day.

use rust_decimal::Decimal;

use crate::config::AllowanceRates;

use super::meal_eligibility::MealEligibility;

/// The monetary value of each allowance component for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAmounts {
    /// Breakfast amount; zero when not granted.
    pub breakfast: Decimal,
    /// Lunch amount; zero when not granted.
    pub lunch: Decimal,
    /// Dinner amount; zero when not granted.
    pub dinner: Decimal,
    /// Lodging amount; zero when not granted.
    pub lodging: Decimal,
    /// Sum of the four components after any surcharge.
    pub total: Decimal,
}

/// Calculates the monetary amounts for one day.
///
/// Each granted component is worth `base × percentage`; ungranted components
/// are zero. For tourist-zone destinations every component is scaled by the
/// surcharge factor uniformly (scaling an ungranted zero is a no-op). The
/// percentages partition the base, so a fully granted day is worth
/// `base × surcharge_factor`.
///
/// # Examples
///
/// ```
/// use perdiem_engine::calculation::{calculate_day_amounts, MealEligibility};
/// use perdiem_engine::config::AllowanceRates;
/// use rust_decimal::Decimal;
///
/// let rates = AllowanceRates::default();
/// let amounts =
///     calculate_day_amounts(Decimal::from(1000), MealEligibility::FULL_DAY, false, &rates);
/// assert_eq!(amounts.total, Decimal::from(1000));
/// ```
pub fn calculate_day_amounts(
    base: Decimal,
    eligibility: MealEligibility,
    tourist: bool,
    rates: &AllowanceRates,
) -> DayAmounts {
    let component = |granted: bool, pct: Decimal| -> Decimal {
        if granted { base * pct } else { Decimal::ZERO }
    };

    let mut breakfast = component(eligibility.breakfast, rates.breakfast_pct);
    let mut lunch = component(eligibility.lunch, rates.lunch_pct);
    let mut dinner = component(eligibility.dinner, rates.dinner_pct);
    let mut lodging = component(eligibility.lodging, rates.lodging_pct);

    if tourist {
        breakfast *= rates.tourist_surcharge;
        lunch *= rates.tourist_surcharge;
        dinner *= rates.tourist_surcharge;
        lodging *= rates.tourist_surcharge;
    }

    let total = breakfast + lunch + dinner + lodging;

    DayAmounts {
        breakfast,
        lunch,
        dinner,
        lodging,
        total,
    }
}
