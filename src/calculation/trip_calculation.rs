//! Trip-level orchestration and aggregation.
//!
//! Wires the pipeline together: resolve the day windows, evaluate meal
//! eligibility per day, value the grants, attach transport to the first day,
//! and produce one [`DailyAllowance`] record per calendar day. Batch
//! submissions are decomposed per trip, merged, and re-sorted by date.

use rust_decimal::Decimal;

use crate::config::AllowanceRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyAllowance, DestinationCatalog, TripRequest, TripTotals};

use super::day_amounts::calculate_day_amounts;
use super::day_windows::resolve_day_windows;
use super::meal_eligibility::evaluate_meals;
use super::time_codec::format_date_label;

/// A per-trip failure inside a batch submission.
#[derive(Debug)]
pub struct TripFailure {
    /// The position of the failing trip in the submitted batch.
    pub trip_index: usize,
    /// The error that aborted the trip's calculation.
    pub error: EngineError,
}

/// The outcome of a batch calculation.
///
/// Failures are per-trip: a malformed trip never affects the records
/// produced for the others.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Merged daily records of all successful trips, ascending by date.
    pub records: Vec<DailyAllowance>,
    /// Totals over the merged records.
    pub totals: TripTotals,
    /// The trips that failed, with their batch positions.
    pub failures: Vec<TripFailure>,
}

/// Calculates the daily per-diem records for one trip.
///
/// The request is re-validated before any work: upstream form validation is
/// not trusted because batch and report paths bypass the interactive form.
/// The result is ordered ascending by date with exactly one record per
/// calendar day of the trip; transport cost is attached to the first day
/// only. The calculation is pure: identical inputs produce identical
/// output.
///
/// # Errors
///
/// - [`EngineError::InvalidDateOrder`] if the return date precedes the
///   departure date.
/// - [`EngineError::MissingAllowanceBase`] if the allowance base is not
///   positive.
/// - [`EngineError::DestinationNotFound`] if the destination identifier is
///   not in the catalog.
/// - [`EngineError::MalformedTimeLabel`] if either clock label is invalid.
pub fn calculate_trip(
    request: &TripRequest,
    catalog: &DestinationCatalog,
    rates: &AllowanceRates,
) -> EngineResult<Vec<DailyAllowance>> {
    request.validate()?;

    let destination = catalog.lookup(request.destination_id)?;
    let tourist = request.tourist_flag(destination);
    let transport_cost = request.effective_transport_cost(destination);
    let overnight = request.is_overnight();

    let windows = resolve_day_windows(
        request.departure_date,
        &request.departure_time,
        request.return_date,
        &request.return_time,
    )?;

    let mut records = Vec::with_capacity(windows.len());
    for (i, window) in windows.iter().enumerate() {
        let eligibility = evaluate_meals(window, overnight);
        let amounts = calculate_day_amounts(request.allowance_base, eligibility, tourist, rates);

        // Transport rides on the first day of the trip only.
        let transport = if i == 0 { transport_cost } else { Decimal::ZERO };

        records.push(DailyAllowance {
            employee_id: request.employee_id.clone(),
            date: window.date,
            date_label: format_date_label(window.date),
            departure_label: window.departure_label.clone(),
            return_label: window.return_label.clone(),
            destination: destination.name.clone(),
            tourist,
            transport,
            breakfast: amounts.breakfast,
            lunch: amounts.lunch,
            dinner: amounts.dinner,
            lodging: amounts.lodging,
            total_allowance: amounts.total,
            total_expense: amounts.total + transport,
        });
    }

    Ok(records)
}

/// Merges the per-trip record lists of a batch into one display ordering.
///
/// Records are concatenated and then stably sorted ascending by date, so
/// ties on the same date keep the relative order in which the trips were
/// submitted.
pub fn merge_trip_records(per_trip: Vec<Vec<DailyAllowance>>) -> Vec<DailyAllowance> {
    let mut merged: Vec<DailyAllowance> = per_trip.into_iter().flatten().collect();
    merged.sort_by_key(|record| record.date);
    merged
}

/// Calculates a batch of trips for one or more employees.
///
/// Each trip is decomposed independently; failures abort only the trip they
/// belong to and are reported with the trip's position in the batch.
pub fn calculate_batch(
    requests: &[TripRequest],
    catalog: &DestinationCatalog,
    rates: &AllowanceRates,
) -> BatchOutcome {
    let mut per_trip = Vec::with_capacity(requests.len());
    let mut failures = Vec::new();

    for (trip_index, request) in requests.iter().enumerate() {
        match calculate_trip(request, catalog, rates) {
            Ok(records) => per_trip.push(records),
            Err(error) => failures.push(TripFailure { trip_index, error }),
        }
    }

    let records = merge_trip_records(per_trip);
    let totals = TripTotals::from_records(&records);

    BatchOutcome {
        records,
        totals,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Destination, DestinationCategory};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn catalog() -> DestinationCatalog {
        DestinationCatalog::new(vec![
            Destination {
                id: 2,
                name: "Santiago".to_string(),
                category: DestinationCategory::Normal,
                transport_cost: dec("500.00"),
                distance_km: dec("155"),
                active: true,
            },
            Destination {
                id: 4,
                name: "Punta Cana".to_string(),
                category: DestinationCategory::Tourist,
                transport_cost: dec("1500.00"),
                distance_km: dec("200"),
                active: true,
            },
        ])
    }

    fn request(
        employee_id: &str,
        departure: &str,
        departure_time: &str,
        return_: &str,
        return_time: &str,
        destination_id: u32,
    ) -> TripRequest {
        TripRequest {
            employee_id: employee_id.to_string(),
            allowance_base: dec("1000"),
            departure_date: date(departure),
            departure_time: departure_time.to_string(),
            return_date: date(return_),
            return_time: return_time.to_string(),
            destination_id,
            tourist_override: None,
            transport_cost: None,
            is_driver: false,
        }
    }

    /// Single-day trip to a normal zone.
    #[test]
    fn test_single_day_non_tourist() {
        let records = calculate_trip(
            &request("402-1", "2026-01-15", "08:00 AM", "2026-01-15", "05:00 PM", 2),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let day = &records[0];
        assert_eq!(day.breakfast, dec("100.00"));
        assert_eq!(day.lunch, dec("250.00"));
        assert_eq!(day.dinner, Decimal::ZERO);
        assert_eq!(day.lodging, Decimal::ZERO);
        assert_eq!(day.total_allowance, dec("350.00"));
        assert_eq!(day.transport, dec("500.00"));
        assert_eq!(day.total_expense, dec("850.00"));
        assert_eq!(day.date_label, "15/01/2026");
        assert_eq!(day.destination, "Santiago");
        assert!(!day.tourist);
    }

    /// Same trip to a tourist zone.
    #[test]
    fn test_single_day_tourist_surcharge() {
        let records = calculate_trip(
            &request("402-1", "2026-01-15", "08:00 AM", "2026-01-15", "05:00 PM", 4),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap();

        let day = &records[0];
        assert!(day.tourist);
        assert_eq!(day.breakfast, dec("105.0000"));
        assert_eq!(day.lunch, dec("262.5000"));
        assert_eq!(day.total_allowance, dec("367.5000"));
    }

    /// Two nights away: three records.
    #[test]
    fn test_multi_day_decomposition() {
        let records = calculate_trip(
            &request("402-1", "2026-01-15", "08:00 AM", "2026-01-17", "05:00 PM", 2),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap();

        assert_eq!(records.len(), 3);

        // Departure day: breakfast, lunch, dinner and lodging all granted.
        let day15 = &records[0];
        assert_eq!(day15.date, date("2026-01-15"));
        assert_eq!(day15.total_allowance, dec("1000.00"));
        assert_eq!(day15.departure_label, "08:00 AM");
        assert_eq!(day15.return_label, "11:59 PM");

        // Intermediate day: full value unconditionally.
        let day16 = &records[1];
        assert_eq!(day16.date, date("2026-01-16"));
        assert_eq!(day16.total_allowance, dec("1000.00"));

        // Return day: lunch and lodging only.
        let day17 = &records[2];
        assert_eq!(day17.date, date("2026-01-17"));
        assert_eq!(day17.breakfast, Decimal::ZERO);
        assert_eq!(day17.lunch, dec("250.00"));
        assert_eq!(day17.dinner, Decimal::ZERO);
        assert_eq!(day17.lodging, dec("450.00"));
        assert_eq!(day17.total_allowance, dec("700.00"));
        assert_eq!(day17.departure_label, "12:00 AM");
        assert_eq!(day17.return_label, "05:00 PM");
    }

    #[test]
    fn test_transport_attached_to_first_day_only() {
        let records = calculate_trip(
            &request("402-1", "2026-01-15", "08:00 AM", "2026-01-17", "05:00 PM", 2),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap();

        assert_eq!(records[0].transport, dec("500.00"));
        assert_eq!(records[1].transport, Decimal::ZERO);
        assert_eq!(records[2].transport, Decimal::ZERO);

        let transport_sum: Decimal = records.iter().map(|r| r.transport).sum();
        assert_eq!(transport_sum, dec("500.00"));
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let req = request("402-1", "2026-01-15", "08:00 AM", "2026-01-17", "05:00 PM", 4);
        let catalog = catalog();
        let rates = AllowanceRates::default();

        let first = calculate_trip(&req, &catalog, &rates).unwrap();
        let second = calculate_trip(&req, &catalog, &rates).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_destination_aborts_trip() {
        let error = calculate_trip(
            &request("402-1", "2026-01-15", "08:00 AM", "2026-01-15", "05:00 PM", 99),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap_err();
        assert!(matches!(error, EngineError::DestinationNotFound { id: 99 }));
    }

    #[test]
    fn test_records_stamped_with_employee() {
        let records = calculate_trip(
            &request("402-7", "2026-01-15", "08:00 AM", "2026-01-16", "05:00 PM", 2),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap();
        assert!(records.iter().all(|r| r.employee_id == "402-7"));
    }

    #[test]
    fn test_merge_sorts_by_date() {
        let trip_a = calculate_trip(
            &request("402-1", "2026-01-16", "08:00 AM", "2026-01-17", "05:00 PM", 2),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap();
        let trip_b = calculate_trip(
            &request("402-2", "2026-01-15", "08:00 AM", "2026-01-16", "05:00 PM", 4),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap();

        let merged = merge_trip_records(vec![trip_a, trip_b]);
        let dates: Vec<NaiveDate> = merged.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                date("2026-01-15"),
                date("2026-01-16"),
                date("2026-01-16"),
                date("2026-01-17"),
            ]
        );
    }

    #[test]
    fn test_merge_preserves_submission_order_on_date_ties() {
        let same_day_a = calculate_trip(
            &request("402-1", "2026-01-15", "08:00 AM", "2026-01-15", "05:00 PM", 2),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap();
        let same_day_b = calculate_trip(
            &request("402-2", "2026-01-15", "08:00 AM", "2026-01-15", "05:00 PM", 4),
            &catalog(),
            &AllowanceRates::default(),
        )
        .unwrap();

        let merged = merge_trip_records(vec![same_day_a, same_day_b]);
        assert_eq!(merged[0].employee_id, "402-1");
        assert_eq!(merged[1].employee_id, "402-2");
    }

    #[test]
    fn test_batch_isolates_per_trip_failures() {
        let requests = vec![
            request("402-1", "2026-01-15", "08:00 AM", "2026-01-15", "05:00 PM", 2),
            // Malformed time label: this trip fails alone.
            request("402-2", "2026-01-15", "8:00 am", "2026-01-15", "05:00 PM", 2),
            request("402-3", "2026-01-16", "08:00 AM", "2026-01-16", "05:00 PM", 4),
        ];

        let outcome = calculate_batch(&requests, &catalog(), &AllowanceRates::default());

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].trip_index, 1);
        assert!(matches!(
            outcome.failures[0].error,
            EngineError::MalformedTimeLabel { .. }
        ));
    }

    #[test]
    fn test_batch_totals_cover_merged_records() {
        let requests = vec![
            request("402-1", "2026-01-15", "08:00 AM", "2026-01-15", "05:00 PM", 2),
            request("402-2", "2026-01-15", "08:00 AM", "2026-01-15", "05:00 PM", 2),
        ];

        let outcome = calculate_batch(&requests, &catalog(), &AllowanceRates::default());

        assert_eq!(outcome.totals.total_allowance, dec("700.00"));
        assert_eq!(outcome.totals.total_transport, dec("1000.00"));
        assert_eq!(outcome.totals.total_expense, dec("1700.00"));
    }

    #[test]
    fn test_empty_batch_yields_empty_outcome() {
        let outcome = calculate_batch(&[], &catalog(), &AllowanceRates::default());
        assert!(outcome.records.is_empty());
        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.totals.total_expense, Decimal::ZERO);
    }
}
