//! Clock-label and calendar-date codec.
//!
//! This is the foundational leaf used by the rest of the engine: it converts
//! 12-hour clock labels (`"08:00 AM"`) to decimal hour values and back, and
//! parses `YYYY-MM-DD` strings into local calendar dates.
//!
//! Date parsing goes through [`chrono::NaiveDate`], which carries no
//! timezone and never touches a UTC instant. Parsing calendar dates through
//! a UTC-based constructor shifts the whole trip decomposition by a day near
//! midnight in negative-offset zones, so everything downstream depends on
//! this leaf being local-calendar only.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The meridiem half of a 12-hour clock label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meridiem {
    /// Ante meridiem; `12 AM` is midnight.
    Am,
    /// Post meridiem; `12 PM` is noon.
    Pm,
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// The virtual departure label of a day that starts mid-trip.
pub const START_OF_DAY_LABEL: &str = "12:00 AM";

/// The virtual return label of a day that ends mid-trip.
pub const END_OF_DAY_LABEL: &str = "11:59 PM";

/// The decimal hour value of the virtual start of day (00:00).
pub const START_OF_DAY_HOUR: Decimal = Decimal::ZERO;

/// Returns the decimal hour value of the virtual end of day (23:59).
pub fn end_of_day_hour() -> Decimal {
    Decimal::from(23) + Decimal::from(59) / Decimal::from(60)
}

/// Converts a 12-hour clock label to a decimal hour on a 0–23.98 scale.
///
/// The label must match the wire grammar exactly: hour zero-padded `01`–`12`,
/// minute zero-padded `00`–`59`, one space, then case-sensitive `AM` or `PM`.
/// `12 AM` maps to hour 0 and PM adds 12 except for `12 PM`.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTimeLabel`] for any deviation from the
/// grammar, including lowercase meridiems and unpadded hours.
///
/// # Examples
///
/// ```
/// use perdiem_engine::calculation::to_decimal_hour;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_decimal_hour("08:00 AM").unwrap(), Decimal::from(8));
/// assert_eq!(to_decimal_hour("05:30 PM").unwrap(), Decimal::new(175, 1));
/// assert_eq!(to_decimal_hour("12:00 AM").unwrap(), Decimal::ZERO);
/// assert_eq!(to_decimal_hour("12:00 PM").unwrap(), Decimal::from(12));
/// assert!(to_decimal_hour("8:00 am").is_err());
/// ```
pub fn to_decimal_hour(label: &str) -> EngineResult<Decimal> {
    let (hour, minute, meridiem) =
        parse_label(label).ok_or_else(|| EngineError::MalformedTimeLabel {
            label: label.to_string(),
        })?;

    let hour_24 = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };

    Ok(Decimal::from(hour_24) + Decimal::from(minute) / Decimal::from(60))
}

/// Formats a 12-hour clock label, zero-padding hour and minute.
///
/// This is the inverse of [`to_decimal_hour`] for values constructed from
/// the same components.
///
/// # Examples
///
/// ```
/// use perdiem_engine::calculation::{to_label, Meridiem};
///
/// assert_eq!(to_label(8, 0, Meridiem::Am), "08:00 AM");
/// assert_eq!(to_label(11, 59, Meridiem::Pm), "11:59 PM");
/// ```
///
/// # Panics
///
/// Debug builds assert the 12-hour clock ranges: `hour` in `1..=12` and
/// `minute` in `0..=59`. Components outside those ranges would produce a
/// label [`to_decimal_hour`] rejects.
pub fn to_label(hour: u32, minute: u32, meridiem: Meridiem) -> String {
    debug_assert!((1..=12).contains(&hour), "hour out of range: {hour}");
    debug_assert!(minute <= 59, "minute out of range: {minute}");
    format!("{:02}:{:02} {}", hour, minute, meridiem)
}

/// Parses a `YYYY-MM-DD` string into a local calendar date.
///
/// No UTC instant is involved at any point, so the result is the literal
/// calendar day regardless of the host timezone.
///
/// # Errors
///
/// Returns [`EngineError::MalformedDateValue`] if the string is not a valid
/// `YYYY-MM-DD` date.
pub fn parse_calendar_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::MalformedDateValue {
        value: value.to_string(),
    })
}

/// Formats a calendar date as `DD/MM/YYYY` for display and export.
///
/// # Examples
///
/// ```
/// use perdiem_engine::calculation::format_date_label;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(format_date_label(date), "15/01/2026");
/// ```
pub fn format_date_label(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Validates a clock label against the wire grammar and splits it into
/// hour, minute and meridiem. Returns None on any deviation.
fn parse_label(label: &str) -> Option<(u32, u32, Meridiem)> {
    let b = label.as_bytes();
    if b.len() != 8 || b[2] != b':' || b[5] != b' ' || b[7] != b'M' {
        return None;
    }

    // Hour: 01-12, zero-padded
    let hour = match (b[0], b[1]) {
        (b'0', d @ b'1'..=b'9') => u32::from(d - b'0'),
        (b'1', d @ b'0'..=b'2') => 10 + u32::from(d - b'0'),
        _ => return None,
    };

    // Minute: 00-59, zero-padded
    let minute = match (b[3], b[4]) {
        (t @ b'0'..=b'5', u @ b'0'..=b'9') => u32::from(t - b'0') * 10 + u32::from(u - b'0'),
        _ => return None,
    };

    let meridiem = match b[6] {
        b'A' => Meridiem::Am,
        b'P' => Meridiem::Pm,
        _ => return None,
    };

    Some((hour, minute, meridiem))
}
