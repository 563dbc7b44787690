use std::sync::LazyLock;
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, Utc};
use regex::Regex;

use crate::error::DateValidationError;
use crate::validate;

/// A structured day/month/year record.
///
/// Accepted as an input shape by [`DateValue::from_input`] (the strict
/// construction path, validated field by field) and returned by
/// [`DateValue::to_parts`]. Fields are plain `i32`s so that out-of-range
/// values reach the validator and produce its descriptors instead of being
/// rejected at the type level.
///
/// [`DateValue::from_input`]: crate::DateValue::from_input
/// [`DateValue::to_parts`]: crate::DateValue::to_parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    /// Day of the month, 1-based.
    pub day: i32,
    /// Month of the year, 1-based.
    pub month: i32,
    /// Full calendar year.
    pub year: i32,
}

/// The input shapes accepted by [`DateValue::from_input`].
///
/// Dispatch follows the declaration order: a native date/time value or a
/// number never falls through to text parsing, and the timestamped ISO form
/// is recognized before the permissive hyphen split, since both share the
/// `YYYY-MM-DD` prefix.
///
/// Values usually arrive through the `From` conversions rather than by
/// naming a variant:
///
/// ```
/// use dately::prelude::*;
///
/// let from_text = DateValue::from_input("2024-11-30").unwrap();
/// let from_record = DateValue::from_input(DateParts { day: 30, month: 11, year: 2024 }).unwrap();
/// assert_eq!(from_text, from_record);
///
/// let from_timestamp = DateValue::from_input(1728518400).unwrap();
/// assert_eq!(from_timestamp.format("yyyy-MM-dd"), "2024-10-10");
/// ```
///
/// [`DateValue::from_input`]: crate::DateValue::from_input
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// A native date/time value. Its **local** calendar fields are
    /// reinterpreted as a UTC calendar date at midnight; the value's own
    /// time-of-day and offset are discarded entirely.
    DateTime(DateTime<Local>),
    /// Text: either a timestamped ISO 8601 string (the one form that keeps
    /// its time-of-day) or a permissive `YYYY-MM-DD`-style date.
    Text(String),
    /// A Unix timestamp in whole seconds or in milliseconds; magnitudes
    /// below 10¹² are read as seconds.
    Timestamp(f64),
    /// A day/month/year record, validated strictly.
    Parts(DateParts),
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<f64> for DateInput {
    fn from(value: f64) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(value as f64)
    }
}

impl From<i32> for DateInput {
    fn from(value: i32) -> Self {
        DateInput::Timestamp(f64::from(value))
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(value: DateTime<Local>) -> Self {
        DateInput::DateTime(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::DateTime(value.with_timezone(&Local))
    }
}

impl From<SystemTime> for DateInput {
    fn from(value: SystemTime) -> Self {
        DateInput::DateTime(DateTime::from(value))
    }
}

impl From<DateParts> for DateInput {
    fn from(value: DateParts) -> Self {
        DateInput::Parts(value)
    }
}

/// The strict timestamped form: date, literal `T`, time, optional 3-digit
/// fractional seconds, literal `Z`.
static ISO_INSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{3})?Z$")
        .expect("ISO instant pattern compiles")
});

/// Normalizes any supported input into the canonical UTC moment.
pub(crate) fn normalize(input: DateInput) -> Result<DateTime<Utc>, DateValidationError> {
    match input {
        DateInput::DateTime(value) => Ok(reinterpret_local(&value)),
        DateInput::Text(text) => normalize_text(&text),
        DateInput::Timestamp(value) => normalize_timestamp(value),
        DateInput::Parts(parts) => normalize_parts(&parts),
    }
}

/// Reinterprets the local calendar fields of a native date/time value as a
/// UTC calendar date at midnight. Calendar fields read from a real date
/// always form a real date, so this cannot fail.
fn reinterpret_local(value: &DateTime<Local>) -> DateTime<Utc> {
    value.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn normalize_text(text: &str) -> Result<DateTime<Utc>, DateValidationError> {
    if ISO_INSTANT.is_match(text) {
        // Lexically ISO, but the fields may still name an impossible moment
        // (February 30th, hour 25).
        let instant = DateTime::parse_from_rfc3339(text)
            .map_err(|_| DateValidationError::InvalidIsoString)?;
        return Ok(instant.with_timezone(&Utc));
    }

    if let [year, month, day] = text.split('-').collect::<Vec<_>>().as_slice() {
        if let (Ok(year), Ok(month), Ok(day)) =
            (year.parse::<i64>(), month.parse::<i64>(), day.parse::<i64>())
        {
            return utc_midnight_rolled(year, month, day)
                .ok_or(DateValidationError::InvalidFormat);
        }
    }

    Err(DateValidationError::InvalidFormat)
}

/// Threshold separating whole-second from millisecond timestamps. Any
/// millisecond timestamp after 2001 exceeds this, so magnitudes below it are
/// read as seconds without an explicit unit flag.
const MILLIS_THRESHOLD: f64 = 1e12;

fn normalize_timestamp(value: f64) -> Result<DateTime<Utc>, DateValidationError> {
    if !value.is_finite() {
        return Err(DateValidationError::InvalidTimestamp);
    }

    let millis = if value.abs() < MILLIS_THRESHOLD {
        value * 1000.0
    } else {
        value
    };
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(DateValidationError::InvalidTimestamp);
    }

    DateTime::from_timestamp_millis(millis as i64).ok_or(DateValidationError::InvalidTimestamp)
}

fn normalize_parts(parts: &DateParts) -> Result<DateTime<Utc>, DateValidationError> {
    let date = validate::resolve_parts(parts)
        .map_err(|problems| DateValidationError::InvalidParts { problems })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// UTC midnight for a year/month/day triple, with out-of-range fields rolled
/// into adjacent months and years the way ordinary calendar arithmetic does:
/// month 13 of 2021 is January 2022, day 0 is the last day of the previous
/// month. `None` only when the result leaves the representable calendar
/// range.
fn utc_midnight_rolled(year: i64, month: i64, day: i64) -> Option<DateTime<Utc>> {
    let months = year.checked_mul(12)?.checked_add(month)?.checked_sub(1)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = months.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)?;
    Some(date.and_time(NaiveTime::MIN).and_utc())
}
