use core::fmt::{self, Display};
use core::str::FromStr;

use chrono::{DateTime, Datelike, Local, SecondsFormat, Utc};

use crate::error::DateValidationError;
use crate::format;
use crate::input::{self, DateInput, DateParts};
use crate::locale::{self, LocaleOptions};

/// An immutable, validated calendar date, normalized to a single UTC moment.
///
/// A `DateValue` wraps exactly one moment: midnight UTC on the parsed
/// calendar date, unless the input itself carried a time-of-day (a
/// timestamped ISO string, a raw Unix timestamp, or [`DateValue::now`]).
/// The moment always names a real calendar date, and once constructed it
/// never changes; every accessor hands back an independent copy.
///
/// The only construction paths are [`DateValue::from_input`] (or its
/// [`TryFrom`]/[`FromStr`] equivalents) and [`DateValue::now`].
///
/// # Examples
///
/// ```
/// use dately::prelude::*;
///
/// let date = DateValue::from_input("2024-11-30").unwrap();
/// assert_eq!(date.format("dddd, MMMM dd, yyyy"), "Saturday, November 30, 2024");
/// assert_eq!(date.to_iso(), "2024-11-30T00:00:00.000Z");
///
/// // the same calendar date, from a day/month/year record
/// let record = DateValue::from_input(DateParts { day: 30, month: 11, year: 2024 }).unwrap();
/// assert_eq!(date, record);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateValue {
    moment: DateTime<Utc>,
}

impl DateValue {
    /// Normalizes `input` into a `DateValue`.
    ///
    /// Accepts anything convertible to [`DateInput`]: a native date/time
    /// value, text, a Unix timestamp in seconds or milliseconds, or a
    /// [`DateParts`] record. See [`DateInput`] for the dispatch rules.
    ///
    /// # Errors
    ///
    /// Returns a [`DateValidationError`] when the input cannot be
    /// normalized: malformed text, a non-finite or out-of-range timestamp,
    /// or a record naming an impossible calendar date. The record path
    /// aggregates every failed check into one message:
    ///
    /// ```
    /// use dately::prelude::*;
    ///
    /// let err = DateValue::from_input(DateParts { day: 32, month: 13, year: 2024 }).unwrap_err();
    /// assert_eq!(err.to_string(), "Invalid day, Invalid month");
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use dately::prelude::*;
    ///
    /// let date = DateValue::from_input(1728518400).unwrap();
    /// assert_eq!(date.format("MM/dd/yyyy"), "10/10/2024");
    /// ```
    pub fn from_input<I: Into<DateInput>>(input: I) -> Result<Self, DateValidationError> {
        Self::try_from(input.into())
    }

    /// Wraps the present instant, bypassing dispatch and validation
    /// entirely. The current time-of-day is kept.
    pub fn now() -> Self {
        Self { moment: Utc::now() }
    }

    /// Renders the date through a token pattern, resolved against the UTC
    /// calendar fields.
    ///
    /// | Token | Output | Example |
    /// |---|---|---|
    /// | `yyyy` | 4-digit year | `2024` |
    /// | `MM` | zero-padded month | `03` |
    /// | `dd` | zero-padded day | `09` |
    /// | `MMMM` | full month name | `March` |
    /// | `MMM` | abbreviated month name | `Mar` |
    /// | `dddd`, `DDDD` | full weekday name | `Saturday` |
    /// | `ddd`, `E` | abbreviated weekday name | `Sat` |
    ///
    /// Anything else passes through unchanged. Textual tokens are replaced
    /// before numeric ones with unanchored global substitution, so a literal
    /// `E` (or a token substring such as `MM` meant literally) is rewritten
    /// as well; there is no escaping mechanism.
    ///
    /// # Examples
    ///
    /// ```
    /// use dately::prelude::*;
    ///
    /// let date = DateValue::from_input("2023-09-01").unwrap();
    /// assert_eq!(date.format("E, MMM dd yyyy"), "Fri, Sep 01 2023");
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        format::render(&self.moment, pattern)
    }

    /// The ISO 8601 string for the wrapped moment: always UTC, always
    /// `Z`-suffixed, millisecond precision.
    ///
    /// ```
    /// use dately::prelude::*;
    ///
    /// let date = DateValue::from_input("2021-10-12T08:30:00.250Z").unwrap();
    /// assert_eq!(date.to_iso(), "2021-10-12T08:30:00.250Z");
    /// ```
    pub fn to_iso(&self) -> String {
        self.moment.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// The Unix timestamp in whole seconds, floored from the millisecond
    /// epoch value.
    ///
    /// ```
    /// use dately::prelude::*;
    ///
    /// let date = DateValue::from_input("1970-01-01T00:00:01.000Z").unwrap();
    /// assert_eq!(date.to_unix(), 1);
    /// ```
    pub fn to_unix(&self) -> i64 {
        self.moment.timestamp()
    }

    /// The exact Unix timestamp in milliseconds.
    pub fn to_unix_ms(&self) -> i64 {
        self.moment.timestamp_millis()
    }

    /// A copy of the wrapped moment as a plain [`DateTime<Utc>`]. The copy
    /// is independent: whatever the caller does with it cannot affect this
    /// value.
    pub fn to_date(&self) -> DateTime<Utc> {
        self.moment
    }

    /// The wrapped moment's calendar fields **as seen in the host time
    /// zone**.
    ///
    /// Everything else in this crate reads the UTC fields; this one accessor
    /// deliberately does not, and near midnight it can disagree with
    /// [`to_iso`](Self::to_iso)/[`format`](Self::format) by one calendar day
    /// depending on the host's configured offset. Downstream behavior relies
    /// on the asymmetry, so it is kept rather than fixed.
    pub fn to_parts(&self) -> DateParts {
        let local = self.moment.with_timezone(&Local);
        DateParts {
            day: local.day() as i32,
            month: local.month() as i32,
            year: local.year(),
        }
    }

    /// A locale-formatted string for `tag` (BCP 47, e.g. `"en-US"` or
    /// `"de-DE"`), rendered from the bundled locale tables.
    ///
    /// `options` selects which fields appear and in what style; `None` (or
    /// all-unset options) yields the locale's standard date representation.
    /// Exact spelling is owned by the locale tables and may differ between
    /// table versions.
    ///
    /// # Errors
    ///
    /// Returns [`DateValidationError::UnknownLocale`] for tags the tables
    /// don't know.
    ///
    /// # Examples
    ///
    /// ```
    /// use dately::prelude::*;
    ///
    /// // 2025-05-04 is a Sunday
    /// let date = DateValue::from_input("2025-05-04").unwrap();
    /// let weekday = LocaleOptions {
    ///     weekday: Some(TextStyle::Long),
    ///     ..Default::default()
    /// };
    /// assert_eq!(date.to_locale("de-DE", Some(&weekday)).unwrap(), "Sonntag");
    /// ```
    pub fn to_locale(
        &self,
        tag: &str,
        options: Option<&LocaleOptions>,
    ) -> Result<String, DateValidationError> {
        locale::render(&self.moment, tag, options)
    }
}

impl TryFrom<DateInput> for DateValue {
    type Error = DateValidationError;

    fn try_from(input: DateInput) -> Result<Self, Self::Error> {
        input::normalize(input).map(|moment| Self { moment })
    }
}

impl FromStr for DateValue {
    type Err = DateValidationError;

    /// Parses text through the normalizer's text rule, so both
    /// `"2024-11-30"` and `"2021-10-12T00:00:00.000Z"` work.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s)
    }
}

impl Display for DateValue {
    /// Displays the ISO 8601 string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_input_scenarios() {
        let args: [(DateInput, &str, &str); 5] = [
            (
                DateParts {
                    day: 1,
                    month: 3,
                    year: 2004,
                }
                .into(),
                "MM/dd/yyyy",
                "03/01/2004",
            ),
            (
                "2021-10-12T00:00:00.000Z".into(),
                "dd/MM/yyyy",
                "12/10/2021",
            ),
            (1728518400.into(), "MM/dd/yyyy", "10/10/2024"),
            (1728518400000_i64.into(), "MM/dd/yyyy", "10/10/2024"),
            ("2024-11-30".into(), "dddd", "Saturday"),
        ];

        for (input, pattern, expected) in args {
            let date = DateValue::try_from(input).unwrap();
            assert_eq!(date.format(pattern), expected);
        }
    }

    #[test]
    fn test_unix_conversions() {
        let date = DateValue::from_input("1970-01-01T00:00:01.000Z").unwrap();
        assert_eq!(date.to_unix(), 1);
        assert_eq!(date.to_unix_ms(), 1000);

        // whole seconds floor toward negative infinity
        let before_epoch = DateValue::from_input(-0.5).unwrap();
        assert_eq!(before_epoch.to_unix_ms(), -500);
        assert_eq!(before_epoch.to_unix(), -1);
    }

    #[test]
    fn test_iso_shape() {
        let args = ["2024-11-30", "2022-4-10", "2021-10-12T08:30:00.250Z"];

        for input in args {
            let iso = DateValue::from_input(input).unwrap().to_iso();
            assert_eq!(iso.len(), 24);
            assert!(iso.ends_with('Z'));
            assert_eq!(&iso[10..11], "T");
            assert_eq!(&iso[19..20], ".");
        }
    }

    /// `format("yyyy-MM-dd")` then parsing the result lands on the same
    /// calendar date, whatever shape the input had.
    #[test]
    fn test_normalization_is_idempotent() {
        let inputs: [DateInput; 4] = [
            "2024-12-25".into(),
            "2021-10-12T13:45:00.000Z".into(),
            1728518400.into(),
            DateParts {
                day: 29,
                month: 2,
                year: 2024,
            }
            .into(),
        ];

        for input in inputs {
            let date = DateValue::try_from(input).unwrap();
            let rendered = date.format("yyyy-MM-dd");
            let reparsed: DateValue = rendered.parse().unwrap();
            assert_eq!(reparsed.format("yyyy-MM-dd"), rendered);
        }
    }

    #[test]
    fn test_parts_round_trip() {
        // midday keeps the local calendar fields on the same date for any
        // host offset within half a day of UTC
        let date = DateValue::from_input("2024-12-25T12:00:00.000Z").unwrap();
        assert_eq!(
            date.to_parts(),
            DateParts {
                day: 25,
                month: 12,
                year: 2024
            }
        );
    }

    #[test]
    fn test_to_date_is_a_copy() {
        let date = DateValue::from_input("2024-11-30").unwrap();
        let shifted = date.to_date() + chrono::TimeDelta::days(1);
        assert_ne!(shifted.timestamp_millis(), date.to_unix_ms());
        assert_eq!(date.to_iso(), "2024-11-30T00:00:00.000Z");
        assert_eq!(date.to_date().timestamp_millis(), date.to_unix_ms());
    }

    #[test]
    fn test_display_and_ordering() {
        let earlier = DateValue::from_input("2024-11-29").unwrap();
        let later = DateValue::from_input("2024-11-30").unwrap();
        assert!(earlier < later);
        assert_eq!(later.to_string(), "2024-11-30T00:00:00.000Z");
    }

    #[test]
    fn test_now_is_current() {
        let before = Utc::now().timestamp_millis();
        let now = DateValue::now();
        let after = Utc::now().timestamp_millis();
        assert!((before..=after).contains(&now.to_unix_ms()));
    }
}
