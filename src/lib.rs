//! # dately
//!
//! A library for parsing, validating, and formatting dates from many common
//! input shapes.
//!
//! Instead of asking callers to pre-classify their data, this library
//! accepts a date however it arrives (an ISO 8601 string, a simplified
//! `YYYY-MM-DD` string, a Unix timestamp in seconds or milliseconds, a
//! native date/time value, or a day/month/year record), validates it, and
//! normalizes it into one immutable [`DateValue`] with a single set of
//! conversion and formatting operations.
//!
//! ## Examples
//!
//! Parse and format in one go:
//!
//! ```
//! use dately::prelude::*;
//!
//! let date = DateValue::from_input("2024-11-30").unwrap();
//! assert_eq!(date.format("dddd, MMMM dd, yyyy"), "Saturday, November 30, 2024");
//!
//! // seconds and milliseconds are told apart automatically
//! let from_seconds = DateValue::from_input(1728518400).unwrap();
//! let from_millis = DateValue::from_input(1728518400000_i64).unwrap();
//! assert_eq!(from_seconds, from_millis);
//! ```
//!
//! Records are validated strictly, with every problem reported at once:
//!
//! ```
//! use dately::prelude::*;
//!
//! let err = DateValue::from_input(DateParts { day: 31, month: 2, year: 2024 }).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid date combination");
//! ```
//!
//! ## Important Terms
//!
//! - **Canonical moment**: the single UTC instant a [`DateValue`] wraps:
//!   midnight on the parsed calendar date, unless the input itself carried a
//!   time-of-day (a timestamped ISO string, a raw timestamp, or
//!   [`DateValue::now`]).
//! - **Input shape**: one of the five accepted forms, modeled by
//!   [`DateInput`]. Shapes are tried in a fixed priority order; see
//!   [`DateInput`] for the dispatch rules.
//! - **Token**: a recognized substring in a format pattern standing for a
//!   calendar field.
//!
//! ## Tokens
//!
//! In the "Example" column below, we reference the date 2023-09-01, a
//! Friday.
//!
//! | Token | Example | Description |
//! |---|---|---|
//! | `yyyy` | `2023` | 4-digit year |
//! | `MM` | `09` | Month of year (`01`–`12`), zero-padded |
//! | `dd` | `01` | Day of month, zero-padded |
//! | `MMMM` | `September` | Full English month name |
//! | `MMM` | `Sep` | Abbreviated month name (first 3 characters) |
//! | `dddd` | `Friday` | Full English weekday name |
//! | `DDDD` | `Friday` | Same as `dddd` |
//! | `ddd` | `Fri` | Abbreviated weekday name (first 3 characters) |
//! | `E` | `Fri` | Same as `ddd` |
//!
//! Any other character passes through unchanged. Substitution is unanchored
//! and order-dependent (textual tokens first, in a fixed key order, then the
//! numeric tokens in one combined pass), and there is no escaping mechanism:
//! a literal `E` or `MM` in a pattern will be rewritten. See
//! [`DateValue::format`].
//!
//! ## Locale-aware output
//!
//! [`DateValue::to_locale`] renders through the bundled locale tables for a
//! BCP 47 tag, with [`LocaleOptions`] selecting fields and styles. Output is
//! locale-aware; *parsing* never is.
//!
//! ## Prelude
//!
//! dately provides a prelude module for convenience. It contains everything
//! needed to interact with the library. Use it with:
//!
//! ```
//! use dately::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod format;
mod input;
mod locale;
mod validate;
mod value;

pub use crate::error::DateValidationError;
pub use crate::input::{DateInput, DateParts};
pub use crate::locale::{LocaleOptions, MonthStyle, NumericStyle, TextStyle};
pub use crate::value::DateValue;

/// A convenience module appropriate for glob imports (`use dately::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::DateInput;
    #[doc(no_inline)]
    pub use crate::DateParts;
    #[doc(no_inline)]
    pub use crate::DateValidationError;
    #[doc(no_inline)]
    pub use crate::DateValue;
    #[doc(no_inline)]
    pub use crate::LocaleOptions;
    #[doc(no_inline)]
    pub use crate::MonthStyle;
    #[doc(no_inline)]
    pub use crate::NumericStyle;
    #[doc(no_inline)]
    pub use crate::TextStyle;
}
