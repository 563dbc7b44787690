/// The single failure mode of this crate: an input that could not be
/// normalized into a [`DateValue`](crate::DateValue).
///
/// Construction either yields a fully valid value or fails with one of these
/// variants; there is no best-effort parse. Conversions on an
/// already-constructed value cannot fail, with the exception of
/// [`DateValue::to_locale`](crate::DateValue::to_locale), which surfaces
/// [`DateValidationError::UnknownLocale`] for tags the locale tables don't
/// know.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateValidationError {
    /// Text that is lexically shaped like a timestamped ISO 8601 string but
    /// does not denote a real calendar moment (e.g. `2021-02-30T00:00:00Z`).
    #[error("Invalid ISO string")]
    InvalidIsoString,

    /// Text that is neither a timestamped ISO 8601 string nor a
    /// three-segment `YYYY-MM-DD`-style date.
    #[error("Invalid date format")]
    InvalidFormat,

    /// A numeric timestamp that is non-finite or denotes an instant outside
    /// the representable calendar range.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// A day/month/year record that failed validation. `problems` holds one
    /// descriptor per failed check, in check order; the rendered message
    /// joins them with `", "`.
    #[error("{}", .problems.join(", "))]
    InvalidParts {
        /// The accumulated field-level descriptors, e.g. `"Invalid day"`.
        problems: Vec<&'static str>,
    },

    /// An input value matching none of the supported shapes. The
    /// [`DateInput`](crate::DateInput) enum rules this out for inputs built
    /// through its `From` conversions; the variant remains part of the error
    /// contract for callers matching exhaustively.
    #[error("Unsupported date format")]
    Unsupported,

    /// A locale tag the bundled locale tables don't recognize.
    #[error("Unknown locale `{tag}`")]
    UnknownLocale {
        /// The tag as the caller supplied it.
        tag: String,
    },
}
