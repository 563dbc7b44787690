use chrono::{DateTime, Locale, Utc};

use crate::error::DateValidationError;

/// Spelled-out styles for the weekday field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// The full name, e.g. `Sonntag` under `de-DE`.
    Long,
    /// The abbreviated name, e.g. `So.` under `de-DE`.
    Short,
}

/// Styles for the month field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// The full name, e.g. `Dezember`.
    Long,
    /// The abbreviated name, e.g. `Dez`.
    Short,
    /// The month number without padding, e.g. `5`.
    Numeric,
    /// The month number zero-padded to two digits, e.g. `05`.
    TwoDigit,
}

/// Styles for the purely numeric fields (day, year).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStyle {
    /// The number without padding. For years, all digits.
    Numeric,
    /// The number padded or truncated to two digits.
    TwoDigit,
}

/// Field selection for [`DateValue::to_locale`](crate::DateValue::to_locale).
///
/// Only the fields set to `Some` are rendered, in weekday, month, day, year
/// order, separated by spaces. With every field unset (or no options passed
/// at all) the locale's standard date representation is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleOptions {
    /// Weekday style, or `None` to omit the weekday.
    pub weekday: Option<TextStyle>,
    /// Day-of-month style, or `None` to omit the day.
    pub day: Option<NumericStyle>,
    /// Month style, or `None` to omit the month.
    pub month: Option<MonthStyle>,
    /// Year style, or `None` to omit the year.
    pub year: Option<NumericStyle>,
}

/// Renders `moment` for `tag`, delegating to the bundled locale tables
/// (chrono's `unstable-locales` data). Output spelling is owned by those
/// tables, not by this crate.
pub(crate) fn render(
    moment: &DateTime<Utc>,
    tag: &str,
    options: Option<&LocaleOptions>,
) -> Result<String, DateValidationError> {
    let locale = lookup(tag)?;
    let pattern = options.map_or_else(|| "%x".to_owned(), field_pattern);
    Ok(moment.format_localized(&pattern, locale).to_string())
}

fn lookup(tag: &str) -> Result<Locale, DateValidationError> {
    // The locale tables use underscore identifiers (`en_US`); accept the
    // BCP 47 hyphen spelling as well.
    let name = tag.replace('-', "_");
    Locale::try_from(name.as_str()).map_err(|_| DateValidationError::UnknownLocale {
        tag: tag.to_owned(),
    })
}

fn field_pattern(options: &LocaleOptions) -> String {
    let mut fields: Vec<&str> = Vec::new();

    if let Some(style) = options.weekday {
        fields.push(match style {
            TextStyle::Long => "%A",
            TextStyle::Short => "%a",
        });
    }
    if let Some(style) = options.month {
        fields.push(match style {
            MonthStyle::Long => "%B",
            MonthStyle::Short => "%b",
            MonthStyle::Numeric => "%-m",
            MonthStyle::TwoDigit => "%m",
        });
    }
    if let Some(style) = options.day {
        fields.push(match style {
            NumericStyle::Numeric => "%-d",
            NumericStyle::TwoDigit => "%d",
        });
    }
    if let Some(style) = options.year {
        fields.push(match style {
            NumericStyle::Numeric => "%Y",
            NumericStyle::TwoDigit => "%y",
        });
    }

    if fields.is_empty() {
        "%x".to_owned()
    } else {
        fields.join(" ")
    }
}
