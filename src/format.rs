use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use regex::{Captures, Regex};

/// Fixed English month names, first letter capitalized, indexed by zero-based
/// month.
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Fixed English weekday names, first letter capitalized, indexed by days
/// from Monday.
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The numeric tokens, matched as one alternation so they can be substituted
/// in a single pass.
static NUMERIC_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("yyyy|MM|dd").expect("numeric token pattern compiles"));

/// Renders `pattern` against the UTC calendar fields of `moment`.
///
/// Textual tokens are substituted before numeric ones because several textual
/// tokens are substrings of others and the letter `M` recurs across tokens of
/// different lengths. Each textual token is one unanchored, global
/// replacement over the whole pattern, applied in a fixed key order: `MMMM`,
/// `MMM`, `dddd`, `ddd`, `E`, `DDDD`. The `E` replacement therefore also
/// rewrites any literal `E` still present in the pattern at that point; this
/// replacement order is part of the contract, not an implementation detail.
/// Numeric tokens (`yyyy`, `MM`, `dd`) follow in one combined alternation
/// pass, so a substituted value can never be re-read as another numeric
/// token.
///
/// Characters matching no token pass through unchanged. There is no escaping
/// mechanism: a literal occurrence of a token substring cannot be preserved.
pub(crate) fn render(moment: &DateTime<Utc>, pattern: &str) -> String {
    let month = MONTH_NAMES[moment.month0() as usize];
    let weekday = WEEKDAY_NAMES[moment.weekday().num_days_from_monday() as usize];

    let mut rendered = pattern.to_owned();
    for (token, value) in [
        ("MMMM", month),
        ("MMM", &month[..3]),
        ("dddd", weekday),
        ("ddd", &weekday[..3]),
        ("E", &weekday[..3]),
        ("DDDD", weekday),
    ] {
        rendered = rendered.replace(token, value);
    }

    NUMERIC_TOKENS
        .replace_all(&rendered, |captures: &Captures<'_>| match &captures[0] {
            "yyyy" => format!("{:04}", moment.year()),
            "MM" => format!("{:02}", moment.month()),
            _ => format!("{:02}", moment.day()),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DateValue;

    fn moment(text: &str) -> DateTime<Utc> {
        DateValue::from_input(text).unwrap().to_date()
    }

    #[test]
    fn test_numeric_patterns() {
        let args = [
            ("2024-12-25", "yyyy-MM-dd", "2024-12-25"),
            ("2024-12-25", "dd/MM/yyyy", "25/12/2024"),
            ("2024-12-25", "MM/dd/yyyy", "12/25/2024"),
            ("1999-01-01", "yyyyMMdd", "19990101"),
            ("2022-4-10", "dd.MM.yyyy", "10.04.2022"),
        ];

        for (input, pattern, expected) in args {
            assert_eq!(render(&moment(input), pattern), expected);
        }
    }

    #[test]
    fn test_textual_patterns() {
        let args = [
            ("2022-11-10", "dd. MMMM. yyyy", "10. November. 2022"),
            ("2022-4-10", "dd. MMMM. yyyy", "10. April. 2022"),
            ("2022-3-19", "dd. MMMM. yyyy", "19. March. 2022"),
            ("2022-07-04", "MMMM dd, yyyy", "July 04, 2022"),
            ("2023-09-01", "E, MMM dd yyyy", "Fri, Sep 01 2023"),
            ("2021-12-25", "dd/MMM/yyyy", "25/Dec/2021"),
            ("2020-02-29", "DDDD, dd MMMM yyyy", "Saturday, 29 February 2020"),
            ("2024-11-30", "dddd", "Saturday"),
            ("2024-11-30", "ddd", "Sat"),
        ];

        for (input, pattern, expected) in args {
            assert_eq!(render(&moment(input), pattern), expected);
        }
    }

    #[test]
    fn test_month_names() {
        // every month, from the strict record path
        for (month, name) in MONTH_NAMES.iter().enumerate() {
            let date = DateValue::from_input(crate::input::DateParts {
                day: 1,
                month: month as i32 + 1,
                year: 2004,
            })
            .unwrap();
            assert_eq!(date.format("MMMM"), *name);
            assert_eq!(date.format("MMM"), &name[..3]);
        }
    }

    /// `E` is replaced with an unanchored global pass, so a literal `E`
    /// elsewhere in the pattern is rewritten too.
    #[test]
    fn test_literal_e_is_rewritten() {
        // 2023-09-01 is a Friday
        assert_eq!(render(&moment("2023-09-01"), "WEEK dd"), "WFriFriK 01");
    }

    /// No escaping mechanism exists: a literal `MM` cannot survive.
    #[test]
    fn test_token_substrings_cannot_be_escaped() {
        assert_eq!(render(&moment("2022-07-04"), "MM MMMM"), "07 July");
    }

    #[test]
    fn test_unrecognized_characters_pass_through() {
        assert_eq!(
            render(&moment("2024-12-25"), "yyyy/MM/dd .,-"),
            "2024/12/25 .,-"
        );
    }
}
