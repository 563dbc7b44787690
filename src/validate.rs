use chrono::NaiveDate;

use crate::input::DateParts;

/// Checks a day/month/year record and resolves it to a calendar date.
///
/// Each failing check contributes one descriptor to the error list, in a
/// fixed order: the day range first, the month range second, and the combined
/// calendar check last. The combined check only runs when both ranges passed;
/// it is what rejects impossible mixes such as day 31 in a 30-day month or
/// February 29 outside a leap year.
///
/// Pure function of the record; the resolved `NaiveDate` is returned so the
/// caller constructs the moment exactly once.
pub(crate) fn resolve_parts(parts: &DateParts) -> Result<NaiveDate, Vec<&'static str>> {
    let mut problems = Vec::new();

    if !(1..=31).contains(&parts.day) {
        problems.push("Invalid day");
    }
    if !(1..=12).contains(&parts.month) {
        problems.push("Invalid month");
    }

    if problems.is_empty() {
        // Ranges are checked, so the casts cannot lose information.
        match NaiveDate::from_ymd_opt(parts.year, parts.month as u32, parts.day as u32) {
            Some(date) => return Ok(date),
            None => problems.push("Invalid date combination"),
        }
    }

    Err(problems)
}
