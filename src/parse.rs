use chrono::NaiveDate;

use crate::error::CalendarError;

/// Parse a full (`YYYY-MM-DD`) or partial (`YYYY-MM`, `YYYY`) ISO date.
///
/// Missing month/day components default to 1, so `"2024"` is January 1st
/// 2024 and `"2024-3"` is March 1st. Components need not be zero-padded.
/// Anything else, including semantically invalid dates such as
/// `2024-02-30`, is an `InvalidDate` error.
pub fn parse_partial_iso(input: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidDate(input.to_string());

    let mut parts = input.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;

    let month = match parts.next() {
        Some(part) => component(part).ok_or_else(invalid)?,
        None => 1,
    };
    let day = match parts.next() {
        Some(part) => component(part).ok_or_else(invalid)?,
        None => 1,
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

// One or two digits; range checking is left to chrono.
fn component(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
