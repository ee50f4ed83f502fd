use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or querying a work calendar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// The input string could not be read as a full or partial ISO date.
    #[error("cant convert date \"{0}\"")]
    InvalidDate(String),

    /// The resolved end date precedes the start date.
    #[error("invalid range: end date {end} precedes start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// The start date has no same-month/day equivalent one year later
    /// (a Feb 29 start followed by a non-leap year).
    #[error("cannot resolve an end date one year after {0}")]
    EndDateOverflow(NaiveDate),
}

/// Errors raised while building a job schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("job duration and hours per day must both be positive")]
    NonPositiveHours,

    /// No working day exists at or after the requested start within the
    /// calendar's range.
    #[error("no working day at or after {start} before the calendar ends on {end}")]
    StartNotSchedulable { start: NaiveDate, end: NaiveDate },

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
