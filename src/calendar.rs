use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CalendarError;

/// A business-day calendar over an inclusive date range.
///
/// A calendar is formed of two exclusion sets applied to `[start, end]`:
/// `non_working_days` for the weekly pattern (Saturday/Sunday by default)
/// and `holidays` for specific dates. Weekdays are `chrono::Weekday`
/// throughout; where a plain number is wanted, ISO numbering applies
/// (`Weekday::number_from_monday`, Mon=1 .. Sun=7).
///
/// The value is immutable once constructed. Input collections are copied
/// in, so later mutation by the caller cannot affect the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkCalendar {
    start: NaiveDate,
    end: NaiveDate,
    holidays: HashSet<NaiveDate>,
    non_working_days: HashSet<Weekday>,
}

impl WorkCalendar {
    /// Calendar with the default Saturday/Sunday weekend and no holidays.
    ///
    /// A missing `end` resolves to `start` one year later, same month and
    /// day. Resolution happens here, eagerly, so the range never changes
    /// after construction.
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, CalendarError> {
        Self::custom(start, end, [], [Weekday::Sat, Weekday::Sun])
    }

    /// Calendar with explicit holidays and non-working weekdays.
    ///
    /// Holidays may fall anywhere; dates outside `[start, end]` are carried
    /// but ignored by the range queries. An empty `non_working_days` set
    /// makes every weekday a working day.
    pub fn custom<H, W>(
        start: NaiveDate,
        end: Option<NaiveDate>,
        holidays: H,
        non_working_days: W,
    ) -> Result<Self, CalendarError>
    where
        H: IntoIterator<Item = NaiveDate>,
        W: IntoIterator<Item = Weekday>,
    {
        let end = Self::resolve_end(start, end)?;
        if end < start {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            holidays: holidays.into_iter().collect(),
            non_working_days: non_working_days.into_iter().collect(),
        })
    }

    fn resolve_end(start: NaiveDate, end: Option<NaiveDate>) -> Result<NaiveDate, CalendarError> {
        match end {
            Some(date) => Ok(date),
            // Feb 29 has no counterpart in a non-leap year.
            None => start
                .with_year(start.year() + 1)
                .ok_or(CalendarError::EndDateOverflow(start)),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check whether a date is a working day under this calendar's weekday
    /// and holiday configuration. The date range is not consulted.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.holidays.contains(&date) && !self.non_working_days.contains(&date.weekday())
    }

    /// All working days in `[start, end]`, ascending.
    pub fn working_days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            if self.is_working_day(current) {
                days.push(current);
            }
            current = current + Duration::days(1);
        }
        days
    }

    /// All dates in `[start, end]` falling on a configured non-working
    /// weekday, ascending. Reflects whatever set was configured, not
    /// literally Saturday/Sunday.
    pub fn weekends(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            if self.non_working_days.contains(&current.weekday()) {
                days.push(current);
            }
            current = current + Duration::days(1);
        }
        days
    }

    /// Configured holidays that fall inside `[start, end]`, ascending.
    /// Holidays outside the range are silently ignored.
    pub fn holidays_in_range(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .holidays
            .iter()
            .copied()
            .filter(|date| self.start <= *date && *date <= self.end)
            .collect();
        dates.sort();
        dates
    }

    /// Last working day of the given month, scanning backward from its
    /// final day.
    ///
    /// Only the weekday/holiday configuration applies; the month need not
    /// intersect the calendar's own range. Returns `None` when every day
    /// of the month is excluded (or the month itself is invalid).
    pub fn last_working_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };

        let mut date = next_month - Duration::days(1);
        while date >= first {
            if self.is_working_day(date) {
                return Some(date);
            }
            date = date - Duration::days(1);
        }
        None
    }
}
