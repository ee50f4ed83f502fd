use chrono::{Datelike, Duration, NaiveDate};
use tracing::{debug, warn};

use crate::calendar::WorkCalendar;
use crate::error::ScheduleError;

/// The concrete working days a job occupies.
///
/// A job is an hours-based duration burned down at `hours_per_day`,
/// anchored at the first working day at or after the requested start.
/// The day list is computed once at construction and never changes;
/// every query below reads from it.
#[derive(Debug, Clone)]
pub struct JobSchedule {
    duration_hours: f64,
    hours_per_day: f64,
    work_days: Vec<NaiveDate>,
    truncated: bool,
}

impl JobSchedule {
    /// Schedule a job of `duration_hours` at `hours_per_day`, starting at
    /// (or after) `start`.
    ///
    /// A fractional day of remaining work still occupies a whole day, so
    /// the number of days taken is `ceil(duration_hours / hours_per_day)`.
    /// When no calendar is supplied one is synthesized spanning the job
    /// itself, with default weekend/holiday configuration. When the
    /// supplied calendar holds fewer working days than the job needs, the
    /// schedule is cut short and flagged truncated rather than failing.
    pub fn new(
        duration_hours: f64,
        hours_per_day: f64,
        start: NaiveDate,
        calendar: Option<WorkCalendar>,
    ) -> Result<Self, ScheduleError> {
        if !(duration_hours > 0.0) || !(hours_per_day > 0.0) {
            return Err(ScheduleError::NonPositiveHours);
        }
        let days_needed = (duration_hours / hours_per_day).ceil() as usize;

        let calendar = match calendar {
            Some(calendar) => calendar,
            None => {
                let end = start + Duration::days(days_needed as i64);
                debug!(%start, %end, "synthesizing default calendar for job");
                WorkCalendar::new(start, Some(end))?
            }
        };
        let all_days = calendar.working_days();

        // Anchor: first working day at or after the requested start. The
        // search is bounded by the calendar's own end date.
        let mut anchor = start;
        let anchor_idx = loop {
            if anchor > calendar.end() {
                return Err(ScheduleError::StartNotSchedulable {
                    start,
                    end: calendar.end(),
                });
            }
            if let Some(idx) = all_days.iter().position(|day| *day == anchor) {
                break idx;
            }
            anchor = anchor + Duration::days(1);
        };

        let available = all_days.len() - anchor_idx;
        let truncated = days_needed > available;
        if truncated {
            warn!(days_needed, available, "calendar too short for job, schedule truncated");
        }
        let work_days = all_days[anchor_idx..anchor_idx + days_needed.min(available)].to_vec();

        Ok(Self {
            duration_hours,
            hours_per_day,
            work_days,
            truncated,
        })
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    /// The scheduled days, ascending. Never empty.
    pub fn work_days(&self) -> &[NaiveDate] {
        &self.work_days
    }

    /// Number of working days the job occupies.
    pub fn business_days(&self) -> usize {
        self.work_days.len()
    }

    /// Calendar days between the first and last scheduled day.
    pub fn total_span_days(&self) -> i64 {
        (self.last() - self.first()).num_days()
    }

    /// First scheduled day, formatted `%Y-%m-%d`.
    pub fn starts(&self) -> String {
        self.first().format("%Y-%m-%d").to_string()
    }

    /// Last scheduled day, formatted `%Y-%m-%d`.
    pub fn ends(&self) -> String {
        self.last().format("%Y-%m-%d").to_string()
    }

    /// Whether the calendar ran out before the full duration was placed.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Every calendar year from the first scheduled day's through the last
    /// scheduled day's, gap-free. This is the literal year range, not the
    /// distinct years present in the day list.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.first().year()..=self.last().year()
    }

    /// Month numbers as they appear in the scheduled days, adjacent
    /// duplicates collapsed, optionally restricted to one year.
    pub fn months(&self, year: Option<i32>) -> Vec<u32> {
        let mut months: Vec<u32> = self
            .work_days
            .iter()
            .filter(|day| year.is_none_or(|y| day.year() == y))
            .map(|day| day.month())
            .collect();
        months.dedup();
        months
    }

    /// ISO week numbers as they appear in the scheduled days, adjacent
    /// duplicates collapsed, optionally restricted to a year and/or month.
    pub fn weeks(&self, year: Option<i32>, month: Option<u32>) -> Vec<u32> {
        let mut weeks: Vec<u32> = self
            .work_days
            .iter()
            .filter(|day| year.is_none_or(|y| day.year() == y))
            .filter(|day| month.is_none_or(|m| day.month() == m))
            .map(|day| day.iso_week().week())
            .collect();
        weeks.dedup();
        weeks
    }

    /// Fresh iterator over the scheduled days. Restartable: each call
    /// yields a new iterator over the same immutable list.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.work_days.iter().copied()
    }

    // work_days is non-empty by construction: the anchor is always a member.
    fn first(&self) -> NaiveDate {
        self.work_days[0]
    }

    fn last(&self) -> NaiveDate {
        self.work_days[self.work_days.len() - 1]
    }
}
