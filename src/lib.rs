pub mod calendar;
pub mod error;
pub mod parse;
pub mod schedule;

pub use calendar::WorkCalendar;
pub use error::{CalendarError, ScheduleError};
pub use parse::parse_partial_iso;
pub use schedule::JobSchedule;
