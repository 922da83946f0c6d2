//! # coursework-calendar: calendar arithmetic for Coursework
//!
//! Immutable date handling on top of `chrono`:
//!
//! - [`Period`]: years/months/days between two dates
//! - [`shift`] and [`DateShiftExt`]: move a date by calendar units
//! - [`DatePattern`]: render dates with `dd/MM/yyyy`-style patterns
//! - [`YearMonth`]: a month of a year
//! - [`date`] and [`time_of_day`]: validated construction
//!
//! ```
//! use coursework_calendar::{date, DateShiftExt, Period, format_date};
//!
//! let cup = date(2022, 6, 5)?;
//! let games = cup.plus_years(6)?;
//!
//! assert_eq!(format_date(games, "dd/MM/yyyy")?, "05/06/2028");
//! assert_eq!(Period::between(cup, games), Period::new(6, 0, 0));
//! # Ok::<(), coursework_calendar::CalendarError>(())
//! ```

mod error;
mod format;
mod period;
mod shift;
mod year_month;

pub use error::{CalendarError, Result};
pub use format::{DEFAULT_DATE_PATTERN, DatePattern, format_date};
pub use period::Period;
pub use shift::{DateShiftExt, Shift, shift};
pub use year_month::YearMonth;

pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Creates a date, rejecting days that do not exist (e.g. February 30th).
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Creates a time of day at the start of the given minute.
pub fn time_of_day(hour: u32, minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(CalendarError::InvalidTime { hour, minute })
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(2022, 2, 30; "february thirtieth")]
    #[test_case(2021, 2, 29; "leap day in common year")]
    #[test_case(2022, 13, 1; "month thirteen")]
    #[test_case(2022, 6, 0; "day zero")]
    fn rejects_nonexistent_dates(year: i32, month: u32, day: u32) {
        assert_eq!(
            date(year, month, day),
            Err(CalendarError::InvalidDate { year, month, day })
        );
    }

    #[test]
    fn builds_valid_date() {
        assert_eq!(date(2022, 6, 5).unwrap().to_string(), "2022-06-05");
    }

    #[test]
    fn time_of_day_renders_hours_and_minutes() {
        assert_eq!(time_of_day(12, 30).unwrap().to_string(), "12:30:00");
        assert_eq!(
            time_of_day(24, 0),
            Err(CalendarError::InvalidTime { hour: 24, minute: 0 })
        );
    }
}
