//! Calendar error types.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time of day {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("invalid year-month {year:04}-{month:02}")]
    InvalidYearMonth { year: i32, month: u32 },

    #[error("shifting {date} by {shift} leaves the supported date range")]
    Overflow { date: NaiveDate, shift: String },

    #[error("unsupported date pattern '{pattern}': {reason}")]
    UnsupportedPattern { pattern: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CalendarError>;
