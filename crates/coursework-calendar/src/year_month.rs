//! Year-month values such as a credit card expiry or a billing cycle.

use std::fmt::{self, Display};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::period::days_in_month;

/// A month of a specific year, with no day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "YearMonthFields")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Unchecked wire shape; `YearMonth` is only built from it through `new`.
#[derive(Deserialize)]
struct YearMonthFields {
    year: i32,
    month: u32,
}

impl TryFrom<YearMonthFields> for YearMonth {
    type Error = CalendarError;

    fn try_from(fields: YearMonthFields) -> Result<Self> {
        Self::new(fields.year, fields.month)
    }
}

impl YearMonth {
    /// Creates a year-month; `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        // Day 1 of the month must exist in chrono's supported range.
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CalendarError::InvalidYearMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// The year-month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Days in this month, 28 through 31.
    pub fn length_of_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn is_leap_year(&self) -> bool {
        NaiveDate::from_ymd_opt(self.year, 2, 29).is_some()
    }

    /// The date on `day` of this month.
    pub fn at_day(&self, day: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or(CalendarError::InvalidDate {
            year: self.year,
            month: self.month,
            day,
        })
    }
}

/// Renders as `yyyy-MM`.
impl Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
