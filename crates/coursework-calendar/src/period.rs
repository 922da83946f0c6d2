//! Calendar periods between two dates.

use std::fmt::{self, Display};

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A date-based amount of time in years, months and days.
///
/// Unlike a duration, a period is anchored to the calendar: one month
/// is however long the month in question is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        days: 0,
    };

    pub fn new(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Calendar difference from `from` to `to`.
    ///
    /// Whole months are counted first; the remainder is expressed in days.
    /// All three components share the sign of the difference, so a
    /// period from a later date to an earlier one is negative throughout.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use coursework_calendar::Period;
    /// let from = NaiveDate::from_ymd_opt(2020, 10, 19).unwrap();
    /// let to = NaiveDate::from_ymd_opt(2022, 6, 5).unwrap();
    /// assert_eq!(Period::between(from, to), Period::new(1, 7, 17));
    /// ```
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        let mut total_months = month_index(to) - month_index(from);
        let mut days = i64::from(to.day()) - i64::from(from.day());

        if total_months > 0 && days < 0 {
            total_months -= 1;
            // `from` plus fewer months than separate it from `to` always fits.
            let anchor = add_months(from, total_months).unwrap_or(from);
            days = to.signed_duration_since(anchor).num_days();
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(days_in_month(to.year(), to.month()));
        }

        Self {
            years: (total_months / 12) as i32,
            months: (total_months % 12) as i32,
            days: days as i32,
        }
    }

    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// True when any component is negative.
    pub fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Human-readable form, e.g. `1 years, 7 months and 17 days`.
    pub fn describe(&self) -> String {
        format!(
            "{} years, {} months and {} days",
            self.years, self.months, self.days
        )
    }
}

/// ISO-8601 period notation, e.g. `P1Y7M17D`; zero is `P0D`.
impl Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "P0D");
        }
        write!(f, "P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

/// Months since year zero, used to count whole months between dates.
fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

/// Number of days in the given month, 28 through 31.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        // Last representable month; chrono's range ends on December 31st.
        _ => 31,
    }
}
