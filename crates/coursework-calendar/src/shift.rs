//! Moving dates forwards and backwards by calendar units.
//!
//! Dates are values: shifting returns a new date and never touches the
//! original.

use std::fmt::{self, Display};

use chrono::{Days, Months, NaiveDate};

use crate::error::{CalendarError, Result};

/// A signed calendar offset in a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Years(i32),
    Months(i32),
    Days(i64),
}

impl Shift {
    /// The same offset in the opposite direction.
    pub fn negated(self) -> Self {
        match self {
            Shift::Years(n) => Shift::Years(n.saturating_neg()),
            Shift::Months(n) => Shift::Months(n.saturating_neg()),
            Shift::Days(n) => Shift::Days(n.saturating_neg()),
        }
    }
}

impl Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shift::Years(n) => write!(f, "{n:+} years"),
            Shift::Months(n) => write!(f, "{n:+} months"),
            Shift::Days(n) => write!(f, "{n:+} days"),
        }
    }
}

/// Applies `shift` to `date`.
///
/// Year and month shifts clamp to the last day of the target month, so
/// January 31st plus one month is the last day of February.
pub fn shift(date: NaiveDate, shift: Shift) -> Result<NaiveDate> {
    let shifted = match shift {
        Shift::Years(n) => shift_months(date, i64::from(n) * 12),
        Shift::Months(n) => shift_months(date, i64::from(n)),
        Shift::Days(n) => {
            let magnitude = Days::new(n.unsigned_abs());
            if n >= 0 {
                date.checked_add_days(magnitude)
            } else {
                date.checked_sub_days(magnitude)
            }
        }
    };

    shifted.ok_or_else(|| CalendarError::Overflow {
        date,
        shift: shift.to_string(),
    })
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

/// Convenience shifts mirroring the `plus_*`/`minus_*` vocabulary.
pub trait DateShiftExt: Sized {
    fn plus_years(self, years: i32) -> Result<Self>;
    fn minus_years(self, years: i32) -> Result<Self>;
    fn plus_months(self, months: i32) -> Result<Self>;
    fn minus_months(self, months: i32) -> Result<Self>;
    fn plus_days(self, days: i64) -> Result<Self>;
    fn minus_days(self, days: i64) -> Result<Self>;
}

impl DateShiftExt for NaiveDate {
    fn plus_years(self, years: i32) -> Result<Self> {
        shift(self, Shift::Years(years))
    }

    fn minus_years(self, years: i32) -> Result<Self> {
        shift(self, Shift::Years(years).negated())
    }

    fn plus_months(self, months: i32) -> Result<Self> {
        shift(self, Shift::Months(months))
    }

    fn minus_months(self, months: i32) -> Result<Self> {
        shift(self, Shift::Months(months).negated())
    }

    fn plus_days(self, days: i64) -> Result<Self> {
        shift(self, Shift::Days(days))
    }

    fn minus_days(self, days: i64) -> Result<Self> {
        shift(self, Shift::Days(days).negated())
    }
}
