//! Dates command - calendar arithmetic relative to today.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use coursework_calendar::{DateShiftExt, Period, Shift, YearMonth, shift, time_of_day};
use coursework_config::CourseworkConfig;

use crate::style::{print_labeled, print_section};

/// Offsets shown for "today", in display order.
const TODAY_SHIFTS: [Shift; 6] = [
    Shift::Years(-1),
    Shift::Months(-4),
    Shift::Days(-2),
    Shift::Years(1),
    Shift::Months(4),
    Shift::Days(2),
];

pub fn run(config: &CourseworkConfig, today: Option<NaiveDate>) -> Result<()> {
    let now = Local::now().naive_local();
    let (today, now) = match today {
        Some(date) => (date, date.and_time(now.time())),
        None => (now.date(), now),
    };
    let calendar = &config.calendar;
    let event = calendar.reference_event;

    tracing::debug!(%today, %event, "running calendar walkthrough");

    print_section("Today");
    println!("{today}");

    print_section(&format!("Until the {}", calendar.event_label));
    println!("{}", countdown(today, event, &calendar.event_label));

    print_section("Moving today around");
    for offset in TODAY_SHIFTS {
        print_labeled(&offset.to_string(), &shift(today, offset)?.to_string());
    }

    print_section("Dates never change in place");
    let six_years_later = event.plus_years(6)?;
    print_labeled("event", &event.to_string());
    print_labeled("event plus 6 years", &six_years_later.to_string());

    print_section("Formatting");
    let date_pattern = calendar.date_pattern()?;
    let datetime_pattern = calendar.datetime_pattern()?;
    print_labeled(date_pattern.as_str(), &date_pattern.format_date(event)?);
    print_labeled(datetime_pattern.as_str(), &datetime_pattern.format_datetime(now));

    print_section("Other calendar values");
    let august = YearMonth::new(2020, 8)?;
    print_labeled(
        "year-month",
        &format!("{august} ({} days)", august.length_of_month()),
    );
    print_labeled("time of day", &time_of_day(12, 30)?.format("%H:%M").to_string());

    Ok(())
}

/// One-line description of the distance between `today` and the event.
pub fn countdown(today: NaiveDate, event: NaiveDate, label: &str) -> String {
    let period = Period::between(today, event);
    if period.is_zero() {
        format!("The {label} is today.")
    } else if period.is_negative() {
        let elapsed = Period::between(event, today);
        format!("The {label} was {} ago.", elapsed.describe())
    } else {
        format!("{} to go until the {label}.", period.describe())
    }
}
