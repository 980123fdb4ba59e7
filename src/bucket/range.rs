//! Calendar helpers for bucketing periods and their labels.

use time::{Date, Duration, Month};

/// Returns the Monday that starts the calendar week containing `date`.
pub(crate) fn week_start(date: Date) -> Date {
    let weekday_number = date.weekday().number_from_monday() as i64;

    date - Duration::days(weekday_number - 1)
}

/// Returns the first day of the calendar month containing `date`.
pub(crate) fn month_start(date: Date) -> Date {
    date.replace_day(1).expect("day 1 exists in every month")
}

/// The sortable `YYYY-MM` identifier of the month containing `date`.
pub(crate) fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

/// Formats a day label such as "Jan 5".
pub(crate) fn day_label(date: Date) -> String {
    format!("{} {}", month_abbrev(date.month()), date.day())
}

/// Formats a month label such as "Jan 24".
pub(crate) fn month_label(date: Date) -> String {
    format!(
        "{} {:02}",
        month_abbrev(date.month()),
        date.year().rem_euclid(100)
    )
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
