//! Calendar arithmetic over a reference date
//!
//! Pure functions; every input is a valid calendar date by construction.

use chrono::{Datelike, NaiveDate, Weekday};

/// Number of days in the given month, leap years included
///
/// Months outside 1..=12 yield 0.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match next_first {
        Some(next) => (next - first).num_days() as u32,
        // Only reachable at the very end of chrono's range, where December has 31 days
        None => 31,
    }
}

/// Days left in the month after `date`, floored at 0
pub fn days_remaining(date: NaiveDate) -> u32 {
    days_in_month(date.year(), date.month()).saturating_sub(date.day())
}

/// Monday to Friday
pub fn is_workday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Workdays strictly after `date` through the end of its month
pub fn remaining_workdays(date: NaiveDate) -> u32 {
    date.iter_days()
        .skip(1)
        .take(days_remaining(date) as usize)
        .filter(|d| is_workday(*d))
        .count() as u32
}
