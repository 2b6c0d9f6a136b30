//! Calendar helpers for budget pacing.

use chrono::{Datelike, NaiveDate};

/// Number of days in the month containing `date`, leap years included.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
        // Only reachable at the edge of chrono's supported range.
        _ => 31,
    }
}

/// Days left in the month after `date`. Zero on the last day.
pub fn remaining_days(date: NaiveDate) -> u32 {
    days_in_month(date) - date.day()
}
