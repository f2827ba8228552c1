//! Calendar date helpers for the grid's horizontal axis.
//!
//! The grid's columns are the days of one calendar year; these helpers build
//! that axis and answer the per-date questions cells need (weekend marking,
//! day arithmetic).

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};

/// All dates of a calendar year, January 1 through December 31 inclusive
/// (365 or 366 entries). An out-of-range year yields an empty vec.
#[must_use]
pub fn dates_in_year(year: i32) -> Vec<NaiveDate> {
    let Some(start) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    let Some(end) = NaiveDate::from_ymd_opt(year, 12, 31) else {
        return Vec::new();
    };
    date_range(start, end)
}

/// All dates between `start` and `end` inclusive. Empty when `start > end`.
#[must_use]
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Whether the date falls on a Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `date` shifted by `days` (may be negative). `None` on calendar overflow.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

/// Absolute difference between two dates in whole days.
#[must_use]
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// The current year per the system clock.
#[must_use]
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn year_has_365_days() {
        let dates = dates_in_year(2025);
        assert_eq!(dates.len(), 365);
        assert_eq!(dates[0], d(2025, 1, 1));
        assert_eq!(dates[364], d(2025, 12, 31));
    }

    #[test]
    fn leap_year_has_366_days() {
        assert_eq!(dates_in_year(2024).len(), 366);
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let dates = date_range(d(2025, 3, 10), d(2025, 3, 12));
        assert_eq!(dates, vec![d(2025, 3, 10), d(2025, 3, 11), d(2025, 3, 12)]);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(date_range(d(2025, 3, 12), d(2025, 3, 10)).is_empty());
    }

    #[test]
    fn weekend_detection() {
        // 2025-03-15 is a Saturday, 2025-03-16 a Sunday, 2025-03-17 a Monday
        assert!(is_weekend(d(2025, 3, 15)));
        assert!(is_weekend(d(2025, 3, 16)));
        assert!(!is_weekend(d(2025, 3, 17)));
    }

    #[test]
    fn add_days_crosses_month_boundary() {
        assert_eq!(add_days(d(2025, 3, 30), 3), Some(d(2025, 4, 2)));
        assert_eq!(add_days(d(2025, 3, 2), -3), Some(d(2025, 2, 27)));
    }

    #[test]
    fn days_between_is_symmetric() {
        assert_eq!(days_between(d(2025, 3, 10), d(2025, 3, 15)), 5);
        assert_eq!(days_between(d(2025, 3, 15), d(2025, 3, 10)), 5);
        assert_eq!(days_between(d(2025, 3, 10), d(2025, 3, 10)), 0);
    }
}
