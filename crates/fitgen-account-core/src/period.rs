//! Subscription period arithmetic
//!
//! Calendar-month addition with day-of-month clamping: adding a month to
//! Jan 31 lands on Feb 28 (or 29), not an invalid date.

use chrono::{DateTime, Months, Utc};

/// Advance a timestamp by a number of calendar months
///
/// Returns `None` only on date overflow (far-future timestamps).
pub fn add_calendar_months(start: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    start.checked_add_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_plain_month_addition() {
        assert_eq!(add_calendar_months(date(2025, 3, 15), 1), Some(date(2025, 4, 15)));
        assert_eq!(add_calendar_months(date(2025, 3, 15), 3), Some(date(2025, 6, 15)));
    }

    #[test]
    fn test_jan_31_clamps_to_end_of_february() {
        assert_eq!(add_calendar_months(date(2025, 1, 31), 1), Some(date(2025, 2, 28)));
        // Leap year
        assert_eq!(add_calendar_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_31st_clamps_into_30_day_month() {
        assert_eq!(add_calendar_months(date(2025, 8, 31), 1), Some(date(2025, 9, 30)));
    }

    #[test]
    fn test_twelve_months_is_exactly_one_year() {
        assert_eq!(add_calendar_months(date(2025, 6, 10), 12), Some(date(2026, 6, 10)));
    }

    #[test]
    fn test_year_boundary() {
        assert_eq!(add_calendar_months(date(2025, 11, 30), 3), Some(date(2026, 2, 28)));
    }

    #[test]
    fn test_time_of_day_is_preserved() {
        let start = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 58).unwrap();
        let end = add_calendar_months(start, 1).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 2, 28, 23, 59, 58).unwrap());
    }
}
