//! Completion-date projection for the admin dashboard.
//!
//! Remaining work is converted to calendar days and walked forward one day
//! at a time from today, consuming a day of capacity only on weekdays.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

/// Estimated effort to build one screen.
pub const HOURS_PER_SCREEN: f64 = 8.0;
/// Working hours available per weekday.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Projected completion of the remaining backlog.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionProjection {
    /// Items not yet complete (pending + in progress).
    pub remaining_items: usize,
    /// `remaining_items * hours_per_item`.
    pub remaining_hours: f64,
    /// First calendar date by which the remaining hours fit.
    pub projected_date: NaiveDate,
}

/// Project the completion date for the remaining backlog.
///
/// Returns `None` when nothing remains — an empty backlog has no projection,
/// not a zero date. Saturdays and Sundays advance the calendar without
/// consuming capacity.
pub fn project_completion(
    pending: usize,
    in_progress: usize,
    hours_per_item: f64,
    hours_per_day: f64,
    today: NaiveDate,
) -> Option<CompletionProjection> {
    let remaining_items = pending + in_progress;
    if remaining_items == 0 {
        return None;
    }

    let remaining_hours = remaining_items as f64 * hours_per_item;
    let mut days_needed = (remaining_hours / hours_per_day).ceil() as u64;

    let mut date = today;
    while days_needed > 0 {
        date = date
            .checked_add_days(Days::new(1))
            .expect("date walk stays far from the calendar bounds");
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            days_needed -= 1;
        }
    }

    Some(CompletionProjection {
        remaining_items,
        remaining_hours,
        projected_date: date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn two_days_of_work_from_friday_lands_on_tuesday() {
        // 2026-01-02 is a Friday.
        let friday = date(2026, 1, 2);
        assert_eq!(friday.weekday(), Weekday::Fri);

        let p = project_completion(2, 0, 8.0, 8.0, friday).unwrap();
        assert_eq!(p.remaining_items, 2);
        assert!((p.remaining_hours - 16.0).abs() < f64::EPSILON);
        // Sat 03 and Sun 04 are skipped; Mon 05 and Tue 06 consume the two days.
        assert_eq!(p.projected_date, date(2026, 1, 6));
        assert_eq!(p.projected_date.weekday(), Weekday::Tue);
    }

    #[test]
    fn empty_backlog_has_no_projection() {
        let monday = date(2026, 1, 5);
        assert!(project_completion(0, 0, 8.0, 8.0, monday).is_none());
    }

    #[test]
    fn in_progress_items_count_as_remaining() {
        let monday = date(2026, 1, 5);
        let p = project_completion(0, 1, 8.0, 8.0, monday).unwrap();
        assert_eq!(p.remaining_items, 1);
        assert_eq!(p.projected_date, date(2026, 1, 6));
    }

    #[test]
    fn partial_days_round_up() {
        let monday = date(2026, 1, 5);
        // 3 items x 4h = 12h -> ceil(12 / 8) = 2 days.
        let p = project_completion(3, 0, 4.0, 8.0, monday).unwrap();
        assert_eq!(p.projected_date, date(2026, 1, 7));
    }

    #[test]
    fn long_backlog_walks_over_multiple_weekends() {
        let friday = date(2026, 1, 2);
        // 10 weekdays from Friday: Mon 05..Fri 09, Mon 12..Fri 16.
        let p = project_completion(10, 0, 8.0, 8.0, friday).unwrap();
        assert_eq!(p.projected_date, date(2026, 1, 16));
    }
}
