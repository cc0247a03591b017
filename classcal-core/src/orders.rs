//! Day orders and the sync window they span.
//!
//! The timetable API reports upcoming days as bare day-of-month numbers, each
//! carrying a day-order label ("1".."5"). Days inside the reported span that
//! carry no order are holidays: the calendar must be cleared for them.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

/// Day of month → day-order label, for the upcoming working days.
pub type DayOrderMap = BTreeMap<u32, String>;

/// The contiguous span of day numbers covered by a fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncWindow {
    pub first: u32,
    pub last: u32,
}

impl SyncWindow {
    /// The span covered by a day-order map, or None when nothing was fetched.
    pub fn from_orders(orders: &DayOrderMap) -> Option<Self> {
        let first = *orders.keys().next()?;
        let last = *orders.keys().last()?;
        Some(SyncWindow { first, last })
    }

    /// Day numbers inside the window that carry no day order.
    pub fn holidays(&self, orders: &DayOrderMap) -> Vec<u32> {
        (self.first..=self.last)
            .filter(|day| !orders.contains_key(day))
            .collect()
    }
}

/// The calendar date a day number refers to.
///
/// Resolved relative to today by day-number arithmetic: day numbers are
/// assumed to fall in today's month, so a number from an adjacent month
/// lands on the wrong date.
pub fn date_for(today: NaiveDate, day: u32) -> NaiveDate {
    let delta = i64::from(day) - i64::from(today.day());
    today + Duration::days(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders(pairs: &[(u32, &str)]) -> DayOrderMap {
        pairs
            .iter()
            .map(|(day, order)| (*day, order.to_string()))
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- window ---

    #[test]
    fn window_spans_min_to_max() {
        let map = orders(&[(12, "3"), (10, "1"), (14, "4")]);
        let window = SyncWindow::from_orders(&map).unwrap();
        assert_eq!(window, SyncWindow { first: 10, last: 14 });
    }

    #[test]
    fn empty_map_has_no_window() {
        assert!(SyncWindow::from_orders(&DayOrderMap::new()).is_none());
    }

    #[test]
    fn single_day_window() {
        let map = orders(&[(7, "2")]);
        let window = SyncWindow::from_orders(&map).unwrap();
        assert_eq!(window, SyncWindow { first: 7, last: 7 });
    }

    // --- holidays ---

    #[test]
    fn holidays_are_the_gaps_in_the_window() {
        let map = orders(&[(10, "1"), (11, "2"), (13, "3"), (15, "4")]);
        let window = SyncWindow::from_orders(&map).unwrap();
        assert_eq!(window.holidays(&map), vec![12, 14]);
    }

    #[test]
    fn contiguous_window_has_no_holidays() {
        let map = orders(&[(3, "1"), (4, "2"), (5, "3")]);
        let window = SyncWindow::from_orders(&map).unwrap();
        assert!(window.holidays(&map).is_empty());
    }

    // --- date resolution ---

    #[test]
    fn todays_number_resolves_to_today() {
        let today = date(2025, 3, 14);
        assert_eq!(date_for(today, 14), today);
    }

    #[test]
    fn later_numbers_resolve_forward() {
        let today = date(2025, 3, 10);
        assert_eq!(date_for(today, 14), date(2025, 3, 14));
    }

    #[test]
    fn day_numbers_resolve_within_the_current_month() {
        // A day number smaller than today's resolves backwards, even when it
        // was meant as next month's date.
        let today = date(2025, 3, 30);
        assert_eq!(date_for(today, 2), date(2025, 3, 2));
    }
}
