// Date window resolution: explicit bounds, trailing-30-day default,
// independent bounds and inverted windows.

use chrono::{Duration, NaiveDate, Utc};
use payout_ledger::payouts::services::{resolve_window, resolve_window_at};
use payout_ledger::payouts::DateWindow;
use proptest::prelude::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_explicit_bounds_are_used_verbatim() {
    let window = resolve_window(Some(day(2024, 1, 1)), Some(day(2024, 1, 10)));
    assert_eq!(window, DateWindow::new(day(2024, 1, 1), day(2024, 1, 10)));
}

#[test]
fn test_default_is_thirty_days_ending_today() {
    let before = Utc::now().date_naive();
    let window = resolve_window(None, None);
    let after = Utc::now().date_naive();

    // Tolerate the call straddling midnight
    assert!(window.end == before || window.end == after);
    assert_eq!(window.start, window.end - Duration::days(29));
    assert_eq!(window.days(), 30);
}

#[test]
fn test_default_window_crosses_month_and_leap_day() {
    let window = resolve_window_at(None, None, day(2024, 3, 15));
    assert_eq!(window.start, day(2024, 2, 15));
    assert_eq!(window.end, day(2024, 3, 15));
    assert!(window.contains(day(2024, 2, 29)));
}

#[test]
fn test_inverted_window_is_not_corrected() {
    let window = resolve_window_at(Some(day(2024, 6, 1)), Some(day(2024, 5, 1)), day(2024, 7, 1));
    assert_eq!(window.start, day(2024, 6, 1));
    assert_eq!(window.end, day(2024, 5, 1));
    assert_eq!(window.days(), 0);
}

#[test]
fn test_from_after_today_gives_inverted_window() {
    let window = resolve_window_at(Some(day(2024, 8, 1)), None, day(2024, 7, 1));
    assert!(window.start > window.end);
}

proptest! {
    #[test]
    fn test_only_to_always_spans_thirty_days(offset in 0i64..20_000) {
        let to = day(1990, 1, 1) + Duration::days(offset);
        let window = resolve_window_at(None, Some(to), day(2024, 1, 1));

        prop_assert_eq!(window.end, to);
        prop_assert_eq!(window.days(), 30);
    }
}
