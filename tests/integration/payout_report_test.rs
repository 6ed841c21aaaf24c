// End-to-end payout report generation over an in-memory revenue store.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use helpers::InMemoryRevenueRepository;
use payout_ledger::core::AppError;
use payout_ledger::payouts::{PayoutService, RevenueRecord};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(date: NaiveDate, app_id: &str, revenue: Decimal) -> RevenueRecord {
    RevenueRecord {
        date,
        app_id: app_id.to_string(),
        revenue,
        status: Some("confirmed".to_string()),
    }
}

#[tokio::test]
async fn test_report_for_explicit_window() {
    let rows = vec![
        record(day(2024, 1, 1), "app-a", dec!(100)),
        record(day(2024, 1, 5), "app-b", dec!(200)),
        record(day(2024, 1, 10), "app-a", dec!(0)),
        record(day(2024, 1, 11), "app-a", dec!(500)),
    ];
    let repo = Arc::new(InMemoryRevenueRepository::with_rows("adv-1", rows));
    let service = PayoutService::new(repo.clone());

    let report = service
        .generate_report("adv-1", Some(day(2024, 1, 1)), Some(day(2024, 1, 10)))
        .await
        .unwrap();

    assert_eq!(report.window.start, day(2024, 1, 1));
    assert_eq!(report.window.end, day(2024, 1, 10));
    assert_eq!(report.items.len(), 3);
    assert_eq!(report.items[0].date, day(2024, 1, 10));
    assert_eq!(report.totals.gross_revenue, dec!(300));
    assert_eq!(report.totals.commission_ex_gst, dec!(76.271186));
    assert_eq!(report.totals.net_payout, dec!(223.728814));

    let first = report.items.iter().find(|l| l.gross_revenue == dec!(100)).unwrap();
    assert_eq!(first.commission_ex_gst, dec!(25.423729));
    assert_eq!(first.gst_on_commission, dec!(4.576271));
    assert_eq!(first.status.as_deref(), Some("confirmed"));
}

#[tokio::test]
async fn test_default_window_is_trailing_thirty_days() {
    let today = Utc::now().date_naive();
    let rows = vec![
        record(today, "app", dec!(10)),
        record(today - Duration::days(29), "app", dec!(10)),
        record(today - Duration::days(30), "app", dec!(10)),
    ];
    let repo = Arc::new(InMemoryRevenueRepository::with_rows("adv-1", rows));
    let service = PayoutService::new(repo.clone());

    let report = service.generate_report("adv-1", None, None).await.unwrap();

    let window = repo.last_window.lock().unwrap().unwrap();
    assert_eq!(window, report.window);
    assert_eq!(window.days(), 30);
    // Rows on both edges of the window are included, the one before it is not
    // (unless the test straddled midnight and shifted the window by a day)
    assert!(report.items.len() == 2 || window.end != today);
}

#[tokio::test]
async fn test_report_is_scoped_to_advertiser() {
    let repo = Arc::new(InMemoryRevenueRepository::with_rows(
        "adv-1",
        vec![record(day(2024, 1, 2), "app", dec!(100))],
    ));
    let service = PayoutService::new(repo);

    let report = service
        .generate_report("adv-2", Some(day(2024, 1, 1)), Some(day(2024, 1, 31)))
        .await
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.totals.gross_revenue, Decimal::ZERO);
    assert_eq!(report.totals.net_payout, Decimal::ZERO);
}

#[tokio::test]
async fn test_advertiser_id_is_trimmed() {
    let repo = Arc::new(InMemoryRevenueRepository::with_rows(
        "adv-1",
        vec![record(day(2024, 1, 2), "app", dec!(118))],
    ));
    let service = PayoutService::new(repo);

    let report = service
        .generate_report(" adv-1 ", Some(day(2024, 1, 1)), Some(day(2024, 1, 31)))
        .await
        .unwrap();

    assert_eq!(report.totals.commission_ex_gst, dec!(30));
    assert_eq!(report.totals.gst_on_commission, dec!(5.4));
    assert_eq!(report.totals.net_payout, dec!(88));
}

#[tokio::test]
async fn test_inverted_window_yields_empty_report() {
    let repo = Arc::new(InMemoryRevenueRepository::with_rows(
        "adv-1",
        vec![record(day(2024, 1, 5), "app", dec!(100))],
    ));
    let service = PayoutService::new(repo);

    let report = service
        .generate_report("adv-1", Some(day(2024, 1, 10)), Some(day(2024, 1, 1)))
        .await
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.window.start, day(2024, 1, 10));
}

#[tokio::test]
async fn test_blank_advertiser_is_rejected() {
    let service = PayoutService::new(Arc::new(InMemoryRevenueRepository::default()));

    let err = service.generate_report("   ", None, None).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}
