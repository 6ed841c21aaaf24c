// Billing profile find-or-create semantics over an in-memory repository.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use helpers::InMemoryBillingRepository;
use payout_ledger::billing::{BillingDetailsPayload, BillingService};
use payout_ledger::core::AppError;

fn service() -> (BillingService, Arc<InMemoryBillingRepository>) {
    let repo = Arc::new(InMemoryBillingRepository::default());
    (BillingService::new(repo.clone()), repo)
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[tokio::test]
async fn test_missing_profile_returns_placeholder() {
    let (service, repo) = service();

    let profile = service.get("adv-1").await.unwrap();

    assert!(profile.is_placeholder());
    assert_eq!(profile.id, None);
    assert_eq!(profile.account_number, None);
    assert!(repo.stored("adv-1").is_none());
}

#[tokio::test]
async fn test_first_upsert_inserts_then_get_returns_it() {
    let (service, repo) = service();
    let payload = BillingDetailsPayload {
        beneficiary_name: text("Acme Media Pvt Ltd"),
        account_number: text("001122334455"),
        ifsc_code: text("HDFC0000123"),
        ..Default::default()
    };

    let created = service.upsert("adv-1", payload).await.unwrap();
    let fetched = service.get("adv-1").await.unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.advertiser_id.as_deref(), Some("adv-1"));
    assert_eq!(fetched, created);
    assert_eq!(repo.inserts.load(Ordering::SeqCst), 1);
    assert_eq!(repo.updates.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_partial_update_keeps_unmentioned_fields() {
    let (service, repo) = service();
    service
        .upsert(
            "adv-1",
            BillingDetailsPayload {
                beneficiary_name: text("Acme Media"),
                account_number: text("111"),
                pan: text("ABCDE1234F"),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let updated = service
        .upsert(
            "adv-1",
            BillingDetailsPayload {
                account_number: text("222"),
                bank_name: text("HDFC Bank"),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.account_number.as_deref(), Some("222"));
    assert_eq!(updated.bank_name.as_deref(), Some("HDFC Bank"));
    assert_eq!(updated.beneficiary_name.as_deref(), Some("Acme Media"));
    assert_eq!(updated.pan.as_deref(), Some("ABCDE1234F"));
    assert_eq!(repo.inserts.load(Ordering::SeqCst), 1);
    assert_eq!(repo.updates.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_blank_values_do_not_clear_stored_fields() {
    let (service, _repo) = service();
    service
        .upsert(
            "adv-1",
            BillingDetailsPayload {
                gstin: text("27ABCDE1234F1Z5"),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let updated = service
        .upsert(
            "adv-1",
            BillingDetailsPayload {
                gstin: text("   "),
                swift_code: text("  HDFCINBB "),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.gstin.as_deref(), Some("27ABCDE1234F1Z5"));
    assert_eq!(updated.swift_code.as_deref(), Some("HDFCINBB"));
}

#[tokio::test]
async fn test_profiles_are_scoped_per_advertiser() {
    let (service, _repo) = service();
    service
        .upsert(
            "adv-1",
            BillingDetailsPayload {
                bank_name: text("SBI"),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let other = service.get("adv-2").await.unwrap();

    assert!(other.is_placeholder());
}

#[tokio::test]
async fn test_blank_advertiser_is_rejected() {
    let (service, repo) = service();

    let get_err = service.get("  ").await.unwrap_err();
    let put_err = service
        .upsert("", BillingDetailsPayload::default())
        .await
        .unwrap_err();

    assert!(matches!(get_err, AppError::Validation(_)));
    assert!(matches!(put_err, AppError::Validation(_)));
    assert_eq!(repo.inserts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_update_writes_the_merged_profile() {
    let (service, repo) = service();
    service
        .upsert(
            "adv-1",
            BillingDetailsPayload {
                beneficiary_name: text("Acme Media"),
                ifsc_code: text("HDFC0000123"),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    service
        .upsert(
            "adv-1",
            BillingDetailsPayload {
                ifsc_code: text(" ICIC0000456 "),
                pan: text(""),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // The repository stores exactly what it is handed, so the merge happened upstream
    let stored = repo.stored("adv-1").unwrap();
    assert_eq!(stored.beneficiary_name.as_deref(), Some("Acme Media"));
    assert_eq!(stored.ifsc_code.as_deref(), Some("ICIC0000456"));
    assert_eq!(stored.pan, None);
    assert_eq!(repo.updates.load(Ordering::SeqCst), 1);
}
