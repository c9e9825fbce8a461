//! Unit tests for the in-memory OTP repository

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::otp_record::{OtpKey, OtpRecord};
use crate::errors::DomainError;
use crate::repositories::otp::{InMemoryOtpRepository, OtpRepository};

fn key() -> OtpKey {
    OtpKey::new("a@x.com", "APP1").unwrap()
}

fn record(code: &str) -> OtpRecord {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
    OtpRecord::issue(&key(), code.to_string(), now, Duration::minutes(10)).unwrap()
}

#[tokio::test]
async fn test_upsert_and_find_active() {
    let repo = InMemoryOtpRepository::new();
    repo.upsert(record("123456")).await.unwrap();

    let found = repo.find_active(&key()).await.unwrap();
    assert_eq!(found.map(|r| r.code), Some("123456".to_string()));
}

#[tokio::test]
async fn test_upsert_overwrites_and_resets_consumed() {
    let repo = InMemoryOtpRepository::new();
    let mut consumed = record("111111");
    consumed.consumed = true;
    repo.insert_raw(consumed).await;

    assert!(repo.find_active(&key()).await.unwrap().is_none());

    repo.upsert(record("222222")).await.unwrap();

    let found = repo.find_active(&key()).await.unwrap().unwrap();
    assert_eq!(found.code, "222222");
    assert!(!found.consumed);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_conditional_consume_succeeds_once() {
    let repo = InMemoryOtpRepository::new();
    repo.upsert(record("123456")).await.unwrap();

    assert!(repo.conditional_consume(&key(), "123456").await.unwrap());
    assert!(!repo.conditional_consume(&key(), "123456").await.unwrap());
    assert!(repo.find_active(&key()).await.unwrap().is_none());
    assert!(repo.get(&key()).await.unwrap().consumed);
}

#[tokio::test]
async fn test_conditional_consume_rejects_superseded_code() {
    let repo = InMemoryOtpRepository::new();
    repo.upsert(record("111111")).await.unwrap();
    repo.upsert(record("222222")).await.unwrap();

    assert!(!repo.conditional_consume(&key(), "111111").await.unwrap());
    assert!(repo.conditional_consume(&key(), "222222").await.unwrap());
}

#[tokio::test]
async fn test_conditional_consume_missing_key() {
    let repo = InMemoryOtpRepository::new();
    assert!(!repo.conditional_consume(&key(), "123456").await.unwrap());
}

#[tokio::test]
async fn test_delete_expired_only_removes_past_records() {
    let repo = InMemoryOtpRepository::new();
    let rec = record("123456");
    let expires_at = rec.expires_at;
    repo.upsert(rec).await.unwrap();

    assert!(!repo.delete_expired(&key(), expires_at).await.unwrap());
    assert_eq!(repo.len().await, 1);

    assert!(repo
        .delete_expired(&key(), expires_at + Duration::seconds(1))
        .await
        .unwrap());
    assert!(repo.is_empty().await);
    assert!(!repo
        .delete_expired(&key(), expires_at + Duration::seconds(1))
        .await
        .unwrap());
}

#[tokio::test]
async fn test_keys_are_independent() {
    let repo = InMemoryOtpRepository::new();
    let other = OtpKey::new("a@x.com", "APP2").unwrap();
    let now = Utc::now();

    repo.upsert(record("111111")).await.unwrap();
    let record_other =
        OtpRecord::issue(&other, "222222".to_string(), now, Duration::minutes(10)).unwrap();
    repo.upsert(record_other).await.unwrap();

    assert!(repo.conditional_consume(&key(), "111111").await.unwrap());
    let still_active = repo.find_active(&other).await.unwrap().unwrap();
    assert_eq!(still_active.code, "222222");
}

#[tokio::test]
async fn test_failure_injection() {
    let repo = InMemoryOtpRepository::new();
    repo.set_should_fail(true);

    assert!(matches!(
        repo.upsert(record("123456")).await,
        Err(DomainError::StorageFailure { .. })
    ));
    assert!(repo.find_active(&key()).await.is_err());
    assert!(repo.conditional_consume(&key(), "123456").await.is_err());
    assert!(repo.ping().await.is_err());

    repo.set_should_fail(false);
    assert!(repo.ping().await.is_ok());
}
