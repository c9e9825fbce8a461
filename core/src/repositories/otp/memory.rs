//! In-memory implementation of OtpRepository for tests and local development

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::otp_record::{OtpKey, OtpRecord};
use crate::errors::DomainError;

use super::r#trait::OtpRepository;

/// Record store backed by a `HashMap` behind a tokio `RwLock`
///
/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryOtpRepository {
    records: Arc<RwLock<HashMap<OtpKey, OtpRecord>>>,
    should_fail: Arc<AtomicBool>,
}

impl InMemoryOtpRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation return `StorageFailure`
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored record for a key, consumed or not
    pub async fn get(&self, key: &OtpKey) -> Option<OtpRecord> {
        self.records.read().await.get(key).cloned()
    }

    /// Insert a record as-is, bypassing upsert semantics
    pub async fn insert_raw(&self, record: OtpRecord) {
        self.records.write().await.insert(record.key(), record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::StorageFailure {
                message: "in-memory store unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtpRepository {
    async fn upsert(&self, mut record: OtpRecord) -> Result<(), DomainError> {
        self.check_available()?;

        record.consumed = false;
        let mut records = self.records.write().await;
        records.insert(record.key(), record);
        Ok(())
    }

    async fn find_active(&self, key: &OtpKey) -> Result<Option<OtpRecord>, DomainError> {
        self.check_available()?;

        let records = self.records.read().await;
        Ok(records.get(key).filter(|r| !r.consumed).cloned())
    }

    async fn conditional_consume(&self, key: &OtpKey, code: &str) -> Result<bool, DomainError> {
        self.check_available()?;

        let mut records = self.records.write().await;
        match records.get_mut(key) {
            Some(record) if !record.consumed && record.code == code => {
                record.consumed = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_expired(&self, key: &OtpKey, now: DateTime<Utc>) -> Result<bool, DomainError> {
        self.check_available()?;

        let mut records = self.records.write().await;
        let expired = records
            .get(key)
            .map(|r| r.expires_at < now)
            .unwrap_or(false);

        if expired {
            records.remove(key);
        }
        Ok(expired)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.check_available()
    }
}
