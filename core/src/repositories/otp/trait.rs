//! OTP record store trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::otp_record::{OtpKey, OtpRecord};
use crate::errors::DomainError;

/// Persistence contract for OTP records, keyed on (email, application id)
///
/// Implementations hold at most one record per key. The only operation that
/// needs serialization is [`OtpRepository::conditional_consume`], which must be
/// an atomic compare-and-set so concurrent verifications yield a single winner.
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Insert or overwrite the record for its key, resetting `consumed`
    ///
    /// # Returns
    /// * `Ok(())` - Record persisted; any previous code for the key is gone
    /// * `Err(DomainError::StorageFailure)` - Store rejected the write
    async fn upsert(&self, record: OtpRecord) -> Result<(), DomainError>;

    /// Find the unconsumed record for a key, expired or not
    ///
    /// # Returns
    /// * `Ok(Some(OtpRecord))` - Record found with `consumed = false`
    /// * `Ok(None)` - No record, or the record was already consumed
    /// * `Err(DomainError)` - Store error
    async fn find_active(&self, key: &OtpKey) -> Result<Option<OtpRecord>, DomainError>;

    /// Atomically flip `consumed` from false to true
    ///
    /// Succeeds only while the stored code still equals `code`.
    ///
    /// # Returns
    /// * `Ok(true)` - This caller consumed the record
    /// * `Ok(false)` - Already consumed, superseded, or missing
    /// * `Err(DomainError)` - Store error
    async fn conditional_consume(&self, key: &OtpKey, code: &str) -> Result<bool, DomainError>;

    /// Remove the record for a key if it expired before `now`
    ///
    /// # Returns
    /// * `Ok(true)` - A record was removed
    /// * `Ok(false)` - Nothing to remove
    /// * `Err(DomainError)` - Store error
    async fn delete_expired(&self, key: &OtpKey, now: DateTime<Utc>) -> Result<bool, DomainError>;

    /// Connectivity probe used by health checks
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
