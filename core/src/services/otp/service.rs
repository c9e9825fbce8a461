//! Main OTP service implementation

use std::sync::Arc;

use crate::domain::entities::otp_record::{generate_code, OtpKey, OtpRecord};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::otp::OtpRepository;
use crate::services::clock::Clock;

use super::config::OtpServiceConfig;
use super::types::VerificationOutcome;

/// OTP lifecycle service
///
/// Holds no per-request state; the repository is the only shared mutable
/// resource.
pub struct OtpService<R: OtpRepository, C: Clock> {
    /// Record store
    repository: Arc<R>,
    /// Time source for issuance and expiry checks
    clock: Arc<C>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<R: OtpRepository, C: Clock> OtpService<R, C> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `repository` - Record store implementation
    /// * `clock` - Time source
    /// * `config` - Service configuration
    pub fn new(repository: Arc<R>, clock: Arc<C>, config: OtpServiceConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Generate a 6-digit code; no side effects
    pub fn generate(&self) -> String {
        generate_code()
    }

    /// Issue a fresh code for (email, application id)
    ///
    /// Overwrites any previous record for the key, so only the newest code is
    /// valid afterwards.
    ///
    /// # Returns
    ///
    /// * `Ok(OtpRecord)` - The persisted record, including the code to deliver
    /// * `Err(DomainError::Validation)` - Blank email or application id
    /// * `Err(DomainError::Internal)` - The configured lifetime overflows the clock
    /// * `Err(DomainError::StorageFailure)` - The store rejected the write
    pub async fn issue(&self, email: &str, application_id: &str) -> DomainResult<OtpRecord> {
        let key = OtpKey::new(email, application_id)?;
        let now = self.clock.now();
        let record = OtpRecord::issue(&key, self.generate(), now, self.config.ttl()?)?;

        self.repository.upsert(record.clone()).await.map_err(|e| {
            tracing::error!(
                email = %key.masked_email(),
                application_id = %key.application_id,
                error = %e,
                event = "otp_storage_failed",
                "Failed to persist OTP record"
            );
            match e {
                DomainError::StorageFailure { .. } => e,
                other => DomainError::StorageFailure {
                    message: other.to_string(),
                },
            }
        })?;

        tracing::info!(
            email = %key.masked_email(),
            application_id = %key.application_id,
            expires_at = %record.expires_at,
            event = "otp_issued",
            "Issued OTP"
        );
        tracing::debug!(code = %record.code, "Issued OTP code");

        Ok(record)
    }

    /// Verify a candidate code
    ///
    /// Steps run in order and each terminal step returns immediately:
    /// 1. No unconsumed record: `NotFound`
    /// 2. Expired: purge the record, `Expired`
    /// 3. Code differs: `Mismatch`, the record stays valid
    /// 4. Conditional consume: `Verified` for the single winner, `NotFound`
    ///    for a caller that lost the race
    pub async fn verify(
        &self,
        email: &str,
        application_id: &str,
        candidate: &str,
    ) -> VerificationOutcome {
        // A key that cannot be built can never have a record
        let key = match OtpKey::new(email, application_id) {
            Ok(key) => key,
            Err(_) => return VerificationOutcome::NotFound,
        };
        let candidate = candidate.trim();

        let outcome = match self.verify_key(&key, candidate).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(
                    email = %key.masked_email(),
                    application_id = %key.application_id,
                    error = %e,
                    event = "otp_verification_error",
                    "Error verifying OTP"
                );
                VerificationOutcome::VerificationError
            }
        };

        match outcome {
            VerificationOutcome::Verified => tracing::info!(
                email = %key.masked_email(),
                application_id = %key.application_id,
                event = "otp_verified",
                "OTP verified"
            ),
            VerificationOutcome::VerificationError => {}
            other => tracing::warn!(
                email = %key.masked_email(),
                application_id = %key.application_id,
                outcome = other.code(),
                event = "otp_verification_failed",
                "OTP verification failed"
            ),
        }

        outcome
    }

    async fn verify_key(&self, key: &OtpKey, candidate: &str) -> DomainResult<VerificationOutcome> {
        let record = match self.repository.find_active(key).await? {
            Some(record) => record,
            None => return Ok(VerificationOutcome::NotFound),
        };

        let now = self.clock.now();
        if record.is_expired_at(now) {
            if let Err(e) = self.repository.delete_expired(key, now).await {
                tracing::warn!(
                    email = %key.masked_email(),
                    application_id = %key.application_id,
                    error = %e,
                    event = "otp_purge_failed",
                    "Failed to delete expired OTP record"
                );
            }
            return Ok(VerificationOutcome::Expired);
        }

        if !record.matches(candidate) {
            return Ok(VerificationOutcome::Mismatch);
        }

        if self.repository.conditional_consume(key, &record.code).await? {
            Ok(VerificationOutcome::Verified)
        } else {
            Ok(VerificationOutcome::NotFound)
        }
    }
}
