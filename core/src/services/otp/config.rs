//! Configuration for the OTP service

use adm_shared::OtpConfig;

use crate::domain::entities::otp_record::DEFAULT_EXPIRATION_MINUTES;
use crate::errors::{DomainError, DomainResult};

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before an issued code expires
    pub code_expiration_minutes: i64,
}

impl OtpServiceConfig {
    /// Validity window as a duration
    ///
    /// Fails with `DomainError::Internal` when the minute count is outside
    /// what `chrono::Duration` can hold.
    pub fn ttl(&self) -> DomainResult<chrono::Duration> {
        chrono::Duration::try_minutes(self.code_expiration_minutes).ok_or_else(|| {
            DomainError::Internal {
                message: format!(
                    "OTP lifetime of {} minutes is out of range",
                    self.code_expiration_minutes
                ),
            }
        })
    }
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            code_expiration_minutes: config.expiry_minutes,
        }
    }
}
