//! Types for OTP service results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a verification attempt
///
/// Every attempt resolves to exactly one outcome; storage errors on the
/// verify path surface as `VerificationError` rather than `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Code matched and the record was consumed by this attempt
    Verified,
    /// No unconsumed record exists for the key
    NotFound,
    /// Record existed but its expiry time has passed; it has been purged
    Expired,
    /// Record is active but the code did not match; it stays valid
    Mismatch,
    /// The record store failed during verification
    VerificationError,
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified)
    }

    /// Human-readable message returned to callers
    pub fn message(&self) -> &'static str {
        match self {
            VerificationOutcome::Verified => "OTP verified successfully",
            VerificationOutcome::NotFound => "OTP not found or already used",
            VerificationOutcome::Expired => "OTP has expired",
            VerificationOutcome::Mismatch => "Invalid OTP",
            VerificationOutcome::VerificationError => "Error verifying OTP",
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            VerificationOutcome::Verified => "OTP_VERIFIED",
            VerificationOutcome::NotFound => "OTP_NOT_FOUND",
            VerificationOutcome::Expired => "OTP_EXPIRED",
            VerificationOutcome::Mismatch => "OTP_INVALID",
            VerificationOutcome::VerificationError => "OTP_VERIFICATION_ERROR",
        }
    }
}

impl std::fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Message handed to a notification sender after a code is issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpNotification {
    pub recipient_email: String,
    pub recipient_name: Option<String>,
    pub application_id: String,
    pub code: String,
    pub expires_in_minutes: i64,
}

/// Result of requesting a code
#[derive(Debug, Clone, Serialize)]
pub struct OtpRequestResult {
    /// Provider message id
    pub message_id: String,
    /// When the issued code stops being accepted
    pub expires_at: DateTime<Utc>,
    pub expires_in_minutes: i64,
}
