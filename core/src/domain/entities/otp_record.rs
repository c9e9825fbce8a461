//! OTP record entity for email-based applicant verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

use adm_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::errors::{DomainError, DomainResult};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest issued code; codes never start with a zero
pub const CODE_MIN: u32 = 100_000;

/// Largest issued code
pub const CODE_MAX: u32 = 999_999;

/// Default expiration time for codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// Generates a 6-digit code uniformly distributed over `CODE_MIN..=CODE_MAX`
///
/// Drawn from the operating system CSPRNG. `gen_range` rejects out-of-zone
/// samples, so the distribution carries no modulo bias.
pub fn generate_code() -> String {
    OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string()
}

/// Composite key identifying one applicant's verification slot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OtpKey {
    /// Normalized applicant email
    pub email: String,
    /// Admission application identifier
    pub application_id: String,
}

impl OtpKey {
    /// Builds a key, normalizing the email and trimming the application id
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` if either component is blank or the email
    /// is not an address.
    pub fn new(email: &str, application_id: &str) -> DomainResult<Self> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(DomainError::Validation {
                message: "email is required".to_string(),
            });
        }
        if !is_valid_email(&email) {
            return Err(DomainError::Validation {
                message: "email is not a valid address".to_string(),
            });
        }

        let application_id = application_id.trim();
        if application_id.is_empty() {
            return Err(DomainError::Validation {
                message: "application_id is required".to_string(),
            });
        }

        Ok(Self {
            email,
            application_id: application_id.to_string(),
        })
    }

    /// Email with the local part masked, for log fields
    pub fn masked_email(&self) -> String {
        mask_email(&self.email)
    }
}

/// Persisted OTP state for one (email, application) key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Normalized applicant email
    pub email: String,

    /// Admission application identifier
    pub application_id: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully verified
    pub consumed: bool,
}

impl OtpRecord {
    /// Creates a fresh, unconsumed record valid for `ttl` from `now`
    ///
    /// # Errors
    ///
    /// `DomainError::Internal` if `now + ttl` is not representable.
    pub fn issue(
        key: &OtpKey,
        code: String,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> DomainResult<Self> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| DomainError::Internal {
                message: format!("OTP expiry overflows: {} + {}", now, ttl),
            })?;

        Ok(Self {
            email: key.email.clone(),
            application_id: key.application_id.clone(),
            code,
            created_at: now,
            expires_at,
            consumed: false,
        })
    }

    pub fn key(&self) -> OtpKey {
        OtpKey {
            email: self.email.clone(),
            application_id: self.application_id.clone(),
        }
    }

    /// Expired strictly after `expires_at`; the boundary instant is still valid
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compares a candidate against the stored code in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.len() != self.code.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Time left before expiry, zero once expired
    pub fn remaining_validity_at(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    fn sample_record() -> OtpRecord {
        let key = OtpKey::new("a@x.com", "APP1").unwrap();
        OtpRecord::issue(
            &key,
            "482913".to_string(),
            fixed_now(),
            Duration::minutes(DEFAULT_EXPIRATION_MINUTES),
        )
        .unwrap()
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..1_000 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(code.as_bytes()[0], b'0');

            let num: u32 = code.parse().expect("Generated code should be a valid number");
            assert!((CODE_MIN..=CODE_MAX).contains(&num));
        }
    }

    #[test]
    fn test_key_normalizes_email() {
        let key = OtpKey::new("  A@X.com ", " APP1 ").unwrap();
        assert_eq!(key.email, "a@x.com");
        assert_eq!(key.application_id, "APP1");
    }

    #[test]
    fn test_key_rejects_blank_components() {
        assert!(matches!(
            OtpKey::new("   ", "APP1"),
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            OtpKey::new("a@x.com", ""),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_key_rejects_malformed_email() {
        for email in ["not-an-email", "two@@x.com", "user@localhost"] {
            assert!(matches!(
                OtpKey::new(email, "APP1"),
                Err(DomainError::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_issue_rejects_unrepresentable_expiry() {
        let key = OtpKey::new("a@x.com", "APP1").unwrap();
        let result = OtpRecord::issue(
            &key,
            "482913".to_string(),
            DateTime::<Utc>::MAX_UTC,
            Duration::minutes(10),
        );
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[test]
    fn test_issue_sets_expiry_and_flags() {
        let record = sample_record();

        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.application_id, "APP1");
        assert_eq!(record.created_at, fixed_now());
        assert_eq!(record.expires_at, fixed_now() + Duration::minutes(10));
        assert!(!record.consumed);
        assert_eq!(record.key(), OtpKey::new("a@x.com", "APP1").unwrap());
    }

    #[test]
    fn test_expiry_boundary() {
        let record = sample_record();

        assert!(!record.is_expired_at(record.expires_at));
        assert!(record.is_expired_at(record.expires_at + Duration::milliseconds(1)));
    }

    #[test]
    fn test_matches() {
        let record = sample_record();

        assert!(record.matches("482913"));
        assert!(!record.matches("482914"));
        assert!(!record.matches("48291"));
        assert!(!record.matches("4829130"));
        assert!(!record.matches(""));
    }

    #[test]
    fn test_remaining_validity() {
        let record = sample_record();

        assert_eq!(record.remaining_validity_at(fixed_now()), Duration::minutes(10));
        assert_eq!(
            record.remaining_validity_at(fixed_now() + Duration::minutes(4)),
            Duration::minutes(6)
        );
        assert_eq!(
            record.remaining_validity_at(fixed_now() + Duration::minutes(11)),
            Duration::zero()
        );
    }

    #[test]
    fn test_serialization() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: OtpRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
