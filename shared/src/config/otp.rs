//! OTP lifetime configuration

use serde::{Deserialize, Serialize};

/// Default OTP validity window in minutes
pub const DEFAULT_OTP_EXPIRY_MINUTES: i64 = 10;

/// Longest accepted validity window, one day
pub const MAX_OTP_EXPIRY_MINUTES: i64 = 1440;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes between issuance and expiry of a code
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: DEFAULT_OTP_EXPIRY_MINUTES,
        }
    }
}

impl OtpConfig {
    /// Create from `OTP_EXPIRY_MINUTES`
    pub fn from_env() -> Self {
        Self {
            expiry_minutes: std::env::var("OTP_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_OTP_EXPIRY_MINUTES),
        }
    }
}

fn default_expiry_minutes() -> i64 {
    DEFAULT_OTP_EXPIRY_MINUTES
}
