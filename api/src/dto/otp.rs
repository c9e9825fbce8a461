use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use adm_core::services::otp::VerificationOutcome;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(min = 1, max = 64), custom = "not_blank")]
    pub application_id: String,
    #[validate(length(max = 128))]
    pub recipient_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(min = 1, max = 64), custom = "not_blank")]
    pub application_id: String,
    #[validate(length(min = 1, max = 16), custom = "not_blank")]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,
    pub expires_in_minutes: i64,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

impl From<VerificationOutcome> for VerifyOtpResponse {
    fn from(outcome: VerificationOutcome) -> Self {
        Self {
            success: outcome.is_verified(),
            code: outcome.code().to_string(),
            message: outcome.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_validation() {
        let valid = SendOtpRequest {
            email: "a@x.com".to_string(),
            application_id: "APP1".to_string(),
            recipient_name: None,
        };
        assert!(valid.validate().is_ok());

        let bad_email = SendOtpRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let blank_app = SendOtpRequest {
            application_id: "   ".to_string(),
            ..valid
        };
        assert!(blank_app.validate().is_err());
    }

    #[test]
    fn test_verify_request_requires_otp() {
        let request = VerifyOtpRequest {
            email: "a@x.com".to_string(),
            application_id: "APP1".to_string(),
            otp: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_verify_response_from_outcome() {
        let response = VerifyOtpResponse::from(VerificationOutcome::Expired);
        assert!(!response.success);
        assert_eq!(response.code, "OTP_EXPIRED");
        assert_eq!(response.message, "OTP has expired");
    }
}
