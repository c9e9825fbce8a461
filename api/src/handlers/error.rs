use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use adm_core::errors::DomainError;
use adm_core::services::otp::VerificationOutcome;
use adm_shared::{error_codes, ErrorResponse};

/// Map a domain error onto an HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, message) = match &error {
        DomainError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        DomainError::StorageFailure { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to store OTP".to_string(),
        ),
        DomainError::DeliveryFailure { .. } => (
            StatusCode::BAD_GATEWAY,
            "Failed to send OTP email".to_string(),
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal error occurred".to_string(),
        ),
    };

    if status.is_server_error() {
        tracing::error!(error = %error, code = error.code(), "Request failed");
    } else {
        tracing::debug!(error = %error, code = error.code(), "Request rejected");
    }

    HttpResponse::build(status).json(ErrorResponse::new(error.code(), message))
}

/// 400 response listing the failed fields
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("validation_errors", errors),
    )
}

/// HTTP status for each verification outcome
pub fn outcome_status(outcome: VerificationOutcome) -> StatusCode {
    match outcome {
        VerificationOutcome::Verified => StatusCode::OK,
        VerificationOutcome::Mismatch => StatusCode::BAD_REQUEST,
        VerificationOutcome::Expired => StatusCode::GONE,
        VerificationOutcome::NotFound => StatusCode::NOT_FOUND,
        VerificationOutcome::VerificationError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status() {
        let cases = [
            (
                DomainError::Validation { message: "bad".into() },
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::StorageFailure { message: "db".into() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::DeliveryFailure { message: "smtp".into() },
                StatusCode::BAD_GATEWAY,
            ),
            (
                DomainError::Internal { message: "x".into() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(handle_domain_error(error).status(), expected);
        }
    }

    #[test]
    fn test_outcome_status() {
        assert_eq!(outcome_status(VerificationOutcome::Verified), StatusCode::OK);
        assert_eq!(outcome_status(VerificationOutcome::Mismatch), StatusCode::BAD_REQUEST);
        assert_eq!(outcome_status(VerificationOutcome::Expired), StatusCode::GONE);
        assert_eq!(outcome_status(VerificationOutcome::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            outcome_status(VerificationOutcome::VerificationError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
