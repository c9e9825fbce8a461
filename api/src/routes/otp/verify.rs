use actix_web::{web, HttpResponse};
use validator::Validate;

use adm_core::repositories::OtpRepository;
use adm_core::services::clock::Clock;
use adm_core::services::otp::NotificationSender;

use crate::dto::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::{outcome_status, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/otp/verify
///
/// # Request Body
///
/// ```json
/// {
///     "email": "applicant@example.com",
///     "application_id": "ADM-2025-001",
///     "otp": "482913"
/// }
/// ```
///
/// # Response
///
/// Body is always `{"success": bool, "code": "OTP_...", "message": "..."}`.
/// - 200 OK: `OTP_VERIFIED`
/// - 400 Bad Request: `OTP_INVALID`, or `VALIDATION_ERROR` for a malformed request
/// - 404 Not Found: `OTP_NOT_FOUND` (unknown pair and already-used code look the same)
/// - 410 Gone: `OTP_EXPIRED`
/// - 500 Internal Server Error: `OTP_VERIFICATION_ERROR`
pub async fn verify_otp<R, C, N>(
    state: web::Data<AppState<R, C, N>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    R: OtpRepository + 'static,
    C: Clock + 'static,
    N: NotificationSender + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let outcome = state
        .workflow
        .verify_otp(&request.email, &request.application_id, &request.otp)
        .await;

    HttpResponse::build(outcome_status(outcome)).json(VerifyOtpResponse::from(outcome))
}
