use actix_web::{web, HttpResponse};
use validator::Validate;

use adm_core::repositories::OtpRepository;
use adm_core::services::clock::Clock;
use adm_core::services::otp::NotificationSender;
use adm_shared::ApiResponse;

use crate::dto::{SendOtpRequest, SendOtpResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/otp/send
///
/// Issues a fresh code for the (email, application) pair, replacing any
/// previous one, and emails it to the applicant.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "applicant@example.com",
///     "application_id": "ADM-2025-001",
///     "recipient_name": "Asha"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": {
///         "message": "OTP sent successfully",
///         "expires_in_minutes": 10,
///         "expires_at": "2025-03-01T09:10:00Z"
///     },
///     "timestamp": "2025-03-01T09:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing or invalid email, empty application id
/// - 500 Internal Server Error: the code could not be stored
/// - 502 Bad Gateway: the email provider did not accept the message
pub async fn send_otp<R, C, N>(
    state: web::Data<AppState<R, C, N>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    R: OtpRepository + 'static,
    C: Clock + 'static,
    N: NotificationSender + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let result = state
        .workflow
        .request_otp(
            &request.email,
            &request.application_id,
            request.recipient_name.as_deref(),
        )
        .await;

    match result {
        Ok(sent) => HttpResponse::Ok().json(ApiResponse::success(SendOtpResponse {
            message: "OTP sent successfully".to_string(),
            expires_in_minutes: sent.expires_in_minutes,
            expires_at: sent.expires_at,
        })),
        Err(error) => handle_domain_error(error),
    }
}
