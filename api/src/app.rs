//! Application factory
//!
//! Builds the Actix-web application around a shared [`AppState`]. The same
//! factory serves the binary and the route tests.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{error, web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use adm_core::repositories::OtpRepository;
use adm_core::services::clock::Clock;
use adm_core::services::otp::NotificationSender;
use adm_shared::{error_codes, AppConfig, ErrorResponse};

use crate::middleware::create_cors;
use crate::routes::health::health_check;
use crate::routes::otp::{send_otp, verify_otp, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<R, C, N>(
    app_state: web::Data<AppState<R, C, N>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: OtpRepository + 'static,
    C: Clock + 'static,
    N: NotificationSender + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!(error = %message, "Rejected malformed JSON body");
            let response = HttpResponse::BadRequest().json(
                ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request body")
                    .add_detail("reason", message),
            );
            error::InternalError::from_response(err, response).into()
        });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Last wrap runs first, so the request span covers CORS rejections
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<R, C, N>))
        .service(
            web::scope("/api/v1").service(
                web::scope("/otp")
                    .route("/send", web::post().to(send_otp::<R, C, N>))
                    .route("/verify", web::post().to(verify_otp::<R, C, N>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
