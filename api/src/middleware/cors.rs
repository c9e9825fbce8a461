//! CORS middleware configuration for the admissions frontend.
//!
//! `FRONTEND_ORIGIN` selects the allowed origin. `*` (the default) allows any
//! origin; otherwise a comma-separated list of exact origins is accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use adm_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config
            .allowed_origin
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
        {
            tracing::info!(origin = origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
