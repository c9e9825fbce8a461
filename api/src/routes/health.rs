use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use adm_core::repositories::OtpRepository;
use adm_core::services::clock::Clock;
use adm_core::services::otp::NotificationSender;
use adm_shared::{HealthResponse, HealthStatus, ServiceHealth};

use super::otp::AppState;

/// Handler for GET /health
///
/// Probes the record store and the mail provider. Responds 503 when the
/// store is unreachable; an unavailable mail provider only degrades the
/// report.
pub async fn health_check<R, C, N>(state: web::Data<AppState<R, C, N>>) -> HttpResponse
where
    R: OtpRepository + 'static,
    C: Clock + 'static,
    N: NotificationSender + 'static,
{
    let mut services = HashMap::new();

    let database = match state.workflow.check_storage().await {
        Ok(()) => ServiceHealth::healthy(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: record store unavailable");
            ServiceHealth::unhealthy("record store unavailable")
        }
    };
    services.insert("database".to_string(), database);

    let sender = state.workflow.sender();
    let status = if sender.is_available().await {
        HealthStatus::Healthy
    } else {
        tracing::warn!(
            provider = sender.provider_name(),
            "Health check: mail provider unavailable"
        );
        HealthStatus::Degraded
    };
    let mail = ServiceHealth {
        status,
        message: Some(sender.provider_name().to_string()),
    };
    services.insert("mail".to_string(), mail);

    let report = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));
    match report.status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(report),
        _ => HttpResponse::Ok().json(report),
    }
}
