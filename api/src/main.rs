use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use adm_api::app::create_app;
use adm_api::routes::otp::AppState;
use adm_api::telemetry::init_tracing;
use adm_core::services::clock::SystemClock;
use adm_core::services::otp::{OtpService, OtpServiceConfig, OtpWorkflow};
use adm_infra::database::{DatabasePool, MySqlOtpRepository};
use adm_infra::mail::create_notification_sender;
use adm_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    tracing::info!(
        environment = ?config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting admissions OTP API"
    );

    let database = DatabasePool::connect_lazy(&config.database)?;
    if let Err(e) = database.health_check().await {
        tracing::warn!(error = %e, "Database unreachable at startup, serving anyway");
    }
    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("failed to apply database migrations")?;
    }

    let repository = Arc::new(MySqlOtpRepository::new(database.get_pool().clone()));
    let service = OtpService::new(
        repository,
        Arc::new(SystemClock),
        OtpServiceConfig::from(&config.otp),
    );
    let sender = Arc::new(create_notification_sender(&config.mail));
    let workflow = Arc::new(OtpWorkflow::new(service, sender));
    let state = web::Data::new(AppState::new(workflow));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, workers = config.server.workers, "Binding HTTP server");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config));
    // Zero keeps the actix default of one worker per physical core
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    database.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
