//! Tracing subscriber setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use adm_shared::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set. Calling this twice
/// returns an error instead of panicking.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .try_init()?,
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .try_init()?,
        LogFormat::Compact => registry.with(fmt::layer().compact()).try_init()?,
    }

    Ok(())
}
