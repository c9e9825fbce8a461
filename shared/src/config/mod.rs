//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Email provider credentials and sender identity
//! - `otp` - One-time passcode lifetime
//! - `server` - HTTP server and CORS configuration

pub mod database;
pub mod environment;
pub mod mail;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use otp::{OtpConfig, MAX_OTP_EXPIRY_MINUTES};
pub use server::{CorsConfig, ServerConfig};

/// Prefix for layered environment overrides, e.g. `APP__SERVER__PORT=9000`
const ENV_OVERRIDE_PREFIX: &str = "APP";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// OTP lifetime configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Email delivery configuration
    pub mail: MailConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Baseline configuration for an environment, before any overrides
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            otp: OtpConfig::default(),
            mail: MailConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from process environment variables
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let config = Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            otp: OtpConfig::from_env(),
            mail: MailConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::for_environment(environment).with_env_overrides(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load layered configuration
    ///
    /// Layers, lowest precedence first:
    /// 1. variables read by [`AppConfig::from_env`]
    /// 2. optional `config.<environment>.toml` in the working directory
    /// 3. `APP__SECTION__KEY` environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        let base = Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            otp: OtpConfig::from_env(),
            mail: MailConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::for_environment(environment).with_env_overrides(),
        };

        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&base)?)
            .add_source(
                ::config::File::new(environment.config_file(), ::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_OVERRIDE_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_OTP_EXPIRY_MINUTES).contains(&self.otp.expiry_minutes) {
            return Err(ConfigError::Invalid {
                field: "otp.expiry_minutes",
                reason: format!(
                    "must be between 1 and {}, got {}",
                    MAX_OTP_EXPIRY_MINUTES, self.otp.expiry_minutes
                ),
            });
        }

        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "database.url",
                reason: "must not be empty".to_string(),
            });
        }

        if self.mail.provider == MailProvider::Brevo && self.mail.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "mail.api_key",
                reason: "required when mail.provider is brevo".to_string(),
            });
        }

        if self.environment.is_production() && self.mail.provider == MailProvider::Mock {
            return Err(ConfigError::Invalid {
                field: "mail.provider",
                reason: "mock mailer is not allowed in production".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(ConfigError::Invalid {
                field: "server.port",
                reason: "must not be 0".to_string(),
            });
        }

        Ok(())
    }
}
