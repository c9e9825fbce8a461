//! # Infrastructure Layer
//!
//! Concrete implementations of the admissions core interfaces.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL record store for OTP verifications using SQLx
//! - **Mail**: transactional email delivery (Brevo, mock)
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use adm_core::errors::*;

use adm_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail module - email providers and OTP message templates
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider rejected or failed the message
    #[error("Mail service error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(_) | InfrastructureError::Migration(_) => {
                DomainError::StorageFailure {
                    message: err.to_string(),
                }
            }
            InfrastructureError::Http(_) | InfrastructureError::Mail(_) => {
                DomainError::DeliveryFailure {
                    message: err.to_string(),
                }
            }
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
