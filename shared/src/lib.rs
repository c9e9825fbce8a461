//! Shared utilities and common types for the admissions backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loaders
//! - Error response structures and error codes
//! - API response envelope
//! - Email normalization and masking helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig,
    MailConfig, MailProvider, OtpConfig, ServerConfig,
};
pub use crate::errors::{error_codes, ApiResult, ErrorResponse};
pub use crate::types::{ApiResponse, HealthResponse, HealthStatus, ServiceHealth};
pub use crate::utils::email::{is_valid_email, mask_email, normalize_email};
