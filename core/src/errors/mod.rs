//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Validation outcomes of OTP verification are not errors; they are
/// reported as [`crate::services::otp::VerificationOutcome`] values. Only
/// invalid input and infrastructure failures travel through this type.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Record store unreachable or write rejected
    #[error("Storage failure: {message}")]
    StorageFailure { message: String },

    /// Notification could not be handed to the provider
    #[error("Delivery failure: {message}")]
    DeliveryFailure { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::StorageFailure { .. } => "STORAGE_FAILURE",
            DomainError::DeliveryFailure { .. } => "DELIVERY_FAILURE",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
