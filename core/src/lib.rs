//! # Admissions Core
//!
//! Core business logic for the admissions backend.
//! This crate contains the OTP record entity, the record store and
//! notification interfaces, the OTP lifecycle service, and the error types
//! shared by the infrastructure and API layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{InMemoryOtpRepository, OtpRepository};
pub use services::{
    Clock, ManualClock, NotificationSender, OtpNotification, OtpRequestResult, OtpService,
    OtpServiceConfig, OtpWorkflow, SystemClock, VerificationOutcome,
};
