//! OTP lifecycle for applicant email verification
//!
//! This module provides:
//! - Code generation from the OS CSPRNG
//! - Issuance that replaces any previous code for the same key
//! - Verification with lazy expiry and single consumption
//! - Delivery of freshly issued codes through a notification sender

mod config;
mod service;
mod traits;
mod types;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::NotificationSender;
pub use types::{OtpNotification, OtpRequestResult, VerificationOutcome};
pub use workflow::OtpWorkflow;
