//! Business services containing domain logic and use cases.

pub mod clock;
pub mod otp;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use otp::{
    NotificationSender, OtpNotification, OtpRequestResult, OtpService, OtpServiceConfig,
    OtpWorkflow, VerificationOutcome,
};
