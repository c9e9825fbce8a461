//! OTP route handlers
//!
//! - `POST /api/v1/otp/send` issues a code and emails it
//! - `POST /api/v1/otp/verify` checks a submitted code

pub mod send;
pub mod verify;

use std::sync::Arc;

use adm_core::repositories::OtpRepository;
use adm_core::services::clock::Clock;
use adm_core::services::otp::{NotificationSender, OtpWorkflow};

pub use send::send_otp;
pub use verify::verify_otp;

/// Application state that holds shared services
pub struct AppState<R, C, N>
where
    R: OtpRepository,
    C: Clock,
    N: NotificationSender,
{
    pub workflow: Arc<OtpWorkflow<R, C, N>>,
}

impl<R, C, N> AppState<R, C, N>
where
    R: OtpRepository,
    C: Clock,
    N: NotificationSender,
{
    pub fn new(workflow: Arc<OtpWorkflow<R, C, N>>) -> Self {
        Self { workflow }
    }
}
