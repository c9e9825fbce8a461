pub mod otp;

pub use adm_shared::ErrorResponse;
pub use otp::{SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse};
