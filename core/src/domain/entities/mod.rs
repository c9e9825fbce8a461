//! Domain entities representing core business objects.

pub mod otp_record;

pub use otp_record::{
    generate_code, OtpKey, OtpRecord, CODE_LENGTH, CODE_MAX, CODE_MIN, DEFAULT_EXPIRATION_MINUTES,
};
