//! Tests for the OTP service and workflow
