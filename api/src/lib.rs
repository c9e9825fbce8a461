//! HTTP surface for admissions email OTP issuance and verification

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
