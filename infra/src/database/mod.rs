//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and embedded migrations
//! - The MySQL OTP record store

pub mod connection;
pub mod otp_repository;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use otp_repository::MySqlOtpRepository;
