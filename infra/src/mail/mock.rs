//! Mock Email Service Implementation
//!
//! Logs messages through tracing instead of sending them. Used in
//! development and by tests that need to read back the delivered code.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use adm_shared::mask_email;

use super::email_service::{EmailMessage, EmailService};
use super::templates::CODE_LINE_PREFIX;
use crate::InfrastructureError;

/// Mock email service for development and testing
///
/// Clones share counters and the outbox, so a test can keep a handle to the
/// instance it passed into the application. Only an instance built with
/// [`MockEmailService::recording`] keeps messages.
#[derive(Clone, Default)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: Arc<AtomicBool>,
    /// Keep delivered messages in the outbox
    recording: bool,
    /// Last message per recipient
    outbox: Arc<Mutex<HashMap<String, EmailMessage>>>,
}

impl MockEmailService {
    /// Create a mock that logs and counts messages without keeping them
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that keeps the last message per recipient
    ///
    /// Intended for tests reading back the delivered code.
    pub fn recording() -> Self {
        Self {
            recording: true,
            ..Self::default()
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Last message delivered to a recipient
    pub fn last_message(&self, to_email: &str) -> Option<EmailMessage> {
        self.outbox
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(to_email)
            .cloned()
    }

    /// Last verification code delivered to a recipient
    ///
    /// Reads the code line of the plain-text body.
    pub fn last_code(&self, to_email: &str) -> Option<String> {
        let message = self.last_message(to_email)?;
        message
            .text_body
            .lines()
            .find_map(|line| line.trim().strip_prefix(CODE_LINE_PREFIX))
            .map(|code| code.trim().to_string())
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                to = %mask_email(&message.to_email),
                "Mock email service simulating failure"
            );
            return Err(InfrastructureError::Mail(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "mail_service",
            provider = "mock",
            to = %mask_email(&message.to_email),
            subject = %message.subject,
            message_id = %message_id,
            message_number = count,
            "Email sent successfully (mock)"
        );
        tracing::debug!(target: "mail_service", body = %message.text_body, "Mock email body");

        if self.recording {
            self.outbox
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .insert(message.to_email.clone(), message.clone());
        }

        Ok(message_id)
    }

    fn provider_name(&self) -> &'static str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
