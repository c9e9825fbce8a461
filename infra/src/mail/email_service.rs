//! Email Service Interface
//!
//! Defines the trait for email providers that deliver transactional
//! messages such as verification codes.

use async_trait::async_trait;

use crate::InfrastructureError;

/// A rendered email ready to hand to a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to_email: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Email service trait for sending transactional messages
///
/// Implementations include:
/// - Brevo transactional API
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Deliver a message
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the accepted message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &'static str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

#[async_trait]
impl EmailService for Box<dyn EmailService> {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        (**self).send_email(message).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    async fn is_available(&self) -> bool {
        (**self).is_available().await
    }
}
