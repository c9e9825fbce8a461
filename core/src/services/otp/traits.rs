//! Trait for notification delivery integration

use async_trait::async_trait;

use super::types::OtpNotification;

/// Delivers freshly issued codes to applicants
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Hand the notification to the provider, returning its message id
    async fn send_otp(&self, notification: &OtpNotification) -> Result<String, String>;
    /// Provider name for logs and health output
    fn provider_name(&self) -> &'static str;
    /// Whether the provider is currently accepting messages
    async fn is_available(&self) -> bool {
        true
    }
}
