//! Adapter exposing an email service as the core notification sender

use async_trait::async_trait;

use adm_core::services::otp::{NotificationSender, OtpNotification};

use super::email_service::EmailService;
use super::templates;

/// Renders OTP notifications as email and hands them to a provider
pub struct EmailNotificationSender<E: EmailService> {
    inner: E,
    sender_name: String,
}

impl<E: EmailService> EmailNotificationSender<E> {
    pub fn new(inner: E, sender_name: impl Into<String>) -> Self {
        Self {
            inner,
            sender_name: sender_name.into(),
        }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

#[async_trait]
impl<E: EmailService> NotificationSender for EmailNotificationSender<E> {
    async fn send_otp(&self, notification: &OtpNotification) -> Result<String, String> {
        let message = templates::otp_email(notification, &self.sender_name);
        self.inner
            .send_email(&message)
            .await
            .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }
}
