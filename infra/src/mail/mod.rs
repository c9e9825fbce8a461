//! Mail Service Module
//!
//! Email delivery for verification codes.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all email providers
//! - **Brevo Support**: Production delivery via the Brevo transactional API
//! - **Mock Implementation**: Log output for development
//! - **Templates**: HTML and plain-text OTP messages
//! - **Security**: Email masking in logs

pub mod brevo;
pub mod email_service;
pub mod mock;
pub mod notification;
pub mod templates;

// Re-export commonly used types
pub use adm_shared::mask_email;
pub use brevo::BrevoEmailService;
pub use email_service::{EmailMessage, EmailService};
pub use mock::MockEmailService;
pub use notification::EmailNotificationSender;

use adm_shared::{MailConfig, MailProvider};

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// Falls back to the mock service with a warning when the Brevo provider is
/// selected without usable credentials.
pub fn create_email_service(config: &MailConfig) -> Box<dyn EmailService> {
    match config.provider {
        MailProvider::Brevo => match BrevoEmailService::new(config.clone()) {
            Ok(service) => Box::new(service),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to initialize Brevo email service, falling back to mock"
                );
                Box::new(MockEmailService::new())
            }
        },
        MailProvider::Mock => {
            tracing::info!("Using mock email service");
            Box::new(MockEmailService::new())
        }
    }
}

/// Build the notification sender used by the OTP workflow
pub fn create_notification_sender(
    config: &MailConfig,
) -> EmailNotificationSender<Box<dyn EmailService>> {
    EmailNotificationSender::new(create_email_service(config), config.sender_name.clone())
}
