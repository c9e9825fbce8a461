//! Tests for email service selection

use adm_shared::{MailConfig, MailProvider};

use crate::mail::{create_email_service, create_notification_sender, EmailService};

#[test]
fn test_mock_provider() {
    let config = MailConfig::default();
    let service = create_email_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

#[test]
fn test_brevo_provider() {
    let config = MailConfig {
        provider: MailProvider::Brevo,
        api_key: "xkeysib-test".to_string(),
        ..MailConfig::default()
    };
    let service = create_email_service(&config);
    assert_eq!(service.provider_name(), "Brevo");
}

#[test]
fn test_brevo_without_key_falls_back_to_mock() {
    let config = MailConfig {
        provider: MailProvider::Brevo,
        api_key: String::new(),
        ..MailConfig::default()
    };
    let service = create_email_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

#[test]
fn test_notification_sender_reports_provider() {
    use adm_core::services::otp::NotificationSender;

    let sender = create_notification_sender(&MailConfig::default());
    assert_eq!(sender.provider_name(), "Mock");
}
