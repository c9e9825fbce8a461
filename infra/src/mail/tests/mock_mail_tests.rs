//! Tests for the mock email service and notification adapter

use adm_core::services::otp::{NotificationSender, OtpNotification};

use crate::mail::{EmailMessage, EmailNotificationSender, EmailService, MockEmailService};
use crate::InfrastructureError;

fn notification() -> OtpNotification {
    OtpNotification {
        recipient_email: "a@x.com".to_string(),
        recipient_name: Some("Asha".to_string()),
        application_id: "ADM-2025-001".to_string(),
        code: "482913".to_string(),
        expires_in_minutes: 10,
    }
}

#[tokio::test]
async fn test_mock_send_success() {
    let service = MockEmailService::recording();
    let message = EmailMessage {
        to_email: "a@x.com".to_string(),
        to_name: None,
        subject: "Hello".to_string(),
        html_body: "<p>hi</p>".to_string(),
        text_body: "hi".to_string(),
    };

    let message_id = service.send_email(&message).await.unwrap();
    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(service.last_message("a@x.com"), Some(message));
}

#[tokio::test]
async fn test_mock_simulate_failure() {
    let service = MockEmailService::new();
    service.set_simulate_failure(true);

    let sender = EmailNotificationSender::new(service.clone(), "Admissions");
    let result = sender.send_otp(&notification()).await;

    assert!(result.unwrap_err().contains("Simulated email sending failure"));
    assert_eq!(service.get_message_count(), 0);
    assert!(!service.is_available().await);

    let direct = service.send_email(&crate::mail::templates::otp_email(&notification(), "x")).await;
    assert!(matches!(direct, Err(InfrastructureError::Mail(_))));
}

#[tokio::test]
async fn test_adapter_renders_and_records_code() {
    let service = MockEmailService::recording();
    let sender = EmailNotificationSender::new(service.clone(), "Admissions");

    let message_id = sender.send_otp(&notification()).await.unwrap();
    assert!(message_id.starts_with("mock_"));

    let message = service.last_message("a@x.com").unwrap();
    assert_eq!(message.subject, "Verify Your Email - Application ADM-2025-001");
    assert_eq!(service.last_code("a@x.com").as_deref(), Some("482913"));
    assert!(service.last_code("nobody@x.com").is_none());
}

#[tokio::test]
async fn test_default_mock_keeps_no_messages() {
    let service = MockEmailService::new();
    let sender = EmailNotificationSender::new(service.clone(), "Admissions");

    for i in 0..5 {
        let mut n = notification();
        n.recipient_email = format!("applicant{}@x.com", i);
        sender.send_otp(&n).await.unwrap();
    }

    assert_eq!(service.get_message_count(), 5);
    assert!(service.last_message("applicant0@x.com").is_none());
    assert!(service.last_code("applicant4@x.com").is_none());
}

#[tokio::test]
async fn test_last_code_ignores_digits_in_recipient_name() {
    let service = MockEmailService::recording();
    let sender = EmailNotificationSender::new(service.clone(), "Admissions 2025");

    let mut n = notification();
    n.recipient_name = Some("Asha 123456".to_string());
    n.application_id = "654321".to_string();
    sender.send_otp(&n).await.unwrap();

    assert_eq!(service.last_code("a@x.com").as_deref(), Some("482913"));
}
