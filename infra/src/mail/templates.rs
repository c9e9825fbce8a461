//! Email templates for OTP delivery

use chrono::{Datelike, Utc};

use adm_core::services::otp::OtpNotification;

use super::email_service::EmailMessage;

const DEFAULT_GREETING_NAME: &str = "Dear Applicant";

/// Prefix of the plain-text line carrying the code
pub(crate) const CODE_LINE_PREFIX: &str = "Your verification code is: ";

/// Subject line for the verification email
pub fn otp_subject(application_id: &str) -> String {
    format!("Verify Your Email - Application {}", application_id)
}

/// Render the verification email for a freshly issued code
pub fn otp_email(notification: &OtpNotification, sender_name: &str) -> EmailMessage {
    let name = notification
        .recipient_name
        .as_deref()
        .unwrap_or(DEFAULT_GREETING_NAME);
    let minutes = notification.expires_in_minutes;
    let year = Utc::now().year();

    let html_body = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: #667eea; color: white; padding: 24px; text-align: center; border-radius: 10px 10px 0 0; }}
    .content {{ background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; }}
    .otp-box {{ background: white; border: 2px dashed #667eea; padding: 20px; text-align: center; margin: 20px 0; border-radius: 8px; }}
    .otp-code {{ font-size: 32px; font-weight: bold; color: #667eea; letter-spacing: 8px; margin: 10px 0; }}
    .footer {{ text-align: center; margin-top: 20px; color: #999; font-size: 12px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header"><h1>{sender}</h1></div>
    <div class="content">
      <h2 style="margin-top: 0; color: #667eea;">Welcome, {name}!</h2>
      <p>Thank you for choosing our school. We're excited to review your application!</p>
      <p>Your application ID is: <strong>{application_id}</strong></p>
      <p>To complete your application, please verify your email address by entering the OTP below:</p>
      <div class="otp-box">
        <p style="margin: 0; color: #666; font-size: 14px;">Your Verification Code</p>
        <div class="otp-code">{code}</div>
        <p style="margin: 0; color: #666; font-size: 12px;">This code will expire in {minutes} minutes</p>
      </div>
      <p><strong>Important:</strong> If you didn't request this verification, please ignore this email.</p>
      <h3 style="color: #667eea;">Next Steps:</h3>
      <ol>
        <li>Enter the OTP in the application form</li>
        <li>Complete all required fields</li>
        <li>Upload necessary documents</li>
        <li>Submit your application</li>
      </ol>
    </div>
    <div class="footer">
      <p>&copy; {year} {sender}. All rights reserved.</p>
      <p>This is an automated email. Please do not reply to this message.</p>
    </div>
  </div>
</body>
</html>"#,
        sender = escape_html(sender_name),
        name = escape_html(name),
        application_id = escape_html(&notification.application_id),
        code = escape_html(&notification.code),
        minutes = minutes,
        year = year,
    );

    let text_body = format!(
        "Welcome, {name}!\n\n\
         {CODE_LINE_PREFIX}{code}\n\
         This code will expire in {minutes} minutes.\n\n\
         Your application ID is: {application_id}\n\n\
         If you didn't request this verification, please ignore this email.\n\n\
         {sender}",
        name = name,
        application_id = notification.application_id,
        code = notification.code,
        minutes = minutes,
        sender = sender_name,
    );

    EmailMessage {
        to_email: notification.recipient_email.clone(),
        to_name: notification.recipient_name.clone(),
        subject: otp_subject(&notification.application_id),
        html_body,
        text_body,
    }
}

/// Escape text interpolated into HTML bodies
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
