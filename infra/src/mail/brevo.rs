//! Brevo transactional email service
//!
//! Sends messages through the Brevo (formerly Sendinblue) SMTP API:
//! - JSON payload with sender, recipients, subject, HTML and text bodies
//! - Automatic retry with exponential backoff on 429 and 5xx responses
//! - Provider `messageId` returned as the message id

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use adm_shared::{mask_email, MailConfig};

use super::email_service::{EmailMessage, EmailService};
use crate::InfrastructureError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BrevoContact {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request body for `POST /v3/smtp/email`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrevoEmailRequest {
    pub sender: BrevoContact,
    pub to: Vec<BrevoContact>,
    pub subject: String,
    pub html_content: String,
    pub text_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrevoEmailResponse {
    message_id: String,
}

/// Brevo email service implementation
pub struct BrevoEmailService {
    client: Client,
    config: MailConfig,
}

impl BrevoEmailService {
    /// Create a new Brevo email service
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "BREVO_API_KEY is required for the brevo mail provider".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            sender = %mask_email(&config.sender_email),
            "Brevo email service initialized"
        );

        Ok(Self { client, config })
    }

    /// Build the provider payload for a message
    pub fn build_request(&self, message: &EmailMessage) -> BrevoEmailRequest {
        BrevoEmailRequest {
            sender: BrevoContact {
                email: self.config.sender_email.clone(),
                name: Some(self.config.sender_name.clone()),
            },
            to: vec![BrevoContact {
                email: message.to_email.clone(),
                name: message.to_name.clone(),
            }],
            subject: message.subject.clone(),
            html_content: message.html_body.clone(),
            text_content: message.text_body.clone(),
        }
    }

    /// Rate limiting and server errors are worth another attempt
    pub fn is_retryable(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }

    /// Send with retry logic
    async fn send_with_retry(
        &self,
        payload: &BrevoEmailRequest,
        to: &str,
    ) -> Result<String, InfrastructureError> {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                to = %mask_email(to),
                attempt = attempts,
                max_attempts = max_attempts,
                "Sending email via Brevo"
            );

            let result = self
                .client
                .post(&self.config.api_url)
                .header("api-key", &self.config.api_key)
                .header("accept", "application/json")
                .json(payload)
                .send()
                .await;

            let retry_reason = match result {
                Ok(response) if response.status().is_success() => {
                    let body: BrevoEmailResponse = response.json().await?;
                    info!(
                        to = %mask_email(to),
                        message_id = %body.message_id,
                        "Email sent successfully via Brevo"
                    );
                    return Ok(body.message_id);
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    error!(
                        to = %mask_email(to),
                        status = status.as_u16(),
                        attempt = attempts,
                        "Brevo rejected email"
                    );

                    if !Self::is_retryable(status) {
                        return Err(InfrastructureError::Mail(format!(
                            "Brevo returned {}: {}",
                            status, body
                        )));
                    }
                    format!("Brevo returned {}: {}", status, body)
                }
                Err(e) => {
                    error!(
                        to = %mask_email(to),
                        attempt = attempts,
                        error = %e,
                        "Brevo request failed"
                    );
                    e.to_string()
                }
            };

            if attempts >= max_attempts {
                return Err(InfrastructureError::Mail(format!(
                    "Failed to send email after {} attempts: {}",
                    attempts, retry_reason
                )));
            }

            warn!(delay_ms = delay.as_millis() as u64, "Retrying Brevo request");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl EmailService for BrevoEmailService {
    async fn send_email(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let payload = self.build_request(message);
        self.send_with_retry(&payload, &message.to_email).await
    }

    fn provider_name(&self) -> &'static str {
        "Brevo"
    }
}
