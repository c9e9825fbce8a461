//! Issue-then-deliver workflow used by the HTTP layer

use std::sync::Arc;

use crate::errors::{DomainError, DomainResult};
use crate::repositories::otp::OtpRepository;
use crate::services::clock::Clock;

use super::service::OtpService;
use super::traits::NotificationSender;
use super::types::{OtpNotification, OtpRequestResult, VerificationOutcome};

/// Couples the OTP service with a notification sender
pub struct OtpWorkflow<R: OtpRepository, C: Clock, N: NotificationSender> {
    service: OtpService<R, C>,
    sender: Arc<N>,
}

impl<R: OtpRepository, C: Clock, N: NotificationSender> OtpWorkflow<R, C, N> {
    pub fn new(service: OtpService<R, C>, sender: Arc<N>) -> Self {
        Self { service, sender }
    }

    pub fn service(&self) -> &OtpService<R, C> {
        &self.service
    }

    pub fn sender(&self) -> &Arc<N> {
        &self.sender
    }

    /// Issue a code and deliver it to the applicant
    ///
    /// Nothing is sent when issuance fails. A failed delivery leaves the
    /// issued record in place; the next request overwrites it.
    pub async fn request_otp(
        &self,
        email: &str,
        application_id: &str,
        recipient_name: Option<&str>,
    ) -> DomainResult<OtpRequestResult> {
        let record = self.service.issue(email, application_id).await?;
        let expires_in_minutes = record
            .remaining_validity_at(record.created_at)
            .num_minutes();

        let notification = OtpNotification {
            recipient_email: record.email.clone(),
            recipient_name: recipient_name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            application_id: record.application_id.clone(),
            code: record.code.clone(),
            expires_in_minutes,
        };

        let message_id = self.sender.send_otp(&notification).await.map_err(|e| {
            tracing::error!(
                email = %record.key().masked_email(),
                application_id = %record.application_id,
                provider = self.sender.provider_name(),
                error = %e,
                event = "otp_delivery_failed",
                "Failed to deliver OTP"
            );
            DomainError::DeliveryFailure {
                message: format!("Failed to send OTP email: {}", e),
            }
        })?;

        tracing::info!(
            email = %record.key().masked_email(),
            application_id = %record.application_id,
            provider = self.sender.provider_name(),
            message_id = %message_id,
            event = "otp_sent",
            "OTP delivered"
        );

        Ok(OtpRequestResult {
            message_id,
            expires_at: record.expires_at,
            expires_in_minutes,
        })
    }

    pub async fn verify_otp(
        &self,
        email: &str,
        application_id: &str,
        candidate: &str,
    ) -> VerificationOutcome {
        self.service.verify(email, application_id, candidate).await
    }

    /// Probe the record store
    pub async fn check_storage(&self) -> DomainResult<()> {
        self.service.repository().ping().await
    }
}
