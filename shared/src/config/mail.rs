//! Email delivery configuration

use serde::{Deserialize, Serialize};

/// Default Brevo transactional email endpoint
pub const BREVO_API_URL: &str = "https://api.brevo.com/v3/smtp/email";

/// Supported email providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Brevo (formerly Sendinblue) transactional API
    Brevo,
    /// Log messages instead of sending them
    #[default]
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brevo" | "sendinblue" => Ok(MailProvider::Brevo),
            "mock" => Ok(MailProvider::Mock),
            _ => Err(format!("Unknown mail provider: {}", s)),
        }
    }
}

/// Email provider credentials and sender identity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    pub provider: MailProvider,

    /// Provider API key
    #[serde(default)]
    pub api_key: String,

    /// Provider endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// From address
    pub sender_email: String,

    /// From display name
    pub sender_name: String,

    /// Maximum delivery attempts per message
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            api_key: String::new(),
            api_url: default_api_url(),
            sender_email: String::from("noreply@example.com"),
            sender_name: String::from("Vinayak Inter College Admissions"),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    ///
    /// When `MAIL_PROVIDER` is unset the provider is `brevo` if
    /// `BREVO_API_KEY` is present and `mock` otherwise.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = std::env::var("BREVO_API_KEY").unwrap_or_default();
        let provider = std::env::var("MAIL_PROVIDER")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(if api_key.is_empty() {
                MailProvider::Mock
            } else {
                MailProvider::Brevo
            });

        Self {
            provider,
            api_key,
            api_url: std::env::var("BREVO_API_URL").unwrap_or(defaults.api_url),
            sender_email: std::env::var("SENDER_EMAIL").unwrap_or(defaults.sender_email),
            sender_name: std::env::var("SENDER_NAME").unwrap_or(defaults.sender_name),
            max_retries: std::env::var("MAIL_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: std::env::var("MAIL_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_delay_ms),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

fn default_api_url() -> String {
    String::from(BREVO_API_URL)
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_request_timeout_secs() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("brevo".parse::<MailProvider>().unwrap(), MailProvider::Brevo);
        assert_eq!("Sendinblue".parse::<MailProvider>().unwrap(), MailProvider::Brevo);
        assert_eq!("MOCK".parse::<MailProvider>().unwrap(), MailProvider::Mock);
        assert!("smtp".parse::<MailProvider>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = MailConfig::default();
        assert_eq!(config.api_url, BREVO_API_URL);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.sender_email, "noreply@example.com");
    }
}
