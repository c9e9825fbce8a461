//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Individual dependency checks
    pub services: HashMap<String, ServiceHealth>,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Server version
    pub version: String,
}

impl HealthResponse {
    /// Overall status is the worst of the individual checks
    pub fn from_services(services: HashMap<String, ServiceHealth>, version: impl Into<String>) -> Self {
        let status = services
            .values()
            .map(|s| s.status)
            .max_by_key(|s| s.severity())
            .unwrap_or(HealthStatus::Healthy);

        Self {
            status,
            services,
            timestamp: Utc::now(),
            version: version.into(),
        }
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    fn severity(&self) -> u8 {
        match self {
            HealthStatus::Healthy => 0,
            HealthStatus::Degraded => 1,
            HealthStatus::Unhealthy => 2,
        }
    }
}

/// Individual service health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Service status
    pub status: HealthStatus,

    /// Health check message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ServiceHealth {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: None,
        }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_serialization() {
        let response = ApiResponse::success(serde_json::json!({ "message": "ok" }));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["message"], "ok");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_response_has_no_data() {
        let response: ApiResponse<()> = ApiResponse::error("boom");
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("boom"));
        assert!(response.into_data().is_none());
    }

    #[test]
    fn test_health_status_is_worst_of_services() {
        let mut services = HashMap::new();
        services.insert("database".to_string(), ServiceHealth::unhealthy("timeout"));
        services.insert("mail".to_string(), ServiceHealth::healthy());

        let health = HealthResponse::from_services(services, "0.1.0");
        assert_eq!(health.status, HealthStatus::Unhealthy);

        let health = HealthResponse::from_services(HashMap::new(), "0.1.0");
        assert_eq!(health.status, HealthStatus::Healthy);
    }
}
