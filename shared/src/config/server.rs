//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 4000,
            workers: 0,
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables (`SERVER_HOST`, `SERVER_PORT` or `PORT`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let port = std::env::var("SERVER_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port,
            workers: std::env::var("SERVER_WORKERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.workers),
            max_payload_size: defaults.max_payload_size,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed frontend origin; `*` allows any origin
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create from environment variables (`FRONTEND_ORIGIN`, `CORS_MAX_AGE`)
    pub fn from_env() -> Self {
        Self {
            allowed_origin: std::env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| default_allowed_origin()),
            max_age: std::env::var("CORS_MAX_AGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_age),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origin.trim() == "*"
    }
}

fn default_max_payload_size() -> usize {
    64 * 1024
}

fn default_allowed_origin() -> String {
    String::from("*")
}

fn default_max_age() -> usize {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("127.0.0.1", 4000);
        assert_eq!(config.bind_address(), "127.0.0.1:4000");
    }

    #[test]
    fn test_cors_any_origin() {
        assert!(CorsConfig::default().allows_any_origin());

        let restricted = CorsConfig {
            allowed_origin: "https://admissions.example.edu".to_string(),
            max_age: 60,
        };
        assert!(!restricted.allows_any_origin());
    }
}
