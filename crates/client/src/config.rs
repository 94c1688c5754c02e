//! Client configuration

use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/fhir";

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server_url: std::env::var("FHIR_SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_SERVER_URL.into()),
            timeout: std::env::var("FHIR_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            user_agent: std::env::var("FHIR_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("fhir-client/{}", env!("CARGO_PKG_VERSION"))
}
