//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Resolved defaults a [`crate::Client`] is bound to at construction.
///
/// None of the fields are validated. In particular a malformed `base_url`
/// is kept as-is and produces malformed final URLs that fail in the
/// transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix applied to relative request URLs. No separator normalization
    /// happens when joining, so trailing and leading slashes are the
    /// caller's concern.
    #[serde(default)]
    pub base_url: String,

    /// Content type used when a request does not set its own.
    #[serde(default = "default_content_type")]
    pub default_content_type: String,

    /// Per-call bound covering the whole round trip, including any retries
    /// inside the transport.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Retry budget handed to the transport for idempotent methods. The
    /// exact retry behavior is the transport's business.
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Client certificate path. Reserved: stored but not yet applied to
    /// the transport.
    #[serde(default)]
    pub tls_cert: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            default_content_type: default_content_type(),
            timeout: default_timeout(),
            attempts: default_attempts(),
            tls_cert: String::new(),
        }
    }
}

impl ClientConfig {
    /// Set the base URL applied to relative request URLs.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the default content type.
    pub fn with_default_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.default_content_type = content_type.into();
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the transport retry budget.
    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Set the reserved client certificate path.
    pub fn with_tls_cert(mut self, tls_cert: impl Into<String>) -> Self {
        self.tls_cert = tls_cert.into();
        self
    }
}

// Default value functions for serde
fn default_content_type() -> String {
    "application/json".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_attempts() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "");
        assert_eq!(config.default_content_type, "application/json");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.attempts, 5);
        assert_eq!(config.tls_cert, "");
    }

    #[test]
    fn builder_pattern() {
        let config = ClientConfig::default()
            .with_base_url("https://api.example.com")
            .with_default_content_type("application/msgpack")
            .with_timeout(Duration::from_secs(15))
            .with_attempts(2)
            .with_tls_cert("/etc/ssl/client.pem");

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.default_content_type, "application/msgpack");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.attempts, 2);
        assert_eq!(config.tls_cert, "/etc/ssl/client.pem");
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"https://api.example.com"}"#).unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.default_content_type, "application/json");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.attempts, 5);
    }
}
