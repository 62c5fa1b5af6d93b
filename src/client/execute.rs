//! The client and its request execution path.
//!
//! Provides [`Client`], the entry point for making outbound calls with the
//! configured defaults applied.
//!
//! # Examples
//!
//! ## Simple GET request
//!
//! ```no_run
//! use outbound_http::Client;
//!
//! # async fn run() -> Result<(), outbound_http::Error> {
//! let client = Client::new();
//! let response = client.get("https://api.example.com/health").await?;
//! println!("status: {}", response.status_code);
//! # Ok(())
//! # }
//! ```
//!
//! ## Full request
//!
//! ```no_run
//! use outbound_http::{Client, ClientConfig, ExecuteOptions, Method, Request};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), outbound_http::Error> {
//! let client = Client::with_config(
//!     ClientConfig::default().with_base_url("https://api.example.com"),
//! );
//!
//! let request = Request::new("/users", Method::Post)
//!     .with_body(r#"{"name":"jane"}"#);
//!
//! let response = client
//!     .execute(&CancellationToken::new(), ExecuteOptions::new(request))
//!     .await?;
//! println!("{} in {}ms", response.status_code, response.time_ms);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::{config::ClientConfig, url};
use crate::error::{Error, Result};
use crate::transport::Engine;
use crate::types::{ExecuteOptions, Method, Request, Response};

/// Outbound HTTP client.
///
/// Bound at construction to a [`ClientConfig`] and to one transport engine
/// that it keeps for its whole lifetime. The configuration is read-only
/// after construction and the engine is internally synchronized, so a
/// `Client` (or any clone of it) can execute many calls concurrently; each
/// call owns its transient request state.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    engine: Engine,
}

impl Client {
    /// Create a client with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client bound to the given configuration.
    ///
    /// The transport engine is constructed here with the configured retry
    /// budget. `base_url` and `timeout` are taken as-is, and `tls_cert` is
    /// stored without being applied to the transport.
    pub fn with_config(config: ClientConfig) -> Self {
        let engine = Engine::new(config.attempts);
        Client {
            config: Arc::new(config),
            engine,
        }
    }

    /// Execute a GET request against `url` with no headers, query or body.
    ///
    /// # Examples
    /// ```no_run
    /// # async fn run(client: outbound_http::Client) -> Result<(), outbound_http::Error> {
    /// let response = client.get("/health").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, url: &str) -> Result<Response> {
        let request = Request::new(url, Method::Get);
        self.execute(&CancellationToken::new(), ExecuteOptions::new(request))
            .await
    }

    /// Execute one outbound call.
    ///
    /// Resolves the final URL from the request and the configured base URL,
    /// applies the effective content type and the request's headers, then
    /// submits to the transport bounded by the configured timeout. On
    /// success the response carries status, body, merged headers and the
    /// elapsed milliseconds since `opts.start_time` (or call entry). On
    /// failure the transport error is returned without translation; no
    /// response value exists in that case.
    ///
    /// The cancellation token is accepted for interface stability but is
    /// not currently consulted; the configured timeout is the only bound on
    /// a call.
    pub async fn execute(
        &self,
        _cancel: &CancellationToken,
        opts: ExecuteOptions,
    ) -> Result<Response> {
        let start = opts.start_time.unwrap_or_else(Instant::now);
        let request = opts.request;

        let mut target = url::resolve(&self.config.base_url, &request.url);
        target = url::append_query(target, &request.query);

        let content_type = request
            .content_type
            .as_deref()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(&self.config.default_content_type);

        debug!(method = %request.method, url = %target, "executing outbound request");

        // Content type first, then the request's own headers, so an
        // explicit content-type entry from the caller wins.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, header_value(CONTENT_TYPE.as_str(), content_type)?);
        for (name, value) in &request.headers {
            headers.insert(header_name(name)?, header_value(name, value)?);
        }

        let idempotent = request.method.is_idempotent();
        let builder = self
            .engine
            .request(request.method.into(), &target)
            .headers(headers)
            .body(request.body);

        // The timeout covers the whole round trip: submission, any retries
        // inside the engine, and reading the body.
        let outcome = tokio::time::timeout(self.config.timeout, async {
            let response = self.engine.round_trip(builder, idempotent).await?;
            let status_code = response.status().as_u16();
            let headers = merge_response_headers(response.headers());
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status_code, headers, body))
        })
        .await;

        let (status_code, headers, body) = match outcome {
            Ok(done) => done?,
            Err(_) => return Err(Error::Timeout(self.config.timeout)),
        };

        Ok(Response {
            status_code,
            body,
            headers,
            time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// The configuration this client was constructed with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild a string map from the transport's response headers. A name the
/// server repeated keeps its last value.
fn merge_response_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut merged = HashMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            merged.insert(name.as_str().to_string(), value.to_string());
        }
    }
    merged
}

fn header_name(name: &str) -> Result<HeaderName> {
    name.parse::<HeaderName>().map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_applies_defaults() {
        let client = Client::new();
        assert_eq!(client.config().default_content_type, "application/json");
        assert_eq!(client.config().timeout, std::time::Duration::from_secs(30));
        assert_eq!(client.config().attempts, 5);
    }

    #[test]
    fn client_keeps_custom_config() {
        let config = ClientConfig::default().with_base_url("https://api.example.com");
        let client = Client::with_config(config);
        assert_eq!(client.config().base_url, "https://api.example.com");
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        assert!(header_name("x-ok").is_ok());
        assert!(matches!(
            header_name("bad name"),
            Err(Error::InvalidHeader { .. })
        ));
    }

    #[test]
    fn response_header_merge_keeps_last_value() {
        let mut headers = HeaderMap::new();
        headers.append("x-tag", HeaderValue::from_static("first"));
        headers.append("x-tag", HeaderValue::from_static("second"));

        let merged = merge_response_headers(&headers);
        assert_eq!(merged.get("x-tag").map(String::as_str), Some("second"));
    }
}
