//! Request/response data model.
//!
//! Plain data describing one outbound call and its result. A [`Request`]
//! carries everything the execution path needs; a [`Response`] is what
//! comes back, including the round-trip time observed by the client.
//! Neither type holds any connection state, so both are cheap to build per
//! call and safe to move across tasks.
//!
//! # Examples
//!
//! ```
//! use outbound_http::{Method, Request};
//!
//! let request = Request::new("/users", Method::Post)
//!     .with_header("x-request-id", "abc-123")
//!     .with_query_param("notify", "true")
//!     .with_body(r#"{"name":"jane"}"#);
//!
//! assert_eq!(request.method.as_str(), "POST");
//! assert_eq!(request.query.get("notify").map(String::as_str), Some("true"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

/// HTTP method for an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// Compatibility variant that carries the same wire value as
    /// [`Method::Post`]. Existing callers depend on this mapping; see
    /// [`Method::as_str`].
    Path,
    /// `DELETE`
    Delete,
}

impl Method {
    /// The wire value submitted to the transport.
    ///
    /// Note that [`Method::Path`] maps to `"POST"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post | Method::Path => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether the transport may retry a failed call of this method.
    ///
    /// Anything that hits the wire as `POST` is excluded.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Method::Post | Method::Path)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post | Method::Path => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One outbound call as plain data.
///
/// `url` may be absolute or relative; relative URLs are joined onto the
/// client's configured base URL at execution time. Header and query maps
/// carry each key at most once, so inserting a key twice keeps the last
/// value.
#[derive(Debug, Clone)]
pub struct Request {
    /// Target URL, absolute or relative to the client's base URL.
    pub url: String,
    /// HTTP method to submit.
    pub method: Method,
    /// Content type override. `None` or an empty string falls back to the
    /// client's default.
    pub content_type: Option<String>,
    /// Headers to apply to the outgoing request, last write wins.
    pub headers: HashMap<String, String>,
    /// Query parameters, percent-encoded into the final URL.
    pub query: HashMap<String, String>,
    /// Raw request payload.
    pub body: String,
}

impl Request {
    /// Create a request with the given URL and method and nothing else set.
    pub fn new(url: impl Into<String>, method: Method) -> Self {
        Request {
            url: url.into(),
            method,
            content_type: None,
            headers: HashMap::new(),
            query: HashMap::new(),
            body: String::new(),
        }
    }

    /// Override the client's default content type for this call.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Add a header. Re-adding an existing name replaces its value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter. Re-adding an existing key replaces its value.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set the raw request payload.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// The result of one executed call.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code returned by the server.
    pub status_code: u16,
    /// Raw response payload.
    pub body: String,
    /// Response headers as returned by the server. A header name repeated
    /// by the server keeps its last value.
    pub headers: HashMap<String, String>,
    /// Wall-clock round-trip time in milliseconds, as observed by the
    /// client from start time to completion.
    pub time_ms: u64,
}

/// Per-call options for [`crate::Client::execute`].
#[derive(Debug, Clone)]
pub struct ExecuteOptions {
    /// Measurement start for [`Response::time_ms`]. When `None`, the clock
    /// starts at call entry. Callers that account for time spent before
    /// the call (queueing, serialization) can inject an earlier instant.
    pub start_time: Option<Instant>,
    /// The request to execute.
    pub request: Request,
}

impl ExecuteOptions {
    /// Options for `request` with the start time captured at call entry.
    pub fn new(request: Request) -> Self {
        ExecuteOptions {
            start_time: None,
            request,
        }
    }

    /// Measure elapsed time from `start` instead of call entry.
    pub fn with_start_time(mut self, start: Instant) -> Self {
        self.start_time = Some(start);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn path_shares_post_wire_value() {
        assert_eq!(Method::Path.as_str(), "POST");
        assert_eq!(reqwest::Method::from(Method::Path), reqwest::Method::POST);
    }

    #[test]
    fn idempotency_follows_wire_value() {
        assert!(Method::Get.is_idempotent());
        assert!(Method::Put.is_idempotent());
        assert!(Method::Delete.is_idempotent());
        assert!(!Method::Post.is_idempotent());
        assert!(!Method::Path.is_idempotent());
    }

    #[test]
    fn duplicate_header_keeps_last_value() {
        let request = Request::new("/x", Method::Get)
            .with_header("x-tag", "first")
            .with_header("x-tag", "second");
        assert_eq!(request.headers.get("x-tag").map(String::as_str), Some("second"));
        assert_eq!(request.headers.len(), 1);
    }

    #[test]
    fn duplicate_query_key_keeps_last_value() {
        let request = Request::new("/x", Method::Get)
            .with_query_param("id", "1")
            .with_query_param("id", "2");
        assert_eq!(request.query.get("id").map(String::as_str), Some("2"));
    }

    #[test]
    fn builder_defaults_are_empty() {
        let request = Request::new("/x", Method::Get);
        assert!(request.content_type.is_none());
        assert!(request.headers.is_empty());
        assert!(request.query.is_empty());
        assert!(request.body.is_empty());
    }
}
