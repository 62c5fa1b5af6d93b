//! Transport engine wrapper.
//!
//! [`Engine`] owns the pooled `reqwest` client and the retry budget
//! configured by [`crate::ClientConfig::attempts`]. Layers above see a
//! single round trip; whether a physical retry happened underneath is not
//! observable, and the last error is returned as-is.

use tracing::debug;

/// The shared HTTP engine behind a [`crate::Client`].
///
/// Internally synchronized; clones share the same connection pool.
#[derive(Clone)]
pub(crate) struct Engine {
    http: reqwest::Client,
    attempts: u32,
}

impl Engine {
    pub(crate) fn new(attempts: u32) -> Self {
        Engine {
            http: reqwest::Client::new(),
            attempts,
        }
    }

    pub(crate) fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http.request(method, url)
    }

    /// Send the request. Idempotent calls are re-sent on connection-level
    /// failures until the attempt budget is spent.
    pub(crate) async fn round_trip(
        &self,
        builder: reqwest::RequestBuilder,
        idempotent: bool,
    ) -> reqwest::Result<reqwest::Response> {
        let max_attempts = if idempotent { self.attempts.max(1) } else { 1 };

        let mut attempt = 1;
        loop {
            let current = match builder.try_clone() {
                Some(clone) => clone,
                // A request that cannot be cloned gets a single attempt.
                None => return builder.send().await,
            };

            match current.send().await {
                Ok(response) => return Ok(response),
                Err(err) if attempt < max_attempts && is_retryable(&err) => {
                    debug!(attempt, error = %err, "re-sending idempotent request");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

// Connection-level failures only; HTTP error statuses come back as
// responses and are never retried here.
fn is_retryable(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_request()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_errors_are_retryable() {
        // Bind then drop to get a port with nothing listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = tokio_test::block_on(async {
            reqwest::Client::new()
                .get(format!("http://{addr}/"))
                .send()
                .await
                .unwrap_err()
        });
        assert!(is_retryable(&err));
    }

    #[test]
    fn zero_attempts_still_sends_once() {
        let engine = Engine::new(0);
        assert_eq!(engine.attempts.max(1), 1);
    }
}
