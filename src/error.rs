//! Error types and result handling.
//!
//! Exactly one kind of failure is surfaced to callers: the transport did
//! not produce a response. That covers connection errors, timeout expiry
//! and retry exhaustion inside the engine. Errors are never translated or
//! wrapped with extra context on the way up; a call yields a complete
//! [`crate::Response`] or an [`Error`], never both.

use std::time::Duration;

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`crate::Client::execute`].
#[derive(Debug, Error)]
pub enum Error {
    /// The transport engine failed. Surfaced verbatim; whether the engine
    /// retried before giving up is not observable here.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The configured per-call timeout elapsed before the transport
    /// produced a response.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// A caller-supplied header name or value cannot be represented on the
    /// wire.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader {
        /// The offending header name as supplied by the caller.
        name: String,
        /// Why the name or value was rejected.
        reason: String,
    },
}

impl Error {
    /// True when the failure was caused by a timeout, either the client's
    /// own per-call bound or one reported by the transport.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout(_) => true,
            Error::Transport(e) => e.is_timeout(),
            Error::InvalidHeader { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_classification() {
        let err = Error::Timeout(Duration::from_millis(50));
        assert!(err.is_timeout());

        let err = Error::InvalidHeader {
            name: "x\n".to_string(),
            reason: "invalid header name".to_string(),
        };
        assert!(!err.is_timeout());
    }

    #[test]
    fn timeout_display_includes_duration() {
        let err = Error::Timeout(Duration::from_secs(30));
        assert!(err.to_string().contains("30s"));
    }
}
