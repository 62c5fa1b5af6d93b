//! Outbound HTTP client.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── config  - resolved client defaults
//! ├── execute - Client and the request execution path
//! └── url     - final request URI resolution
//! ```
//!
//! # Examples
//!
//! ```
//! use outbound_http::{Client, ClientConfig};
//! use std::time::Duration;
//!
//! // Default configuration
//! let client = Client::new();
//!
//! // Custom configuration
//! let config = ClientConfig::default()
//!     .with_base_url("https://api.example.com")
//!     .with_timeout(Duration::from_secs(10));
//! let client = Client::with_config(config);
//! ```

mod config;
mod execute;
mod url;

pub use config::ClientConfig;
pub use execute::Client;
