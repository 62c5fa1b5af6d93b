#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Module Structure
//!
//! - **[types]** - Request/response data model ([`Request`], [`Response`], [`Method`])
//! - **[error]** - Error surface and result handling
//! - **[client]** - The client itself: configuration, URL resolution, execution
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Client`] | Outbound HTTP client bound to resolved defaults |
//! | [`ClientConfig`] | Base URL, default content type, timeout, retry attempts |
//! | [`Request`] | One outbound call as plain data |
//! | [`Response`] | Status, body, headers and elapsed milliseconds |
//! | [`ExecuteOptions`] | Per-call options: the request plus an optional start time |

pub mod client;
pub mod error;
pub mod types;

mod transport;

pub use client::{Client, ClientConfig};
pub use error::{Error, Result};
pub use types::{ExecuteOptions, Method, Request, Response};
