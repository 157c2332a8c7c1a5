//! Error types for the news search client.
//!
//! # Design
//! Each failure stage gets its own variant so callers can tell "the network
//! is down" from "the server said no" from "the body was garbage".
//! `Unauthorized` is split out of `Http` because a bad API key is the one
//! non-200 answer a user can actually fix. `EmptyBody` is distinct from an
//! empty result list: a 200 with zero results parses to `Ok(vec![])`.

use thiserror::Error;

/// Errors returned by `NewsClient`, `Fetcher`, and the strict parser.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint could not be parsed as an absolute URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, DNS, or I/O failure before a status line was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// The connect or read timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server rejected the API key (401 or 403).
    #[error("unauthorized (HTTP {status})")]
    Unauthorized { status: u16 },

    /// The server returned any other non-200 status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A 200 response carried no body at all.
    #[error("empty response body")]
    EmptyBody,

    /// The body was not the expected JSON document.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),
}
