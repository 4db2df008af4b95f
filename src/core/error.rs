//! Error types and handling for the MCP server.
//!
//! Startup failures from every layer funnel into one [`Error`] so the binary
//! can report them uniformly.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::auth::AuthError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Credential selection or token refresh failed.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The transport failed to bind, initialize or serve.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
