//! Authentication error types.

use thiserror::Error;

/// Errors raised while resolving credentials or obtaining a bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No usable credential configuration was found at startup.
    #[error("{0}")]
    Configuration(String),

    /// The OAuth provider did not hand out a bearer token.
    #[error("Failed to refresh OAuth access token: {0}")]
    TokenRefresh(String),
}

impl AuthError {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new token refresh error.
    pub fn token_refresh(msg: impl Into<String>) -> Self {
        Self::TokenRefresh(msg.into())
    }
}
