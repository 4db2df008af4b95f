//! Authentication domain.
//!
//! Resolves the active YouTube credentials once at startup and supplies the
//! per-request auth decoration (API key or bearer token) to the dispatcher.
//!
//! - `credentials.rs` - mode selection, capability and auth decoration
//! - `token.rs` - bearer token cache and OAuth refresh-token exchange
//! - `setup.rs` - one-shot authorization-code flow used by `youtube-mcp-auth`

pub mod credentials;
mod error;
#[cfg(feature = "oauth-setup")]
pub mod setup;
pub mod token;

pub use credentials::{AuthDecoration, AuthMode, Capability, CredentialResolver, CredentialState};
pub use error::AuthError;
pub use token::{AccessToken, BearerTokenCache, OAuthRefreshSource, TokenSource};
