//! Credential resolution.
//!
//! Exactly one of two modes is selected at startup and never changes:
//! a static API key (read-only) or an OAuth refresh-token triple (read/write).

use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use super::token::{BearerTokenCache, OAuthRefreshSource};
use super::AuthError;
use crate::core::config::{CredentialsConfig, YouTubeConfig};

/// Which operations the active credentials may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Capability {
    ReadOnly,
    ReadWrite,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::ReadOnly => f.write_str("read-only"),
            Capability::ReadWrite => f.write_str("read/write"),
        }
    }
}

/// How outbound requests are authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    ApiKey,
    OAuth,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::ApiKey => f.write_str("API key"),
            AuthMode::OAuth => f.write_str("OAuth"),
        }
    }
}

/// Immutable summary of the active credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialState {
    pub mode: AuthMode,
    pub capability: Capability,
}

/// Credential attached to a single outbound request.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthDecoration {
    /// Sent as the `key` query parameter.
    ApiKey(String),
    /// Sent as an `Authorization: Bearer` header.
    Bearer(String),
}

impl fmt::Debug for AuthDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthDecoration::ApiKey(_) => f.write_str("ApiKey([REDACTED])"),
            AuthDecoration::Bearer(_) => f.write_str("Bearer([REDACTED])"),
        }
    }
}

enum Source {
    ApiKey(String),
    OAuth(BearerTokenCache),
}

/// Supplies the auth decoration for every outbound call.
pub struct CredentialResolver {
    source: Source,
}

impl CredentialResolver {
    /// API-key mode.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            source: Source::ApiKey(key.into()),
        }
    }

    /// OAuth mode backed by the given token cache.
    pub fn oauth(tokens: BearerTokenCache) -> Self {
        Self {
            source: Source::OAuth(tokens),
        }
    }

    /// Select a mode from configuration.
    ///
    /// A complete OAuth triple wins over an API key. A partial triple is ignored
    /// (with a warning) when an API key is present, and is fatal otherwise.
    pub fn from_config(
        credentials: &CredentialsConfig,
        youtube: &YouTubeConfig,
    ) -> Result<Self, AuthError> {
        let present = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);

        let api_key = present(&credentials.api_key);
        let client_id = present(&credentials.client_id);
        let client_secret = present(&credentials.client_secret);
        let refresh_token = present(&credentials.refresh_token);

        match (client_id, client_secret, refresh_token) {
            (Some(id), Some(secret), Some(refresh)) => {
                let source = OAuthRefreshSource::new(id, secret, refresh, &youtube.token_url)?;
                info!("Using OAuth credentials (read/write access)");
                Ok(Self::oauth(BearerTokenCache::new(Arc::new(source))))
            }
            (id, secret, refresh) => {
                let partial = id.is_some() || secret.is_some() || refresh.is_some();
                match api_key {
                    Some(key) => {
                        if partial {
                            warn!(
                                "Incomplete OAuth configuration ignored; YOUTUBE_CLIENT_ID, \
                                 YOUTUBE_CLIENT_SECRET and YOUTUBE_REFRESH_TOKEN are all required"
                            );
                        }
                        info!("Using API key credentials (read-only access)");
                        Ok(Self::api_key(key))
                    }
                    None if partial => Err(AuthError::configuration(
                        "Incomplete OAuth configuration: YOUTUBE_CLIENT_ID, \
                         YOUTUBE_CLIENT_SECRET and YOUTUBE_REFRESH_TOKEN must all be set",
                    )),
                    None => Err(AuthError::configuration(
                        "No YouTube credentials configured: set YOUTUBE_API_KEY for read-only \
                         access, or YOUTUBE_CLIENT_ID, YOUTUBE_CLIENT_SECRET and \
                         YOUTUBE_REFRESH_TOKEN for read/write access",
                    )),
                }
            }
        }
    }

    pub fn state(&self) -> CredentialState {
        match self.source {
            Source::ApiKey(_) => CredentialState {
                mode: AuthMode::ApiKey,
                capability: Capability::ReadOnly,
            },
            Source::OAuth(_) => CredentialState {
                mode: AuthMode::OAuth,
                capability: Capability::ReadWrite,
            },
        }
    }

    /// Credential for the next outbound call. In OAuth mode this may suspend
    /// while an expired bearer token is refreshed.
    pub async fn current_auth_decoration(&self) -> Result<AuthDecoration, AuthError> {
        match &self.source {
            Source::ApiKey(key) => Ok(AuthDecoration::ApiKey(key.clone())),
            Source::OAuth(tokens) => tokens.bearer().await.map(AuthDecoration::Bearer),
        }
    }
}

impl fmt::Debug for CredentialResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::token::tests::{CountingSource, expired_token};

    fn creds(
        api_key: Option<&str>,
        client_id: Option<&str>,
        client_secret: Option<&str>,
        refresh_token: Option<&str>,
    ) -> CredentialsConfig {
        CredentialsConfig {
            api_key: api_key.map(String::from),
            client_id: client_id.map(String::from),
            client_secret: client_secret.map(String::from),
            refresh_token: refresh_token.map(String::from),
        }
    }

    fn resolve(config: CredentialsConfig) -> Result<CredentialResolver, AuthError> {
        CredentialResolver::from_config(&config, &YouTubeConfig::default())
    }

    #[test]
    fn test_api_key_only_is_read_only() {
        let resolver = resolve(creds(Some("key"), None, None, None)).unwrap();
        assert_eq!(
            resolver.state(),
            CredentialState {
                mode: AuthMode::ApiKey,
                capability: Capability::ReadOnly
            }
        );
    }

    #[test]
    fn test_full_oauth_triple_is_read_write() {
        let resolver = resolve(creds(None, Some("id"), Some("secret"), Some("refresh"))).unwrap();
        assert_eq!(resolver.state().mode, AuthMode::OAuth);
        assert_eq!(resolver.state().capability, Capability::ReadWrite);
    }

    #[test]
    fn test_oauth_preferred_over_api_key() {
        let resolver =
            resolve(creds(Some("key"), Some("id"), Some("secret"), Some("refresh"))).unwrap();
        assert_eq!(resolver.state().mode, AuthMode::OAuth);
    }

    #[test]
    fn test_partial_oauth_falls_back_to_api_key() {
        let resolver = resolve(creds(Some("key"), Some("id"), None, Some("refresh"))).unwrap();
        assert_eq!(resolver.state().capability, Capability::ReadOnly);
    }

    #[test]
    fn test_partial_oauth_without_api_key_is_fatal() {
        let err = resolve(creds(None, Some("id"), Some("secret"), None)).unwrap_err();
        assert!(err.to_string().contains("Incomplete OAuth configuration"));
    }

    #[test]
    fn test_no_credentials_is_fatal() {
        let err = resolve(creds(None, None, None, None)).unwrap_err();
        assert!(matches!(err, AuthError::Configuration(_)));
        assert!(err.to_string().contains("YOUTUBE_API_KEY"));
    }

    #[test]
    fn test_blank_values_treated_as_missing() {
        let err = resolve(creds(Some("  "), Some(""), None, None)).unwrap_err();
        assert!(matches!(err, AuthError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_api_key_decoration() {
        let resolver = CredentialResolver::api_key("AIza-test");
        assert_eq!(
            resolver.current_auth_decoration().await.unwrap(),
            AuthDecoration::ApiKey("AIza-test".into())
        );
    }

    #[tokio::test]
    async fn test_oauth_decoration_refreshes_expired_token() {
        let source = CountingSource::ok();
        let resolver =
            CredentialResolver::oauth(BearerTokenCache::with_token(source.clone(), expired_token()));

        let decoration = resolver.current_auth_decoration().await.unwrap();
        assert_eq!(decoration, AuthDecoration::Bearer("fresh-token-1".into()));
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_decoration_redacted_in_debug() {
        let debug_str = format!("{:?}", AuthDecoration::Bearer("ya29.secret".into()));
        assert!(!debug_str.contains("ya29.secret"));
    }
}
