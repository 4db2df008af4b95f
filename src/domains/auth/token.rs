//! Bearer token acquisition and caching for OAuth mode.
//!
//! The cache holds at most one access token together with its expiry. An
//! expired (or absent) token is replaced by asking the [`TokenSource`] for a new
//! one. The lock is never held across the refresh call, so two invocations that
//! observe an expired token at the same time may both refresh; the second
//! write simply wins.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use oauth2::basic::BasicClient;
use oauth2::{ClientId, ClientSecret, RefreshToken, RequestTokenError, TokenResponse, TokenUrl};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, instrument};

use super::AuthError;

/// Safety margin subtracted from the provider's `expires_in`.
const EXPIRY_MARGIN: Duration = Duration::from_secs(300);

/// Lifetime assumed when the provider does not report one.
const DEFAULT_LIFETIME: Duration = Duration::from_secs(3300);

/// A short-lived bearer token and the instant it stops being usable.
#[derive(Clone)]
pub struct AccessToken {
    secret: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Build a token from a provider response, applying the expiry margin.
    pub fn from_expires_in(secret: impl Into<String>, expires_in: Option<Duration>) -> Self {
        let lifetime = expires_in
            .map(|d| d.saturating_sub(EXPIRY_MARGIN))
            .unwrap_or(DEFAULT_LIFETIME);
        let lifetime = chrono::Duration::from_std(lifetime).unwrap_or_else(|_| chrono::Duration::zero());
        Self::expiring_at(secret, Utc::now() + lifetime)
    }

    pub fn expiring_at(secret: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            secret: secret.into(),
            expires_at,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Something that can mint a fresh bearer token.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn fetch_token(&self) -> Result<AccessToken, AuthError>;
}

/// Exchanges a long-lived refresh token at the Google token endpoint.
pub struct OAuthRefreshSource {
    client_id: ClientId,
    client_secret: ClientSecret,
    refresh_token: RefreshToken,
    token_url: TokenUrl,
    http: oauth2::reqwest::Client,
}

impl OAuthRefreshSource {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
        token_url: &str,
    ) -> Result<Self, AuthError> {
        let token_url = TokenUrl::new(token_url.to_string())
            .map_err(|e| AuthError::configuration(format!("Invalid OAuth token URL: {}", e)))?;

        let http = oauth2::reqwest::ClientBuilder::new()
            // Token endpoints never legitimately redirect.
            .redirect(oauth2::reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AuthError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client_id: ClientId::new(client_id.into()),
            client_secret: ClientSecret::new(client_secret.into()),
            refresh_token: RefreshToken::new(refresh_token.into()),
            token_url,
            http,
        })
    }
}

#[async_trait]
impl TokenSource for OAuthRefreshSource {
    #[instrument(skip(self))]
    async fn fetch_token(&self) -> Result<AccessToken, AuthError> {
        debug!("Exchanging refresh token for a new access token");

        let client = BasicClient::new(self.client_id.clone())
            .set_client_secret(self.client_secret.clone())
            .set_token_uri(self.token_url.clone());

        let response = client
            .exchange_refresh_token(&self.refresh_token)
            .request_async(&self.http)
            .await
            .map_err(|e| {
                let message = match e {
                    RequestTokenError::ServerResponse(response) => response
                        .error_description()
                        .cloned()
                        .unwrap_or_else(|| response.error().to_string()),
                    other => other.to_string(),
                };
                error!("OAuth token refresh failed: {}", message);
                AuthError::token_refresh(message)
            })?;

        Ok(AccessToken::from_expires_in(
            response.access_token().secret().clone(),
            response.expires_in(),
        ))
    }
}

/// Lazily refreshed bearer token shared by every invocation.
pub struct BearerTokenCache {
    source: Arc<dyn TokenSource>,
    cached: RwLock<Option<AccessToken>>,
}

impl BearerTokenCache {
    /// Create an empty cache; the first call triggers a refresh.
    pub fn new(source: Arc<dyn TokenSource>) -> Self {
        Self {
            source,
            cached: RwLock::new(None),
        }
    }

    /// Create a cache pre-seeded with a token.
    pub fn with_token(source: Arc<dyn TokenSource>, token: AccessToken) -> Self {
        Self {
            source,
            cached: RwLock::new(Some(token)),
        }
    }

    /// Return a usable bearer token, refreshing it first if it has expired.
    pub async fn bearer(&self) -> Result<String, AuthError> {
        if let Some(token) = self.cached.read().await.as_ref() {
            if !token.is_expired_at(Utc::now()) {
                return Ok(token.secret().to_string());
            }
        }

        debug!("Access token missing or expired, refreshing");
        let fresh = self.source.fetch_token().await?;
        let secret = fresh.secret().to_string();
        *self.cached.write().await = Some(fresh);
        Ok(secret)
    }
}
