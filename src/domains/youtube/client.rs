//! HTTP transport to the YouTube Data API.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::request::{Payload, RestRequest, UpstreamError};
use crate::core::config::YouTubeConfig;
use crate::domains::auth::AuthDecoration;

/// Performs exactly one outbound REST call per request.
///
/// The dispatcher depends only on this trait so tests can substitute a
/// recording stub for the network.
#[async_trait]
pub trait RestTransport: Send + Sync {
    async fn execute(&self, request: RestRequest) -> Result<Payload, UpstreamError>;
}

/// `reqwest`-backed transport against the real API.
#[derive(Debug, Clone)]
pub struct YouTubeHttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl YouTubeHttpClient {
    pub fn new(config: &YouTubeConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("youtube-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RestTransport for YouTubeHttpClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: RestRequest) -> Result<Payload, UpstreamError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!("{} {}?{}", request.method, url, request.query_string());

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .query(&request.query);

        builder = match &request.auth {
            AuthDecoration::ApiKey(key) => builder.query(&[("key", key.as_str())]),
            AuthDecoration::Bearer(token) => builder.bearer_auth(token),
        };

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("YouTube API request failed to send: {}", e);
            UpstreamError::new(
                e.status().map(|s| s.as_u16()),
                format!("Failed to reach the YouTube API: {}", e),
            )
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            UpstreamError::new(
                Some(status.as_u16()),
                format!("Failed to read YouTube API response: {}", e),
            )
        })?;

        if !status.is_success() {
            let err = UpstreamError::from_response(status.as_u16(), &body);
            warn!("YouTube API returned {}: {}", status, err.message);
            return Err(err);
        }

        Ok(Payload::from_body(body))
    }
}
