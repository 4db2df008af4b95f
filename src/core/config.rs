//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the YouTube Data API v3.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default Google OAuth 2.0 token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// YouTube API endpoints and client settings.
    pub youtube: YouTubeConfig,

    /// YouTube credentials (API key and/or OAuth triple).
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// YouTube API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeConfig {
    /// Base URL every resource path is appended to.
    pub api_base_url: String,

    /// OAuth token endpoint used to refresh bearer tokens.
    pub token_url: String,

    /// Per-request timeout for outbound API calls, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Raw credential strings as found in the environment.
///
/// Mode selection happens in [`crate::domains::auth::CredentialResolver`].
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// API key for read-only access.
    pub api_key: Option<String>,

    /// OAuth client ID.
    pub client_id: Option<String>,

    /// OAuth client secret.
    pub client_secret: Option<String>,

    /// Long-lived OAuth refresh token (see `youtube-mcp-auth`).
    pub refresh_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("CredentialsConfig")
            .field("api_key", &redact(&self.api_key))
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("refresh_token", &redact(&self.refresh_token))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "youtube-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            youtube: YouTubeConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_LOG_TIMESTAMPS`); YouTube settings use the `YOUTUBE_` prefix.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(flag) = std::env::var("MCP_LOG_TIMESTAMPS") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.logging.with_timestamps = true,
                "0" | "false" | "no" | "off" => config.logging.with_timestamps = false,
                _ => warn!("Ignoring invalid MCP_LOG_TIMESTAMPS '{}'", flag),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("YOUTUBE_API_BASE_URL") {
            config.youtube.api_base_url = url.trim_end_matches('/').to_string();
            info!("YouTube API base URL overridden: {}", config.youtube.api_base_url);
        }

        if let Ok(url) = std::env::var("YOUTUBE_TOKEN_URL") {
            config.youtube.token_url = url;
        }

        if let Ok(timeout) = std::env::var("YOUTUBE_REQUEST_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.youtube.request_timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid YOUTUBE_REQUEST_TIMEOUT_SECS '{}', using {}s",
                    timeout, config.youtube.request_timeout_secs
                ),
            }
        }

        config.credentials = CredentialsConfig {
            api_key: std::env::var("YOUTUBE_API_KEY").ok(),
            client_id: std::env::var("YOUTUBE_CLIENT_ID").ok(),
            client_secret: std::env::var("YOUTUBE_CLIENT_SECRET").ok(),
            refresh_token: std::env::var("YOUTUBE_REFRESH_TOKEN").ok(),
        };

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const CREDENTIAL_VARS: [&str; 4] = [
        "YOUTUBE_API_KEY",
        "YOUTUBE_CLIENT_ID",
        "YOUTUBE_CLIENT_SECRET",
        "YOUTUBE_REFRESH_TOKEN",
    ];

    fn clear_credentials() {
        for var in CREDENTIAL_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_credentials();
        unsafe {
            std::env::set_var("YOUTUBE_API_KEY", "test_key_12345");
            std::env::set_var("YOUTUBE_CLIENT_ID", "client.apps.googleusercontent.com");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.api_key.as_deref(), Some("test_key_12345"));
        assert_eq!(
            config.credentials.client_id.as_deref(),
            Some("client.apps.googleusercontent.com")
        );
        assert!(config.credentials.refresh_token.is_none());
        clear_credentials();
    }

    #[test]
    fn test_youtube_overrides_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("YOUTUBE_API_BASE_URL", "http://127.0.0.1:9999/youtube/v3/");
            std::env::set_var("YOUTUBE_REQUEST_TIMEOUT_SECS", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.youtube.api_base_url, "http://127.0.0.1:9999/youtube/v3");
        assert_eq!(config.youtube.request_timeout_secs, 30);
        unsafe {
            std::env::remove_var("YOUTUBE_API_BASE_URL");
            std::env::remove_var("YOUTUBE_REQUEST_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_log_timestamps_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
        }
        assert!(!Config::from_env().logging.with_timestamps);

        unsafe {
            std::env::set_var("MCP_LOG_TIMESTAMPS", "sometimes");
        }
        assert!(Config::from_env().logging.with_timestamps);

        unsafe {
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
        assert!(Config::from_env().logging.with_timestamps);
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            api_key: Some("super_secret_key".to_string()),
            client_id: Some("public-client-id".to_string()),
            client_secret: Some("super_secret_client".to_string()),
            refresh_token: Some("1//super_secret_refresh".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(debug_str.contains("public-client-id"));
        assert!(!debug_str.contains("super_secret"));
    }

    #[test]
    fn test_config_default_points_at_youtube() {
        let config = Config::default();
        assert_eq!(config.youtube.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.youtube.token_url, DEFAULT_TOKEN_URL);
        assert!(config.credentials.api_key.is_none());
    }
}
