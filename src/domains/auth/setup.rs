//! One-shot OAuth authorization-code flow for obtaining a refresh token.
//!
//! Opens the Google consent page in the user's browser, receives the
//! redirect on a local listener, exchanges the code (with PKCE) and hands
//! back the refresh token so it can be stored as `YOUTUBE_REFRESH_TOKEN`.

use anyhow::{Context, Result, anyhow};
use axum::{
    Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope, TokenResponse, TokenUrl, url::Url,
};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{info, warn};

use super::AuthError;
use crate::core::config::DEFAULT_TOKEN_URL;

pub const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Path the consent page redirects back to.
pub const CALLBACK_PATH: &str = "/oauth2callback";

pub const DEFAULT_REDIRECT_PORT: u16 = 3000;

/// Scopes needed for every catalog operation, including captions and moderation.
pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/youtube",
    "https://www.googleapis.com/auth/youtube.force-ssl",
];

const DONE_HTML: &str = "<html><body><h1>Authorization complete</h1>\
    <p>You can close this window and return to the terminal.</p></body></html>";

const FAILED_HTML: &str = "<html><body><h1>Authorization failed</h1>\
    <p>Check the terminal for details.</p></body></html>";

type ConfiguredClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Settings for the interactive flow.
#[derive(Clone)]
pub struct SetupConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_port: u16,
    pub token_url: String,
}

impl SetupConfig {
    /// Read `YOUTUBE_CLIENT_ID`, `YOUTUBE_CLIENT_SECRET`,
    /// `YOUTUBE_OAUTH_REDIRECT_PORT` and `YOUTUBE_TOKEN_URL`.
    pub fn from_env() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();

        let required = |var: &str| {
            std::env::var(var)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AuthError::configuration(format!("{} must be set", var)))
        };

        let redirect_port = match std::env::var("YOUTUBE_OAUTH_REDIRECT_PORT") {
            Ok(port) => port.parse().map_err(|_| {
                AuthError::configuration(format!("Invalid YOUTUBE_OAUTH_REDIRECT_PORT '{}'", port))
            })?,
            Err(_) => DEFAULT_REDIRECT_PORT,
        };

        Ok(Self {
            client_id: required("YOUTUBE_CLIENT_ID")?,
            client_secret: required("YOUTUBE_CLIENT_SECRET")?,
            redirect_port,
            token_url: std::env::var("YOUTUBE_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
        })
    }

    pub fn redirect_url(&self) -> String {
        format!("http://localhost:{}{}", self.redirect_port, CALLBACK_PATH)
    }

    fn client(&self) -> Result<ConfiguredClient> {
        Ok(BasicClient::new(ClientId::new(self.client_id.clone()))
            .set_client_secret(ClientSecret::new(self.client_secret.clone()))
            .set_auth_uri(AuthUrl::new(AUTH_URL.to_string()).context("authorization URL")?)
            .set_token_uri(TokenUrl::new(self.token_url.clone()).context("token URL")?)
            .set_redirect_uri(RedirectUrl::new(self.redirect_url()).context("redirect URL")?))
    }
}

impl std::fmt::Debug for SetupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_port", &self.redirect_port)
            .field("token_url", &self.token_url)
            .finish()
    }
}

/// Query parameters of the redirect back from the consent page.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Why a redirect was not accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallbackError {
    #[error("authorization was denied: {0}")]
    Denied(String),

    #[error("state parameter does not match; possible CSRF, aborting")]
    StateMismatch,

    #[error("redirect did not carry an authorization code")]
    MissingCode,
}

/// Validate a redirect and extract its authorization code.
pub fn check_callback(params: &CallbackParams, expected_state: &str) -> Result<String, CallbackError> {
    if let Some(error) = &params.error {
        return Err(CallbackError::Denied(error.clone()));
    }
    if params.state.as_deref() != Some(expected_state) {
        return Err(CallbackError::StateMismatch);
    }
    params.code.clone().ok_or(CallbackError::MissingCode)
}

/// Build the consent URL; offline access and forced consent so Google
/// always issues a refresh token.
pub fn authorization_url(config: &SetupConfig, csrf: CsrfToken) -> Result<(Url, PkceCodeVerifier)> {
    let (challenge, verifier) = PkceCodeChallenge::new_random_sha256();
    let (url, _) = config
        .client()?
        .authorize_url(move || csrf)
        .add_scopes(SCOPES.iter().map(|s| Scope::new(s.to_string())))
        .add_extra_param("access_type", "offline")
        .add_extra_param("prompt", "consent")
        .set_pkce_challenge(challenge)
        .url();
    Ok((url, verifier))
}

/// Lines to append to `.env` once the flow succeeds.
pub fn env_lines(config: &SetupConfig, refresh_token: &str) -> String {
    format!(
        "YOUTUBE_CLIENT_ID={}\nYOUTUBE_CLIENT_SECRET={}\nYOUTUBE_REFRESH_TOKEN={}\n",
        config.client_id, config.client_secret, refresh_token
    )
}

#[derive(Clone)]
struct CallbackState {
    expected_state: String,
    sender: Arc<Mutex<Option<oneshot::Sender<Result<String, CallbackError>>>>>,
}

async fn handle_callback(
    State(state): State<CallbackState>,
    Query(params): Query<CallbackParams>,
) -> Html<&'static str> {
    let outcome = check_callback(&params, &state.expected_state);
    let page = if outcome.is_ok() { DONE_HTML } else { FAILED_HTML };

    let sender = state.sender.lock().ok().and_then(|mut guard| guard.take());
    match sender {
        Some(sender) => {
            let _ = sender.send(outcome);
        }
        None => warn!("Ignoring repeated OAuth callback"),
    }

    Html(page)
}

/// Run the whole flow and return the refresh token.
pub async fn run_authorization_flow(config: &SetupConfig) -> Result<String> {
    let csrf = CsrfToken::new_random();
    let expected_state = csrf.secret().clone();
    let (auth_url, verifier) = authorization_url(config, csrf)?;

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.redirect_port))
        .await
        .with_context(|| format!("bind callback listener on port {}", config.redirect_port))?;

    let (tx, rx) = oneshot::channel();
    let app = Router::new()
        .route(CALLBACK_PATH, get(handle_callback))
        .with_state(CallbackState {
            expected_state,
            sender: Arc::new(Mutex::new(Some(tx))),
        });
    let server = tokio::spawn(async move { axum::serve(listener, app).await });

    info!("Waiting for authorization on {}", config.redirect_url());
    eprintln!("Open this URL in your browser to authorize access:\n\n{}\n", auth_url);
    if let Err(e) = webbrowser::open(auth_url.as_str()) {
        warn!("Could not open a browser automatically: {}", e);
    }

    let outcome = rx.await.context("callback listener stopped before a redirect arrived");
    server.abort();
    let code = outcome??;

    let http = oauth2::reqwest::ClientBuilder::new()
        .redirect(oauth2::reqwest::redirect::Policy::none())
        .build()
        .context("build HTTP client")?;

    let token = config
        .client()?
        .exchange_code(AuthorizationCode::new(code))
        .set_pkce_verifier(verifier)
        .request_async(&http)
        .await
        .context("exchange authorization code")?;

    token
        .refresh_token()
        .map(|t| t.secret().clone())
        .ok_or_else(|| {
            anyhow!(
                "Google did not return a refresh token; revoke the app's access at \
                 https://myaccount.google.com/permissions and run this again"
            )
        })
}
