//! Interactive helper that obtains a YouTube OAuth refresh token.
//!
//! Reads `YOUTUBE_CLIENT_ID` and `YOUTUBE_CLIENT_SECRET` (from the environment
//! or `.env`), runs the browser consent flow and prints the lines to add to
//! `.env` so the server starts in read/write mode.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

use youtube_mcp_server::domains::auth::setup::{self, SetupConfig};

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = SetupConfig::from_env()?;
    let refresh_token = setup::run_authorization_flow(&config).await?;

    eprintln!("Authorization succeeded. Add these lines to your .env file:\n");
    print!("{}", setup::env_lines(&config, &refresh_token));

    Ok(())
}
