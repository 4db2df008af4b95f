//! YouTube MCP Server Library
//!
//! This crate exposes a fixed catalog of YouTube Data API v3 operations as
//! Model Context Protocol tools. Write operations are gated on the active
//! credentials: an API key grants read-only access, an OAuth refresh token
//! grants read/write access.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the operation catalog, parameter validation and dispatch
//!   - **auth**: credential selection and bearer-token refresh
//!   - **youtube**: the REST client for the YouTube API
//!
//! # Example
//!
//! ```rust,no_run
//! use youtube_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> youtube_mcp_server::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     let server = McpServer::from_config(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
