//! Transport layer for the MCP server.
//!
//! Every transport serves the same `McpServer`, so tool behavior is
//! identical regardless of how a client connects:
//! - **STDIO**: standard input/output, the default for MCP clients - feature: `stdio`
//! - **TCP**: line-delimited JSON-RPC over a raw socket - feature: `tcp`
//! - **HTTP**: JSON-RPC over POST, plus `/health` - feature: `http`

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
