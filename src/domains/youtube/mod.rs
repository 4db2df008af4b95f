//! YouTube Data API v3 access.
//!
//! - `request.rs` - outbound request, response payload and upstream error types
//! - `client.rs` - the [`RestTransport`] seam and its `reqwest` implementation

mod client;
mod request;

pub use client::{RestTransport, YouTubeHttpClient};
pub use request::{Payload, RestRequest, UpstreamError, extract_error_message};
