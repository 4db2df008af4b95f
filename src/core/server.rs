//! MCP Server implementation and lifecycle management.
//!
//! The server handler only advertises and routes tools. Every tool is backed
//! by the shared `Dispatcher`; the ToolRouter is built from the registry in
//! `domains/tools/router.rs`, so adding an operation never touches this file.

use rmcp::{
    ErrorData as McpError, ServerHandler, handler::server::tool::ToolRouter, model::*,
    tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::auth::{AuthMode, Capability, CredentialResolver};
use crate::domains::tools::{Dispatcher, ToolRegistry, build_tool_router};
use crate::domains::youtube::YouTubeHttpClient;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap
/// to clone; every clone shares the same dispatcher and token cache.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Executes tool invocations against the YouTube API.
    dispatcher: Arc<Dispatcher>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server over the given dispatcher.
    pub fn new(config: Config, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(dispatcher.clone()),
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Resolve credentials, build the YouTube client and wire the dispatcher.
    ///
    /// Fails when no usable credentials are configured.
    pub fn from_config(config: Config) -> super::Result<Self> {
        let credentials = CredentialResolver::from_config(&config.credentials, &config.youtube)?;
        let state = credentials.state();
        info!("Credentials: {} ({})", state.mode, state.capability);

        let client = YouTubeHttpClient::new(&config.youtube)?;
        info!("YouTube API: {}", client.base_url());

        let dispatcher = Dispatcher::new(
            Arc::new(ToolRegistry::new()),
            Arc::new(credentials),
            Arc::new(client),
        );
        Ok(Self::new(config, Arc::new(dispatcher)))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Usage notes sent to clients during initialization.
    pub fn instructions(&self) -> String {
        let state = self.dispatcher.credential_state();
        let access = match state.capability {
            Capability::ReadWrite => {
                "All operations are available, including inserts, updates and deletes."
            }
            Capability::ReadOnly => {
                "Only read operations are available. Operations marked as requiring OAuth \
                 credentials will be rejected until YOUTUBE_CLIENT_ID, YOUTUBE_CLIENT_SECRET \
                 and YOUTUBE_REFRESH_TOKEN are configured."
            }
        };
        let auth = match state.mode {
            AuthMode::ApiKey => "an API key",
            AuthMode::OAuth => "OAuth credentials",
        };
        format!(
            "YouTube Data API v3 tools. Tool names follow the resource_method pattern \
             (e.g. videos_list, commentThreads_insert) and arguments map directly to the \
             API's query parameters, with resource payloads passed in `body`. \
             This server is authenticated with {} ({}). {}",
            auth, state.capability, access
        )
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, McpError> {
        self.dispatcher.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
