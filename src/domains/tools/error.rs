//! Tool-specific error types.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use thiserror::Error;

use super::schema::SchemaViolation;
use crate::domains::auth::AuthError;
use crate::domains::youtube::UpstreamError;

/// Errors that can occur while dispatching a tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    /// The arguments do not satisfy the tool's parameter schema.
    #[error("Invalid arguments for {tool}: {violation}")]
    InvalidArgument {
        tool: String,
        violation: SchemaViolation,
    },

    /// A write operation was invoked with read-only credentials.
    #[error(
        "{tool} requires OAuth (read/write) credentials, but the server is running with a \
         read-only API key. Set YOUTUBE_CLIENT_ID, YOUTUBE_CLIENT_SECRET and \
         YOUTUBE_REFRESH_TOKEN to enable write operations."
    )]
    PermissionDenied { tool: String },

    /// The YouTube API call (or the token refresh it needed) failed.
    #[error("YouTube API error: {0}")]
    UpstreamFailure(String),
}

impl ToolError {
    /// Create a new "unknown operation" error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Create a new "invalid argument" error.
    pub fn invalid_argument(tool: impl Into<String>, violation: SchemaViolation) -> Self {
        Self::InvalidArgument {
            tool: tool.into(),
            violation,
        }
    }

    /// Create a new "permission denied" error.
    pub fn permission_denied(tool: impl Into<String>) -> Self {
        Self::PermissionDenied { tool: tool.into() }
    }

    /// Create a new "upstream failure" error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamFailure(msg.into())
    }

    /// Convert into what the MCP client sees.
    ///
    /// Malformed calls become protocol errors; failures the agent can act on
    /// become error tool results carrying the message.
    pub fn into_call_result(self) -> Result<CallToolResult, McpError> {
        match self {
            Self::UnknownOperation(_) | Self::InvalidArgument { .. } => {
                Err(McpError::invalid_params(self.to_string(), None))
            }
            Self::PermissionDenied { .. } | Self::UpstreamFailure(_) => {
                Ok(CallToolResult::error(vec![Content::text(self.to_string())]))
            }
        }
    }
}

impl From<UpstreamError> for ToolError {
    fn from(err: UpstreamError) -> Self {
        Self::UpstreamFailure(err.message)
    }
}

impl From<AuthError> for ToolError {
    fn from(err: AuthError) -> Self {
        Self::UpstreamFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_names_oauth() {
        let msg = ToolError::permission_denied("videos_delete").to_string();
        assert!(msg.starts_with("videos_delete requires OAuth"));
        assert!(msg.contains("YOUTUBE_REFRESH_TOKEN"));
    }

    #[test]
    fn test_unknown_operation_is_protocol_error() {
        assert!(ToolError::unknown_operation("nope").into_call_result().is_err());
    }

    #[test]
    fn test_upstream_failure_is_error_result() {
        let result = ToolError::upstream("quota exceeded")
            .into_call_result()
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_token_refresh_surfaces_as_upstream_failure() {
        let err: ToolError = AuthError::token_refresh("invalid_grant").into();
        assert!(matches!(err, ToolError::UpstreamFailure(_)));
        assert!(err.to_string().contains("invalid_grant"));
    }
}
