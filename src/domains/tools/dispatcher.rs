//! Generic executor for every catalog operation.
//!
//! One invocation is: resolve the descriptor, validate the arguments, check
//! the capability, split the arguments into path/query/body, attach the
//! credential, and make exactly one REST call. Nothing is retried.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use super::descriptor::OperationDescriptor;
use super::error::ToolError;
use super::registry::ToolRegistry;
use crate::domains::auth::{AuthDecoration, Capability, CredentialResolver, CredentialState};
use crate::domains::youtube::{Payload, RestRequest, RestTransport};

/// Dispatches tool invocations against the YouTube API.
///
/// Shared (`Arc`) by every transport; holds no per-call state.
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    credentials: Arc<CredentialResolver>,
    transport: Arc<dyn RestTransport>,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<ToolRegistry>,
        credentials: Arc<CredentialResolver>,
        transport: Arc<dyn RestTransport>,
    ) -> Self {
        Self {
            registry,
            credentials,
            transport,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn credential_state(&self) -> CredentialState {
        self.credentials.state()
    }

    /// Run one operation and return the raw upstream payload.
    ///
    /// Unknown names, invalid arguments and missing capability are rejected
    /// before any outbound call is made.
    #[instrument(skip(self, arguments))]
    pub async fn dispatch(&self, name: &str, arguments: Value) -> Result<Payload, ToolError> {
        let op = self.registry.find_operation(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::unknown_operation(name)
        })?;

        let arguments = match arguments {
            Value::Null => Value::Object(Map::new()),
            other => other,
        };

        op.schema
            .validate(&arguments)
            .map_err(|violation| ToolError::invalid_argument(name, violation))?;

        if op.requires_write_capability()
            && self.credentials.state().capability != Capability::ReadWrite
        {
            info!("Rejected {}: write operation with read-only credentials", name);
            return Err(ToolError::permission_denied(name));
        }

        let auth = self.credentials.current_auth_decoration().await?;
        let request = build_request(op, &arguments, auth);
        info!("Dispatching {} to {} {}", name, request.method, request.path);

        Ok(self.transport.execute(request).await?)
    }

    /// Run one operation and wrap the outcome for the MCP client.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, McpError> {
        match self.dispatch(name, arguments).await {
            Ok(payload) => render_success(name, payload),
            Err(err) => {
                warn!("Tool {} failed: {}", name, err);
                err.into_call_result()
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("operations", &self.registry.len())
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Split validated arguments into the outbound request.
///
/// Path placeholders are percent-encoded into the path, the body field is
/// forwarded verbatim, and every other supplied argument becomes a query
/// parameter in schema declaration order.
pub fn build_request(op: &OperationDescriptor, arguments: &Value, auth: AuthDecoration) -> RestRequest {
    let supplied = |name: &str| arguments.get(name).filter(|v| !v.is_null());

    let path = op
        .endpoint
        .path
        .split('/')
        .map(|segment| {
            match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(param) => supplied(param)
                    .map(|v| urlencoding::encode(&render_value(v)).into_owned())
                    .unwrap_or_default(),
                None => segment.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    let query = op
        .schema
        .fields()
        .iter()
        .filter(|field| !op.endpoint.is_routed_elsewhere(field.name))
        .filter_map(|field| supplied(field.name).map(|v| (field.name.to_string(), render_value(v))))
        .collect();

    let body = op.endpoint.body.and_then(supplied).cloned();

    RestRequest {
        method: op.endpoint.method.clone(),
        path,
        query,
        body,
        auth,
    }
}

/// Query-string rendering of one argument value.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn render_success(name: &str, payload: Payload) -> Result<CallToolResult, McpError> {
    let text = match payload {
        Payload::Json(value) => serde_json::to_string_pretty(&value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?,
        Payload::Text(text) => text,
        Payload::Empty => format!("{} completed successfully (no content returned)", name),
    };
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::BearerTokenCache;
    use crate::domains::auth::token::tests::{CountingSource, expired_token};
    use crate::domains::youtube::UpstreamError;
    use async_trait::async_trait;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::Mutex;

    /// REST transport stub that records every request.
    struct RecordingTransport {
        requests: Mutex<Vec<RestRequest>>,
        response: Result<Payload, UpstreamError>,
    }

    impl RecordingTransport {
        fn returning(response: Result<Payload, UpstreamError>) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                response,
            })
        }

        fn json(value: Value) -> Arc<Self> {
            Self::returning(Ok(Payload::Json(value)))
        }

        fn requests(&self) -> Vec<RestRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RestTransport for RecordingTransport {
        async fn execute(&self, request: RestRequest) -> Result<Payload, UpstreamError> {
            self.requests.lock().unwrap().push(request);
            self.response.clone()
        }
    }

    fn api_key_dispatcher(transport: Arc<RecordingTransport>) -> Dispatcher {
        Dispatcher::new(
            Arc::new(ToolRegistry::new()),
            Arc::new(CredentialResolver::api_key("test-key")),
            transport,
        )
    }

    fn oauth_dispatcher(transport: Arc<RecordingTransport>, cache: BearerTokenCache) -> Dispatcher {
        Dispatcher::new(
            Arc::new(ToolRegistry::new()),
            Arc::new(CredentialResolver::oauth(cache)),
            transport,
        )
    }

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[tokio::test]
    async fn test_api_key_list_builds_query() {
        let transport = RecordingTransport::json(json!({"items": [{"id": "abc123"}]}));
        let dispatcher = api_key_dispatcher(transport.clone());

        let payload = dispatcher
            .dispatch("videos_list", json!({"part": "snippet", "id": "abc123"}))
            .await
            .unwrap();
        assert_eq!(payload, Payload::Json(json!({"items": [{"id": "abc123"}]})));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/videos");
        assert_eq!(
            request.query,
            vec![
                ("part".to_string(), "snippet".to_string()),
                ("id".to_string(), "abc123".to_string()),
            ]
        );
        assert_eq!(request.body, None);
        assert_eq!(request.auth, AuthDecoration::ApiKey("test-key".into()));
    }

    #[tokio::test]
    async fn test_comment_thread_insert_forwards_body() {
        let created = json!({"id": "Ugx123", "snippet": {"videoId": "abc"}});
        let transport = RecordingTransport::json(created.clone());
        let cache = BearerTokenCache::with_token(
            CountingSource::ok(),
            crate::domains::auth::AccessToken::from_expires_in("live-token", None),
        );
        let dispatcher = oauth_dispatcher(transport.clone(), cache);

        let body = json!({
            "snippet": {
                "videoId": "abc",
                "topLevelComment": {"snippet": {"textOriginal": "Great video"}}
            }
        });
        let result = dispatcher
            .call_tool("commentThreads_insert", json!({"part": "snippet", "body": body}))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        let returned: Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(returned, created);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path, "/commentThreads");
        assert_eq!(requests[0].query, vec![("part".to_string(), "snippet".to_string())]);
        assert_eq!(requests[0].body, Some(body));
        assert_eq!(requests[0].auth, AuthDecoration::Bearer("live-token".into()));
    }

    #[tokio::test]
    async fn test_write_denied_with_api_key() {
        let transport = RecordingTransport::json(json!({}));
        let dispatcher = api_key_dispatcher(transport.clone());

        let err = dispatcher
            .dispatch("videos_delete", json!({"id": "abc"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::PermissionDenied { .. }));
        assert!(err.to_string().contains("OAuth"));
        assert!(transport.requests().is_empty());

        let result = dispatcher
            .call_tool("videos_delete", json!({"id": "abc"}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_operation_makes_no_call() {
        let transport = RecordingTransport::json(json!({}));
        let dispatcher = api_key_dispatcher(transport.clone());

        let err = dispatcher.dispatch("videos_destroy", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::UnknownOperation(ref n) if n == "videos_destroy"));
        assert!(dispatcher.call_tool("videos_destroy", json!({})).await.is_err());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_missing_required_field_makes_no_call() {
        let transport = RecordingTransport::json(json!({}));
        let dispatcher = api_key_dispatcher(transport.clone());

        let err = dispatcher
            .dispatch("videos_list", json!({"id": "abc"}))
            .await
            .unwrap_err();
        match err {
            ToolError::InvalidArgument { violation, .. } => assert_eq!(violation.path, "part"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_arguments_checked_before_capability() {
        let transport = RecordingTransport::json(json!({}));
        let dispatcher = api_key_dispatcher(transport.clone());

        let err = dispatcher.dispatch("videos_delete", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_nested_body_violation_names_path() {
        let transport = RecordingTransport::json(json!({}));
        let cache = BearerTokenCache::new(CountingSource::ok());
        let dispatcher = oauth_dispatcher(transport.clone(), cache);

        let err = dispatcher
            .dispatch(
                "commentThreads_insert",
                json!({"part": "snippet", "body": {"snippet": {"topLevelComment": {"snippet": {"textOriginal": "x"}}}}}),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("body.snippet.videoId"));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_expired_token_refreshed_once() {
        let transport = RecordingTransport::returning(Ok(Payload::Empty));
        let source = CountingSource::ok();
        let cache = BearerTokenCache::with_token(source.clone(), expired_token());
        let dispatcher = oauth_dispatcher(transport.clone(), cache);

        dispatcher
            .dispatch("videos_rate", json!({"id": "abc", "rating": "like"}))
            .await
            .unwrap();

        assert_eq!(source.calls(), 1);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].auth, AuthDecoration::Bearer("fresh-token-1".into()));
    }

    #[tokio::test]
    async fn test_refresh_failure_makes_no_resource_call() {
        let transport = RecordingTransport::json(json!({}));
        let source = CountingSource::failing();
        let dispatcher = oauth_dispatcher(transport.clone(), BearerTokenCache::new(source.clone()));

        let err = dispatcher
            .dispatch("videos_list", json!({"part": "snippet", "chart": "mostPopular"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::UpstreamFailure(_)));
        assert!(err.to_string().contains("invalid_grant"));
        assert_eq!(source.calls(), 1);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_becomes_error_result() {
        let transport = RecordingTransport::returning(Err(UpstreamError::new(
            Some(403),
            "The request cannot be completed because you have exceeded your quota.",
        )));
        let dispatcher = api_key_dispatcher(transport.clone());

        let result = dispatcher
            .call_tool("search_list", json!({"part": "snippet", "q": "rust"}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).contains("exceeded your quota"));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_same_invocation_builds_same_request() {
        let transport = RecordingTransport::json(json!({"items": []}));
        let dispatcher = api_key_dispatcher(transport.clone());
        let args = json!({"part": "snippet,statistics", "chart": "mostPopular", "maxResults": 20, "regionCode": "GB"});

        dispatcher.dispatch("videos_list", args.clone()).await.unwrap();
        dispatcher.dispatch("videos_list", args).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
        assert!(requests[0].query.contains(&("maxResults".to_string(), "20".to_string())));
    }

    #[tokio::test]
    async fn test_caption_download_substitutes_path() {
        let transport =
            RecordingTransport::returning(Ok(Payload::Text("1\n00:00:01,000 --> 00:00:02,000\nHi\n".into())));
        let cache = BearerTokenCache::new(CountingSource::ok());
        let dispatcher = oauth_dispatcher(transport.clone(), cache);

        let result = dispatcher
            .call_tool("captions_download", json!({"id": "cap 1/en", "tfmt": "srt"}))
            .await
            .unwrap();
        assert!(result_text(&result).starts_with("1\n00:00:01,000"));

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/captions/cap%201%2Fen");
        assert_eq!(requests[0].query, vec![("tfmt".to_string(), "srt".to_string())]);
    }

    #[tokio::test]
    async fn test_empty_response_reports_success() {
        let transport = RecordingTransport::returning(Ok(Payload::Empty));
        let cache = BearerTokenCache::new(CountingSource::ok());
        let dispatcher = oauth_dispatcher(transport, cache);

        let result = dispatcher
            .call_tool("playlists_delete", json!({"id": "PL123"}))
            .await
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result),
            "playlists_delete completed successfully (no content returned)"
        );
    }

    #[tokio::test]
    async fn test_null_arguments_treated_as_empty() {
        let transport = RecordingTransport::json(json!({}));
        let dispatcher = api_key_dispatcher(transport);

        let err = dispatcher.dispatch("videoCategories_list", Value::Null).await.unwrap_err();
        match err {
            ToolError::InvalidArgument { violation, .. } => assert_eq!(violation.path, "part"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_render_values() {
        assert_eq!(render_value(&json!("abc")), "abc");
        assert_eq!(render_value(&json!(25)), "25");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(["a", "b", 3])), "a,b,3");
    }

    #[test]
    fn test_query_skips_null_and_routed_fields() {
        let registry = ToolRegistry::new();
        let op = registry.find_operation("videos_update").unwrap();
        let body = json!({"id": "abc", "snippet": {"title": "t", "categoryId": "22"}});
        let request = build_request(
            op,
            &json!({"part": "snippet", "onBehalfOfContentOwner": null, "body": body}),
            AuthDecoration::Bearer("t".into()),
        );
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.query, vec![("part".to_string(), "snippet".to_string())]);
        assert_eq!(request.body, Some(body));
    }
}
