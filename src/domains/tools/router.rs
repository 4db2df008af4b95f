//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every catalog operation becomes one dynamic route whose handler forwards
//! to the shared dispatcher, so the STDIO and TCP transports need no
//! per-tool code.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};
use serde_json::Value;

use super::dispatcher::Dispatcher;

/// Build the tool router with one route per registered operation.
pub fn build_tool_router<S>(dispatcher: Arc<Dispatcher>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();
    for op in dispatcher.registry().list_operations() {
        router = router.with_route(create_route(op.name, op.to_tool(), dispatcher.clone()));
    }
    router
}

fn create_route<S>(name: &'static str, tool: rmcp::model::Tool, dispatcher: Arc<Dispatcher>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let dispatcher = dispatcher.clone();
        async move { dispatcher.call_tool(name, Value::Object(args)).await }.boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::auth::CredentialResolver;
    use crate::domains::youtube::{Payload, RestRequest, RestTransport, UpstreamError};
    use async_trait::async_trait;

    struct TestServer {}

    struct NoopTransport;

    #[async_trait]
    impl RestTransport for NoopTransport {
        async fn execute(&self, _request: RestRequest) -> Result<Payload, UpstreamError> {
            Ok(Payload::Empty)
        }
    }

    fn test_dispatcher() -> Arc<Dispatcher> {
        Arc::new(Dispatcher::new(
            Arc::new(ToolRegistry::new()),
            Arc::new(CredentialResolver::api_key("k")),
            Arc::new(NoopTransport),
        ))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_dispatcher());
        let tools = router.list_all();
        assert_eq!(tools.len(), 33);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"videos_list"));
        assert!(names.contains(&"commentThreads_insert"));
        assert!(names.contains(&"captions_download"));
        assert!(names.contains(&"subscriptions_delete"));
    }

    #[test]
    fn test_registry_matches_router() {
        let dispatcher = test_dispatcher();
        let registry_names = dispatcher.registry().tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(dispatcher);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_write_tools_advertise_oauth() {
        let router: ToolRouter<TestServer> = build_tool_router(test_dispatcher());
        let tool = router
            .list_all()
            .into_iter()
            .find(|t| t.name == "videos_delete")
            .unwrap();
        assert!(tool.description.unwrap().ends_with("Requires OAuth credentials."));
    }
}
