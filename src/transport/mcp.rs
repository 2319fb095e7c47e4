use std::sync::Arc;

use rmcp::{
    handler::server::ServerHandler,
    model::*,
    service::{RequestContext, RoleServer},
    ErrorData as McpError, ServiceExt,
};

use crate::config::ServerConfig;
use crate::core::registry::ToolRegistry;
use crate::core::tool::{Arguments, ToolDescriptor};
use crate::llm::Completer;

/// GafferServer is the MCP ServerHandler for the tool catalog.
///
/// It holds no per-session state; every clone shares one registry.
pub struct GafferServer<C> {
    registry: Arc<ToolRegistry<C>>,
    name: String,
    version: String,
}

impl<C> Clone for GafferServer<C> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            name: self.name.clone(),
            version: self.version.clone(),
        }
    }
}

impl<C: Completer + 'static> GafferServer<C> {
    pub fn new(registry: Arc<ToolRegistry<C>>, server: &ServerConfig) -> Self {
        Self {
            registry,
            name: server.name.clone(),
            version: server.version.clone(),
        }
    }

    pub fn registry(&self) -> &ToolRegistry<C> {
        &self.registry
    }

    /// Flatten the call's arguments, run the tool and wrap its text.
    pub async fn handle_call(&self, request: CallToolRequestParams) -> CallToolResult {
        let arguments = request
            .arguments
            .as_ref()
            .map(Arguments::from_json)
            .unwrap_or_default();

        let text = self.registry.call_tool(request.name.as_ref(), &arguments).await;
        CallToolResult::success(vec![Content::text(text)])
    }

    /// Serve MCP over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        tracing::info!(name = %self.name, "Serving MCP over stdio");
        let running = self.serve(rmcp::transport::stdio()).await?;
        running.waiting().await?;
        Ok(())
    }
}

/// Convert a catalog entry to its MCP wire form.
pub fn to_mcp_tool(tool: &ToolDescriptor) -> Tool {
    Tool {
        name: tool.name.into(),
        title: None,
        description: Some(tool.description.into()),
        input_schema: Arc::new(tool.input_schema()),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
        execution: None,
    }
}

#[allow(clippy::manual_async_fn)]
impl<C: Completer + 'static> ServerHandler for GafferServer<C> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name.clone(),
                title: Some("TheGaffer".to_string()),
                version: self.version.clone(),
                description: Some("Soccer tactics analysis over MCP".to_string()),
                icons: None,
                website_url: None,
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Ask for tactical advice, counter-formations, match analysis or tactical knowledge"
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async {
            let tools = self.registry.list_tools().iter().map(to_mcp_tool).collect();
            Ok(ListToolsResult {
                tools,
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { Ok(self.handle_call(request).await) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyst::testing::ScriptedCompleter;
    use crate::core::catalog::CATALOG;

    fn server() -> GafferServer<ScriptedCompleter> {
        let registry = Arc::new(ToolRegistry::new(ScriptedCompleter::replying("ok")));
        GafferServer::new(registry, &ServerConfig::default())
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "thegaffer");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_to_mcp_tool() {
        let tool = to_mcp_tool(&CATALOG[3]);
        assert_eq!(tool.name.as_ref(), "get_tactical_knowledge");
        assert_eq!(
            tool.description.as_deref(),
            Some("Retrieve tactical knowledge and historical data")
        );
        assert_eq!(tool.input_schema["required"], serde_json::json!(["topic"]));
        assert!(tool.input_schema["properties"].get("coach").is_some());
    }

    fn call(value: serde_json::Value) -> CallToolRequestParams {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_handle_call_without_arguments() {
        let result = server()
            .handle_call(call(serde_json::json!({ "name": "analyze_match" })))
            .await;
        let body = serde_json::to_value(&result).unwrap();
        assert_eq!(body["isError"], false);
        assert_eq!(body["content"].as_array().unwrap().len(), 1);
        assert_eq!(body["content"][0]["type"], "text");
        assert_eq!(
            body["content"][0]["text"],
            "Error: Missing required argument: match_data"
        );
    }

    #[tokio::test]
    async fn test_handle_call_flattens_arguments() {
        let registry = Arc::new(ToolRegistry::new(ScriptedCompleter::replying("Sit in a 5-4-1.")));
        let server = GafferServer::new(registry, &ServerConfig::default());
        let result = server
            .handle_call(call(serde_json::json!({
                "name": "counter_formation",
                "arguments": { "opponent_formation": "3-5-2", "your_strengths": null, "match_context": 2 }
            })))
            .await;
        let body = serde_json::to_value(&result).unwrap();
        assert_eq!(body["content"][0]["text"], "Sit in a 5-4-1.");

        let prompt = server.registry().gaffer().completer().last_prompt().unwrap();
        assert!(prompt.contains("OPPONENT FORMATION: 3-5-2"));
        assert!(prompt.contains("YOUR TEAM STRENGTHS: Not specified"));
        assert!(prompt.contains("MATCH CONTEXT: 2"));
    }

    #[test]
    fn test_clones_share_registry() {
        let a = server();
        let b = a.clone();
        assert!(std::ptr::eq(a.registry(), b.registry()));
    }
}
