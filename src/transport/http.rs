//! HTTP surface: MCP streamable HTTP at `/mcp/stream`, plus plain JSON routes
//! for clients that only want list/call.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::tool::Arguments;
use crate::llm::Completer;
use crate::transport::mcp::GafferServer;

#[derive(Debug, Deserialize)]
pub struct CallRequest {
    pub name: String,
    /// Absent and `null` both mean no arguments
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize)]
pub struct ToolSummary {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Map<String, Value>,
}

/// Build the router. Tool failures are in-band text, so `/mcp/call` answers 200
/// for anything that parses.
pub fn router<C: Completer + 'static>(server: GafferServer<C>) -> Router {
    let factory = server.clone();
    let streamable = StreamableHttpService::new(
        move || Ok(factory.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    Router::new()
        .route("/health", get(health_check::<C>))
        .route("/mcp/tools", post(list_tools::<C>))
        .route("/mcp/call", post(call_tool::<C>))
        .with_state(Arc::new(server))
        .nest_service("/mcp/stream", streamable)
}

/// Bind and serve until the process is stopped.
pub async fn serve<C: Completer + 'static>(server: GafferServer<C>, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(server);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Serving MCP over HTTP");

    axum::serve(listener, app)
        .await
        .context("HTTP server exited")?;
    Ok(())
}

async fn health_check<C: Completer + 'static>(
    State(server): State<Arc<GafferServer<C>>>,
) -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "tools": server.registry().list_tools().len(),
    }))
}

async fn list_tools<C: Completer + 'static>(
    State(server): State<Arc<GafferServer<C>>>,
) -> Json<Value> {
    let tools: Vec<ToolSummary> = server
        .registry()
        .list_tools()
        .iter()
        .map(|t| ToolSummary {
            name: t.name,
            description: t.description,
            input_schema: t.input_schema(),
        })
        .collect();
    Json(serde_json::json!({ "tools": tools }))
}

async fn call_tool<C: Completer + 'static>(
    State(server): State<Arc<GafferServer<C>>>,
    Json(request): Json<CallRequest>,
) -> Json<Value> {
    tracing::debug!(tool = %request.name, "HTTP tool call");
    let arguments = request
        .arguments
        .as_ref()
        .map(Arguments::from_json)
        .unwrap_or_default();
    let text = server.registry().call_tool(&request.name, &arguments).await;

    Json(serde_json::json!({
        "content": [
            {
                "type": "text",
                "text": text
            }
        ],
        "isError": false
    }))
}
