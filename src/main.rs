use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use gaffer::config::{load_config, TransportKind};
use gaffer::core::registry::ToolRegistry;
use gaffer::llm::LlmClient;
use gaffer::transport::{http, mcp::GafferServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    // stdout carries MCP frames in stdio mode, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let client = LlmClient::from_config(&config.llm).context("Failed to initialize LLM client")?;
    tracing::info!(
        provider = %client.kind(),
        model = %config.llm.model,
        transport = ?config.server.transport,
        "Starting {}",
        config.server.name
    );

    let registry = Arc::new(ToolRegistry::new(client));
    let server = GafferServer::new(registry, &config.server);

    match config.server.transport {
        TransportKind::Stdio => server.serve_stdio().await,
        TransportKind::Http => {
            let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port)
                .parse()
                .with_context(|| format!("Invalid bind address: {}", config.server.bind))?;
            http::serve(server, addr).await
        }
    }
}
