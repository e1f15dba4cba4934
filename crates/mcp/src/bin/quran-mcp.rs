// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use quran_mcp::config::{Args, ServerConfig};
use quran_mcp::server::McpServer;
use quran_mcp::tools::{register_quran_tools, ToolRegistry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServerConfig::load(&args)?;

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::info!("Quran MCP Server starting...");
    match &config.config_file {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::debug!(
            path = %args.config.display(),
            "Configuration file not found, using defaults"
        ),
    }
    tracing::info!(base_url = %config.base_url, verbose = config.verbose, "Configuration loaded");

    let client = Arc::new(config.build_client()?);

    let mut registry = ToolRegistry::new();
    register_quran_tools(&mut registry, client);
    tracing::info!("Registered {} tools", registry.len());

    let server = Arc::new(McpServer::new(registry));
    server.start().await?;

    tracing::info!("Input closed, shutting down");
    Ok(())
}
