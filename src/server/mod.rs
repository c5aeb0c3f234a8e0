pub mod router;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::core::config::ServerConfig;
use crate::services::mcp::McpHandler;

/// Binds the configured address and serves until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    serve(listener, config, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    config: ServerConfig,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        endpoint = %config.endpoint,
        scheme = %config.scheme,
        heartbeat_secs = config.heartbeat.as_secs(),
        "starting MCP server"
    );

    let app = router::build(McpHandler::new(config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
