use std::sync::Arc;

use axum::Router;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};

use crate::services::mcp::McpHandler;

/// Mounts the streamable-HTTP MCP service on the configured endpoint.
///
/// Sessions are tracked by rmcp; the event stream sends keep-alives every
/// heartbeat interval.
pub fn build(handler: McpHandler) -> Router {
    let endpoint = handler.config().endpoint.clone();
    let transport = StreamableHttpServerConfig {
        sse_keep_alive: Some(handler.config().heartbeat),
        stateful_mode: true,
        ..Default::default()
    };

    let service = StreamableHttpService::new(
        move || Ok(handler.clone()),
        Arc::new(LocalSessionManager::default()),
        transport,
    );
    Router::new().nest_service(&endpoint, service)
}
