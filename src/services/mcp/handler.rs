use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListResourceTemplatesResult,
    ListToolsResult, PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};

use super::{resources, tools};
use crate::core::config::ServerConfig;
use crate::core::errors::Error;

/// MCP surface of the server: one tool and one resource template over the
/// directory listing.
///
/// Holds only the startup configuration, so one instance serves every session.
#[derive(Debug, Clone)]
pub struct McpHandler {
    config: ServerConfig,
}

impl McpHandler {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl ServerHandler for McpHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
                ..Default::default()
            },
            instructions: Some(format!(
                "Lists directory contents via the `{}` tool or `{}://dir/{{path}}` resources.",
                tools::LIST_DIR_TOOL,
                self.config.scheme
            )),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(vec![tools::list_dir_tool()]))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        match request.name.as_ref() {
            tools::LIST_DIR_TOOL => Ok(tools::call_list_dir(request.arguments.as_ref()).await),
            other => {
                tracing::warn!(tool = other, "unknown tool");
                Err(McpError::invalid_params(format!("tool not found: {other}"), None))
            }
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        let template = resources::dir_template(&self.config.scheme).map_err(|e| mcp_error(&e))?;
        Ok(ListResourceTemplatesResult::with_all_items(vec![template]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        match resources::read_dir_resource(&self.config.scheme, &request.uri).await {
            Ok(contents) => Ok(ReadResourceResult { contents }),
            Err(e) => {
                tracing::warn!(uri = %request.uri, error = %e, "resource read failed");
                Err(mcp_error(&e))
            }
        }
    }
}

fn mcp_error(error: &Error) -> McpError {
    match error {
        Error::InvalidUri(_) | Error::MissingArgument(_) => {
            McpError::invalid_params(error.to_string(), None)
        }
        _ => McpError::internal_error(error.to_string(), None),
    }
}
