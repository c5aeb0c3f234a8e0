use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::{json, Value};

use crate::core::errors::{Error, Result};
use crate::services::fs::listing;

pub const LIST_DIR_TOOL: &str = "list_dir";

pub fn list_dir_tool() -> Tool {
    let schema = match json!({
        "type": "object",
        "properties": {
            "path": {
                "type": "string",
                "description": "Path to list directory contents"
            }
        },
        "required": ["path"]
    }) {
        Value::Object(schema) => schema,
        _ => JsonObject::new(),
    };

    Tool::new(
        LIST_DIR_TOOL,
        "list directory contents with file type, size, extension, and path as JSON",
        schema,
    )
}

/// Required string argument from a `tools/call` arguments object.
pub fn require_string<'a>(arguments: Option<&'a JsonObject>, key: &str) -> Result<&'a str> {
    match arguments.and_then(|args| args.get(key)) {
        None => Err(Error::MissingArgument(format!(
            "required argument {key:?} not found"
        ))),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(Error::MissingArgument(format!(
            "argument {key:?} is not a string"
        ))),
    }
}

/// Runs `list_dir`. Every failure comes back as a soft error result.
pub async fn call_list_dir(arguments: Option<&JsonObject>) -> CallToolResult {
    let path = match require_string(arguments, "path") {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!(tool = LIST_DIR_TOOL, error = %e, "rejected tool call");
            return CallToolResult::error(vec![Content::text(e.to_string())]);
        }
    };

    match listing::list_dir_async(path).await.and_then(|e| listing::to_json(&e)) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            tracing::warn!(tool = LIST_DIR_TOOL, path, error = %e, "tool call failed");
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}
