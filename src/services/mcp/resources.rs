use rmcp::model::{ResourceContents, ResourceTemplate};
use serde_json::json;

use super::uri::{dir_uri_template, extract_dir_path};
use crate::core::errors::{Error, Result};
use crate::services::fs::listing;

pub const JSON_MIME_TYPE: &str = "application/json";

pub fn dir_template(scheme: &str) -> Result<ResourceTemplate> {
    Ok(serde_json::from_value(json!({
        "uriTemplate": dir_uri_template(scheme),
        "name": "Directory Contents",
        "description": "Directory contents with file information",
        "mimeType": JSON_MIME_TYPE
    }))?)
}

/// Reads a `<scheme>://dir/<path>` resource. Failures propagate as errors.
pub async fn read_dir_resource(scheme: &str, uri: &str) -> Result<Vec<ResourceContents>> {
    let path = extract_dir_path(scheme, uri).ok_or_else(|| Error::InvalidUri(uri.to_string()))?;

    let entries = listing::list_dir_async(path).await?;
    let mut contents = ResourceContents::text(listing::to_json(&entries)?, uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(JSON_MIME_TYPE.to_string());
    }
    Ok(vec![contents])
}
