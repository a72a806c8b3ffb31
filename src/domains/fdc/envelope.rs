//! Response envelopes for upstream payloads.
//!
//! Bodies are re-serialized with `to_string_pretty` and nothing else; fields
//! are never added, dropped, renamed or reordered.

use rmcp::model::{CallToolResult, Content, ReadResourceResult, ResourceContents};
use serde_json::Value;
use tracing::warn;

/// Pretty-print an upstream body.
pub fn pretty_json(body: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(body)
}

/// Wrap a body as the text content of the resource at `uri`.
pub fn resource_result(
    uri: &str,
    mime_type: Option<&str>,
    body: &Value,
) -> Result<ReadResourceResult, serde_json::Error> {
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: mime_type.map(str::to_string),
            text: pretty_json(body)?,
            meta: None,
        }],
    })
}

/// Wrap a body as successful tool output.
pub fn tool_success(body: &Value) -> Result<CallToolResult, serde_json::Error> {
    Ok(CallToolResult::success(vec![Content::text(pretty_json(body)?)]))
}

/// Create an error-flagged tool result carrying `message`.
pub fn tool_error(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}
