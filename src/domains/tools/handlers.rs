//! Tool call plumbing shared by the registry and the definitions.
//!
//! A tool handler is a plain function from validated arguments and a
//! [`ToolContext`] to rendered text. Handlers never do I/O and never keep
//! state between calls.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::{Deserialize, Serialize};

use super::error::ToolError;
use crate::core::config::Config;
use crate::domains::catalog::CatalogSource;

/// A tool invocation as received from a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRequest {
    /// The name of the tool to execute.
    pub tool_name: String,

    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: JsonObject,
}

impl ToolRequest {
    pub fn new(tool_name: impl Into<String>, arguments: JsonObject) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// The single text payload returned for a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub text: String,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The result for a name that is not in the registry.
    pub fn unknown_tool(name: &str) -> Self {
        Self::text(format!("Unknown tool: {}", name))
    }

    /// Convert into the MCP result model.
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::success(vec![Content::text(self.text)])
    }
}

/// Everything a handler may read during one call.
///
/// `catalog` is a snapshot taken when the call was received.
#[derive(Clone, Copy)]
pub struct ToolContext<'a> {
    pub catalog: &'a dyn CatalogSource,
    pub config: &'a Config,
}

impl<'a> ToolContext<'a> {
    pub fn new(catalog: &'a dyn CatalogSource, config: &'a Config) -> Self {
        Self { catalog, config }
    }
}

/// Signature of every tool handler.
pub type ToolHandlerFn = fn(&JsonObject, ToolContext<'_>) -> Result<String, ToolError>;
