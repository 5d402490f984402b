//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A fixed table of the crisis tools, checked once at startup
//! - Argument validation against each tool's required string arguments
//! - Dispatch by name, shared by every transport

use std::collections::HashMap;

use rmcp::model::{JsonObject, Tool};
use tracing::{debug, warn};

use super::definitions::{
    CommunityEvacuationTool, EmergencyResourcesTool, EvacuationRouteTool, GetFloodRiskTool,
    MonitorRiskZonesTool,
};
use super::error::ToolError;
use super::handlers::{ToolContext, ToolHandlerFn, ToolRequest, ToolResult};

// ============================================================================
// Tool Entry
// ============================================================================

/// One registered tool: its MCP model, required arguments and handler.
#[derive(Clone)]
pub struct ToolEntry {
    tool: Tool,
    required: &'static [&'static str],
    handler: ToolHandlerFn,
}

impl ToolEntry {
    pub fn new(tool: Tool, required: &'static [&'static str], handler: ToolHandlerFn) -> Self {
        Self {
            tool,
            required,
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.tool.name
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    /// Check that every required argument is present and is a string.
    ///
    /// Absent and `null` arguments are both reported as missing.
    pub fn validate(&self, arguments: &JsonObject) -> Result<(), ToolError> {
        for &argument in self.required {
            match arguments.get(argument) {
                None | Some(serde_json::Value::Null) => {
                    return Err(ToolError::missing_argument(self.name(), argument));
                }
                Some(serde_json::Value::String(_)) => {}
                Some(other) => {
                    return Err(ToolError::invalid_arguments(format!(
                        "argument '{}' for tool '{}' must be a string, got {}",
                        argument,
                        self.name(),
                        other
                    )));
                }
            }
        }
        Ok(())
    }

    /// Check the declared required arguments against the input schema.
    fn check_schema(&self) -> Result<(), ToolError> {
        let schema_required: Vec<&str> = self
            .tool
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .map(|items| items.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();

        let mut declared = self.required.to_vec();
        let mut in_schema = schema_required;
        declared.sort_unstable();
        in_schema.sort_unstable();
        if declared != in_schema {
            return Err(ToolError::registry(format!(
                "tool '{}' declares required {:?} but its schema requires {:?}",
                self.name(),
                declared,
                in_schema
            )));
        }

        for &argument in self.required {
            let kind = self
                .tool
                .input_schema
                .get("properties")
                .and_then(|p| p.get(argument))
                .and_then(|p| p.get("type"))
                .and_then(|t| t.as_str());
            if kind != Some("string") {
                return Err(ToolError::registry(format!(
                    "argument '{}' of tool '{}' is not declared as a string",
                    argument,
                    self.name()
                )));
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ToolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolEntry")
            .field("name", &self.tool.name)
            .field("required", &self.required)
            .finish()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the immutable set of tools this server exposes.
///
/// Listing order is table order. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    entries: Vec<ToolEntry>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Build a registry from entries, rejecting duplicate names and schema
    /// mismatches.
    pub fn from_entries(entries: Vec<ToolEntry>) -> Result<Self, ToolError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            entry.check_schema()?;
            if index.insert(entry.name().to_string(), position).is_some() {
                return Err(ToolError::registry(format!("duplicate tool name '{}'", entry.name())));
            }
        }
        Ok(Self { entries, index })
    }

    /// The five crisis tools.
    pub fn builtin() -> Result<Self, ToolError> {
        Self::from_entries(vec![
            GetFloodRiskTool::entry(),
            EvacuationRouteTool::entry(),
            MonitorRiskZonesTool::entry(),
            CommunityEvacuationTool::entry(),
            EmergencyResourcesTool::entry(),
        ])
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries.iter().map(ToolEntry::name).collect()
    }

    /// Get all tools as Tool models (metadata), in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.entries.iter().map(ToolEntry::tool).cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Dispatch a call to its handler.
    ///
    /// Unknown names produce a normal `Unknown tool: <name>` result. Argument
    /// problems are returned as validation errors before the handler runs.
    pub fn call_tool(
        &self,
        request: &ToolRequest,
        ctx: ToolContext<'_>,
    ) -> Result<ToolResult, ToolError> {
        let Some(entry) = self.get(&request.tool_name) else {
            warn!("Unknown tool requested: {}", request.tool_name);
            return Ok(ToolResult::unknown_tool(&request.tool_name));
        };

        entry.validate(&request.arguments)?;
        debug!("Dispatching tool {}", request.tool_name);
        let text = (entry.handler)(&request.arguments, ctx)?;
        Ok(ToolResult::text(text))
    }
}
