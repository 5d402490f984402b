//! Common utilities shared across the crisis tools.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::domains::tools::ToolError;

/// Build the MCP tool model for a parameter type.
pub fn tool_model<P>(name: &'static str, description: &'static str) -> Tool
where
    P: JsonSchema + 'static,
{
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Deserialize validated arguments into a tool's parameter struct.
pub fn parse_params<P>(tool: &str, arguments: &JsonObject) -> Result<P, ToolError>
where
    P: DeserializeOwned,
{
    serde_json::from_value(serde_json::Value::Object(arguments.clone()))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", tool, e)))
}
