//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool registration and dispatch.
///
/// An unknown tool name is not an error: the dispatcher answers it with a
/// normal `Unknown tool: <name>` result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required argument was absent or null.
    #[error("Missing required argument '{argument}' for tool '{tool}'")]
    MissingArgument { tool: String, argument: String },

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The registry was built with inconsistent tool definitions.
    #[error("Invalid tool registry: {0}")]
    Registry(String),
}

impl ToolError {
    /// Create a new "missing argument" error.
    pub fn missing_argument(tool: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::MissingArgument {
            tool: tool.into(),
            argument: argument.into(),
        }
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "registry" error.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Whether this error comes from validating a call's arguments.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. } | Self::InvalidArguments(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_message() {
        let err = ToolError::missing_argument("monitor_risk_zones", "city");
        assert_eq!(
            err.to_string(),
            "Missing required argument 'city' for tool 'monitor_risk_zones'"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_registry_error_is_not_validation() {
        assert!(!ToolError::registry("duplicate tool").is_validation());
    }
}
