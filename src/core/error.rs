//! Error types and handling for the MCP server.
//!
//! Each domain owns a `thiserror` enum; this module folds them into one
//! crate-wide [`Error`] so startup and transport code can use `?` freely.

use thiserror::Error;

use crate::domains::{
    catalog::CatalogError, prompts::PromptError, resources::ResourceError, tools::ToolError,
};

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Error loading or reading the crisis catalog.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Error starting or running a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the caller sent something we cannot act on, as opposed to a
    /// server fault. Maps to JSON-RPC `-32602`.
    pub fn is_invalid_params(&self) -> bool {
        match self {
            Self::Tool(e) => e.is_validation(),
            Self::Resource(ResourceError::NotFound(_) | ResourceError::InvalidUri(_)) => true,
            Self::Prompt(PromptError::NotFound(_) | PromptError::MissingArgument(_)) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_validation_is_invalid_params() {
        let err: Error = ToolError::missing_argument("get_flood_risk", "location").into();
        assert!(err.is_invalid_params());
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn test_registry_error_is_internal() {
        let err: Error = ToolError::registry("duplicate").into();
        assert!(!err.is_invalid_params());
    }

    #[test]
    fn test_resource_not_found_is_invalid_params() {
        let err: Error = ResourceError::not_found("crisis://catalog/Atlantis").into();
        assert!(err.is_invalid_params());
    }
}
