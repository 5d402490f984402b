//! Crisis Response MCP Server Library
//!
//! A Model Context Protocol server that answers flood emergency questions
//! from a catalog of per-location feeds: risk zones, roads, water gauges,
//! shelters, hospitals and weather.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: crisis logic and the MCP surfaces built on it
//!   - **catalog**: data source abstraction, built-in Boston tables, JSON loading
//!   - **assessment**: water status and flood risk rules
//!   - **workflow**: monitor then plan-and-dispatch evacuation workflow
//!   - **tools**: the five crisis tools, their registry and dispatch
//!   - **resources**: JSON views of the catalog
//!   - **prompts**: agent and briefing prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use crisis_mcp_server::{core::Config, core::McpServer, domains::tools::ToolRequest};
//!
//! fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     let mut arguments = serde_json::Map::new();
//!     arguments.insert("city".into(), "Boston".into());
//!     let result = server.call(&ToolRequest::new("find_emergency_resources", arguments))?;
//!     println!("{}", result.text);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
