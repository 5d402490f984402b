//! Tools domain module.
//!
//! Tools are the executable functions MCP clients call. Every crisis tool
//! takes string arguments, reads the catalog snapshot it is handed, and
//! returns one block of text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool table, argument validation and dispatch
//! - `handlers.rs` - Request/result types and the handler signature
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, `execute()`, `handle()` and `entry()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the entry to `ToolRegistry::builtin()`
//!
//! The registry checks at startup that `REQUIRED` matches the schema.

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::ToolError;
pub use handlers::*;
pub use registry::{ToolEntry, ToolRegistry};
