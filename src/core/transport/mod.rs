//! Transport layer for the MCP server.
//!
//! - **STDIO**: standard input/output, the usual way an MCP host launches
//!   the crisis server - feature: `stdio`
//! - **HTTP**: JSON-RPC 2.0 over POST for dashboards and browser clients -
//!   feature: `http`
//!
//! Both transports hand every request to the same [`McpServer`], so tool
//! listings and results are identical whichever one is used.
//!
//! [`McpServer`]: crate::core::McpServer

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
