//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Where crisis data comes from.
    pub catalog: CatalogConfig,

    /// Defaults for the agent system prompt.
    pub agent: AgentConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the crisis data catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file replacing the built-in tables.
    pub path: Option<PathBuf>,

    /// Location whose weather is used when the requested location has none.
    /// Unset means an unknown location reports no data.
    pub weather_fallback: Option<String>,
}

/// Agent persona used by the `crisis_agent` prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub specialization: String,
    pub description: String,
    pub capabilities: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "Crisis Response Coordinator".to_string(),
            specialization: "emergency management and flood response assistant".to_string(),
            description: "I help communities assess flood risk, plan evacuation routes and \
                          locate shelters and hospitals during a crisis."
                .to_string(),
            capabilities: vec![
                "flood risk assessment".to_string(),
                "evacuation route planning".to_string(),
                "risk zone monitoring".to_string(),
                "shelter and hospital lookup".to_string(),
                "community evacuation coordination".to_string(),
            ],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "crisis-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            catalog: CatalogConfig::default(),
            agent: AgentConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

/// Split a comma separated list, trimming items and dropping blank ones.
///
/// Shared by `MCP_AGENT_CAPABILITIES` and the `capabilities` prompt argument.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_CATALOG_PATH`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(path) = std::env::var("MCP_CATALOG_PATH") {
            info!("Catalog will be loaded from {}", path);
            config.catalog.path = Some(PathBuf::from(path));
        }

        match std::env::var("MCP_WEATHER_FALLBACK") {
            Ok(location) if !location.trim().is_empty() => {
                warn!(
                    "Weather fallback enabled: locations without a weather feed \
                     will report conditions for {}",
                    location
                );
                config.catalog.weather_fallback = Some(location);
            }
            _ => {}
        }

        if let Ok(name) = std::env::var("MCP_AGENT_NAME") {
            config.agent.name = name;
        }

        if let Ok(specialization) = std::env::var("MCP_AGENT_SPECIALIZATION") {
            config.agent.specialization = specialization;
        }

        if let Ok(description) = std::env::var("MCP_AGENT_DESCRIPTION") {
            config.agent.description = description;
        }

        if let Ok(capabilities) = std::env::var("MCP_AGENT_CAPABILITIES") {
            let parsed = parse_list(&capabilities);
            if parsed.is_empty() {
                warn!("MCP_AGENT_CAPABILITIES is empty, keeping defaults");
            } else {
                config.agent.capabilities = parsed;
            }
        }

        config
    }
}
