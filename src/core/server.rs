//! MCP Server implementation and lifecycle management.
//!
//! `McpServer` owns the catalog handle, the tool registry and the resource
//! and prompt services. Every transport goes through it, so STDIO and HTTP
//! callers see the same tools and the same text.
//!
//! Tool calls are routed through [`ToolRegistry`] rather than rmcp's macro
//! router: unknown names must answer with a plain text result, and missing
//! arguments must be rejected before any handler runs.

use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::{Error, Result};
use crate::domains::{
    catalog::{SharedCatalog, StaticCatalog},
    prompts::PromptService,
    resources::{ResourceContext, ResourceError, ResourceService},
    tools::{ToolContext, ToolError, ToolRegistry, ToolRequest, ToolResult},
};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Current crisis catalog; replaced wholesale on reload.
    catalog: SharedCatalog,

    /// Immutable tool table, validated at startup.
    tools: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,
}

impl McpServer {
    /// Instructions sent to clients on initialize.
    pub const INSTRUCTIONS: &'static str = "Crisis response server for flood emergencies. \
        Tools assess flood risk, monitor water gauges and risk zones, plan evacuation \
        routes, list shelters and hospitals, and run the community evacuation workflow. \
        Every tool takes a city or location name and returns a text report.";

    /// Create a new MCP server, loading the catalog the config points at.
    pub fn new(config: Config) -> Result<Self> {
        let catalog = SharedCatalog::new(Self::load_catalog(&config)?);
        Self::with_catalog(config, catalog)
    }

    /// Create a server around an existing catalog handle.
    pub fn with_catalog(config: Config, catalog: SharedCatalog) -> Result<Self> {
        let config = Arc::new(config);
        let tools = Arc::new(ToolRegistry::builtin()?);
        info!("Registered tools: {}", tools.tool_names().join(", "));

        Ok(Self {
            resource_service: Arc::new(ResourceService::new()),
            prompt_service: Arc::new(PromptService::new(&config.agent)),
            config,
            catalog,
            tools,
        })
    }

    /// The configured catalog file, or the built-in tables.
    fn load_catalog(config: &Config) -> Result<StaticCatalog> {
        match &config.catalog.path {
            Some(path) => Ok(StaticCatalog::from_json_file(path)?),
            None => {
                info!("Using built-in catalog");
                Ok(StaticCatalog::builtin())
            }
        }
    }

    /// Re-read the catalog source and swap it in. Calls already running keep
    /// the snapshot they started with.
    pub fn reload_catalog(&self) -> Result<()> {
        let catalog = Self::load_catalog(&self.config)?;
        info!("Catalog reloaded with {} locations", catalog.len());
        self.catalog.swap(catalog);
        Ok(())
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Run one tool call against the current catalog snapshot.
    pub fn call(&self, request: &ToolRequest) -> std::result::Result<ToolResult, ToolError> {
        let snapshot = self.catalog.snapshot();
        let ctx = ToolContext::new(snapshot.as_ref(), &self.config);
        let result = self.tools.call_tool(request, ctx);
        if let Err(e) = &result {
            warn!("Tool {} failed: {}", request.tool_name, e);
        }
        result
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools as JSON.
    pub fn list_tools_json(&self) -> Vec<serde_json::Value> {
        self.tools
            .list_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name, returning the MCP `CallToolResult` as JSON.
    pub fn call_tool_json(&self, name: &str, arguments: JsonObject) -> Result<serde_json::Value> {
        let result = self.call(&ToolRequest::new(name, arguments))?;
        Ok(serde_json::to_value(result.into_call_result())?)
    }

    /// List all available resources as JSON.
    pub async fn list_resources_json(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resources()
            .await
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI as JSON.
    pub async fn read_resource_json(&self, uri: &str) -> Result<serde_json::Value> {
        let result = self.read_resource_raw(uri).await?;
        Ok(serde_json::json!({ "contents": result.contents }))
    }

    /// List all available resource templates as JSON.
    pub async fn list_resource_templates_json(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resource_templates()
            .await
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }

    /// List all available prompts as JSON.
    pub async fn list_prompts_json(&self) -> Vec<serde_json::Value> {
        self.prompt_service
            .list_prompts()
            .await
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a rendered prompt as JSON.
    pub async fn get_prompt_json(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<serde_json::Value> {
        let result = self
            .prompt_service
            .get_prompt(name, arguments.map(string_arguments))
            .await?;
        Ok(serde_json::json!({
            "description": result.description,
            "messages": result.messages
        }))
    }

    async fn read_resource_raw(
        &self,
        uri: &str,
    ) -> std::result::Result<ReadResourceResult, ResourceError> {
        let snapshot = self.catalog.snapshot();
        let ctx = ResourceContext::new(snapshot.as_ref(), &self.config);
        self.resource_service.read_resource(uri, ctx).await
    }
}

/// Keep only string-valued arguments.
fn string_arguments(map: JsonObject) -> HashMap<String, String> {
    map.into_iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
        .collect()
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        if err.is_validation() {
            McpError::invalid_params(err.to_string(), None)
        } else {
            McpError::internal_error(err.to_string(), None)
        }
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        if err.is_invalid_params() {
            McpError::invalid_params(err.to_string(), None)
        } else {
            McpError::internal_error(err.to_string(), None)
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let request = ToolRequest::new(request.name, request.arguments.unwrap_or_default());
        let result = self.call(&request)?;
        Ok(result.into_call_result())
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.read_resource_raw(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name, request.arguments.map(string_arguments))
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::CatalogExt;
    use serde_json::json;
    use std::io::Write;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_server_lists_five_tools() {
        let server = server();
        assert_eq!(server.list_tools_json().len(), 5);
        assert_eq!(server.name(), "crisis-mcp-server");
    }

    #[test]
    fn test_server_info_reports_configured_name() {
        let mut config = Config::default();
        config.server.name = "flood-desk".to_string();
        let server = McpServer::new(config).unwrap();

        let info = server.get_info();
        assert_eq!(info.server_info.name, "flood-desk");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_call_unknown_tool() {
        let result = server()
            .call(&ToolRequest::new("nope", JsonObject::new()))
            .unwrap();
        assert_eq!(result.text, "Unknown tool: nope");
    }

    #[test]
    fn test_call_tool_json_shape() {
        let value = server()
            .call_tool_json("monitor_risk_zones", args(json!({ "city": "Boston" })))
            .unwrap();
        assert_eq!(value["content"][0]["type"], "text");
        assert!(
            value["content"][0]["text"]
                .as_str()
                .unwrap()
                .starts_with("RISK ZONE MONITORING - Boston")
        );
    }

    #[test]
    fn test_call_tool_json_missing_argument() {
        let err = server()
            .call_tool_json("get_flood_risk", JsonObject::new())
            .unwrap_err();
        assert!(err.is_invalid_params());
    }

    #[test]
    fn test_validation_error_maps_to_invalid_params() {
        let err: McpError = ToolError::missing_argument("monitor_risk_zones", "city").into();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_missing_catalog_file_fails_startup() {
        let mut config = Config::default();
        config.catalog.path = Some("/nonexistent/catalog.json".into());
        assert!(matches!(McpServer::new(config), Err(Error::Catalog(_))));
    }

    #[test]
    fn test_reload_catalog_swaps_snapshot() {
        let raw = json!({
            "Springfield": {
                "shelters": [{ "name": "Gym", "capacity": 10, "current": 4, "address": "1 Elm" }]
            }
        });
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{raw}").unwrap();

        let mut config = Config::default();
        config.catalog.path = Some(file.path().to_path_buf());
        let server = McpServer::new(config).unwrap();

        let before = server.catalog().snapshot();
        assert_eq!(before.shelters("Springfield").len(), 1);

        let replacement = StaticCatalog::builtin().with_location("Shelbyville", Default::default());
        server.catalog().swap(replacement);
        assert_eq!(
            server.catalog().snapshot().locations(),
            vec!["Boston", "Shelbyville"]
        );
        assert_eq!(before.shelters("Springfield").len(), 1);

        server.reload_catalog().unwrap();
        assert_eq!(server.catalog().snapshot().locations(), vec!["Springfield"]);
    }

    #[tokio::test]
    async fn test_read_resource_json() {
        let value = server()
            .read_resource_json("crisis://catalog/Boston")
            .await
            .unwrap();
        assert_eq!(value["contents"][0]["uri"], "crisis://catalog/Boston");
    }

    #[tokio::test]
    async fn test_get_prompt_json_ignores_non_string_arguments() {
        let value = server()
            .get_prompt_json(
                "evacuation_briefing",
                Some(args(json!({ "city": "Boston", "audience": 3 }))),
            )
            .await
            .unwrap();
        let text = value["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.contains("the general public"));
    }
}
