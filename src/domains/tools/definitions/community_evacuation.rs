//! Community evacuation tool.
//!
//! Thin wrapper running the two-phase evacuation workflow for a city and
//! rendering its report.

use chrono::Local;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{parse_params, tool_model};
use crate::domains::tools::ToolError;
use crate::domains::tools::handlers::ToolContext;
use crate::domains::tools::registry::ToolEntry;
use crate::domains::workflow::{EvacuationWorkflow, EvacuationWorkflowReport};

/// Parameters for the community evacuation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CommunityEvacuationParams {
    #[schemars(description = "City name")]
    pub city: String,
}

/// Community evacuation tool - the full monitor, route and alert workflow.
pub struct CommunityEvacuationTool;

impl CommunityEvacuationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "execute_community_evacuation";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = concat!(
        "Execute full community evacuation workflow: ",
        "monitor risk zones, plan routes, dispatch alerts"
    );

    /// Arguments every call must carry.
    pub const REQUIRED: &'static [&'static str] = &["city"];

    /// Execute the tool logic.
    ///
    /// Runs both workflow phases against the catalog snapshot in `ctx`,
    /// stamping the report with the local time.
    #[instrument(skip_all, fields(city = %params.city))]
    pub fn execute(
        params: &CommunityEvacuationParams,
        ctx: ToolContext<'_>,
    ) -> EvacuationWorkflowReport {
        let report = EvacuationWorkflow::new(ctx.catalog).run(&params.city, Local::now());

        info!(
            "Evacuation workflow for {} complete: {} critical gauges, {} clear routes, capacity {}",
            params.city,
            report.monitor.critical_count(),
            report.dispatch.routes.len(),
            report.dispatch.total_capacity
        );

        report
    }

    fn handle(arguments: &JsonObject, ctx: ToolContext<'_>) -> Result<String, ToolError> {
        let params: CommunityEvacuationParams = parse_params(Self::NAME, arguments)?;
        Ok(Self::execute(&params, ctx).to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<CommunityEvacuationParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Registry entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry::new(Self::to_tool(), Self::REQUIRED, Self::handle)
    }
}
