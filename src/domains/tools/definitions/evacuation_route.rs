//! Evacuation route tool.
//!
//! Splits a city's roads into safe and flooded sets and picks the least
//! saturated shelter as the destination.

use std::fmt;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{parse_params, tool_model};
use crate::domains::assessment::{best_shelter, blocked_routes, clear_routes};
use crate::domains::catalog::CatalogExt;
use crate::domains::report::join_or_none;
use crate::domains::tools::ToolError;
use crate::domains::tools::handlers::ToolContext;
use crate::domains::tools::registry::ToolEntry;
use crate::domains::workflow::RouteOption;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the evacuation route tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EvacuationRouteParams {
    /// Where the evacuation starts.
    #[schemars(description = "Starting location")]
    pub from_location: String,

    /// City whose road and shelter feeds are used.
    #[schemars(description = "City name")]
    pub city: String,
}

// ============================================================================
// Report
// ============================================================================

/// Destination shelter chosen for the route.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelterChoice {
    pub name: String,
    pub address: String,
    pub available: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvacuationRouteReport {
    pub from_location: String,
    pub city: String,
    pub safe_routes: Vec<RouteOption>,
    pub avoid: Vec<String>,
    pub shelter: Option<ShelterChoice>,
}

impl fmt::Display for EvacuationRouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EVACUATION ROUTE GENERATED")?;
        writeln!(f)?;
        writeln!(f, "From: {}", self.from_location)?;
        writeln!(f, "City: {}", self.city)?;
        writeln!(f)?;
        writeln!(f, "SAFE ROUTES (Real-time Road Status):")?;
        if self.safe_routes.is_empty() {
            writeln!(f, "None")?;
        }
        for (rank, route) in (1..).zip(&self.safe_routes) {
            let RouteOption { name, congestion } = route;
            writeln!(f, "{rank}. {name} - {congestion} congestion")?;
        }
        writeln!(f)?;
        writeln!(f, "AVOID (Flooded Roads): {}", join_or_none(&self.avoid))?;
        writeln!(f)?;
        match &self.shelter {
            Some(shelter) => {
                writeln!(f, "NEAREST SHELTER: {}", shelter.name)?;
                writeln!(f, "Address: {}", shelter.address)?;
                write!(f, "Available Spaces: {}", shelter.available)
            }
            None => write!(f, "NEAREST SHELTER: No shelters available"),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Evacuation route tool - safe roads plus destination shelter.
pub struct EvacuationRouteTool;

impl EvacuationRouteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate_evacuation_route";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Generate safe evacuation route using geospatial data and real-time road status";

    /// Arguments every call must carry.
    pub const REQUIRED: &'static [&'static str] = &["from_location", "city"];

    /// Execute the tool logic.
    #[instrument(skip_all, fields(city = %params.city))]
    pub fn execute(params: &EvacuationRouteParams, ctx: ToolContext<'_>) -> EvacuationRouteReport {
        info!(
            "Evacuation route tool called from {} in {}",
            params.from_location, params.city
        );

        let roads = ctx.catalog.roads(&params.city);

        let safe_routes = clear_routes(roads)
            .into_iter()
            .map(|road| RouteOption {
                name: road.name.clone(),
                congestion: road.congestion.clone(),
            })
            .collect();

        let avoid = blocked_routes(roads)
            .into_iter()
            .map(|road| road.name.clone())
            .collect();

        let shelter = best_shelter(ctx.catalog.shelters(&params.city)).map(|s| ShelterChoice {
            name: s.name.clone(),
            address: s.address.clone(),
            available: s.available(),
        });

        EvacuationRouteReport {
            from_location: params.from_location.clone(),
            city: params.city.clone(),
            safe_routes,
            avoid,
            shelter,
        }
    }

    fn handle(arguments: &JsonObject, ctx: ToolContext<'_>) -> Result<String, ToolError> {
        let params: EvacuationRouteParams = parse_params(Self::NAME, arguments)?;
        Ok(Self::execute(&params, ctx).to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<EvacuationRouteParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Registry entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry::new(Self::to_tool(), Self::REQUIRED, Self::handle)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::catalog::StaticCatalog;

    fn params(from: &str, city: &str) -> EvacuationRouteParams {
        EvacuationRouteParams {
            from_location: from.to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn test_route_boston() {
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let ctx = ToolContext::new(&catalog, &config);
        let report = EvacuationRouteTool::execute(&params("Back Bay", "Boston"), ctx);

        let safe: Vec<_> = report.safe_routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(safe, vec!["I-93 North", "Mass Pike West", "Route 1 North"]);
        assert_eq!(report.avoid, vec!["I-93 South", "Storrow Drive"]);

        let shelter = report.shelter.as_ref().unwrap();
        assert_eq!(shelter.name, "Brookline Emergency Shelter");
        assert_eq!(shelter.available, 350);
    }

    #[test]
    fn test_route_boston_rendering() {
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let ctx = ToolContext::new(&catalog, &config);
        let text = EvacuationRouteTool::execute(&params("Back Bay", "Boston"), ctx).to_string();

        assert!(text.contains("From: Back Bay"));
        assert!(text.contains("1. I-93 North - Low congestion"));
        assert!(text.contains("2. Mass Pike West - Moderate congestion"));
        assert!(text.contains("AVOID (Flooded Roads): I-93 South, Storrow Drive"));
        assert!(text.contains("NEAREST SHELTER: Brookline Emergency Shelter"));
        assert!(text.ends_with("Available Spaces: 350"));
    }

    #[test]
    fn test_route_unknown_city() {
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let ctx = ToolContext::new(&catalog, &config);
        let report = EvacuationRouteTool::execute(&params("Pier 4", "Atlantis"), ctx);

        assert!(report.safe_routes.is_empty());
        assert!(report.avoid.is_empty());
        assert!(report.shelter.is_none());

        let text = report.to_string();
        assert!(text.contains("AVOID (Flooded Roads): None"));
        assert!(text.ends_with("NEAREST SHELTER: No shelters available"));
    }
}
