//! Risk zone monitoring tool.
//!
//! Reports every water gauge with its status and lists the terrain risk
//! zones. This is the first step of the community evacuation workflow,
//! exposed on its own.

use std::fmt;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{parse_params, tool_model};
use crate::domains::assessment::{GaugeReading, WaterStatus, water_status};
use crate::domains::catalog::{CatalogExt, RiskZoneSet};
use crate::domains::report::{format_percent, join_or_none};
use crate::domains::tools::ToolError;
use crate::domains::tools::handlers::ToolContext;
use crate::domains::tools::registry::ToolEntry;

/// Parameters for the risk zone monitoring tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MonitorRiskZonesParams {
    #[schemars(description = "City name")]
    pub city: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskZoneReport {
    pub city: String,
    pub gauges: Vec<GaugeReading>,

    /// Empty when the city has no zone data.
    pub zones: RiskZoneSet,
}

impl RiskZoneReport {
    pub fn critical_count(&self) -> usize {
        self.gauges
            .iter()
            .filter(|g| g.status == WaterStatus::Critical)
            .count()
    }
}

impl fmt::Display for RiskZoneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RISK ZONE MONITORING - {}", self.city)?;
        writeln!(f, "Community Evacuation Support - Step 1")?;
        writeln!(f)?;
        writeln!(f, "WATER LEVELS (Real-time Feed):")?;
        if self.gauges.is_empty() {
            writeln!(f, "None")?;
        }
        for gauge in &self.gauges {
            writeln!(
                f,
                "{}: {} ft - {} ({} to flood stage, {})",
                gauge.name,
                gauge.level,
                gauge.status,
                format_percent(gauge.percent_to_flood),
                gauge.trend
            )?;
        }
        writeln!(
            f,
            "Critical gauges: {} of {}",
            self.critical_count(),
            self.gauges.len()
        )?;
        writeln!(f)?;
        writeln!(f, "RISK ZONES (Terrain Data):")?;
        writeln!(f, "HIGH RISK: {}", join_or_none(&self.zones.high))?;
        writeln!(f, "MEDIUM RISK: {}", join_or_none(&self.zones.medium))?;
        write!(f, "LOW RISK: {}", join_or_none(&self.zones.low))
    }
}

/// Risk zone monitoring tool - gauge status plus zone listing.
pub struct MonitorRiskZonesTool;

impl MonitorRiskZonesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "monitor_risk_zones";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Monitor risk zones using water level feed and terrain data";

    /// Arguments every call must carry.
    pub const REQUIRED: &'static [&'static str] = &["city"];

    /// Execute the tool logic.
    #[instrument(skip_all, fields(city = %params.city))]
    pub fn execute(params: &MonitorRiskZonesParams, ctx: ToolContext<'_>) -> RiskZoneReport {
        info!("Risk zone monitoring tool called for {}", params.city);

        let gauges = ctx.catalog.water_gauges(&params.city);
        let zones = ctx.catalog.risk_zones(&params.city);

        RiskZoneReport {
            city: params.city.clone(),
            gauges: gauges.iter().map(water_status).collect(),
            zones: zones.cloned().unwrap_or_default(),
        }
    }

    fn handle(arguments: &JsonObject, ctx: ToolContext<'_>) -> Result<String, ToolError> {
        let params: MonitorRiskZonesParams = parse_params(Self::NAME, arguments)?;
        Ok(Self::execute(&params, ctx).to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<MonitorRiskZonesParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Registry entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry::new(Self::to_tool(), Self::REQUIRED, Self::handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::catalog::StaticCatalog;

    fn run(city: &str) -> RiskZoneReport {
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let params = MonitorRiskZonesParams {
            city: city.to_string(),
        };
        MonitorRiskZonesTool::execute(&params, ToolContext::new(&catalog, &config))
    }

    #[test]
    fn test_monitor_boston() {
        let report = run("Boston");
        assert_eq!(report.gauges.len(), 2);
        assert_eq!(report.critical_count(), 0);
        let gauges = &report.gauges;
        assert!(gauges.iter().all(|g| g.status == WaterStatus::Warning));
        assert_eq!(report.zones.high.len(), 3);

        let text = report.to_string();
        let charles = "Charles River: 8.5 ft - WARNING (70% to flood stage, Rising)";
        let fort_point = "Fort Point Channel: 7.2 ft - WARNING (77% to flood stage, Rising)";
        let high = "HIGH RISK: Downtown Waterfront, Seaport District, Back Bay Lower Areas";
        assert!(text.contains(charles));
        assert!(text.contains(fort_point));
        assert!(text.contains(high));
        assert!(text.contains("MEDIUM RISK: Cambridge Riverside, Charlestown Lowlands"));
        assert!(text.ends_with("LOW RISK: Beacon Hill, Brookline, Newton"));
    }

    #[test]
    fn test_monitor_unknown_city() {
        let report = run("Atlantis");
        assert!(report.gauges.is_empty());
        assert_eq!(report.zones, RiskZoneSet::default());

        let text = report.to_string();
        assert!(text.contains("Critical gauges: 0 of 0"));
        assert!(text.contains("HIGH RISK: None"));
    }
}
