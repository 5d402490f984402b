//! Emergency resources tool.
//!
//! Lists shelters and hospitals for a city with capacity totals.

use std::fmt;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{parse_params, tool_model};
use crate::domains::assessment::total_available;
use crate::domains::catalog::{CatalogExt, Hospital, Shelter};
use crate::domains::tools::ToolError;
use crate::domains::tools::handlers::ToolContext;
use crate::domains::tools::registry::ToolEntry;

/// Parameters for the emergency resources tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EmergencyResourcesParams {
    #[schemars(description = "City name")]
    pub city: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyResourcesReport {
    pub city: String,
    pub shelters: Vec<Shelter>,
    pub hospitals: Vec<Hospital>,
    pub total_shelter_capacity: i64,
    pub total_hospital_beds: u64,
}

impl fmt::Display for EmergencyResourcesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EMERGENCY RESOURCES - {}", self.city)?;
        writeln!(f)?;
        writeln!(f, "SHELTERS:")?;
        if self.shelters.is_empty() {
            writeln!(f, "None")?;
        }
        for shelter in &self.shelters {
            writeln!(
                f,
                "- {}: {}/{} available",
                shelter.name,
                shelter.available(),
                shelter.capacity
            )?;
            writeln!(f, "  Address: {}", shelter.address)?;
        }
        writeln!(f)?;
        writeln!(f, "HOSPITALS:")?;
        if self.hospitals.is_empty() {
            writeln!(f, "None")?;
        }
        for hospital in &self.hospitals {
            writeln!(
                f,
                "- {}: {} beds, {} emergency",
                hospital.name, hospital.available_beds, hospital.emergency_beds
            )?;
        }
        writeln!(f)?;
        writeln!(f, "SUMMARY:")?;
        writeln!(
            f,
            "Total Shelter Capacity: {} people",
            self.total_shelter_capacity
        )?;
        write!(f, "Total Hospital Beds: {} beds", self.total_hospital_beds)
    }
}

/// Emergency resources tool - shelters, hospitals and totals.
pub struct EmergencyResourcesTool;

impl EmergencyResourcesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "find_emergency_resources";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Find shelters and hospitals with capacity information";

    /// Arguments every call must carry.
    pub const REQUIRED: &'static [&'static str] = &["city"];

    /// Execute the tool logic.
    #[instrument(skip_all, fields(city = %params.city))]
    pub fn execute(
        params: &EmergencyResourcesParams,
        ctx: ToolContext<'_>,
    ) -> EmergencyResourcesReport {
        info!("Emergency resources tool called for {}", params.city);

        let shelters = ctx.catalog.shelters(&params.city);
        let hospitals = ctx.catalog.hospitals(&params.city);

        EmergencyResourcesReport {
            city: params.city.clone(),
            total_shelter_capacity: total_available(shelters),
            total_hospital_beds: hospitals.iter().map(|h| u64::from(h.available_beds)).sum(),
            shelters: shelters.to_vec(),
            hospitals: hospitals.to_vec(),
        }
    }

    fn handle(arguments: &JsonObject, ctx: ToolContext<'_>) -> Result<String, ToolError> {
        let params: EmergencyResourcesParams = parse_params(Self::NAME, arguments)?;
        Ok(Self::execute(&params, ctx).to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<EmergencyResourcesParams>(Self::NAME, Self::DESCRIPTION)
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

    fn run(city: &str) -> EmergencyResourcesReport {
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let params = EmergencyResourcesParams {
            city: city.to_string(),
        };
        EmergencyResourcesTool::execute(&params, ToolContext::new(&catalog, &config))
    }

    #[test]
    fn test_resources_boston() {
        let report = run("Boston");
        assert_eq!(report.shelters.len(), 3);
        assert_eq!(report.hospitals.len(), 2);
        assert_eq!(report.total_shelter_capacity, 920);
        assert_eq!(report.total_hospital_beds, 80);

        let text = report.to_string();
        assert!(text.contains("- North Boston High School: 350/500 available"));
        assert!(text.contains("  Address: 123 Main St"));
        assert!(text.contains("- Boston General Hospital: 50 beds, 20 emergency"));
        assert!(text.contains("Total Shelter Capacity: 920 people"));
        assert!(text.ends_with("Total Hospital Beds: 80 beds"));
    }

    #[test]
    fn test_resources_unknown_city() {
        let report = run("Atlantis");
        assert!(report.shelters.is_empty());
        assert!(report.hospitals.is_empty());

        let text = report.to_string();
        assert!(text.contains("Total Shelter Capacity: 0 people"));
        assert!(text.contains("Total Hospital Beds: 0 beds"));
    }
}
