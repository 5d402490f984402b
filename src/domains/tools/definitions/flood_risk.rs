//! Flood risk tool.
//!
//! Scores the current weather at a location and reports the risk level,
//! the triggered conditions and a recommendation.

use std::fmt;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::common::{parse_params, tool_model};
use crate::domains::assessment::{FloodRiskAssessment, flood_risk, risk::MAX_RISK_SCORE};
use crate::domains::catalog::{CatalogExt, WeatherSnapshot};
use crate::domains::tools::handlers::ToolContext;
use crate::domains::tools::registry::ToolEntry;
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the flood risk tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FloodRiskParams {
    /// City name.
    #[schemars(description = "City name")]
    pub location: String,
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of a flood risk request.
#[derive(Debug, Clone, PartialEq)]
pub enum FloodRiskReport {
    Assessed {
        location: String,

        /// Location the weather was read from when it differs from `location`.
        weather_source: Option<String>,
        weather: WeatherSnapshot,
        assessment: FloodRiskAssessment,
    },
    NoData {
        location: String,
    },
}

impl fmt::Display for FloodRiskReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloodRiskReport::Assessed {
                location,
                weather_source,
                weather,
                assessment,
            } => {
                writeln!(f, "FLOOD RISK ASSESSMENT - {}", location)?;
                writeln!(f)?;
                writeln!(f, "RISK LEVEL: {}", assessment.level)?;
                if let Some(source) = weather_source {
                    writeln!(
                        f,
                        "(No weather feed for {}; using conditions reported for {})",
                        location, source
                    )?;
                }
                writeln!(f)?;
                writeln!(f, "Current Conditions:")?;
                writeln!(f, "- Humidity: {}%", weather.humidity)?;
                writeln!(f, "- Pressure: {} hPa", weather.pressure)?;
                writeln!(f, "- Rainfall (1h): {:.2} inches", weather.rainfall_1h)?;
                writeln!(f, "- Weather: {}", weather.conditions)?;
                writeln!(f)?;
                writeln!(f, "Risk Score: {}/{}", assessment.score, MAX_RISK_SCORE)?;
                writeln!(f)?;
                writeln!(f, "Warnings:")?;
                if assessment.warnings.is_empty() {
                    writeln!(f, "All conditions normal.")?;
                }
                for warning in &assessment.warnings {
                    writeln!(f, "{}", warning)?;
                }
                writeln!(f)?;
                write!(f, "Recommendation: {}", assessment.recommendation())
            }
            FloodRiskReport::NoData { location } => {
                writeln!(f, "FLOOD RISK ASSESSMENT - {}", location)?;
                writeln!(f)?;
                writeln!(f, "RISK LEVEL: UNKNOWN")?;
                writeln!(f)?;
                write!(f, "No weather data available for {}.", location)
            }
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Flood risk tool - weather-based flood risk for a location.
pub struct GetFloodRiskTool;

impl GetFloodRiskTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_flood_risk";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Assess flood risk level based on weather conditions";

    /// Arguments every call must carry.
    pub const REQUIRED: &'static [&'static str] = &["location"];

    /// Execute the tool logic.
    ///
    /// Falls back to the configured fallback location's weather when the
    /// requested location has none.
    #[instrument(skip_all, fields(location = %params.location))]
    pub fn execute(params: &FloodRiskParams, ctx: ToolContext<'_>) -> FloodRiskReport {
        info!("Flood risk tool called for {}", params.location);

        let location = params.location.clone();
        let fallback = ctx.config.catalog.weather_fallback.as_deref();

        let (weather, weather_source) = match ctx.catalog.weather(&location) {
            Some(weather) => (weather, None),
            None => match fallback.and_then(|f| ctx.catalog.weather(f).map(|w| (w, f))) {
                Some((weather, source)) => {
                    info!("No weather for {}, using fallback {}", location, source);
                    (weather, Some(source.to_string()))
                }
                None => {
                    warn!("No weather data for {}", location);
                    return FloodRiskReport::NoData { location };
                }
            },
        };

        FloodRiskReport::Assessed {
            location,
            weather_source,
            assessment: flood_risk(weather),
            weather: weather.clone(),
        }
    }

    fn handle(arguments: &JsonObject, ctx: ToolContext<'_>) -> Result<String, ToolError> {
        let params: FloodRiskParams = parse_params(Self::NAME, arguments)?;
        Ok(Self::execute(&params, ctx).to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_model::<FloodRiskParams>(Self::NAME, Self::DESCRIPTION)
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
    use crate::domains::assessment::FloodRiskLevel;
    use crate::domains::catalog::{LocationFeeds, StaticCatalog};

    fn params(location: &str) -> FloodRiskParams {
        FloodRiskParams {
            location: location.to_string(),
        }
    }

    #[test]
    fn test_flood_risk_boston() {
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let ctx = ToolContext::new(&catalog, &config);
        let report = GetFloodRiskTool::execute(&params("Boston"), ctx);

        match &report {
            FloodRiskReport::Assessed {
                assessment,
                weather_source,
                ..
            } => {
                assert_eq!(assessment.level, FloodRiskLevel::Medium);
                assert_eq!(assessment.score, 3);
                assert!(weather_source.is_none());
            }
            other => panic!("Expected assessment, got {:?}", other),
        }

        let text = report.to_string();
        assert!(text.starts_with("FLOOD RISK ASSESSMENT - Boston"));
        assert!(text.contains("RISK LEVEL: MEDIUM"));
        assert!(text.contains("- Humidity: 85%"));
        assert!(text.contains("- Pressure: 1008 hPa"));
        assert!(text.contains("- Rainfall (1h): 1.20 inches"));
        assert!(text.contains("Risk Score: 3/10"));
        assert!(text.contains("MODERATE rainfall"));
        assert!(text.ends_with("Recommendation: MONITOR SITUATION CLOSELY"));
    }

    #[test]
    fn test_flood_risk_calm_conditions() {
        let mut feeds = StaticCatalog::builtin().feeds("Boston").unwrap().clone();
        if let Some(weather) = feeds.weather.as_mut() {
            weather.rainfall_1h = 0.0;
        }
        let catalog = StaticCatalog::default().with_location("Dryville", feeds);
        let config = Config::default();

        let ctx = ToolContext::new(&catalog, &config);
        let text = GetFloodRiskTool::execute(&params("Dryville"), ctx).to_string();
        assert!(text.contains("RISK LEVEL: LOW"));
        assert!(text.contains("All conditions normal."));
        assert!(text.ends_with("Recommendation: CONTINUE MONITORING"));
    }

    #[test]
    fn test_flood_risk_unknown_location_without_fallback() {
        let catalog = StaticCatalog::builtin();
        let config = Config::default();
        let ctx = ToolContext::new(&catalog, &config);
        let report = GetFloodRiskTool::execute(&params("Atlantis"), ctx);

        assert_eq!(
            report,
            FloodRiskReport::NoData {
                location: "Atlantis".to_string(),
            }
        );
        let text = report.to_string();
        assert!(text.contains("No weather data available for Atlantis."));
    }

    #[test]
    fn test_flood_risk_unknown_location_with_fallback() {
        let catalog = StaticCatalog::builtin();
        let mut config = Config::default();
        config.catalog.weather_fallback = Some("Boston".to_string());

        let ctx = ToolContext::new(&catalog, &config);
        let report = GetFloodRiskTool::execute(&params("Cambridge"), ctx);
        let text = report.to_string();
        assert!(text.starts_with("FLOOD RISK ASSESSMENT - Cambridge"));
        assert!(text.contains("using conditions reported for Boston"));
        assert!(text.contains("RISK LEVEL: MEDIUM"));
    }

    #[test]
    fn test_flood_risk_fallback_without_data_reports_no_data() {
        let catalog = StaticCatalog::default().with_location("Empty", LocationFeeds::default());
        let mut config = Config::default();
        config.catalog.weather_fallback = Some("Empty".to_string());

        let ctx = ToolContext::new(&catalog, &config);
        let report = GetFloodRiskTool::execute(&params("Nowhere"), ctx);
        assert!(matches!(report, FloodRiskReport::NoData { .. }));
    }
}
