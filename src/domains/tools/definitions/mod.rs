//! Tool definitions module.
//!
//! One file per tool. Each tool exposes `NAME`, `DESCRIPTION`, `REQUIRED`,
//! a typed `execute()` returning a report value, and `entry()` for the
//! registry.

pub mod common;
pub mod community_evacuation;
pub mod emergency_resources;
pub mod evacuation_route;
pub mod flood_risk;
pub mod monitor_risk_zones;

pub use community_evacuation::{CommunityEvacuationParams, CommunityEvacuationTool};
pub use emergency_resources::{EmergencyResourcesParams, EmergencyResourcesTool};
pub use evacuation_route::{EvacuationRouteParams, EvacuationRouteTool};
pub use flood_risk::{FloodRiskParams, GetFloodRiskTool};
pub use monitor_risk_zones::{MonitorRiskZonesParams, MonitorRiskZonesTool};
