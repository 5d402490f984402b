//! Assessment domain module.
//!
//! Pure decision logic over catalog records. Nothing here touches the
//! catalog directly; callers pass the records in.
//!
//! - `risk.rs` - Water-gauge status and weather-based flood risk
//! - `selection.rs` - Route partitioning and shelter selection

pub mod risk;
pub mod selection;

pub use risk::{
    FloodRiskAssessment, FloodRiskLevel, GaugeReading, WaterStatus, classify_percent, flood_risk,
    water_status,
};
pub use selection::{best_shelter, blocked_routes, clear_routes, total_available};
