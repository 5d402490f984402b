//! Domains module containing the crisis response logic.
//!
//! - **catalog**: location-keyed feed tables and the shared snapshot handle
//! - **assessment**: water status, flood risk scoring, route and shelter selection
//! - **workflow**: the two-phase community evacuation workflow
//! - **report**: text formatting shared by tool reports
//! - **tools**, **resources**, **prompts**: the MCP surfaces

pub mod assessment;
pub mod catalog;
pub mod prompts;
pub mod report;
pub mod resources;
pub mod tools;
pub mod workflow;
