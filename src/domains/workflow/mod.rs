//! Workflow domain module.
//!
//! Multi-step operations composed from the assessment functions. The only
//! workflow today is the community evacuation: monitor risk zones, then
//! plan routes and dispatch the alert.

pub mod evacuation;

pub use evacuation::{
    DispatchPhase, EvacuationAlert, EvacuationWorkflow, EvacuationWorkflowReport, MonitorPhase,
    RECOMMENDED_ROUTE_LIMIT, RouteOption, ShelterAvailability, WorkflowStatus,
};
