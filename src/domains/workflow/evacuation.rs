//! Community evacuation workflow.
//!
//! Two phases in a fixed order:
//!
//! 1. **Monitor** - gauge status for every water gauge, the critical ones
//!    collected, plus the high-risk zone list.
//! 2. **Plan & Dispatch** - clear routes, shelter availability, and the
//!    alert built from the monitor output.
//!
//! `plan_and_dispatch` takes the `MonitorPhase` by reference, so dispatch
//! cannot run before monitoring. Missing catalog data only empties the
//! lists; the workflow always finishes with `WorkflowStatus::Complete`.

use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, info};

use crate::domains::assessment::{
    GaugeReading, WaterStatus, clear_routes, total_available, water_status,
};
use crate::domains::catalog::{CatalogExt, CatalogSource};
use crate::domains::report::{RULE, TIMESTAMP_FORMAT, format_percent, join_or_none};

/// Number of clear routes named in the alert.
pub const RECOMMENDED_ROUTE_LIMIT: usize = 2;

// ============================================================================
// Phase results
// ============================================================================

/// Output of the monitor phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorPhase {
    /// Gauges at CRITICAL, in catalog order.
    pub critical_gauges: Vec<GaugeReading>,

    /// Number of gauges inspected.
    pub gauges_checked: usize,

    pub high_risk_areas: Vec<String>,
}

impl MonitorPhase {
    pub fn critical_count(&self) -> usize {
        self.critical_gauges.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOption {
    pub name: String,
    pub congestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShelterAvailability {
    pub name: String,
    pub available: i64,
}

/// The alert dispatched at the end of the workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvacuationAlert {
    pub affected_areas: Vec<String>,

    /// The first clear routes in catalog order, at most `RECOMMENDED_ROUTE_LIMIT`.
    pub recommended_routes: Vec<String>,

    pub shelter_locations: Vec<String>,
    pub total_capacity: i64,
}

/// Output of the plan & dispatch phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchPhase {
    pub routes: Vec<RouteOption>,
    pub shelters: Vec<ShelterAvailability>,
    pub total_capacity: i64,
    pub alert: EvacuationAlert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkflowStatus {
    Complete,
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowStatus::Complete => f.write_str("COMPLETE"),
        }
    }
}

/// Full result of one workflow run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvacuationWorkflowReport {
    pub city: String,
    pub monitor: MonitorPhase,
    pub dispatch: DispatchPhase,
    pub status: WorkflowStatus,
    pub completed_at: DateTime<Local>,
}

// ============================================================================
// Workflow
// ============================================================================

/// Evacuation workflow over one catalog snapshot.
pub struct EvacuationWorkflow<'a> {
    catalog: &'a dyn CatalogSource,
}

impl<'a> EvacuationWorkflow<'a> {
    pub fn new(catalog: &'a dyn CatalogSource) -> Self {
        Self { catalog }
    }

    /// Phase 1: inspect every gauge and read the high-risk zones.
    pub fn monitor(&self, city: &str) -> MonitorPhase {
        let gauges = self.catalog.water_gauges(city);

        let critical_gauges: Vec<GaugeReading> = gauges
            .iter()
            .map(water_status)
            .filter(|reading| reading.status == WaterStatus::Critical)
            .collect();

        debug!(
            "Monitor phase for {}: {} of {} gauges critical",
            city,
            critical_gauges.len(),
            gauges.len()
        );

        MonitorPhase {
            critical_gauges,
            gauges_checked: gauges.len(),
            high_risk_areas: self.catalog.high_risk_areas(city).to_vec(),
        }
    }

    /// Phase 2: plan routes and shelters and build the alert.
    pub fn plan_and_dispatch(&self, city: &str, monitor: &MonitorPhase) -> DispatchPhase {
        let routes: Vec<RouteOption> = clear_routes(self.catalog.roads(city))
            .into_iter()
            .map(|road| RouteOption {
                name: road.name.clone(),
                congestion: road.congestion.clone(),
            })
            .collect();

        let shelter_records = self.catalog.shelters(city);
        let shelters: Vec<ShelterAvailability> = shelter_records
            .iter()
            .map(|shelter| ShelterAvailability {
                name: shelter.name.clone(),
                available: shelter.available(),
            })
            .collect();
        let total_capacity = total_available(shelter_records);

        let alert = EvacuationAlert {
            affected_areas: monitor.high_risk_areas.clone(),
            recommended_routes: routes
                .iter()
                .take(RECOMMENDED_ROUTE_LIMIT)
                .map(|route| route.name.clone())
                .collect(),
            shelter_locations: shelters.iter().map(|s| s.name.clone()).collect(),
            total_capacity,
        };

        debug!(
            "Dispatch phase for {}: {} clear routes, {} shelters, capacity {}",
            city,
            routes.len(),
            shelters.len(),
            total_capacity
        );

        DispatchPhase {
            routes,
            shelters,
            total_capacity,
            alert,
        }
    }

    /// Run both phases and stamp the completion time.
    pub fn run(&self, city: &str, completed_at: DateTime<Local>) -> EvacuationWorkflowReport {
        info!("Executing community evacuation workflow for {}", city);

        let monitor = self.monitor(city);
        let dispatch = self.plan_and_dispatch(city, &monitor);

        EvacuationWorkflowReport {
            city: city.to_string(),
            monitor,
            dispatch,
            status: WorkflowStatus::Complete,
            completed_at,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for EvacuationWorkflowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let monitor = &self.monitor;
        let dispatch = &self.dispatch;
        let alert = &dispatch.alert;

        writeln!(f, "COMMUNITY EVACUATION WORKFLOW - {}", self.city)?;
        writeln!(f)?;
        writeln!(f, "STEP 1: MONITOR RISK ZONES")?;
        for gauge in &monitor.critical_gauges {
            writeln!(
                f,
                "CRITICAL: {} at {} ft ({} to flood, {})",
                gauge.name,
                gauge.level,
                format_percent(gauge.percent_to_flood),
                gauge.trend
            )?;
        }
        writeln!(
            f,
            "Critical gauges: {} of {}",
            monitor.critical_count(),
            monitor.gauges_checked
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Risk Assessment: {} HIGH RISK zones identified",
            monitor.high_risk_areas.len()
        )?;
        let high_risk = join_or_none(&monitor.high_risk_areas);
        writeln!(f, "Affected Areas: {high_risk}")?;

        writeln!(f)?;
        writeln!(f, "STEP 2: AUTOMATICALLY PLAN AND DISPATCH")?;
        writeln!(f)?;
        writeln!(
            f,
            "Safe Evacuation Routes (Geospatial Data + Real-time Status):"
        )?;
        if dispatch.routes.is_empty() {
            writeln!(f, "  None")?;
        }
        for route in &dispatch.routes {
            writeln!(f, "  - {} ({} congestion)", route.name, route.congestion)?;
        }
        writeln!(f)?;
        writeln!(f, "Designated Shelters:")?;
        if dispatch.shelters.is_empty() {
            writeln!(f, "  None")?;
        }
        for shelter in &dispatch.shelters {
            writeln!(
                f,
                "  - {}: {} spaces available",
                shelter.name, shelter.available
            )?;
        }

        writeln!(f)?;
        writeln!(f, "EVACUATION ALERT DISPATCHED:")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "EMERGENCY EVACUATION ORDER")?;
        writeln!(f)?;
        let affected = join_or_none(&alert.affected_areas);
        let routes = join_or_none(&alert.recommended_routes);
        let shelters = join_or_none(&alert.shelter_locations);
        writeln!(f, "Affected Areas: {affected}")?;
        writeln!(f, "Recommended Routes: {routes}")?;
        writeln!(f, "Shelter Locations: {shelters}")?;
        writeln!(f, "Total Shelter Capacity: {} people", alert.total_capacity)?;
        writeln!(f, "{}", RULE)?;

        writeln!(f)?;
        writeln!(f, "WORKFLOW STATUS: {}", self.status)?;
        write!(f, "Time: {}", self.completed_at.format(TIMESTAMP_FORMAT))
    }
}
