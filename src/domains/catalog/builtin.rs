//! Static, in-memory catalog.
//!
//! `StaticCatalog::builtin()` carries the Boston mock tables. A catalog with
//! the same shape can also be loaded from a JSON file keyed by location:
//!
//! ```json
//! { "Boston": { "roads": [ { "name": "I-93 North", "status": "Clear", "congestion": "Low" } ] } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use super::error::CatalogError;
use super::model::{
    Hospital, LocationFeeds, RiskZoneSet, RoadSegment, Shelter, WaterGauge, WeatherSnapshot,
};
use super::source::{CatalogSource, FeedKind, FeedRecord};

/// Catalog backed by an immutable map of location → feeds.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    locations: BTreeMap<String, LocationFeeds>,
}

impl StaticCatalog {
    /// Build a catalog from explicit location feeds.
    pub fn new(locations: BTreeMap<String, LocationFeeds>) -> Self {
        Self { locations }
    }

    /// Add or replace one location. Builder style, for fixtures.
    pub fn with_location(mut self, location: impl Into<String>, feeds: LocationFeeds) -> Self {
        self.locations.insert(location.into(), feeds);
        self
    }

    /// The built-in mock feeds.
    pub fn builtin() -> Self {
        Self::default().with_location("Boston", boston())
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let locations: BTreeMap<String, LocationFeeds> = serde_json::from_str(json)?;
        Ok(Self::new(locations))
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::read(path, e))?;
        let catalog = Self::from_json_str(&raw).map_err(|e| CatalogError::parse(path, e))?;

        if catalog.locations.is_empty() {
            return Err(CatalogError::Empty);
        }

        info!(
            "Loaded catalog from {} ({} locations)",
            path.display(),
            catalog.locations.len()
        );
        Ok(catalog)
    }

    /// All feeds for a location.
    pub fn feeds(&self, location: &str) -> Option<&LocationFeeds> {
        self.locations.get(location)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl CatalogSource for StaticCatalog {
    fn lookup(&self, kind: FeedKind, location: &str) -> Option<FeedRecord<'_>> {
        let feeds = self.locations.get(location)?;
        match kind {
            FeedKind::RiskZones => feeds.risk_zones.as_ref().map(FeedRecord::RiskZones),
            FeedKind::Roads => Some(FeedRecord::Roads(&feeds.roads)),
            FeedKind::WaterGauges => Some(FeedRecord::WaterGauges(&feeds.water_gauges)),
            FeedKind::Shelters => Some(FeedRecord::Shelters(&feeds.shelters)),
            FeedKind::Hospitals => Some(FeedRecord::Hospitals(&feeds.hospitals)),
            FeedKind::Weather => feeds.weather.as_ref().map(FeedRecord::Weather),
        }
    }

    fn locations(&self) -> Vec<String> {
        self.locations.keys().cloned().collect()
    }
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn boston() -> LocationFeeds {
    LocationFeeds {
        risk_zones: Some(RiskZoneSet {
            high: names(&[
                "Downtown Waterfront",
                "Seaport District",
                "Back Bay Lower Areas",
            ]),
            medium: names(&["Cambridge Riverside", "Charlestown Lowlands"]),
            low: names(&["Beacon Hill", "Brookline", "Newton"]),
        }),
        roads: vec![
            RoadSegment::new("I-93 North", "Clear", "Low"),
            RoadSegment::new("I-93 South", "Flooded", "Blocked"),
            RoadSegment::new("Mass Pike West", "Clear", "Moderate"),
            RoadSegment::new("Storrow Drive", "Flooded", "Blocked"),
            RoadSegment::new("Route 1 North", "Clear", "Low"),
        ],
        water_gauges: vec![
            WaterGauge::new("Charles River", 8.5, 5.0, 10.0, "Rising"),
            WaterGauge::new("Fort Point Channel", 7.2, 4.5, 8.0, "Rising"),
        ],
        shelters: vec![
            Shelter::new("North Boston High School", 500, 150, "123 Main St"),
            Shelter::new("West End Community Center", 300, 80, "456 Oak Ave"),
            Shelter::new("Brookline Emergency Shelter", 400, 50, "789 Elm St"),
        ],
        hospitals: vec![
            Hospital::new("Boston General Hospital", 200, 50, 20),
            Hospital::new("City Medical Center", 150, 30, 15),
        ],
        weather: Some(WeatherSnapshot {
            temperature: 45.0,
            humidity: 85.0,
            pressure: 1008.0,
            conditions: "heavy rain".to_string(),
            wind_speed: 15.0,
            rainfall_1h: 1.2,
            rainfall_3h: 2.8,
        }),
    }
}
