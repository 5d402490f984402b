//! Feed record types.
//!
//! These mirror the shape of the external feeds the catalog stands in for.
//! All of them are plain immutable values; nothing in the server mutates a
//! record after the catalog is built.

use serde::{Deserialize, Serialize};

/// Status value marking a road as passable.
pub const CLEAR_STATUS: &str = "Clear";

/// Road segment with its real-time status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub name: String,

    /// "Clear", "Flooded", or any other display string.
    pub status: String,

    /// "Low", "Moderate", "Blocked", or any other display string.
    pub congestion: String,
}

impl RoadSegment {
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        congestion: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            congestion: congestion.into(),
        }
    }

    /// Exact, case-sensitive match on the stored status.
    pub fn is_clear(&self) -> bool {
        self.status == CLEAR_STATUS
    }
}

/// River or channel water gauge, levels in feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterGauge {
    pub name: String,
    pub level: f64,
    pub normal: f64,
    pub flood_stage: f64,

    /// Trend reported by the feed, e.g. "Rising".
    pub trend: String,
}

impl WaterGauge {
    pub fn new(
        name: impl Into<String>,
        level: f64,
        normal: f64,
        flood_stage: f64,
        trend: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            normal,
            flood_stage,
            trend: trend.into(),
        }
    }
}

/// Terrain-derived risk zones for a location, each list in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskZoneSet {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub medium: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
}

/// Emergency shelter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    pub name: String,
    pub capacity: u32,
    pub current: u32,
    pub address: String,
}

impl Shelter {
    pub fn new(
        name: impl Into<String>,
        capacity: u32,
        current: u32,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            capacity,
            current,
            address: address.into(),
        }
    }

    /// Free spaces. Signed so an over-full feed shows up as negative
    /// instead of wrapping.
    pub fn available(&self) -> i64 {
        i64::from(self.capacity) - i64::from(self.current)
    }

    /// `current / capacity`. A zero-capacity shelter is treated as full
    /// beyond measure.
    pub fn occupancy_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return f64::INFINITY;
        }
        f64::from(self.current) / f64::from(self.capacity)
    }
}

/// Hospital bed availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub name: String,
    pub total_beds: u32,
    pub available_beds: u32,
    pub emergency_beds: u32,
}

impl Hospital {
    pub fn new(
        name: impl Into<String>,
        total_beds: u32,
        available_beds: u32,
        emergency_beds: u32,
    ) -> Self {
        Self {
            name: name.into(),
            total_beds,
            available_beds,
            emergency_beds,
        }
    }
}

/// Current weather observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Degrees Fahrenheit.
    pub temperature: f64,

    /// Relative humidity, 0-100.
    pub humidity: f64,

    /// Barometric pressure in hPa.
    pub pressure: f64,

    pub conditions: String,

    /// Miles per hour.
    pub wind_speed: f64,

    /// Rainfall over the last hour, inches.
    pub rainfall_1h: f64,

    /// Rainfall over the last three hours, inches.
    pub rainfall_3h: f64,
}

/// Every feed for one location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFeeds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_zones: Option<RiskZoneSet>,
    #[serde(default)]
    pub roads: Vec<RoadSegment>,
    #[serde(default)]
    pub water_gauges: Vec<WaterGauge>,
    #[serde(default)]
    pub shelters: Vec<Shelter>,
    #[serde(default)]
    pub hospitals: Vec<Hospital>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_clear_is_case_sensitive() {
        assert!(RoadSegment::new("A", "Clear", "Low").is_clear());
        assert!(!RoadSegment::new("B", "clear", "Low").is_clear());
        assert!(!RoadSegment::new("C", "Flooded", "Blocked").is_clear());
    }

    #[test]
    fn test_shelter_available_and_ratio() {
        let shelter = Shelter::new("A", 500, 150, "1 Main St");
        assert_eq!(shelter.available(), 350);
        assert!((shelter.occupancy_ratio() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_zero_capacity_shelter_ratio() {
        let shelter = Shelter::new("Closed", 0, 0, "nowhere");
        assert_eq!(shelter.available(), 0);
        assert!(shelter.occupancy_ratio().is_infinite());
    }

    #[test]
    fn test_location_feeds_missing_sections_default() {
        let json = r#"{"roads": [{"name": "R", "status": "Clear", "congestion": "Low"}]}"#;
        let feeds: LocationFeeds = serde_json::from_str(json).unwrap();
        assert_eq!(feeds.roads.len(), 1);
        assert!(feeds.shelters.is_empty());
        assert!(feeds.weather.is_none());
        assert!(feeds.risk_zones.is_none());
    }
}
