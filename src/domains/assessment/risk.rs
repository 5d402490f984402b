//! Risk assessment.
//!
//! Two independent scores:
//! - water-gauge status, from how far a gauge has risen between its normal
//!   level and flood stage
//! - flood risk, an additive score over humidity, pressure and rainfall

use std::fmt;

use serde::Serialize;

use crate::domains::catalog::{WaterGauge, WeatherSnapshot};

/// Percent-to-flood-stage at or above which a gauge is critical.
pub const CRITICAL_PERCENT: f64 = 80.0;

/// Percent-to-flood-stage at or above which a gauge is in warning.
pub const WARNING_PERCENT: f64 = 60.0;

// ============================================================================
// Water status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WaterStatus {
    Critical,
    Warning,
    Watch,
}

impl WaterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterStatus::Critical => "CRITICAL",
            WaterStatus::Warning => "WARNING",
            WaterStatus::Watch => "WATCH",
        }
    }
}

impl fmt::Display for WaterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of one gauge with the percentage it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReading {
    pub name: String,
    pub level: f64,
    pub trend: String,
    pub status: WaterStatus,

    /// `None` when normal level and flood stage coincide.
    pub percent_to_flood: Option<f64>,
}

/// Classify a percent-to-flood-stage value.
pub fn classify_percent(percent: f64) -> WaterStatus {
    if percent >= CRITICAL_PERCENT {
        WaterStatus::Critical
    } else if percent >= WARNING_PERCENT {
        WaterStatus::Warning
    } else {
        WaterStatus::Watch
    }
}

/// Compute the status of a gauge.
///
/// With a zero-width band (`flood_stage == normal`) there is no percentage;
/// the gauge is critical once the level reaches flood stage.
pub fn water_status(gauge: &WaterGauge) -> GaugeReading {
    let band = gauge.flood_stage - gauge.normal;

    let (status, percent_to_flood) = if band == 0.0 {
        let status = if gauge.level >= gauge.flood_stage {
            WaterStatus::Critical
        } else {
            WaterStatus::Watch
        };
        (status, None)
    } else {
        let percent = (gauge.level - gauge.normal) / band * 100.0;
        (classify_percent(percent), Some(percent))
    };

    GaugeReading {
        name: gauge.name.clone(),
        level: gauge.level,
        trend: gauge.trend.clone(),
        status,
        percent_to_flood,
    }
}

// ============================================================================
// Flood risk
// ============================================================================

/// Humidity (percent) above which the air counts as saturated.
const HUMIDITY_THRESHOLD: f64 = 85.0;

/// Pressure (hPa) below which a storm system is assumed.
const PRESSURE_THRESHOLD: f64 = 1000.0;

/// One-hour rainfall (inches) above which rain is heavy.
const HEAVY_RAIN_THRESHOLD: f64 = 2.0;

/// One-hour rainfall (inches) above which rain is moderate.
const MODERATE_RAIN_THRESHOLD: f64 = 1.0;

/// Highest score the additive model can produce.
pub const MAX_RISK_SCORE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FloodRiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl FloodRiskLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            7.. => FloodRiskLevel::Extreme,
            5..=6 => FloodRiskLevel::High,
            3..=4 => FloodRiskLevel::Medium,
            _ => FloodRiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FloodRiskLevel::Low => "LOW",
            FloodRiskLevel::Medium => "MEDIUM",
            FloodRiskLevel::High => "HIGH",
            FloodRiskLevel::Extreme => "EXTREME",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            FloodRiskLevel::Extreme => "IMMEDIATE ACTION REQUIRED",
            FloodRiskLevel::High | FloodRiskLevel::Medium => "MONITOR SITUATION CLOSELY",
            FloodRiskLevel::Low => "CONTINUE MONITORING",
        }
    }
}

impl fmt::Display for FloodRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a weather snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloodRiskAssessment {
    pub score: u32,
    pub level: FloodRiskLevel,

    /// One line per triggered condition, in evaluation order.
    pub warnings: Vec<String>,
}

impl FloodRiskAssessment {
    pub fn recommendation(&self) -> &'static str {
        self.level.recommendation()
    }
}

/// Score a weather snapshot.
pub fn flood_risk(weather: &WeatherSnapshot) -> FloodRiskAssessment {
    let mut score = 0;
    let mut warnings = Vec::new();

    if weather.humidity > HUMIDITY_THRESHOLD {
        score += 3;
        warnings.push("VERY HIGH humidity detected".to_string());
    }

    if weather.pressure < PRESSURE_THRESHOLD {
        score += 3;
        warnings.push("LOW pressure (storm system present)".to_string());
    }

    if weather.rainfall_1h > HEAVY_RAIN_THRESHOLD {
        score += 4;
        warnings.push("HEAVY rainfall detected".to_string());
    } else if weather.rainfall_1h > MODERATE_RAIN_THRESHOLD {
        score += 3;
        warnings.push("MODERATE rainfall".to_string());
    }

    FloodRiskAssessment {
        score,
        level: FloodRiskLevel::from_score(score),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge(level: f64, normal: f64, flood_stage: f64) -> WaterGauge {
        WaterGauge::new("Test Gauge", level, normal, flood_stage, "Rising")
    }

    fn weather(humidity: f64, pressure: f64, rainfall_1h: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: 50.0,
            humidity,
            pressure,
            conditions: "rain".to_string(),
            wind_speed: 10.0,
            rainfall_1h,
            rainfall_3h: rainfall_1h * 2.0,
        }
    }

    #[test]
    fn test_classify_percent_boundaries() {
        assert_eq!(classify_percent(59.9), WaterStatus::Watch);
        assert_eq!(classify_percent(60.0), WaterStatus::Warning);
        assert_eq!(classify_percent(79.9), WaterStatus::Warning);
        assert_eq!(classify_percent(80.0), WaterStatus::Critical);
        assert_eq!(classify_percent(-10.0), WaterStatus::Watch);
        assert_eq!(classify_percent(150.0), WaterStatus::Critical);
    }

    #[test]
    fn test_water_status_boundaries_through_gauges() {
        // normal 0, flood stage 100: level equals the percentage.
        let status_at = |level| water_status(&gauge(level, 0.0, 100.0)).status;
        assert_eq!(status_at(59.9), WaterStatus::Watch);
        assert_eq!(status_at(60.0), WaterStatus::Warning);
        assert_eq!(status_at(79.9), WaterStatus::Warning);
        assert_eq!(status_at(80.0), WaterStatus::Critical);
    }

    #[test]
    fn test_water_status_boston_gauges() {
        let charles = water_status(&gauge(8.5, 5.0, 10.0));
        assert_eq!(charles.status, WaterStatus::Warning);
        assert!((charles.percent_to_flood.unwrap() - 70.0).abs() < 1e-9);

        let fort_point = water_status(&gauge(7.2, 4.5, 8.0));
        assert_eq!(fort_point.status, WaterStatus::Warning);
        assert!((fort_point.percent_to_flood.unwrap() - 77.142857).abs() < 1e-4);
    }

    #[test]
    fn test_water_status_above_flood_stage() {
        let reading = water_status(&gauge(12.0, 5.0, 10.0));
        assert_eq!(reading.status, WaterStatus::Critical);
        assert!(reading.percent_to_flood.unwrap() > 100.0);
    }

    #[test]
    fn test_water_status_zero_width_band() {
        let at_stage = water_status(&gauge(5.0, 5.0, 5.0));
        assert_eq!(at_stage.status, WaterStatus::Critical);
        assert_eq!(at_stage.percent_to_flood, None);

        let below = water_status(&gauge(4.0, 5.0, 5.0));
        assert_eq!(below.status, WaterStatus::Watch);
        assert_eq!(below.percent_to_flood, None);
    }

    #[test]
    fn test_flood_risk_all_conditions() {
        let assessment = flood_risk(&weather(90.0, 995.0, 2.5));
        assert_eq!(assessment.score, 10);
        assert_eq!(assessment.level, FloodRiskLevel::Extreme);
        assert_eq!(assessment.warnings.len(), 3);
        assert_eq!(assessment.recommendation(), "IMMEDIATE ACTION REQUIRED");
    }

    #[test]
    fn test_flood_risk_boston_weather() {
        // humidity 85 is not above the threshold; 1.2" of rain is moderate.
        let assessment = flood_risk(&weather(85.0, 1008.0, 1.2));
        assert_eq!(assessment.score, 3);
        assert_eq!(assessment.level, FloodRiskLevel::Medium);
        assert_eq!(assessment.warnings, vec!["MODERATE rainfall".to_string()]);
        assert_eq!(assessment.recommendation(), "MONITOR SITUATION CLOSELY");
    }

    #[test]
    fn test_flood_risk_calm() {
        let assessment = flood_risk(&weather(40.0, 1020.0, 0.0));
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, FloodRiskLevel::Low);
        assert!(assessment.warnings.is_empty());
        assert_eq!(assessment.recommendation(), "CONTINUE MONITORING");
    }

    #[test]
    fn test_flood_risk_heavy_rain_replaces_moderate() {
        let assessment = flood_risk(&weather(40.0, 1020.0, 2.01));
        assert_eq!(assessment.score, 4);
        assert_eq!(assessment.warnings, vec!["HEAVY rainfall detected"]);
    }

    #[test]
    fn test_flood_risk_monotonic_in_each_condition() {
        let base = flood_risk(&weather(80.0, 1010.0, 0.5)).score;
        assert!(flood_risk(&weather(90.0, 1010.0, 0.5)).score >= base);
        assert!(flood_risk(&weather(80.0, 990.0, 0.5)).score >= base);
        assert!(flood_risk(&weather(80.0, 1010.0, 1.5)).score >= base);
        assert!(
            flood_risk(&weather(80.0, 1010.0, 2.5)).score
                >= flood_risk(&weather(80.0, 1010.0, 1.5)).score
        );
    }

    #[test]
    fn test_level_from_score() {
        assert_eq!(FloodRiskLevel::from_score(0), FloodRiskLevel::Low);
        assert_eq!(FloodRiskLevel::from_score(2), FloodRiskLevel::Low);
        assert_eq!(FloodRiskLevel::from_score(3), FloodRiskLevel::Medium);
        assert_eq!(FloodRiskLevel::from_score(5), FloodRiskLevel::High);
        assert_eq!(FloodRiskLevel::from_score(6), FloodRiskLevel::High);
        assert_eq!(FloodRiskLevel::from_score(7), FloodRiskLevel::Extreme);
        let max = FloodRiskLevel::from_score(MAX_RISK_SCORE);
        assert_eq!(max, FloodRiskLevel::Extreme);
    }
}
