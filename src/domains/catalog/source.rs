//! Catalog lookup abstraction.
//!
//! `CatalogSource` has a single capability, `lookup`. Everything else
//! (typed accessors with empty fallbacks) is layered on top by `CatalogExt`
//! so test fixtures only need to implement one method.

use serde::Serialize;

use super::model::{Hospital, RiskZoneSet, RoadSegment, Shelter, WaterGauge, WeatherSnapshot};

/// The feed tables a catalog can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    RiskZones,
    Roads,
    WaterGauges,
    Shelters,
    Hospitals,
    Weather,
}

impl FeedKind {
    /// All kinds, in display order.
    pub const ALL: [FeedKind; 6] = [
        FeedKind::RiskZones,
        FeedKind::Roads,
        FeedKind::WaterGauges,
        FeedKind::Shelters,
        FeedKind::Hospitals,
        FeedKind::Weather,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedKind::RiskZones => "risk_zones",
            FeedKind::Roads => "roads",
            FeedKind::WaterGauges => "water_gauges",
            FeedKind::Shelters => "shelters",
            FeedKind::Hospitals => "hospitals",
            FeedKind::Weather => "weather",
        }
    }
}

/// A borrowed feed record returned by a lookup.
///
/// Serializes as the bare record, without a variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeedRecord<'a> {
    RiskZones(&'a RiskZoneSet),
    Roads(&'a [RoadSegment]),
    WaterGauges(&'a [WaterGauge]),
    Shelters(&'a [Shelter]),
    Hospitals(&'a [Hospital]),
    Weather(&'a WeatherSnapshot),
}

impl FeedRecord<'_> {
    /// Number of records in this feed (1 for single-record feeds).
    pub fn len(&self) -> usize {
        match self {
            FeedRecord::RiskZones(_) | FeedRecord::Weather(_) => 1,
            FeedRecord::Roads(r) => r.len(),
            FeedRecord::WaterGauges(g) => g.len(),
            FeedRecord::Shelters(s) => s.len(),
            FeedRecord::Hospitals(h) => h.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only source of feed records keyed by location.
///
/// Implementations must be pure reads: the same `(kind, location)` returns
/// the same record for the lifetime of the source.
pub trait CatalogSource: Send + Sync {
    /// Look up one feed for a location. `None` means no data, not failure.
    fn lookup(&self, kind: FeedKind, location: &str) -> Option<FeedRecord<'_>>;

    /// Location keys known to this source, sorted.
    fn locations(&self) -> Vec<String>;
}

/// Typed accessors over any [`CatalogSource`].
///
/// A lookup that returns nothing, or a record of the wrong kind, degrades to
/// an empty slice or `None`.
pub trait CatalogExt: CatalogSource {
    fn risk_zones(&self, location: &str) -> Option<&RiskZoneSet> {
        match self.lookup(FeedKind::RiskZones, location) {
            Some(FeedRecord::RiskZones(zones)) => Some(zones),
            _ => None,
        }
    }

    fn roads(&self, location: &str) -> &[RoadSegment] {
        match self.lookup(FeedKind::Roads, location) {
            Some(FeedRecord::Roads(roads)) => roads,
            _ => &[],
        }
    }

    fn water_gauges(&self, location: &str) -> &[WaterGauge] {
        match self.lookup(FeedKind::WaterGauges, location) {
            Some(FeedRecord::WaterGauges(gauges)) => gauges,
            _ => &[],
        }
    }

    fn shelters(&self, location: &str) -> &[Shelter] {
        match self.lookup(FeedKind::Shelters, location) {
            Some(FeedRecord::Shelters(shelters)) => shelters,
            _ => &[],
        }
    }

    fn hospitals(&self, location: &str) -> &[Hospital] {
        match self.lookup(FeedKind::Hospitals, location) {
            Some(FeedRecord::Hospitals(hospitals)) => hospitals,
            _ => &[],
        }
    }

    fn weather(&self, location: &str) -> Option<&WeatherSnapshot> {
        match self.lookup(FeedKind::Weather, location) {
            Some(FeedRecord::Weather(weather)) => Some(weather),
            _ => None,
        }
    }

    /// High-risk areas, empty when the location has no zone data.
    fn high_risk_areas(&self, location: &str) -> &[String] {
        self.risk_zones(location)
            .map(|zones| zones.high.as_slice())
            .unwrap_or(&[])
    }
}

impl<T: CatalogSource + ?Sized> CatalogExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that answers every lookup with a road list, whatever the kind.
    struct MisbehavingSource {
        roads: Vec<RoadSegment>,
    }

    impl CatalogSource for MisbehavingSource {
        fn lookup(&self, _kind: FeedKind, _location: &str) -> Option<FeedRecord<'_>> {
            Some(FeedRecord::Roads(&self.roads))
        }

        fn locations(&self) -> Vec<String> {
            vec!["Anywhere".to_string()]
        }
    }

    #[test]
    fn test_mismatched_record_kind_degrades_to_empty() {
        let source = MisbehavingSource {
            roads: vec![RoadSegment::new("R", "Clear", "Low")],
        };
        assert_eq!(source.roads("Anywhere").len(), 1);
        assert!(source.shelters("Anywhere").is_empty());
        assert!(source.weather("Anywhere").is_none());
        assert!(source.high_risk_areas("Anywhere").is_empty());
    }

    #[test]
    fn test_accessors_work_through_trait_object() {
        let source = MisbehavingSource { roads: vec![] };
        let dyn_source: &dyn CatalogSource = &source;
        assert!(dyn_source.roads("Anywhere").is_empty());
    }

    #[test]
    fn test_feed_kind_names() {
        let names: Vec<_> = FeedKind::ALL.iter().map(FeedKind::as_str).collect();
        assert_eq!(
            names,
            vec![
                "risk_zones",
                "roads",
                "water_gauges",
                "shelters",
                "hospitals",
                "weather",
            ]
        );
    }
}
