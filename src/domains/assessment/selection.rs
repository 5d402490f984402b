//! Route and shelter selection.

use crate::domains::catalog::{RoadSegment, Shelter};

/// Roads whose status is exactly "Clear", in catalog order.
pub fn clear_routes(roads: &[RoadSegment]) -> Vec<&RoadSegment> {
    roads.iter().filter(|road| road.is_clear()).collect()
}

/// Every road that is not clear, in catalog order.
pub fn blocked_routes(roads: &[RoadSegment]) -> Vec<&RoadSegment> {
    roads.iter().filter(|road| !road.is_clear()).collect()
}

/// The shelter with the lowest occupancy ratio.
///
/// Ties go to the shelter listed first. `None` when there are no shelters.
pub fn best_shelter(shelters: &[Shelter]) -> Option<&Shelter> {
    // min_by keeps the first of equal elements.
    shelters
        .iter()
        .min_by(|a, b| a.occupancy_ratio().total_cmp(&b.occupancy_ratio()))
}

/// Sum of free spaces across shelters.
pub fn total_available(shelters: &[Shelter]) -> i64 {
    shelters.iter().map(Shelter::available).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roads() -> Vec<RoadSegment> {
        vec![
            RoadSegment::new("I-93 North", "Clear", "Low"),
            RoadSegment::new("I-93 South", "Flooded", "Blocked"),
            RoadSegment::new("Mass Pike West", "Clear", "Moderate"),
            RoadSegment::new("Storrow Drive", "Flooded", "Blocked"),
            RoadSegment::new("Route 1 North", "Clear", "Low"),
            RoadSegment::new("Tobin Bridge", "Closed for inspection", "Blocked"),
            RoadSegment::new("Memorial Drive", "CLEAR", "Low"),
        ]
    }

    fn names<'a>(roads: &[&'a RoadSegment]) -> Vec<&'a str> {
        roads.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_clear_routes_preserve_order() {
        let roads = roads();
        assert_eq!(
            names(&clear_routes(&roads)),
            vec!["I-93 North", "Mass Pike West", "Route 1 North"]
        );
    }

    #[test]
    fn test_blocked_routes_include_free_form_statuses() {
        let roads = roads();
        assert_eq!(
            names(&blocked_routes(&roads)),
            vec![
                "I-93 South",
                "Storrow Drive",
                "Tobin Bridge",
                "Memorial Drive",
            ]
        );
    }

    #[test]
    fn test_routes_partition_the_road_set() {
        let roads = roads();
        let clear = clear_routes(&roads);
        let blocked = blocked_routes(&roads);

        assert_eq!(clear.len() + blocked.len(), roads.len());
        for road in &roads {
            let in_clear = clear.iter().any(|r| std::ptr::eq(*r, road));
            let in_blocked = blocked.iter().any(|r| std::ptr::eq(*r, road));
            assert!(
                in_clear ^ in_blocked,
                "{} must be in exactly one set",
                road.name
            );
        }
    }

    #[test]
    fn test_routes_empty_input() {
        assert!(clear_routes(&[]).is_empty());
        assert!(blocked_routes(&[]).is_empty());
    }

    #[test]
    fn test_best_shelter_lowest_ratio() {
        let shelters = vec![
            Shelter::new("A", 500, 150, "a"),
            Shelter::new("B", 300, 80, "b"),
        ];
        assert_eq!(best_shelter(&shelters).unwrap().name, "B");
    }

    #[test]
    fn test_best_shelter_boston() {
        let shelters = vec![
            Shelter::new("North Boston High School", 500, 150, "123 Main St"),
            Shelter::new("West End Community Center", 300, 80, "456 Oak Ave"),
            Shelter::new("Brookline Emergency Shelter", 400, 50, "789 Elm St"),
        ];
        assert_eq!(
            best_shelter(&shelters).unwrap().name,
            "Brookline Emergency Shelter"
        );
    }

    #[test]
    fn test_best_shelter_tie_first_wins() {
        let shelters = vec![
            Shelter::new("First", 100, 50, "a"),
            Shelter::new("Second", 200, 100, "b"),
            Shelter::new("Third", 10, 5, "c"),
        ];
        assert_eq!(best_shelter(&shelters).unwrap().name, "First");
    }

    #[test]
    fn test_best_shelter_empty() {
        assert!(best_shelter(&[]).is_none());
    }

    #[test]
    fn test_best_shelter_skips_zero_capacity() {
        let shelters = vec![
            Shelter::new("Closed", 0, 0, "a"),
            Shelter::new("Full", 100, 100, "b"),
        ];
        assert_eq!(best_shelter(&shelters).unwrap().name, "Full");
    }

    #[test]
    fn test_total_available() {
        let shelters = vec![
            Shelter::new("A", 500, 150, "a"),
            Shelter::new("B", 300, 80, "b"),
            Shelter::new("C", 400, 50, "c"),
        ];
        assert_eq!(total_available(&shelters), 920);
        assert_eq!(total_available(&[]), 0);
    }
}
