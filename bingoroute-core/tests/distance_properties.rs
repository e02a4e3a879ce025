//! Property-based tests for the haversine distance helpers.
//!
//! # Invariants tested
//!
//! - **Identity:** a point is zero kilometres from itself.
//! - **Symmetry:** swapping the endpoints does not change the distance.
//! - **Bounds:** distances are finite, non-negative and at most half the
//!   Earth's circumference.
//! - **Formatting:** sub-kilometre distances render in metres, longer ones in
//!   kilometres.
//! - **Ordering:** `nearest_first` yields non-decreasing distances.

use std::f64::consts::PI;

use bingoroute_core::distance::EARTH_RADIUS_KM;
use bingoroute_core::{Coordinates, Destination, distance, format_distance, nearest_first};
use proptest::prelude::*;

fn latitude() -> impl Strategy<Value = f64> {
    -90.0_f64..=90.0
}

fn longitude() -> impl Strategy<Value = f64> {
    -180.0_f64..=180.0
}

fn coordinates() -> impl Strategy<Value = Coordinates> {
    (latitude(), longitude()).prop_map(|(lat, lon)| Coordinates::new(lat, lon))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: identical points are zero kilometres apart.
    #[test]
    fn identical_points_are_zero_apart(lat in latitude(), lon in longitude()) {
        prop_assert!(distance(lat, lon, lat, lon).abs() < 1e-9);
    }

    /// Property: distance does not depend on direction.
    #[test]
    fn distance_is_symmetric(a in coordinates(), b in coordinates()) {
        let there = a.distance_to(&b);
        let back = b.distance_to(&a);
        prop_assert!((there - back).abs() < 1e-9, "{there} != {back}");
    }

    /// Property: distances never exceed half the circumference.
    #[test]
    fn distance_is_bounded(a in coordinates(), b in coordinates()) {
        let km = a.distance_to(&b);
        prop_assert!(km.is_finite());
        prop_assert!(km >= 0.0);
        prop_assert!(km <= PI * EARTH_RADIUS_KM + 1e-6);
    }

    /// Property: the unit suffix follows the one-kilometre threshold.
    #[test]
    fn format_picks_unit_by_threshold(km in 0.0_f64..50.0) {
        let label = format_distance(km);
        if km < 1.0 {
            prop_assert!(label.ends_with('m') && !label.ends_with("km"), "{label}");
        } else {
            prop_assert!(label.ends_with("km"), "{label}");
        }
    }

    /// Property: nearest-first ordering is non-decreasing in distance.
    #[test]
    fn nearest_first_is_sorted(
        origin in coordinates(),
        points in prop::collection::vec(coordinates(), 0..20),
    ) {
        let catalog: Vec<Destination> = points
            .into_iter()
            .enumerate()
            .map(|(i, at)| Destination::new(i.to_string(), "place", "중구", at))
            .collect();
        let ordered = nearest_first(&catalog, origin);
        prop_assert_eq!(ordered.len(), catalog.len());
        for pair in ordered.windows(2) {
            prop_assert!(pair[0].km <= pair[1].km);
        }
    }
}
