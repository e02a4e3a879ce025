//! Great-circle distances between destinations.
//!
//! Distances use the haversine formula over a spherical Earth of radius
//! [`EARTH_RADIUS_KM`].
//!
//! # Examples
//! ```
//! use bingoroute_core::distance::{distance, format_distance};
//!
//! let km = distance(37.5796, 126.977, 37.5512, 126.9882);
//! assert!(km > 3.0 && km < 3.5);
//! assert_eq!(format_distance(0.75), "750m");
//! ```

use crate::{Coordinates, Destination};

/// Mean Earth radius used by [`distance`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two latitude/longitude pairs.
///
/// The result is symmetric in its two points and `0.0` for identical points.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    // Rounding can push `a` a hair past 1.0 for antipodal points.
    let a = ((delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance in kilometres between two [`Coordinates`].
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    distance(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Render a distance for display.
///
/// Distances under one kilometre are shown as whole metres, longer ones with
/// a single decimal place.
///
/// # Examples
/// ```
/// use bingoroute_core::distance::format_distance;
///
/// assert_eq!(format_distance(0.75), "750m");
/// assert_eq!(format_distance(2.34), "2.3km");
/// ```
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        let metres = (km * 1000.0).round().max(0.0);
        format!("{metres:.0}m")
    } else {
        // Ties round away from zero rather than to even.
        let tenths = (km * 10.0).round() / 10.0;
        format!("{tenths:.1}km")
    }
}

/// A destination paired with its distance from a reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearby<'a> {
    /// The catalog entry.
    pub destination: &'a Destination,
    /// Distance from the reference point in kilometres.
    pub km: f64,
}

/// Order `catalog` by distance from `origin`, nearest first.
///
/// Equidistant destinations keep their catalog order.
pub fn nearest_first(catalog: &[Destination], origin: Coordinates) -> Vec<Nearby<'_>> {
    let mut nearby: Vec<Nearby<'_>> = catalog
        .iter()
        .map(|destination| Nearby {
            destination,
            km: haversine_km(origin, destination.coordinates),
        })
        .collect();
    nearby.sort_by(|a, b| a.km.total_cmp(&b.km));
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    fn identical_points_are_zero() {
        assert_eq!(distance(37.5, 127.0, 37.5, 127.0), 0.0);
    }

    #[rstest]
    fn one_degree_of_latitude() {
        let km = distance(0.0, 0.0, 1.0, 0.0);
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((km - expected).abs() < TOLERANCE);
    }

    #[rstest]
    fn swapping_points_gives_same_distance() {
        let forward = distance(37.5796, 126.977, 37.5125, 127.1025);
        let backward = distance(37.5125, 127.1025, 37.5796, 126.977);
        assert!((forward - backward).abs() < TOLERANCE);
    }

    #[rstest]
    fn antipodes_are_half_the_circumference() {
        let km = distance(0.0, 0.0, 0.0, 180.0);
        assert!((km - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[rstest]
    #[case(0.75, "750m")]
    #[case(0.0, "0m")]
    #[case(0.0004, "0m")]
    #[case(0.9994, "999m")]
    #[case(1.0, "1.0km")]
    #[case(2.34, "2.3km")]
    #[case(12.06, "12.1km")]
    #[case(2.25, "2.3km")]
    #[case(1.05, "1.1km")]
    fn formats_distances(#[case] km: f64, #[case] expected: &str) {
        assert_eq!(format_distance(km), expected);
    }

    #[rstest]
    fn nearest_first_orders_by_distance_and_keeps_ties() {
        let origin = Coordinates::new(37.5, 127.0);
        let far = Destination::new("far", "Far", "강남구", Coordinates::new(37.6, 127.0));
        let tie_a = Destination::new("a", "A", "중구", Coordinates::new(37.51, 127.0));
        let tie_b = Destination::new("b", "B", "중구", Coordinates::new(37.51, 127.0));
        let catalog = vec![far, tie_a, tie_b];

        let ordered: Vec<&str> = nearest_first(&catalog, origin)
            .iter()
            .map(|n| n.destination.id.as_str())
            .collect();

        assert_eq!(ordered, vec!["a", "b", "far"]);
    }
}
