use geo::{Bearing, Destination, Distance, Geodesic, Haversine, InterpolatePoint, Rhumb};
use geo_types::Point;

use crate::util::coord::Coordinate;

/// Distance metrics for measurements between decoded positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Haversine formula, assumes a spherical Earth
    #[default]
    Haversine,
    /// Geodesic distance on the WGS84 ellipsoid (Karney 2013)
    Geodesic,
    /// Rhumb line, maintains constant bearing
    Rhumb,
}

fn to_point(coord: &impl Coordinate) -> Point<f64> {
    Point::new(coord.lng(), coord.lat())
}

/// Distance in meters between two coordinates.
pub fn distance_between(
    from: &impl Coordinate,
    to: &impl Coordinate,
    metric: DistanceMetric,
) -> f64 {
    let (from, to) = (to_point(from), to_point(to));
    match metric {
        DistanceMetric::Haversine => Haversine.distance(from, to),
        DistanceMetric::Geodesic => Geodesic.distance(from, to),
        DistanceMetric::Rhumb => Rhumb.distance(from, to),
    }
}

/// Initial bearing in degrees from `from` towards `to`, normalized to [0, 360).
pub fn bearing_between(
    from: &impl Coordinate,
    to: &impl Coordinate,
    metric: DistanceMetric,
) -> f64 {
    let (from, to) = (to_point(from), to_point(to));
    let bearing = match metric {
        DistanceMetric::Haversine => Haversine.bearing(from, to),
        DistanceMetric::Geodesic => Geodesic.bearing(from, to),
        DistanceMetric::Rhumb => Rhumb.bearing(from, to),
    };
    bearing.rem_euclid(360.0)
}

/// Bearing in degrees at which the path from `from` arrives at `to`.
pub fn final_bearing_between(
    from: &impl Coordinate,
    to: &impl Coordinate,
    metric: DistanceMetric,
) -> f64 {
    (bearing_between(to, from, metric) + 180.0).rem_euclid(360.0)
}

/// Point halfway along the path between two coordinates.
pub fn midpoint(
    from: &impl Coordinate,
    to: &impl Coordinate,
    metric: DistanceMetric,
) -> Point<f64> {
    let (from, to) = (to_point(from), to_point(to));
    match metric {
        DistanceMetric::Haversine => Haversine.point_at_ratio_between(from, to, 0.5),
        DistanceMetric::Geodesic => Geodesic.point_at_ratio_between(from, to, 0.5),
        DistanceMetric::Rhumb => Rhumb.point_at_ratio_between(from, to, 0.5),
    }
}

/// Destination reached by travelling `distance_m` meters from `origin` on the
/// given initial bearing in degrees.
pub fn point_at(
    origin: &impl Coordinate,
    bearing_deg: f64,
    distance_m: f64,
    metric: DistanceMetric,
) -> Point<f64> {
    let origin = to_point(origin);
    match metric {
        DistanceMetric::Haversine => Haversine.destination(origin, bearing_deg, distance_m),
        DistanceMetric::Geodesic => Geodesic.destination(origin, bearing_deg, distance_m),
        DistanceMetric::Rhumb => Rhumb.destination(origin, bearing_deg, distance_m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_nyc_to_la() {
        let nyc = (40.7128, -74.0060);
        let la = (34.0522, -118.2437);
        let meters = distance_between(&nyc, &la, DistanceMetric::Haversine);
        assert!(meters > 3_900_000.0 && meters < 4_000_000.0);
    }

    #[test]
    fn test_metrics_agree_within_a_percent() {
        let nyc = (40.7128, -74.0060);
        let la = (34.0522, -118.2437);
        let haversine = distance_between(&nyc, &la, DistanceMetric::Haversine);
        let geodesic = distance_between(&nyc, &la, DistanceMetric::Geodesic);
        assert!((haversine - geodesic).abs() / geodesic < 0.01);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = (0.0, 0.0);
        let east = bearing_between(&origin, &(0.0, 10.0), DistanceMetric::Haversine);
        assert!((east - 90.0).abs() < 1e-9);

        let north = bearing_between(&origin, &(10.0, 0.0), DistanceMetric::Haversine);
        assert!(north.abs() < 1e-9);
    }

    #[test]
    fn test_bearing_is_normalized() {
        let west = bearing_between(&(0.0, 10.0), &(0.0, 0.0), DistanceMetric::Haversine);
        assert!((west - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_final_bearing_on_equator() {
        let from = (0.0, 0.0);
        let to = (0.0, 10.0);
        let arrival = final_bearing_between(&from, &to, DistanceMetric::Haversine);
        assert!((arrival - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_on_equator() {
        let mid = midpoint(&(0.0, 0.0), &(0.0, 10.0), DistanceMetric::Haversine);
        assert!(mid.y().abs() < 1e-6);
        assert!((mid.x() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_at_due_north() {
        let destination = point_at(&(0.0, 0.0), 0.0, 111_195.0, DistanceMetric::Haversine);
        assert!((destination.y() - 1.0).abs() < 0.01);
        assert!(destination.x().abs() < 1e-9);
    }

    #[test]
    fn test_point_at_recovers_target() {
        let from = (40.7128, -74.0060);
        let to = (42.3601, -71.0589);
        let bearing = bearing_between(&from, &to, DistanceMetric::Haversine);
        let meters = distance_between(&from, &to, DistanceMetric::Haversine);
        let reached = point_at(&from, bearing, meters, DistanceMetric::Haversine);
        assert!((reached.y() - to.0).abs() < 1e-6);
        assert!((reached.x() - to.1).abs() < 1e-6);
    }
}
