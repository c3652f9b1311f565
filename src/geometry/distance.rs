//! Distance from a point to the boundary ring.
//!
//! The nearest point is searched in the plane of raw (lon, lat) degrees,
//! then the gap is measured along the WGS84 ellipsoid. Degree deltas are not
//! comparable to kilometers, so the final measure must be geodesic.

use geo::{Closest, ClosestPoint, Distance, Geodesic, Point, Polygon};
use tracing::debug;

use super::ring::{distinct_vertices, validate_point, validate_ring};
use super::GeometryError;
use crate::models::Coordinate;

const METERS_PER_KM: f64 = 1000.0;

/// Closest point lying on any edge of the exterior ring (not only vertices).
pub fn nearest_boundary_point(
    point: Coordinate,
    polygon: &Polygon<f64>,
) -> Result<Coordinate, GeometryError> {
    validate_ring(polygon)?;
    validate_point(point)?;
    nearest_on_ring(point.into(), polygon).map(Coordinate::from)
}

/// Geodesic distance in kilometers from `point` to the nearest boundary point.
///
/// Only meaningful for points outside the polygon; for an inside point this
/// is the distance to the ring from within.
pub fn distance_to_boundary(
    point: Coordinate,
    polygon: &Polygon<f64>,
) -> Result<f64, GeometryError> {
    validate_ring(polygon)?;
    validate_point(point)?;
    boundary_distance_km(point, polygon)
}

/// Integer part of a kilometer value. 13.98 km is 13, never 14.
pub fn truncate_km(km: f64) -> u64 {
    // saturating cast: negative and NaN collapse to 0
    km.trunc() as u64
}

pub(crate) fn boundary_distance_km(
    point: Coordinate,
    polygon: &Polygon<f64>,
) -> Result<f64, GeometryError> {
    let query: Point<f64> = point.into();
    let nearest = nearest_on_ring(query, polygon)?;
    let km = Geodesic.distance(nearest, query) / METERS_PER_KM;

    debug!(
        "Nearest boundary point to {} is {} at {:.3} km",
        point,
        Coordinate::from(nearest),
        km
    );

    Ok(km)
}

fn nearest_on_ring(query: Point<f64>, polygon: &Polygon<f64>) -> Result<Point<f64>, GeometryError> {
    match polygon.exterior().closest_point(&query) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => Ok(p),
        Closest::Indeterminate => Err(GeometryError::DegenerateBoundary {
            distinct: distinct_vertices(polygon),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ring::polygon_from_coords;

    fn square(min_x: f64, min_y: f64) -> Polygon<f64> {
        polygon_from_coords(&[
            Coordinate::new(min_x, min_y),
            Coordinate::new(min_x + 1.0, min_y),
            Coordinate::new(min_x + 1.0, min_y + 1.0),
            Coordinate::new(min_x, min_y + 1.0),
        ])
    }

    #[test]
    fn test_nearest_point_lies_on_edge() {
        let poly = square(0.0, 0.0);
        let nearest = nearest_boundary_point(Coordinate::new(2.0, 0.5), &poly).unwrap();
        assert!((nearest.lon - 1.0).abs() < 1e-12);
        assert!((nearest.lat - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_point_at_corner() {
        let poly = square(0.0, 0.0);
        let nearest = nearest_boundary_point(Coordinate::new(2.0, 2.0), &poly).unwrap();
        assert!((nearest.lon - 1.0).abs() < 1e-12);
        assert!((nearest.lat - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_one_degree_at_equator() {
        // 1 degree of longitude on the WGS84 equator is ~111.32 km
        let km = distance_to_boundary(Coordinate::new(2.0, 0.0), &square(0.0, -0.5)).unwrap();
        assert!((km - 111.32).abs() < 0.1, "got {km}");
    }

    #[test]
    fn test_distance_is_geodesic_not_planar() {
        // At 60.5N a degree of longitude is about half as long as at the equator
        let km = distance_to_boundary(Coordinate::new(2.0, 60.5), &square(0.0, 60.0)).unwrap();
        assert!(km > 54.0 && km < 56.0, "got {km}");
    }

    #[test]
    fn test_distance_grows_along_ray() {
        let poly = square(0.0, 0.0);
        let mut previous = 0.0;
        for x in [1.01, 1.5, 2.0, 3.0, 5.0, 10.0] {
            let km = distance_to_boundary(Coordinate::new(x, 0.5), &poly).unwrap();
            assert!(km >= 0.0);
            assert!(km > previous, "distance at x={x} ({km}) not above {previous}");
            previous = km;
        }
    }

    #[test]
    fn test_point_on_ring_has_zero_distance() {
        let km = distance_to_boundary(Coordinate::new(1.0, 0.5), &square(0.0, 0.0)).unwrap();
        assert!(km.abs() < 1e-9);
    }

    #[test]
    fn test_truncate_km() {
        assert_eq!(truncate_km(13.98), 13);
        assert_eq!(truncate_km(13.0), 13);
        assert_eq!(truncate_km(0.4), 0);
        assert_eq!(truncate_km(-0.0), 0);
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        let line = polygon_from_coords(&[Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]);
        assert!(matches!(
            distance_to_boundary(Coordinate::new(3.0, 3.0), &line),
            Err(GeometryError::DegenerateBoundary { distinct: 2 })
        ));
    }
}
