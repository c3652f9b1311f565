//! Boundary-inclusive point-in-polygon test.

use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Coord, Polygon};

use super::ring::{validate_point, validate_ring};
use super::GeometryError;
use crate::models::Coordinate;

/// Whether `point` lies inside the polygon or exactly on its ring.
///
/// Points on an edge or on a vertex count as inside. Fails only when the
/// polygon (or the point) violates the engine preconditions.
pub fn is_inside(point: Coordinate, polygon: &Polygon<f64>) -> Result<bool, GeometryError> {
    validate_ring(polygon)?;
    validate_point(point)?;
    Ok(contains_inclusive(point, polygon))
}

/// Containment without precondition checks, for already validated rings.
pub(crate) fn contains_inclusive(point: Coordinate, polygon: &Polygon<f64>) -> bool {
    let coord: Coord<f64> = point.into();
    match polygon.coordinate_position(&coord) {
        CoordPos::Inside | CoordPos::OnBoundary => true,
        CoordPos::Outside => false,
    }
}
