//! Structural checks for boundary rings.

use std::collections::HashSet;

use geo::{Coord, LineString, Polygon};

use super::GeometryError;
use crate::models::Coordinate;

/// Minimum number of distinct vertices for a ring to enclose an area
pub const MIN_DISTINCT_VERTICES: usize = 3;

/// Count distinct vertices of the exterior ring (closure point not double counted)
pub fn distinct_vertices(polygon: &Polygon<f64>) -> usize {
    polygon
        .exterior()
        .coords()
        // `+ 0.0` folds -0.0 into 0.0
        .map(|c| ((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

/// Check the boundary invariants: finite vertices and at least 3 distinct ones.
pub fn validate_ring(polygon: &Polygon<f64>) -> Result<(), GeometryError> {
    if let Some(index) = polygon
        .exterior()
        .coords()
        .position(|c| !c.x.is_finite() || !c.y.is_finite())
    {
        return Err(GeometryError::NonFiniteVertex { index });
    }

    let distinct = distinct_vertices(polygon);
    if distinct < MIN_DISTINCT_VERTICES {
        return Err(GeometryError::DegenerateBoundary { distinct });
    }

    Ok(())
}

pub(crate) fn validate_point(point: Coordinate) -> Result<(), GeometryError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinitePoint(point))
    }
}

/// Build a single-ring polygon from (lon, lat) pairs.
///
/// `Polygon::new` closes an open exterior ring.
pub fn polygon_from_coords(coords: &[Coordinate]) -> Polygon<f64> {
    let ring: Vec<Coord<f64>> = coords.iter().map(|&c| c.into()).collect();
    Polygon::new(LineString::new(ring), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(points: &[(f64, f64)]) -> Vec<Coordinate> {
        points.iter().map(|&(x, y)| Coordinate::new(x, y)).collect()
    }

    #[test]
    fn test_open_ring_is_closed() {
        let poly = polygon_from_coords(&coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));
        assert_eq!(poly.exterior().0.len(), 4);
        assert_eq!(poly.exterior().0.first(), poly.exterior().0.last());
        assert!(validate_ring(&poly).is_ok());
    }

    #[test]
    fn test_closed_ring_kept_as_is() {
        let poly = polygon_from_coords(&coords(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
        ]));
        assert_eq!(poly.exterior().0.len(), 5);
        assert_eq!(distinct_vertices(&poly), 4);
    }

    #[test]
    fn test_two_distinct_vertices_rejected() {
        let poly = polygon_from_coords(&coords(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]));
        assert_eq!(
            validate_ring(&poly),
            Err(GeometryError::DegenerateBoundary { distinct: 2 })
        );
    }

    #[test]
    fn test_empty_ring_rejected() {
        let poly = polygon_from_coords(&[]);
        assert_eq!(
            validate_ring(&poly),
            Err(GeometryError::DegenerateBoundary { distinct: 0 })
        );
    }

    #[test]
    fn test_non_finite_vertex_rejected() {
        let poly = polygon_from_coords(&coords(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)]));
        assert_eq!(
            validate_ring(&poly),
            Err(GeometryError::NonFiniteVertex { index: 1 })
        );
    }
}
