//! Geometry engine: containment and distance to the reference ring.
//!
//! Every operation is a pure function of a query point and a borrowed,
//! immutable polygon. Nothing here blocks, allocates shared state, or does
//! I/O, so calls are safe from any number of tasks at once.

mod containment;
mod distance;
mod error;
mod ring;

pub use containment::is_inside;
pub use distance::{distance_to_boundary, nearest_boundary_point, truncate_km};
pub use error::GeometryError;
pub use ring::{distinct_vertices, polygon_from_coords, validate_ring, MIN_DISTINCT_VERTICES};

use geo::Polygon;
use tracing::debug;

use crate::models::{Coordinate, Evaluation};

/// Evaluate a point against the boundary.
///
/// Containment is checked first; the distance search only runs for points
/// outside the ring.
pub fn evaluate(point: Coordinate, polygon: &Polygon<f64>) -> Result<Evaluation, GeometryError> {
    validate_ring(polygon)?;
    evaluate_validated(point, polygon)
}

/// Same as [`evaluate`] for a ring whose invariants were checked at load time.
pub(crate) fn evaluate_validated(
    point: Coordinate,
    polygon: &Polygon<f64>,
) -> Result<Evaluation, GeometryError> {
    ring::validate_point(point)?;

    let evaluation = if containment::contains_inclusive(point, polygon) {
        Evaluation::Inside
    } else {
        let km = distance::boundary_distance_km(point, polygon)?;
        Evaluation::Outside {
            distance_km: truncate_km(km),
        }
    };

    debug!("Evaluated {}: {}", point, evaluation);
    Ok(evaluation)
}
