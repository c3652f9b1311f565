use thiserror::Error;

use crate::models::Coordinate;

/// Precondition violations of the geometry engine.
///
/// These signal a broken boundary configuration (or a corrupt query point),
/// never an ordinary "address outside" outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("boundary ring needs at least 3 distinct vertices, found {distinct}")]
    DegenerateBoundary { distinct: usize },

    #[error("boundary ring has a non-finite coordinate at index {index}")]
    NonFiniteVertex { index: usize },

    #[error("query point {0} is not a finite coordinate")]
    NonFinitePoint(Coordinate),
}
