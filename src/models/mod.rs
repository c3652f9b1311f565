//! Core value types shared by the geometry engine and the HTTP layer.

pub mod coordinate;
pub mod evaluation;

pub use coordinate::Coordinate;
pub use evaluation::Evaluation;
