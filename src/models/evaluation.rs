//! Result of evaluating a point against the reference boundary.

use serde::Serialize;

/// Containment verdict, with the distance to the ring when outside.
///
/// `distance_km` is the integer part of the geodesic distance in
/// kilometers; it only exists for points outside the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "position", rename_all = "lowercase")]
pub enum Evaluation {
    Inside,
    Outside { distance_km: u64 },
}

impl Evaluation {
    pub fn is_inside(&self) -> bool {
        matches!(self, Evaluation::Inside)
    }

    pub fn distance_km(&self) -> Option<u64> {
        match self {
            Evaluation::Inside => None,
            Evaluation::Outside { distance_km } => Some(*distance_km),
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluation::Inside => write!(f, "inside"),
            Evaluation::Outside { distance_km } => write!(f, "outside ({} km)", distance_km),
        }
    }
}
