//! Ringroad - distance from an address to the Moscow Ring Road
//!
//! This library provides the geometry engine, the boundary store, the
//! geocoder client and the HTTP API used by the `server` binary.

pub mod api;
pub mod boundary;
pub mod config;
pub mod geocoder;
pub mod geometry;
pub mod models;

pub use boundary::Boundary;
pub use geometry::{evaluate, GeometryError};
pub use models::{Coordinate, Evaluation};
