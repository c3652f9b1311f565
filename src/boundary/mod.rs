//! Reference boundary store.
//!
//! Holds the single ring the service evaluates against. The ring is loaded
//! and validated once at startup, then shared read-only.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geo::{BoundingRect, Polygon};
use serde::Deserialize;
use tracing::info;

use crate::config::BoundaryConfig;
use crate::geometry::{self, GeometryError};
use crate::models::{Coordinate, Evaluation};

/// Moscow Ring Road km-posts, (lon, lat)
const MKAD_JSON: &str = include_str!("../../data/mkad.json");

/// On-disk boundary document: `{"name": "...", "coordinates": [[lon, lat], ...]}`
#[derive(Debug, Deserialize)]
struct BoundaryFile {
    name: String,
    coordinates: Vec<[f64; 2]>,
}

/// A validated, immutable boundary ring
#[derive(Debug, Clone)]
pub struct Boundary {
    name: String,
    polygon: Polygon<f64>,
}

impl Boundary {
    /// Build a boundary from (lon, lat) vertices. An open ring is closed.
    pub fn new(name: impl Into<String>, coords: &[Coordinate]) -> Result<Self, GeometryError> {
        let polygon = geometry::polygon_from_coords(coords);
        geometry::validate_ring(&polygon)?;

        Ok(Self {
            name: name.into(),
            polygon,
        })
    }

    /// The bundled Moscow Ring Road ring
    pub fn mkad() -> Result<Self> {
        Self::from_json(MKAD_JSON).context("Bundled MKAD boundary is invalid")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: BoundaryFile =
            serde_json::from_str(content).context("Failed to parse boundary document")?;

        let coords: Vec<Coordinate> = file
            .coordinates
            .iter()
            .map(|[lon, lat]| Coordinate::new(*lon, *lat))
            .collect();

        let boundary = Self::new(file.name, &coords)?;
        Ok(boundary)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read boundary file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid boundary file {}", path.display()))
    }

    /// Load the configured boundary, falling back to the bundled MKAD ring
    pub fn load(config: &BoundaryConfig) -> Result<Self> {
        let boundary = match &config.path {
            Some(path) => {
                info!("Loading boundary from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::mkad()?,
        };

        info!(
            "Boundary '{}' loaded with {} vertices",
            boundary.name(),
            boundary.vertex_count()
        );
        if let Some((min_x, min_y, max_x, max_y)) = boundary.bbox() {
            info!(
                "  bbox: [{}, {}, {}, {}]",
                min_x, min_y, max_x, max_y
            );
        }

        Ok(boundary)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The boundary polygon (exterior ring only)
    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// Number of distinct vertices in the ring
    pub fn vertex_count(&self) -> usize {
        geometry::distinct_vertices(&self.polygon)
    }

    /// Get the bounding box of this boundary
    pub fn bbox(&self) -> Option<(f64, f64, f64, f64)> {
        self.polygon
            .bounding_rect()
            .map(|rect| (rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }

    /// Evaluate a query point against this boundary
    pub fn evaluate(&self, point: Coordinate) -> Result<Evaluation, GeometryError> {
        geometry::evaluate_validated(point, &self.polygon)
    }
}
