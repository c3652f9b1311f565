//! Geographic coordinate value type.

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// Geographic point in degrees, longitude first (x = lon, y = lat)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Both components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Parse a `"lon lat"` pair as returned by the Yandex geocoder
    pub fn parse_pos(pos: &str) -> Option<Self> {
        let mut parts = pos.split_whitespace();
        let lon = parts.next()?.parse().ok()?;
        let lat = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        let coord = Self::new(lon, lat);
        coord.is_finite().then_some(coord)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(c: Coordinate) -> Self {
        Coord { x: c.lon, y: c.lat }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.lon, c.lat)
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(c: Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(p: Point<f64>) -> Self {
        Self::new(p.x(), p.y())
    }
}
