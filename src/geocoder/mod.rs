//! Address resolution: free-text address to coordinates.

mod yandex;

pub use yandex::YandexGeocoder;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::models::Coordinate;

pub type ResolveFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Coordinate, GeocodeError>> + Send + 'a>>;

/// A geocoding provider that resolves an address to a single coordinate.
pub trait AddressResolver: Send + Sync + 'static {
    fn resolve(&self, address: String) -> ResolveFuture<'_>;
}

/// Why an address could not be resolved
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoder request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("geocoder returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("malformed geocoder response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no geocoding result for '{address}'")]
    NotFound { address: String },

    #[error("malformed position '{pos}' in geocoder response")]
    InvalidPosition { pos: String },
}
