use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use super::Answer;
use crate::geocoder::GeocodeError;
use crate::geometry::GeometryError;

/// Request failures; the display text is the `answer` sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Address is missing in the request")]
    MissingAddress,

    #[error("Unable to fetch geolocation data from Yandex API")]
    Geocode(#[source] GeocodeError),

    #[error("Boundary configuration error")]
    Geometry(#[from] GeometryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingAddress => StatusCode::BAD_REQUEST,
            ApiError::Geocode(_) | ApiError::Geometry(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MissingAddress => warn!("Rejected request without address"),
            ApiError::Geocode(e) => warn!("Geocoding failed: {}", e),
            ApiError::Geometry(e) => error!("Boundary evaluation failed: {}", e),
        }

        let body = Answer {
            answer: self.to_string(),
            distance: None,
        };
        (self.status(), Json(body)).into_response()
    }
}
