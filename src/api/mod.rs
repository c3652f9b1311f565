//! HTTP API.
//!
//! `POST /distance/calculate` takes `{"address": "..."}` and answers whether
//! the address lies within the ring road, with the distance in whole
//! kilometers when it does not.

mod error;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::boundary::Boundary;
use crate::geocoder::{AddressResolver, GeocodeError};
use crate::models::Evaluation;

pub const ANSWER_INSIDE: &str = "Address within Moscow Ring Road";
pub const ANSWER_OUTSIDE: &str = "Address not within Moscow Ring Road";

/// Application state shared across handlers
pub struct AppState {
    pub boundary: Boundary,
    pub resolver: Arc<dyn AddressResolver>,
}

impl AppState {
    pub fn new(boundary: Boundary, resolver: Arc<dyn AddressResolver>) -> Self {
        Self { boundary, resolver }
    }
}

#[derive(Debug, Deserialize)]
struct CalculateRequest {
    address: Option<String>,
}

/// Response body for every `/distance/calculate` outcome, errors included
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
}

impl From<Evaluation> for Answer {
    fn from(evaluation: Evaluation) -> Self {
        match evaluation {
            Evaluation::Inside => Self {
                answer: ANSWER_INSIDE.to_string(),
                distance: None,
            },
            Evaluation::Outside { distance_km } => Self {
                answer: ANSWER_OUTSIDE.to_string(),
                distance: Some(distance_km),
            },
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    boundary: String,
    vertices: usize,
}

/// Build the router with tracing and permissive CORS
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/distance/calculate", post(calculate_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        boundary: state.boundary.name().to_string(),
        vertices: state.boundary.vertex_count(),
    })
}

/// Resolve the address and evaluate it against the boundary
async fn calculate_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<Answer>, ApiError> {
    // An unreadable body is treated like one without an address
    let address = payload
        .ok()
        .and_then(|Json(request)| request.address)
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .ok_or(ApiError::MissingAddress)?;

    let point = state
        .resolver
        .resolve(address.clone())
        .await
        .map_err(ApiError::Geocode)?;

    // A resolver handing back NaN or infinity failed to geocode
    if !point.is_finite() {
        return Err(ApiError::Geocode(GeocodeError::InvalidPosition {
            pos: point.to_string(),
        }));
    }

    let evaluation = state.boundary.evaluate(point)?;

    info!("Address '{}' at {} is {}", address, point, evaluation);

    Ok(Json(Answer::from(evaluation)))
}
