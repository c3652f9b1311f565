//! Yandex Geocoder HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use super::{AddressResolver, GeocodeError, ResolveFuture};
use crate::config::GeocoderConfig;
use crate::models::Coordinate;

const USER_AGENT: &str = "ringroad/0.1 (address distance service)";
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Resolves addresses through the Yandex Geocoder JSON API
pub struct YandexGeocoder {
    client: Client,
    base_url: Url,
    api_key: String,
    max_attempts: u32,
}

#[derive(Debug, Deserialize)]
struct YandexResponse {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember", default)]
    members: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: GeoObject,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(rename = "Point")]
    point: GeoObjectPoint,
}

#[derive(Debug, Deserialize)]
struct GeoObjectPoint {
    /// "lon lat"
    pos: String,
}

impl YandexGeocoder {
    pub fn new(config: &GeocoderConfig, api_key: impl Into<String>) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: api_key.into(),
            max_attempts: config.max_attempts.max(1),
        })
    }

    fn request_url(&self, address: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("geocode", address)
            .append_pair("format", "json");
        url
    }

    /// Resolve an address, retrying transport failures and 5xx responses
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let url = self.request_url(address);
        let mut attempts = 0;

        loop {
            attempts += 1;

            match self.fetch(&url).await {
                Ok(body) => {
                    let coord = parse_response(&body, address)?;
                    debug!("Geocoded '{}' to {}", address, coord);
                    return Ok(coord);
                }
                Err(e) if attempts < self.max_attempts && is_transient(&e) => {
                    warn!(
                        "Geocoder request failed (attempt {}/{}): {}",
                        attempts, self.max_attempts, e
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    // The request URL carries the API key; strip it from transport errors
    // before they reach any log line.
    async fn fetch(&self, url: &Url) -> Result<String, GeocodeError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status { status });
        }

        Ok(response.text().await.map_err(reqwest::Error::without_url)?)
    }
}

impl AddressResolver for YandexGeocoder {
    fn resolve(&self, address: String) -> ResolveFuture<'_> {
        Box::pin(async move { self.geocode(&address).await })
    }
}

fn is_transient(err: &GeocodeError) -> bool {
    match err {
        GeocodeError::Request(_) => true,
        GeocodeError::Status { status } => status.is_server_error(),
        _ => false,
    }
}

/// Extract the first result's position from a geocoder response body
fn parse_response(body: &str, address: &str) -> Result<Coordinate, GeocodeError> {
    let data: YandexResponse = serde_json::from_str(body)?;

    let member = data
        .response
        .collection
        .members
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound {
            address: address.to_string(),
        })?;

    let pos = member.geo_object.point.pos;
    Coordinate::parse_pos(&pos).ok_or(GeocodeError::InvalidPosition { pos })
}
