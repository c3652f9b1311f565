//! Service configuration, read from an optional TOML file.
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:5000"
//!
//! [geocoder]
//! api_key = "..."
//! timeout_secs = 10
//! max_attempts = 2
//!
//! [boundary]
//! path = "data/mkad.json"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:5000";
pub const YANDEX_GEOCODER_URL: &str = "https://geocode-maps.yandex.ru/1.x/";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub geocoder: GeocoderConfig,
    pub boundary: BoundaryConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocoderConfig {
    pub base_url: Url,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    /// Total tries per address, first attempt included
    pub max_attempts: u32,
}

impl GeocoderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            // constant URL, always parses
            base_url: Url::parse(YANDEX_GEOCODER_URL).expect("valid geocoder URL"),
            api_key: None,
            timeout_secs: 10,
            max_attempts: 2,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BoundaryConfig {
    /// JSON boundary file; the bundled MKAD ring when absent
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        if config.geocoder.max_attempts == 0 {
            anyhow::bail!("geocoder.max_attempts must be at least 1");
        }
        if config.geocoder.timeout_secs == 0 {
            anyhow::bail!("geocoder.timeout_secs must be at least 1");
        }
        Ok(config)
    }
}
