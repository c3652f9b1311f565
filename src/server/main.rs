//! HTTP server answering how far an address is from the Moscow Ring Road.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ringroad::api::{self, AppState};
use ringroad::boundary::Boundary;
use ringroad::config::Config;
use ringroad::geocoder::YandexGeocoder;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Ring road distance server")]
struct Args {
    /// Listen address (overrides the config file)
    #[arg(short, long)]
    listen: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Yandex Geocoder API key
    #[arg(long, env = "YANDEX_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Boundary JSON file (defaults to the bundled MKAD ring)
    #[arg(long)]
    boundary: Option<PathBuf>,

    /// Default log level, RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("Invalid log level")?;
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Ringroad Distance Server");

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load_from_file(path)?
        }
        None => Config::default(),
    };

    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(path) = args.boundary {
        config.boundary.path = Some(path);
    }
    if args.api_key.is_some() {
        config.geocoder.api_key = args.api_key;
    }

    let boundary = Boundary::load(&config.boundary).context("Failed to load boundary")?;

    let api_key = config
        .geocoder
        .api_key
        .clone()
        .context("Yandex API key missing: pass --api-key or set YANDEX_API_KEY")?;
    let geocoder = YandexGeocoder::new(&config.geocoder, api_key)
        .context("Failed to create geocoder client")?;
    info!("Using geocoder at {}", config.geocoder.base_url);

    let state = Arc::new(AppState::new(boundary, Arc::new(geocoder)));
    let app = api::router(state);

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen))?;
    axum::serve(listener, app).await?;

    Ok(())
}
