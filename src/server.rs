//! Native entry point: serves the trunk build output so the page can be
//! previewed or deployed without a separate web server.

use axum::Router;
use std::{net::SocketAddr, path::PathBuf};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT").as_deref(), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("DIST_DIR").as_deref())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        Self { port, dist_dir }
    }

    fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

fn parse_u16_with_bounds(value: Option<&str>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Static files from the bundle; unknown paths get `index.html`.
pub fn router(config: &HostConfig) -> Router {
    let static_service =
        ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_path()));

    Router::new().fallback_service(static_service)
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    if !config.index_path().is_file() {
        warn!(
            dist_dir = %config.dist_dir.display(),
            "no index.html found; run `trunk build --release` first"
        );
    }

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(
        dist_dir = %config.dist_dir.display(),
        "serving portfolio on http://127.0.0.1:{}",
        config.port
    );
    axum::serve(listener, router(&config)).await?;
    Ok(())
}
