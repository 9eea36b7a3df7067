mod app_state;
mod config;
mod errors;
mod handlers;
mod logging;
mod models;
mod upstream;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use config::{ConfigError, ServerConfig};
use upstream::UpstreamClient;

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MOSAIC_CONFIG_PATH").ok())
        .unwrap_or_else(|| "crates/server/res/config.toml".to_string());

    let config = ServerConfig::load(Path::new(&config_path)).await?;
    logging::init_tracing(&config)?;

    tracing::info!(host = %config.http.host, port = config.http.port, "server http bind");
    tracing::info!(upstream = %config.upstream.base_url, "upstream photo api configured");

    let upstream = UpstreamClient::new(
        config.upstream.base_url.clone(),
        config.upstream.access_key.clone(),
    )
    .map_err(|e| ConfigError::Invalid(format!("upstream client: {e}")))?;

    let state = app_state::AppState {
        upstream: Arc::new(upstream),
    };

    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| ConfigError::Invalid(format!("invalid http bind: {e}")))?;

    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| ConfigError::Invalid(format!("http server error: {e}")))?;

    Ok(())
}
