use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config invalid: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub http: HttpConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

/// The upstream photo API is injected here rather than living in a
/// module-level singleton: base URL and credential are plain config,
/// scoped to this process.
#[derive(Debug, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub access_key: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl ServerConfig {
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: ServerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "upstream.base_url cannot be empty".into(),
            ));
        }
        if self.upstream.access_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "upstream.access_key cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
