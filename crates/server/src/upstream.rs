//! Client for the upstream stock-photo API. The upstream list endpoint
//! returns a bare JSON array of photo records; this client normalizes
//! transport and status failures into one error enum for the route.

use std::time::Duration;

use mosaic_core::domain::model::RawPhoto;
use thiserror::Error;
use tracing::{debug, warn};

/// Upstream requests are bounded so a stalled upstream cannot hold the
/// proxy's response open indefinitely.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Page size served to the gallery; every page shorter than this reads as
/// end-of-feed on the client.
pub const PER_PAGE: u32 = 8;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(String),
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl UpstreamClient {
    pub fn new(base_url: String, access_key: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key,
        })
    }

    pub async fn list_photos(&self, page: u32) -> Result<Vec<RawPhoto>, UpstreamError> {
        let url = format!("{}/photos", self.base_url);
        debug!(page, "upstream photo list request");

        let resp = self
            .client
            .get(&url)
            .query(&[("page", page.to_string()), ("per_page", PER_PAGE.to_string())])
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(page, status = status.as_u16(), "upstream photo list failed");
            return Err(UpstreamError::Status(status.as_u16()));
        }

        resp.json::<Vec<RawPhoto>>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
