//! Domain models: photo wire shapes, display-ready photos, and the
//! source error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One photo record as the feed source returns it. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPhoto {
    pub id: String,
    pub urls: PhotoUrls,
    #[serde(default)]
    pub description: Option<String>,
    pub user: Attribution,
}

/// Named image-URL variants. Any subset may be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
}

impl PhotoUrls {
    /// The variant the grid renders: `regular` when available, then
    /// progressively less suitable fallbacks.
    pub fn best(&self) -> Option<&str> {
        self.regular
            .as_deref()
            .or(self.small.as_deref())
            .or(self.full.as_deref())
            .or(self.raw.as_deref())
            .or(self.thumb.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribution {
    pub name: String,
}

/// A photo mapped for display: one selected image URL plus a synthetic
/// layout size. `width` and `height` are always strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPhoto {
    pub id: String,
    pub image_url: String,
    pub width: u32,
    pub height: u32,
    pub description: Option<String>,
    pub attribution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoSize {
    pub width: u32,
    pub height: u32,
}

/// Coarse classification of feed-source failures. Everything here is
/// recoverable: pagination stays put and the next trigger retries.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("{0}")]
    Other(String),
}
