use mosaic_core::domain::model::RawPhoto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PhotoListQuery {
    /// Kept as a raw string so an unparseable value falls back to page 1
    /// instead of rejecting the request.
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PhotoListResponse {
    pub results: Vec<RawPhoto>,
}
