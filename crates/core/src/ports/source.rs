//! Feed-source abstraction: one ordered page of raw photos per call.
use crate::domain::model::{RawPhoto, SourceError};

#[async_trait::async_trait]
pub trait PhotoSource: Send + Sync {
    /// Fetch one page of photos. `page` is 1-based. A result shorter than
    /// the requested page size signals end-of-feed to the caller.
    async fn list_page(&self, page: u32) -> Result<Vec<RawPhoto>, SourceError>;
}
