//! The feed controller: drives the pagination state machine against a
//! `PhotoSource`, mapping raw records into display photos as they arrive.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::model::{DisplayPhoto, RawPhoto};
use crate::feed::layout::LayoutPolicy;
use crate::feed::state::FeedState;
use crate::ports::source::PhotoSource;

/// Every observed upstream variant serves 8 records per page.
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// What a `request_next_page` call did. Failures are reported here and in
/// `last_error`, never as a propagated fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// No request was issued: a fetch was pending or the feed is done.
    Skipped,
    /// A full page was appended; pagination advanced.
    Appended { count: usize },
    /// A short or empty page ended the feed. `appended` may be zero.
    Exhausted { appended: usize },
    /// The fetch failed; the same page will be retried on the next trigger.
    Failed,
}

pub struct FeedController<S> {
    source: Arc<S>,
    layout: Box<dyn LayoutPolicy>,
    state: FeedState,
    per_page: u32,
}

impl<S: PhotoSource> FeedController<S> {
    pub fn new(source: Arc<S>, layout: Box<dyn LayoutPolicy>) -> Self {
        Self {
            source,
            layout,
            state: FeedState::new(),
            per_page: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Record a first page supplied by the hosting view, skipping the
    /// initial network fetch. The next request asks for page 2.
    pub fn seed_first_page(&mut self, photos: Vec<RawPhoto>) {
        let mapped = self.map_page(photos);
        self.state.seed_first_page(mapped);
    }

    /// Fetch and append the next page. No-op while a fetch is pending or
    /// after exhaustion; on failure the pagination position is unchanged
    /// so the next trigger retries the same page.
    pub async fn request_next_page(&mut self) -> FetchOutcome {
        let Some(page) = self.state.begin_fetch() else {
            debug!("fetch skipped: request pending or feed exhausted");
            return FetchOutcome::Skipped;
        };

        match self.source.list_page(page).await {
            Ok(results) => {
                // End-of-feed is judged on the raw page length, before
                // dedup or unusable records shrink it.
                let short_page = (results.len() as u32) < self.per_page;
                let appended = self.append_page(results);
                self.state.finish_fetch(short_page);
                if short_page {
                    info!(page, appended, "feed exhausted");
                    FetchOutcome::Exhausted { appended }
                } else {
                    debug!(page, appended, "page appended");
                    FetchOutcome::Appended { count: appended }
                }
            }
            Err(e) => {
                warn!(page, error = %e, "photo page fetch failed");
                self.state.fail_fetch(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    fn append_page(&mut self, results: Vec<RawPhoto>) -> usize {
        let before = self.state.len();
        for photo in self.map_page(results) {
            self.state.append_unique(photo);
        }
        self.state.len() - before
    }

    /// Map raw records in source order. The layout size is assigned from
    /// each photo's would-be global index, so a dropped record hands its
    /// slot to the next one.
    fn map_page(&self, results: Vec<RawPhoto>) -> Vec<DisplayPhoto> {
        let mut page_ids = std::collections::HashSet::new();
        let mut mapped = Vec::with_capacity(results.len());
        let mut index = self.state.len();
        for raw in results {
            if self.state.is_seen(&raw.id) || !page_ids.insert(raw.id.clone()) {
                debug!(id = %raw.id, "duplicate photo id dropped");
                continue;
            }
            let image_url = match raw.urls.best() {
                Some(url) => url.to_string(),
                None => {
                    warn!(id = %raw.id, "photo has no usable image variant, skipping");
                    continue;
                }
            };
            let size = self.layout.size_for(index);
            mapped.push(DisplayPhoto {
                id: raw.id,
                image_url,
                width: size.width,
                height: size.height,
                description: raw.description,
                attribution: raw.user.name,
            });
            index += 1;
        }
        mapped
    }

    pub fn photos(&self) -> &[DisplayPhoto] {
        self.state.items()
    }

    pub fn is_loading(&self) -> bool {
        self.state.in_flight()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.exhausted()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error()
    }

    pub fn next_page(&self) -> u32 {
        self.state.next_page()
    }
}
