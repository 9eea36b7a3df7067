//! Wires the sentinel watcher to the controller for one mounted view.
//!
//! The hosting view forwards scroll events here and supplies a measure
//! callback that reports the sentinel's pixel offset for the current item
//! list; everything else (single-flight, exhaustion, re-anchoring, the
//! mount guard) is handled internally.

use std::sync::Arc;

use tracing::debug;

use crate::domain::model::DisplayPhoto;
use crate::feed::controller::{FeedController, FetchOutcome};
use crate::feed::viewport::{ScrollMetrics, SentinelWatcher};
use crate::ports::source::PhotoSource;

/// Reports where (in pixels from the top of the scroll area) the sentinel
/// below the last rendered photo currently sits. `None` when nothing is
/// rendered yet.
pub type SentinelMeasure = Box<dyn Fn(&[DisplayPhoto]) -> Option<f64> + Send + Sync>;

pub struct FeedSession<S> {
    controller: FeedController<S>,
    watcher: SentinelWatcher,
    measure: SentinelMeasure,
    mounted: bool,
}

impl<S: PhotoSource> FeedSession<S> {
    pub fn new(controller: FeedController<S>, lookahead_px: f64, measure: SentinelMeasure) -> Self {
        let mut session = Self {
            controller,
            watcher: SentinelWatcher::new(lookahead_px),
            measure,
            mounted: true,
        };
        session.re_anchor();
        session
    }

    /// Handle one scroll event. Issues at most one fetch, and only when
    /// the session is mounted, the sentinel is within the lookahead
    /// margin, no fetch is pending, and the feed is not exhausted.
    pub async fn handle_scroll(&mut self, metrics: &ScrollMetrics) -> FetchOutcome {
        if !self.mounted {
            debug!("scroll event after unmount discarded");
            return FetchOutcome::Skipped;
        }
        if !self.watcher.crossed(metrics) {
            return FetchOutcome::Skipped;
        }
        if self.controller.is_loading() || self.controller.is_exhausted() {
            return FetchOutcome::Skipped;
        }

        let outcome = self.controller.request_next_page().await;
        match outcome {
            FetchOutcome::Appended { .. } | FetchOutcome::Exhausted { .. } => self.re_anchor(),
            FetchOutcome::Skipped | FetchOutcome::Failed => {}
        }
        outcome
    }

    /// Tear down: no trigger fires after this, and the watcher stays
    /// detached for the life of the session.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.watcher.detach();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn controller(&self) -> &FeedController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FeedController<S> {
        &mut self.controller
    }

    /// Re-aim the watcher at the current last item. Also exposed for the
    /// view to call after a reflow moves the sentinel without the list
    /// changing.
    pub fn re_anchor(&mut self) {
        if let Some(top) = (self.measure)(self.controller.photos()) {
            self.watcher.anchor_to(top);
        }
    }
}

// Controllers are built around an `Arc`-shared source; keep construction
// ergonomic for the common case.
pub fn session_with_defaults<S: PhotoSource>(
    source: Arc<S>,
    lookahead_px: f64,
    measure: SentinelMeasure,
) -> FeedSession<S> {
    let controller = FeedController::new(
        source,
        Box::new(crate::feed::layout::ColumnCycle),
    );
    FeedSession::new(controller, lookahead_px, measure)
}
