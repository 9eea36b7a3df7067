//! Viewport proximity decision, decoupled from any rendering mechanism.
//!
//! The presentation layer anchors the watcher to the pixel offset of a
//! sentinel below the last rendered photo and feeds it scroll events; the
//! watcher answers the one question the controller cares about: is the
//! sentinel within the lookahead margin?

/// A scroll event as seen by the hosting view. Pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    fn bottom_edge(&self) -> f64 {
        self.scroll_top + self.viewport_height
    }
}

/// Tracks the sentinel position and answers margin crossings.
///
/// `detach` is terminal: a detached watcher never reports a crossing, so
/// no trigger can fire after the view unmounts.
#[derive(Debug)]
pub struct SentinelWatcher {
    lookahead_px: f64,
    sentinel_top: Option<f64>,
    detached: bool,
}

impl SentinelWatcher {
    pub fn new(lookahead_px: f64) -> Self {
        Self {
            lookahead_px,
            sentinel_top: None,
            detached: false,
        }
    }

    /// Re-aim at the current last item. Called whenever the list grows so
    /// a stale anchor cannot block further triggers.
    pub fn anchor_to(&mut self, sentinel_top_px: f64) {
        if self.detached {
            return;
        }
        self.sentinel_top = Some(sentinel_top_px);
    }

    /// True when the viewport's bottom edge is within the lookahead margin
    /// of the sentinel. Always false before the first anchor and after
    /// `detach`.
    pub fn crossed(&self, metrics: &ScrollMetrics) -> bool {
        if self.detached {
            return false;
        }
        match self.sentinel_top {
            Some(top) => metrics.bottom_edge() + self.lookahead_px >= top,
            None => false,
        }
    }

    pub fn detach(&mut self) {
        self.detached = true;
        self.sentinel_top = None;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}
