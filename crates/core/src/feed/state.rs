//! Pagination state machine for the photo feed.
//!
//! Split-phase: `begin_fetch` claims the in-flight slot and names the page
//! to request; `finish_fetch`/`fail_fetch` commit the outcome. All methods
//! are synchronous, so every transition is directly unit-testable.

use std::collections::HashSet;

use crate::domain::model::DisplayPhoto;

/// Per-session feed state. Created on mount, never persisted.
///
/// Invariants:
/// - `items` only grows, in append order.
/// - ids in `items` are unique (`append_unique` drops duplicates).
/// - `exhausted` never reverts to false.
/// - `next_page` advances only on a successful full page.
#[derive(Debug)]
pub struct FeedState {
    items: Vec<DisplayPhoto>,
    seen: HashSet<String>,
    next_page: u32,
    in_flight: bool,
    exhausted: bool,
    last_error: Option<String>,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            next_page: 1,
            in_flight: false,
            exhausted: false,
            last_error: None,
        }
    }

    /// Claim the in-flight slot. Returns the page to request, or `None`
    /// when a fetch is already pending or the feed is exhausted.
    pub fn begin_fetch(&mut self) -> Option<u32> {
        if self.in_flight || self.exhausted {
            return None;
        }
        self.in_flight = true;
        Some(self.next_page)
    }

    /// Commit a successful fetch. Items must already be appended; this
    /// advances pagination (full page) or marks exhaustion (short page),
    /// then releases the in-flight slot.
    pub fn finish_fetch(&mut self, short_page: bool) {
        if short_page {
            self.exhausted = true;
        } else {
            self.next_page += 1;
        }
        self.in_flight = false;
        self.last_error = None;
    }

    /// Commit a failed fetch: release the in-flight slot and record the
    /// error. Pagination stays put so the next trigger retries this page.
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.last_error = Some(message.into());
    }

    /// Append a photo unless its id was already seen. Returns whether the
    /// photo was appended.
    pub fn append_unique(&mut self, photo: DisplayPhoto) -> bool {
        if !self.seen.insert(photo.id.clone()) {
            return false;
        }
        self.items.push(photo);
        true
    }

    pub fn is_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// Record a pre-supplied first page and start pagination at page 2.
    /// Only meaningful on a fresh state.
    pub fn seed_first_page(&mut self, photos: Vec<DisplayPhoto>) {
        debug_assert!(self.items.is_empty() && !self.in_flight);
        for photo in photos {
            self.append_unique(photo);
        }
        self.next_page = 2;
    }

    pub fn items(&self) -> &[DisplayPhoto] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> DisplayPhoto {
        DisplayPhoto {
            id: id.to_string(),
            image_url: format!("https://img.test/{id}"),
            width: 800,
            height: 600,
            description: None,
            attribution: "Test".to_string(),
        }
    }

    #[test]
    fn begin_fetch_claims_single_flight() {
        let mut state = FeedState::new();
        assert_eq!(state.begin_fetch(), Some(1));
        assert!(state.in_flight());
        assert_eq!(state.begin_fetch(), None);
    }

    #[test]
    fn full_page_advances_pagination() {
        let mut state = FeedState::new();
        state.begin_fetch().unwrap();
        state.append_unique(photo("a"));
        state.finish_fetch(false);
        assert_eq!(state.next_page(), 2);
        assert!(!state.in_flight());
        assert!(!state.exhausted());
    }

    #[test]
    fn short_page_is_terminal() {
        let mut state = FeedState::new();
        state.begin_fetch().unwrap();
        state.finish_fetch(true);
        assert!(state.exhausted());
        assert_eq!(state.next_page(), 1);
        assert_eq!(state.begin_fetch(), None);
        assert!(!state.in_flight());
    }

    #[test]
    fn failure_keeps_page_for_retry() {
        let mut state = FeedState::new();
        state.begin_fetch().unwrap();
        state.finish_fetch(false);
        assert_eq!(state.begin_fetch(), Some(2));
        state.fail_fetch("boom");
        assert!(!state.in_flight());
        assert!(!state.exhausted());
        assert_eq!(state.last_error(), Some("boom"));
        // The retry asks for the same page.
        assert_eq!(state.begin_fetch(), Some(2));
    }

    #[test]
    fn success_clears_previous_error() {
        let mut state = FeedState::new();
        state.begin_fetch().unwrap();
        state.fail_fetch("boom");
        state.begin_fetch().unwrap();
        state.finish_fetch(false);
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let mut state = FeedState::new();
        assert!(state.append_unique(photo("a")));
        assert!(!state.append_unique(photo("a")));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn seeding_starts_at_page_two() {
        let mut state = FeedState::new();
        state.seed_first_page(vec![photo("a"), photo("b")]);
        assert_eq!(state.len(), 2);
        assert_eq!(state.next_page(), 2);
        assert_eq!(state.begin_fetch(), Some(2));
    }
}
