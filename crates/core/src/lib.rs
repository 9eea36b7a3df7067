//! Incremental photo-feed controller for an infinite-scrolling masonry
//! gallery: pagination state machine, layout/size assignment, and
//! viewport-triggered fetching, with a REST adapter for the photo source.

pub mod domain;
pub mod feed;
pub mod infra;
pub mod ports;
