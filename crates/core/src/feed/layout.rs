//! Layout/size assignment for the masonry wall.
//!
//! Sizes are synthetic: they drive the rendered aspect ratio, not the
//! source image resolution. Assignment is a function of a photo's global
//! index in the accumulated list, so it is stable across page boundaries.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::model::PhotoSize;

/// Three-way round-robin column assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    pub fn for_index(index: usize) -> Self {
        match index % 3 {
            0 => Column::Left,
            1 => Column::Center,
            _ => Column::Right,
        }
    }
}

/// Assigns a display size to the photo at a given global index.
///
/// Implementations must be pure in `index` (the same index always yields
/// the same size) and must return strictly positive dimensions, so
/// aspect-ratio layout never divides by zero.
pub trait LayoutPolicy: Send + Sync {
    fn size_for(&self, index: usize) -> PhotoSize;
}

const LEFT: PhotoSize = PhotoSize {
    width: 800,
    height: 600,
};
// Center runs taller and narrower than the flanking columns.
const CENTER: PhotoSize = PhotoSize {
    width: 400,
    height: 1000,
};
const RIGHT: PhotoSize = PhotoSize {
    width: 600,
    height: 300,
};

/// Default policy: one fixed size per column. Fully deterministic, so the
/// wall lays out identically across reloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnCycle;

impl LayoutPolicy for ColumnCycle {
    fn size_for(&self, index: usize) -> PhotoSize {
        match Column::for_index(index) {
            Column::Left => LEFT,
            Column::Center => CENTER,
            Column::Right => RIGHT,
        }
    }
}

const LEFT_SET: [PhotoSize; 2] = [
    PhotoSize {
        width: 800,
        height: 600,
    },
    PhotoSize {
        width: 800,
        height: 800,
    },
];
const CENTER_SET: [PhotoSize; 3] = [
    PhotoSize {
        width: 400,
        height: 1000,
    },
    PhotoSize {
        width: 400,
        height: 800,
    },
    PhotoSize {
        width: 600,
        height: 900,
    },
];
const RIGHT_SET: [PhotoSize; 2] = [
    PhotoSize {
        width: 600,
        height: 300,
    },
    PhotoSize {
        width: 600,
        height: 500,
    },
];

/// Randomized alternative: each photo draws from its column's candidate
/// set. The draw is keyed on `(seed, index)`, so a session's layout is
/// reproducible given its seed; a new seed reshuffles the wall.
#[derive(Debug, Clone, Copy)]
pub struct ShuffledColumns {
    seed: u64,
}

impl ShuffledColumns {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutPolicy for ShuffledColumns {
    fn size_for(&self, index: usize) -> PhotoSize {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(index as u64));
        let set: &[PhotoSize] = match Column::for_index(index) {
            Column::Left => &LEFT_SET,
            Column::Center => &CENTER_SET,
            Column::Right => &RIGHT_SET,
        };
        set[rng.gen_range(0..set.len())]
    }
}
