//! Geometric resampling of strided images.
//!
//! Coordinates: the source is rotated about `(width / 2, height / 2)` and
//! destination pixels are sampled at their centers, `(x + 0.5, y + 0.5)`.

mod rotate;

pub use rotate::{rotate, rotated_extent};
