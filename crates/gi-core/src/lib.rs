//! Foundational buffer types for 8-bit grayscale preprocessing.
//!
//! ## Images and Stride
//! [`Image`] owns a row-major buffer whose `stride` (in elements) may exceed
//! `width`. Default allocations align the stride to [`DEFAULT_ALIGNMENT`] so
//! rows start on cache-line friendly offsets. Padding is zero-initialized and
//! never read by the processing crates.
//!
//! [`ImageView`] borrows a strided buffer, which lets callers hand in padded
//! foreign memory (including `f32` images) without copying.
//!
//! ## Allocation Failures
//! Every constructor returns `Result`; zero dimensions, bad strides and
//! allocator refusals are reported as [`Error`] values, never as a
//! half-initialized image.

mod error;
mod geom;
mod image;
mod sample;

pub use error::Error;
pub use geom::{Point2f, Vec2f};
pub use image::{DEFAULT_ALIGNMENT, Image, ImageView};
pub use sample::sample_floor;
