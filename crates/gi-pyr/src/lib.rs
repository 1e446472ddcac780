//! Downsampling of 8-bit grayscale images.
//!
//! Supported factors:
//! - `1.5`: each 3x3 block becomes a 2x2 block weighted towards its corners.
//! - `2`, `3`, `4`: box means through a [`BoxKernels`] backend.
//! - any other integer up to [`MAX_FACTOR`]: exact block means.
//!
//! Drop-odd policy: incomplete blocks on the right and bottom edge are
//! ignored, so the output is `floor(w / f) x floor(h / f)` (`floor(w / 3) * 2`
//! for 1.5).
//!
//! Factor 3 averages only 8 of the 9 samples of each block, leaving out the
//! bottom-right one, so the mean is a shift instead of a division.
//!
//! Backends:
//! - [`ScalarKernels`]: exact integer sums.
//! - [`LaneKernels`]: 16-lane halving-add trees, never above the scalar
//!   result and at most [`max_rounding_gap`] below it (1 for factors 2 and
//!   3, 2 for factor 4); exact on uniform blocks. Default when the `lanes` feature is
//!   enabled.

mod decimate;
mod kernels;
mod lanes;

pub use decimate::{Backend, DecimateConfig, DecimateFactor, Decimator, MAX_FACTOR, decimate};
pub use kernels::{BoxKernels, ScalarKernels, max_rounding_gap};
pub use lanes::LaneKernels;
