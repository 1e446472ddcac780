//! Fixed-point filtering for 8-bit images.
//!
//! Kernels use 256 as unit gain and accumulate in `u32`. Filters are
//! correlations (taps are not flipped), applied separably: rows first, then
//! columns. The outer `size / 2` samples of every line pass through untouched.

pub mod conv1d;
pub mod conv2d;
pub mod gaussian;
pub mod kernels1d;

pub use conv1d::convolve_u8;
pub use conv2d::convolve_2d;
pub use gaussian::{BlurParams, gaussian_blur};
pub use kernels1d::GaussianKernel;
