//! Umbrella crate for the `gray-imaging` workspace.
//!
//! Re-exports the image container and the processing primitives. The format
//! bridge is kept under [`io`] since it carries its own error type.

pub use gi_core::*;
pub use gi_draw::*;
pub use gi_filter::{BlurParams, GaussianKernel, convolve_2d, convolve_u8, gaussian_blur};
pub use gi_pyr::*;
pub use gi_warp::*;

pub use gi_io as io;
