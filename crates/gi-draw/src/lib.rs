//! Overlay rasterization onto 8-bit images.
//!
//! All primitives clip to the image bounds; nothing here allocates.
//!
//! - [`draw_disk`] / [`draw_annulus`]: filled circle and ring by squared
//!   distance from integer pixel coordinates.
//! - [`draw_line`]: half-pixel sampled line with an optional wide stroke.
//! - [`fill_line_max`]: anti-aliased thick segment shaded from a
//!   [`DistanceLut`], composited with `max`.
//! - [`darken`]: halves the background before overlays are drawn.

mod line;
mod lut;
mod shapes;

pub use line::{draw_line, fill_line_max};
pub use lut::DistanceLut;
pub use shapes::{darken, draw_annulus, draw_disk};
