//! Format bridge between PNM payloads, float images and 8-bit gray images.
//!
//! PNM parsing is delegated to the `image` crate. This crate only owns the
//! sample conversion rules (see [`decode`]) and the binary PGM writer.

mod error;
mod float;
mod pnm;
mod raw;

pub use error::{Error, IoError};
pub use float::from_f32;
pub use pnm::{load_pnm, load_pnm_from_memory, load_pnm_with_alignment, write_pgm, write_pgm_to};
pub use raw::{PnmFormat, RawImage, decode, decode_with_alignment};
