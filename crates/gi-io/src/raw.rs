use gi_core::{DEFAULT_ALIGNMENT, Image};
use log::debug;

use crate::Error;

/// Sample layout reported by the PNM decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PnmFormat {
    /// One sample per pixel (PGM).
    Gray,
    /// Three interleaved samples per pixel (PPM).
    Rgb,
    /// One bit per pixel, MSB first, rows padded to whole bytes (PBM).
    Bilevel,
}

/// Decoded but unconverted PNM payload.
///
/// `samples` is tightly packed. 16-bit samples (`max_value == 65535`) are
/// big-endian.
#[derive(Debug, Clone, Copy)]
pub struct RawImage<'a> {
    pub width: usize,
    pub height: usize,
    pub format: PnmFormat,
    pub max_value: u32,
    pub samples: &'a [u8],
}

impl RawImage<'_> {
    fn bytes_per_sample(&self) -> Result<usize, Error> {
        match (self.format, self.max_value) {
            (PnmFormat::Bilevel, _) => Ok(1),
            (_, 255) => Ok(1),
            (_, 65535) => Ok(2),
            (format, max_value) => Err(Error::UnsupportedFormat { format, max_value }),
        }
    }

    fn row_bytes(&self, bytes_per_sample: usize) -> usize {
        match self.format {
            PnmFormat::Gray => self.width * bytes_per_sample,
            PnmFormat::Rgb => self.width * 3 * bytes_per_sample,
            PnmFormat::Bilevel => self.width.div_ceil(8),
        }
    }
}

pub fn decode(raw: &RawImage<'_>) -> Result<Image<u8>, Error> {
    decode_with_alignment(raw, DEFAULT_ALIGNMENT)
}

/// Converts a raw PNM payload to 8-bit gray.
///
/// - Gray: copied; 16-bit keeps the high byte.
/// - RGB: `(r + 2g + b) / 4`; 16-bit keeps the high byte of each channel first.
/// - Bilevel: a set bit is black (0), a clear bit white (255).
pub fn decode_with_alignment(raw: &RawImage<'_>, alignment: usize) -> Result<Image<u8>, Error> {
    let bps = raw.bytes_per_sample()?;
    let row_bytes = raw.row_bytes(bps);
    let expected = row_bytes.checked_mul(raw.height).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual: raw.samples.len(),
    })?;
    if raw.samples.len() < expected {
        return Err(Error::SizeMismatch {
            expected,
            actual: raw.samples.len(),
        });
    }

    debug!(
        "decode {}x{} {:?} max={} alignment={}",
        raw.width, raw.height, raw.format, raw.max_value, alignment
    );

    let mut img = Image::with_alignment(raw.width, raw.height, alignment)?;
    for y in 0..raw.height {
        let src = &raw.samples[y * row_bytes..(y + 1) * row_bytes];
        let dst = img.row_mut(y);
        match (raw.format, bps) {
            (PnmFormat::Gray, 1) => dst.copy_from_slice(src),
            (PnmFormat::Gray, _) => {
                for (out, s) in dst.iter_mut().zip(src.chunks_exact(2)) {
                    *out = s[0];
                }
            }
            (PnmFormat::Rgb, 1) => {
                for (out, s) in dst.iter_mut().zip(src.chunks_exact(3)) {
                    *out = gray_from_rgb(s[0], s[1], s[2]);
                }
            }
            (PnmFormat::Rgb, _) => {
                for (out, s) in dst.iter_mut().zip(src.chunks_exact(6)) {
                    *out = gray_from_rgb(s[0], s[2], s[4]);
                }
            }
            (PnmFormat::Bilevel, _) => {
                for (x, out) in dst.iter_mut().enumerate() {
                    let bit = (src[x / 8] >> (7 - (x & 7))) & 1;
                    *out = if bit == 1 { 0 } else { 255 };
                }
            }
        }
    }

    Ok(img)
}

#[inline]
fn gray_from_rgb(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 + 2 * g as u32 + b as u32) / 4) as u8
}
