use std::fs::File;
use std::io::Write;
use std::path::Path;

use gi_core::{DEFAULT_ALIGNMENT, Image, ImageView};
use image::{DynamicImage, ImageFormat};
use log::debug;

use crate::raw::{PnmFormat, RawImage, decode_with_alignment};
use crate::{Error, IoError};

/// Writes `img` as a binary PGM (`P5`, maxval 255) to `path`.
pub fn write_pgm(img: &ImageView<'_, u8>, path: &Path) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| IoError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "write_pgm {}x{} -> {}",
        img.width(),
        img.height(),
        path.display()
    );
    write_pgm_to(img, file)?;
    Ok(())
}

/// Writes the PGM header followed by `height` rows of `width` bytes.
/// Row padding is never emitted.
pub fn write_pgm_to<W: Write>(img: &ImageView<'_, u8>, mut out: W) -> Result<(), IoError> {
    write!(out, "P5\n{} {}\n255\n", img.width(), img.height())
        .map_err(|source| IoError::HeaderFailed { source })?;

    for y in 0..img.height() {
        out.write_all(img.row(y))
            .map_err(|source| IoError::ShortWrite { row: y, source })?;
    }

    let last_row = img.height().saturating_sub(1);
    out.flush()
        .map_err(|source| IoError::ShortWrite {
            row: last_row,
            source,
        })
}

pub fn load_pnm(path: &Path) -> Result<Image<u8>, Error> {
    load_pnm_with_alignment(path, DEFAULT_ALIGNMENT)
}

/// Reads a PGM/PPM/PBM file and converts it to 8-bit gray with the given
/// stride alignment.
///
/// Files with a maximum value other than 255 or 65535 (e.g. 1023) are
/// rescaled to full range by the `image` decoder and accepted, whereas
/// [`decode`](crate::decode) rejects such payloads with
/// [`Error::UnsupportedFormat`].
pub fn load_pnm_with_alignment(path: &Path, alignment: usize) -> Result<Image<u8>, Error> {
    let decoded = image::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_dynamic(&decoded, alignment)
}

/// Same as [`load_pnm`] for an in-memory PNM file.
pub fn load_pnm_from_memory(bytes: &[u8]) -> Result<Image<u8>, Error> {
    let decoded =
        image::load_from_memory_with_format(bytes, ImageFormat::Pnm).map_err(Error::Decode)?;
    from_dynamic(&decoded, DEFAULT_ALIGNMENT)
}

fn from_dynamic(decoded: &DynamicImage, alignment: usize) -> Result<Image<u8>, Error> {
    match decoded {
        DynamicImage::ImageLuma8(buf) => decode_with_alignment(
            &raw_image(buf.width(), buf.height(), PnmFormat::Gray, 255, buf.as_raw()),
            alignment,
        ),
        DynamicImage::ImageRgb8(buf) => decode_with_alignment(
            &raw_image(buf.width(), buf.height(), PnmFormat::Rgb, 255, buf.as_raw()),
            alignment,
        ),
        DynamicImage::ImageLuma16(buf) => {
            let samples = to_be_bytes(buf.as_raw());
            decode_with_alignment(
                &raw_image(buf.width(), buf.height(), PnmFormat::Gray, 65535, &samples),
                alignment,
            )
        }
        DynamicImage::ImageRgb16(buf) => {
            let samples = to_be_bytes(buf.as_raw());
            decode_with_alignment(
                &raw_image(buf.width(), buf.height(), PnmFormat::Rgb, 65535, &samples),
                alignment,
            )
        }
        other => Err(Error::UnsupportedColorType(other.color())),
    }
}

fn raw_image(
    width: u32,
    height: u32,
    format: PnmFormat,
    max_value: u32,
    samples: &[u8],
) -> RawImage<'_> {
    RawImage {
        width: width as usize,
        height: height as usize,
        format,
        max_value,
        samples,
    }
}

fn to_be_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|v| v.to_be_bytes()).collect()
}
