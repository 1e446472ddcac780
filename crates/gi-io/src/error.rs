use std::path::PathBuf;

use thiserror::Error;

use crate::raw::PnmFormat;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported {format:?} samples with max value {max_value}")]
    UnsupportedFormat { format: PnmFormat, max_value: u32 },
    #[error("unsupported color type {0:?}")]
    UnsupportedColorType(image::ColorType),
    #[error("sample buffer too short: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to decode PNM data: {0}")]
    Decode(#[source] image::ImageError),
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Image(#[from] gi_core::Error),
}

/// Failures of the PGM writer.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("could not open {path} for writing: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write PGM header: {source}")]
    HeaderFailed {
        #[source]
        source: std::io::Error,
    },
    #[error("short write on row {row}: {source}")]
    ShortWrite {
        row: usize,
        #[source]
        source: std::io::Error,
    },
}
