use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("invalid stride")]
    InvalidStride,
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("out of memory allocating {elements} elements")]
    OutOfMemory { elements: usize },
    #[error("invalid geometry: {0}")]
    InvalidGeometry(&'static str),
    #[error("unsupported decimation factor {0}")]
    InvalidFactor(f32),
}
