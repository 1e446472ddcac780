use crate::Error;

/// Default row alignment in elements: lcm of a 64-byte cache line and the
/// 24-byte stride of eight packed RGB pixels.
pub const DEFAULT_ALIGNMENT: usize = 96;

/// Owned image with a possibly padded row stride.
///
/// Pixel `(x, y)` lives at `data[y * stride + x]`. Elements past `width` in
/// each row are zero-initialized padding and are never read by the
/// processing crates.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Image<T> {
    /// Allocates a zeroed image whose stride is aligned to [`DEFAULT_ALIGNMENT`].
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        Self::with_alignment(width, height, DEFAULT_ALIGNMENT)
    }

    /// Allocates a zeroed image whose stride is `width` rounded up to a
    /// multiple of `alignment`.
    pub fn with_alignment(width: usize, height: usize, alignment: usize) -> Result<Self, Error> {
        if alignment == 0 {
            return Err(Error::InvalidStride);
        }
        let stride = width
            .checked_next_multiple_of(alignment)
            .ok_or(Error::OutOfMemory {
                elements: usize::MAX,
            })?;
        Self::with_stride(width, height, stride)
    }

    pub fn with_stride(width: usize, height: usize, stride: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let len = stride.checked_mul(height).ok_or(Error::OutOfMemory {
            elements: usize::MAX,
        })?;

        Ok(Self {
            width,
            height,
            stride,
            data: alloc_filled(len)?,
        })
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| Error::OutOfMemory {
                elements: self.data.len(),
            })?;
        data.extend_from_slice(&self.data);

        Ok(Self {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data,
        })
    }
}

impl<T> Image<T> {
    /// Wraps a tightly packed buffer (`stride == width`).
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride: width,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Full backing storage, padding included.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.stride + x)
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

fn alloc_filled<T: Copy + Default>(len: usize) -> Result<Vec<T>, Error> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| Error::OutOfMemory { elements: len })?;
    data.resize(len, T::default());
    Ok(data)
}

/// Borrowed read-only view over a strided buffer.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let min_len = min_required_len(width, height, stride).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width
    }
}

// The last row only needs `width` elements, so views over buffers cut right
// after the final pixel are accepted.
fn min_required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(width)
}
