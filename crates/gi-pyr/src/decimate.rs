use gi_core::{Error, Image, ImageView};
use log::{debug, trace};
use serde::Deserialize;

use crate::kernels::{BoxKernels, ScalarKernels};
use crate::lanes::LaneKernels;

/// Largest integer factor; `255 * MAX_FACTOR^2` still fits a `u32` block sum.
pub const MAX_FACTOR: usize = 4096;

/// Validated decimation factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimateFactor {
    /// 3x3 blocks become 2x2 blocks.
    OneAndHalf,
    /// `n x n` blocks become one pixel, `2 <= n <= MAX_FACTOR`.
    Integer(usize),
}

impl DecimateFactor {
    /// Output size for a `width x height` source. Incomplete blocks are dropped.
    pub fn output_dims(self, width: usize, height: usize) -> (usize, usize) {
        match self {
            Self::OneAndHalf => (width / 3 * 2, height / 3 * 2),
            Self::Integer(n) => (width / n, height / n),
        }
    }
}

impl TryFrom<usize> for DecimateFactor {
    type Error = Error;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if (2..=MAX_FACTOR).contains(&n) {
            Ok(Self::Integer(n))
        } else {
            Err(Error::InvalidFactor(n as f32))
        }
    }
}

impl TryFrom<f32> for DecimateFactor {
    type Error = Error;

    fn try_from(factor: f32) -> Result<Self, Self::Error> {
        if factor == 1.5 {
            return Ok(Self::OneAndHalf);
        }
        if factor.fract() != 0.0 || !(2.0..=MAX_FACTOR as f32).contains(&factor) {
            return Err(Error::InvalidFactor(factor));
        }
        Ok(Self::Integer(factor as usize))
    }
}

/// Implementation used for factors 2, 3 and 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    Scalar,
    Lanes,
}

impl Default for Backend {
    fn default() -> Self {
        if cfg!(feature = "lanes") {
            Self::Lanes
        } else {
            Self::Scalar
        }
    }
}

impl Backend {
    pub fn kernels(self) -> &'static dyn BoxKernels {
        match self {
            Self::Scalar => &ScalarKernels,
            Self::Lanes => &LaneKernels,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecimateConfig {
    pub backend: Backend,
}

/// Reusable decimation entry point bound to one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decimator {
    config: DecimateConfig,
}

impl Decimator {
    pub fn new(config: DecimateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecimateConfig {
        &self.config
    }

    pub fn decimate(
        &self,
        src: &ImageView<'_, u8>,
        factor: DecimateFactor,
    ) -> Result<Image<u8>, Error> {
        let (dst_w, dst_h) = factor.output_dims(src.width(), src.height());
        debug!(
            "decimate {}x{} by {:?} -> {}x{}",
            src.width(),
            src.height(),
            factor,
            dst_w,
            dst_h
        );
        let mut dst = Image::new(dst_w, dst_h)?;

        match factor {
            DecimateFactor::OneAndHalf => decimate_one_and_half(src, &mut dst),
            DecimateFactor::Integer(n @ 2..=4) => {
                let kernels = self.config.backend.kernels();
                trace!("decimate factor {n} using {} kernels", kernels.name());
                match n {
                    2 => kernels.box2(src, &mut dst),
                    3 => kernels.box3(src, &mut dst),
                    _ => kernels.box4(src, &mut dst),
                }
            }
            DecimateFactor::Integer(n) => decimate_block_mean(src, &mut dst, n),
        }

        Ok(dst)
    }
}

/// Decimates with the default configuration.
///
/// `factor` must be exactly 1.5 or an integer in `2..=MAX_FACTOR`.
pub fn decimate(src: &ImageView<'_, u8>, factor: f32) -> Result<Image<u8>, Error> {
    let factor = DecimateFactor::try_from(factor)?;
    Decimator::default().decimate(src, factor)
}

// 4 * corner + 2 * both adjacent edges + center, out of 9.
#[inline]
fn weigh(corner: u8, edge_h: u8, edge_v: u8, center: u8) -> u8 {
    ((4 * corner as u32 + 2 * edge_h as u32 + 2 * edge_v as u32 + center as u32) / 9) as u8
}

// Block layout:
//   a b c
//   d e f
//   g h i
fn decimate_one_and_half(src: &ImageView<'_, u8>, dst: &mut Image<u8>) {
    for by in 0..dst.height() / 2 {
        let top = src.row(3 * by);
        let mid = src.row(3 * by + 1);
        let bottom = src.row(3 * by + 2);

        let out = dst.row_mut(2 * by);
        for ((px, t), m) in out
            .chunks_exact_mut(2)
            .zip(top.chunks_exact(3))
            .zip(mid.chunks_exact(3))
        {
            px[0] = weigh(t[0], t[1], m[0], m[1]);
            px[1] = weigh(t[2], t[1], m[2], m[1]);
        }

        let out = dst.row_mut(2 * by + 1);
        for ((px, b), m) in out
            .chunks_exact_mut(2)
            .zip(bottom.chunks_exact(3))
            .zip(mid.chunks_exact(3))
        {
            px[0] = weigh(b[0], b[1], m[0], m[1]);
            px[1] = weigh(b[2], b[1], m[2], m[1]);
        }
    }
}

fn decimate_block_mean(src: &ImageView<'_, u8>, dst: &mut Image<u8>, factor: usize) {
    let area = (factor * factor) as u32;
    let mut sums = vec![0u32; dst.width()];

    for y in 0..dst.height() {
        sums.fill(0);
        for dy in 0..factor {
            let row = src.row(y * factor + dy);
            for (acc, block) in sums.iter_mut().zip(row.chunks_exact(factor)) {
                *acc += block.iter().map(|&v| v as u32).sum::<u32>();
            }
        }
        for (px, &acc) in dst.row_mut(y).iter_mut().zip(&sums) {
            *px = (acc / area) as u8;
        }
    }
}
