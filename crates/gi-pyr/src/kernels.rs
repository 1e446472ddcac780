use gi_core::{Image, ImageView};

/// Box-filter kernels for the power-of-two friendly factors.
///
/// `dst` is pre-sized to `(src.width() / f, src.height() / f)`; incomplete
/// blocks at the right and bottom are ignored. Implementations may round
/// below [`ScalarKernels`] by at most [`max_rounding_gap`]`(f)` and must be
/// exact on uniform blocks.
pub trait BoxKernels {
    fn name(&self) -> &'static str;

    /// Mean of each 2x2 block.
    fn box2(&self, src: &ImageView<'_, u8>, dst: &mut Image<u8>);

    /// Mean of the first 8 samples of each 3x3 block; the bottom-right sample
    /// is left out so the division is a shift by 3.
    fn box3(&self, src: &ImageView<'_, u8>, dst: &mut Image<u8>);

    /// Mean of each 4x4 block.
    fn box4(&self, src: &ImageView<'_, u8>, dst: &mut Image<u8>);
}

/// Largest amount a halving-add reduction of an `f x f` box may fall below
/// the exact truncated mean. Every tree level drops at most half a unit, so
/// the two- and three-level trees of factors 2 and 3 stay within 1 and the
/// four-level factor 4 tree within 2.
pub fn max_rounding_gap(factor: usize) -> u8 {
    if factor >= 4 { 2 } else { 1 }
}

/// Exact sums followed by a truncating shift.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarKernels;

impl BoxKernels for ScalarKernels {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn box2(&self, src: &ImageView<'_, u8>, dst: &mut Image<u8>) {
        for y in 0..dst.height() {
            let r0 = src.row(2 * y);
            let r1 = src.row(2 * y + 1);
            for (x, out) in dst.row_mut(y).iter_mut().enumerate() {
                let sx = 2 * x;
                let sum = r0[sx] as u32 + r0[sx + 1] as u32 + r1[sx] as u32 + r1[sx + 1] as u32;
                *out = (sum >> 2) as u8;
            }
        }
    }

    fn box3(&self, src: &ImageView<'_, u8>, dst: &mut Image<u8>) {
        for y in 0..dst.height() {
            let r0 = src.row(3 * y);
            let r1 = src.row(3 * y + 1);
            let r2 = src.row(3 * y + 2);
            for (x, out) in dst.row_mut(y).iter_mut().enumerate() {
                let sx = 3 * x;
                let sum = r0[sx] as u32
                    + r0[sx + 1] as u32
                    + r0[sx + 2] as u32
                    + r1[sx] as u32
                    + r1[sx + 1] as u32
                    + r1[sx + 2] as u32
                    + r2[sx] as u32
                    + r2[sx + 1] as u32;
                *out = (sum >> 3) as u8;
            }
        }
    }

    fn box4(&self, src: &ImageView<'_, u8>, dst: &mut Image<u8>) {
        for y in 0..dst.height() {
            let rows = [
                src.row(4 * y),
                src.row(4 * y + 1),
                src.row(4 * y + 2),
                src.row(4 * y + 3),
            ];
            for (x, out) in dst.row_mut(y).iter_mut().enumerate() {
                let sx = 4 * x;
                let sum: u32 = rows
                    .iter()
                    .flat_map(|r| &r[sx..sx + 4])
                    .map(|&v| v as u32)
                    .sum();
                *out = (sum >> 4) as u8;
            }
        }
    }
}
