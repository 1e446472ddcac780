//! Portable 16-lane halving-add kernels.
//!
//! Each output is reduced through a fixed tree of halving adds instead of an
//! exact sum. The tree order is the one a `vld2q_u8`/`vhaddq_u8` NEON kernel
//! evaluates, so results agree bit for bit with such code. Truncation at each
//! level keeps them at or below [`ScalarKernels`](crate::ScalarKernels): at
//! most 1 lower for factors 2 and 3, at most 2 lower for factor 4.

use gi_core::{Image, ImageView};

use crate::kernels::BoxKernels;

const LANES: usize = 16;

type Lanes = [u8; LANES];

/// `(a + b) >> 1` without widening.
trait HalvingAdd: Copy {
    fn hadd(self, other: Self) -> Self;
}

impl HalvingAdd for u8 {
    #[inline(always)]
    fn hadd(self, other: Self) -> Self {
        (self & other) + ((self ^ other) >> 1)
    }
}

impl HalvingAdd for Lanes {
    #[inline(always)]
    fn hadd(self, other: Self) -> Self {
        std::array::from_fn(|i| self[i].hadd(other[i]))
    }
}

/// Reduction tree for one `F x F` block, `rows[dy][dx]`.
trait Tree<const F: usize> {
    fn reduce<V: HalvingAdd>(rows: [[V; F]; F]) -> V;
}

struct Tree2;
struct Tree3;
struct Tree4;

impl Tree<2> for Tree2 {
    #[inline(always)]
    fn reduce<V: HalvingAdd>([r0, r1]: [[V; 2]; 2]) -> V {
        let sum0 = r0[0].hadd(r1[1]);
        let sum1 = r1[0].hadd(r0[1]);
        sum0.hadd(sum1)
    }
}

impl Tree<3> for Tree3 {
    // Bottom-right sample is not part of the tree.
    #[inline(always)]
    fn reduce<V: HalvingAdd>([r0, r1, r2]: [[V; 3]; 3]) -> V {
        let s0 = r0[0].hadd(r0[1]);
        let s1 = r0[2].hadd(r1[0]);
        let s2 = r1[1].hadd(r1[2]);
        let s3 = r2[0].hadd(r2[1]);
        s0.hadd(s1).hadd(s2.hadd(s3))
    }
}

impl Tree<4> for Tree4 {
    #[inline(always)]
    fn reduce<V: HalvingAdd>(rows: [[V; 4]; 4]) -> V {
        let [a, b, c, d] = rows.map(|r| r[0].hadd(r[3]).hadd(r[2].hadd(r[1])));
        a.hadd(d).hadd(c.hadd(b))
    }
}

// Equivalent of vld2/vld3/vld4: lane `i` of plane `k` is `row[(x0 + i) * F + k]`.
#[inline(always)]
fn deinterleave<const F: usize>(row: &[u8], x0: usize) -> [Lanes; F] {
    std::array::from_fn(|k| std::array::from_fn(|i| row[(x0 + i) * F + k]))
}

fn decimate_with<const F: usize, T: Tree<F>>(src: &ImageView<'_, u8>, dst: &mut Image<u8>) {
    let dst_w = dst.width();
    let full = dst_w - dst_w % LANES;

    for y in 0..dst.height() {
        let rows: [&[u8]; F] = std::array::from_fn(|dy| src.row(F * y + dy));
        let out = dst.row_mut(y);

        for x0 in (0..full).step_by(LANES) {
            let block = rows.map(|row| deinterleave::<F>(row, x0));
            out[x0..x0 + LANES].copy_from_slice(&T::reduce(block));
        }

        for (x, px) in out.iter_mut().enumerate().skip(full) {
            let block = rows.map(|row| std::array::from_fn(|dx| row[F * x + dx]));
            *px = T::reduce::<u8>(block);
        }
    }
}

/// Halving-add trees over 16 output pixels at a time, with a per-pixel tail
/// that runs the same tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaneKernels;

impl BoxKernels for LaneKernels {
    fn name(&self) -> &'static str {
        "lanes"
    }

    fn box2(&self, src: &ImageView<'_, u8>, dst: &mut Image<u8>) {
        decimate_with::<2, Tree2>(src, dst);
    }

    fn box3(&self, src: &ImageView<'_, u8>, dst: &mut Image<u8>) {
        decimate_with::<3, Tree3>(src, dst);
    }

    fn box4(&self, src: &ImageView<'_, u8>, dst: &mut Image<u8>) {
        decimate_with::<4, Tree4>(src, dst);
    }
}
