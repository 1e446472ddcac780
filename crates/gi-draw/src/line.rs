use gi_core::{Image, Point2f};

use crate::lut::DistanceLut;

fn nearest_pixel(image: &Image<u8>, p: Point2f) -> Option<(usize, usize)> {
    let x = p.x.round();
    let y = p.y.round();
    if x >= 0.0 && y >= 0.0 && x < image.width() as f32 && y < image.height() as f32 {
        Some((x as usize, y as usize))
    } else {
        None
    }
}

/// Draws a sampled line from `p1` to `p0`.
///
/// Samples are spaced half a pixel apart and rounded to the nearest pixel;
/// samples outside the image are skipped. With `width > 1` the right, lower
/// and lower-right neighbours of every sample are painted as well, which
/// gives a roughly 2-3 pixel wide stroke.
pub fn draw_line(image: &mut Image<u8>, p0: Point2f, p1: Point2f, value: u8, width: u32) {
    let dir = p0 - p1;
    let len = dir.norm();
    let steps = (2.0 * len) as usize;
    let step = if len > 0.0 { 0.5 / len } else { 0.0 };

    for i in 0..=steps {
        let Some((x, y)) = nearest_pixel(image, p1 + dir * (i as f32 * step)) else {
            continue;
        };
        image.row_mut(y)[x] = value;
        if width > 1 {
            for (dx, dy) in [(1, 0), (0, 1), (1, 1)] {
                if let Some(px) = image.get_mut(x + dx, y + dy) {
                    *px = value;
                }
            }
        }
    }
}

/// Max-composites a LUT-shaded thick segment.
///
/// Every pixel center within `sqrt(lut.max_dist2())` of the bounding box of
/// `p0..p1` is shaded by its squared distance to the closest point on the
/// segment. A pixel is only written when the LUT value is brighter than what
/// is already there, so overlapping segments keep the maximum.
pub fn fill_line_max(image: &mut Image<u8>, lut: &DistanceLut, p0: Point2f, p1: Point2f) {
    let max_dist = lut.max_dist2().sqrt();
    let max_x = image.width() as i64 - 1;
    let max_y = image.height() as i64 - 1;
    let clamp = |v: f32, hi: i64| (v as i64).clamp(0, hi) as usize;

    let ix0 = clamp(p0.x.min(p1.x) - max_dist, max_x);
    let ix1 = clamp(p0.x.max(p1.x) + max_dist, max_x);
    let iy0 = clamp(p0.y.min(p1.y) - max_dist, max_y);
    let iy1 = clamp(p0.y.max(p1.y) + max_dist, max_y);

    // Line coordinate 0 is p0; a degenerate segment collapses to that point.
    let dir = (p1 - p0).normalize();
    let end = (p1 - p0).dot(dir);
    let (lo, hi) = (end.min(0.0), end.max(0.0));

    for iy in iy0..=iy1 {
        let y = iy as f32 + 0.5;
        let row = image.row_mut(iy);
        for (ix, px) in row.iter_mut().enumerate().take(ix1 + 1).skip(ix0) {
            let center = Point2f::new(ix as f32 + 0.5, y);
            let t = (center - p0).dot(dir).clamp(lo, hi);
            let closest = p0 + dir * t;

            if let Some(value) = lut.lookup(center.distance_squared(closest))
                && value > *px
            {
                *px = value;
            }
        }
    }
}
