use gi_core::{Error, Image, ImageView, sample_floor};
use log::debug;

/// Size of the canvas that holds a `width x height` image rotated by
/// `angle` radians: the rounded-up extents of the four rotated corners.
pub fn rotated_extent(width: usize, height: usize, angle: f64) -> (usize, usize) {
    let (c, s) = screen_cos_sin(angle);
    let (hw, hh) = (width as f32 / 2.0, height as f32 / 2.0);
    let corners = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)];

    let mut xmin = f32::INFINITY;
    let mut xmax = f32::NEG_INFINITY;
    let mut ymin = f32::INFINITY;
    let mut ymax = f32::NEG_INFINITY;
    for (px, py) in corners {
        let nx = px * c - py * s;
        let ny = px * s + py * c;
        xmin = xmin.min(nx);
        xmax = xmax.max(nx);
        ymin = ymin.min(ny);
        ymax = ymax.max(ny);
    }

    ((xmax - xmin).ceil() as usize, (ymax - ymin).ceil() as usize)
}

/// Rotates `src` about its center by `angle` radians (y axis pointing down),
/// growing the canvas to fit.
///
/// Every destination pixel center is mapped back into the source and the
/// containing source pixel is copied (nearest neighbor, no interpolation).
/// Destination pixels that map outside the source get `pad`.
pub fn rotate<T: Copy + Default>(
    src: &ImageView<'_, T>,
    angle: f64,
    pad: T,
) -> Result<Image<T>, Error> {
    let (c, s) = screen_cos_sin(angle);
    let (ow, oh) = rotated_extent(src.width(), src.height(), angle);
    debug!(
        "rotate {}x{} by {angle} rad -> {ow}x{oh}",
        src.width(),
        src.height()
    );

    let mut out = Image::new(ow, oh)?;
    let icx = src.width() as f32 / 2.0;
    let icy = src.height() as f32 / 2.0;
    let ocx = ow as f32 / 2.0;
    let ocy = oh as f32 / 2.0;

    for oy in 0..oh {
        let sy = oy as f32 - ocy + 0.5;
        for (ox, px) in out.row_mut(oy).iter_mut().enumerate() {
            let sx = ox as f32 - ocx + 0.5;
            let ix = sx * c + sy * s + icx;
            let iy = -sx * s + sy * c + icy;
            *px = sample_floor(src, ix, iy, pad);
        }
    }

    Ok(out)
}

// The angle is negated so that image rows grow downwards.
fn screen_cos_sin(angle: f64) -> (f32, f32) {
    let rad = -angle;
    (rad.cos() as f32, rad.sin() as f32)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use gi_core::Image;

    use super::{rotate, rotated_extent};

    fn numbered(width: usize, height: usize) -> Image<u8> {
        let mut img = Image::new(width, height).expect("valid image");
        for y in 0..height {
            for (x, px) in img.row_mut(y).iter_mut().enumerate() {
                *px = (y * width + x) as u8;
            }
        }
        img
    }

    #[test]
    fn zero_angle_is_identity() {
        let img = numbered(7, 5);
        let out = rotate(&img.as_view(), 0.0, 255).expect("rotates");
        assert_eq!((out.width(), out.height()), (7, 5));
        for y in 0..5 {
            assert_eq!(out.row(y), img.row(y));
        }
    }

    #[test]
    fn half_turn_flips_both_axes() {
        let img = numbered(4, 3);
        let out = rotate(&img.as_view(), PI, 255).expect("rotates");
        assert_eq!((out.width(), out.height()), (4, 3));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(out.get(x, y), img.get(3 - x, 2 - y));
            }
        }
    }

    #[test]
    fn quarter_turn_transposes_canvas() {
        let img = numbered(3, 2);
        let out = rotate(&img.as_view(), FRAC_PI_2, 255).expect("rotates");
        assert_eq!((out.width(), out.height()), (2, 3));
        for oy in 0..3 {
            for ox in 0..2 {
                assert_eq!(out.get(ox, oy), img.get(2 - oy, ox));
            }
        }
    }

    #[test]
    fn diagonal_rotation_pads_corners() {
        let mut img = Image::new(10, 10).expect("valid image");
        for y in 0..10 {
            img.row_mut(y).fill(100);
        }

        assert_eq!(rotated_extent(10, 10, FRAC_PI_4), (15, 15));
        let out = rotate(&img.as_view(), FRAC_PI_4, 7).expect("rotates");
        assert_eq!((out.width(), out.height()), (15, 15));
        assert_eq!(out.get(0, 0), Some(&7));
        assert_eq!(out.get(14, 14), Some(&7));
        assert_eq!(out.get(7, 7), Some(&100));
        assert_eq!(out.get(7, 1), Some(&100));
    }

    #[test]
    fn works_for_float_images() {
        let img = Image::from_vec(2, 1, vec![0.25f32, 0.75]).expect("valid image");
        let out = rotate(&img.as_view(), PI, -1.0).expect("rotates");
        assert_eq!(out.row(0), &[0.75, 0.25]);
    }
}
