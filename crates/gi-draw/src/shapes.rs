use std::ops::RangeInclusive;

use gi_core::{Error, Image, Point2f};

// Integer pixel range covering `[center - radius, center + radius]` on one
// axis, clipped to `0..len`.
fn axis_span(center: f32, radius: f32, len: usize) -> Option<RangeInclusive<usize>> {
    let lo = (center - radius).ceil().max(0.0);
    let hi = (center + radius).floor().min(len as f32 - 1.0);
    if lo <= hi {
        Some(lo as usize..=hi as usize)
    } else {
        None
    }
}

// Paints every pixel whose squared distance to `center` passes `keep`.
fn paint_radial(
    image: &mut Image<u8>,
    center: Point2f,
    radius: f32,
    value: u8,
    keep: impl Fn(f32) -> bool,
) {
    let Some(xs) = axis_span(center.x, radius, image.width()) else {
        return;
    };
    let Some(ys) = axis_span(center.y, radius, image.height()) else {
        return;
    };

    for y in ys {
        let row = image.row_mut(y);
        for x in xs.clone() {
            let d2 = center.distance_squared(Point2f::new(x as f32, y as f32));
            if keep(d2) {
                row[x] = value;
            }
        }
    }
}

/// Fills every pixel `(x, y)` with `(x - cx)^2 + (y - cy)^2 <= r^2`.
pub fn draw_disk(image: &mut Image<u8>, center: Point2f, radius: f32, value: u8) {
    let r2 = radius * radius;
    paint_radial(image, center, radius, value, |d2| d2 <= r2);
}

/// Fills pixels whose squared distance lies in `[r0^2, r1^2]`.
///
/// Pixels outside the image are skipped.
pub fn draw_annulus(
    image: &mut Image<u8>,
    center: Point2f,
    r0: f32,
    r1: f32,
    value: u8,
) -> Result<(), Error> {
    if !(r0 < r1) {
        return Err(Error::InvalidGeometry(
            "annulus inner radius must be below the outer radius",
        ));
    }
    let (inner, outer) = (r0 * r0, r1 * r1);
    paint_radial(image, center, r1, value, |d2| d2 >= inner && d2 <= outer);
    Ok(())
}

/// Halves every pixel.
pub fn darken(image: &mut Image<u8>) {
    for y in 0..image.height() {
        for px in image.row_mut(y) {
            *px /= 2;
        }
    }
}
