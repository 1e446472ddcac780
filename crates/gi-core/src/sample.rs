use crate::image::ImageView;

/// Samples the pixel containing `(x, y)` (floor of both coordinates), or
/// returns `pad` when that pixel lies outside the image.
///
/// Integer coordinates address the top-left corner of a pixel, so `(2.7, 0.1)`
/// samples pixel `(2, 0)`.
#[inline]
pub fn sample_floor<T: Copy>(img: &ImageView<'_, T>, x: f32, y: f32, pad: T) -> T {
    let xf = x.floor();
    let yf = y.floor();
    if !(xf >= 0.0 && yf >= 0.0 && xf < img.width() as f32 && yf < img.height() as f32) {
        return pad;
    }
    img.get(xf as usize, yf as usize).copied().unwrap_or(pad)
}
