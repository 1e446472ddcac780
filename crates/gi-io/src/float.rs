use gi_core::{Image, ImageView};
use log::warn;

use crate::Error;

/// Converts a float image with nominal range `[0, 1]` to 8-bit.
///
/// Each value becomes `255 * v` truncated towards zero and then reduced to
/// its low byte. Values outside `[0, 1]` are not clamped, so `1.2` wraps to
/// `50`; a warning with the count of such samples is logged.
pub fn from_f32(src: &ImageView<'_, f32>) -> Result<Image<u8>, Error> {
    let mut out = Image::new(src.width(), src.height())?;
    let mut out_of_range = 0usize;

    for y in 0..src.height() {
        for (dst, &v) in out.row_mut(y).iter_mut().zip(src.row(y)) {
            if !(0.0..=1.0).contains(&v) {
                out_of_range += 1;
            }
            *dst = unit_to_u8(v);
        }
    }

    if out_of_range > 0 {
        warn!(
            "from_f32: {out_of_range} of {} samples outside [0, 1] were wrapped",
            src.width() * src.height()
        );
    }

    Ok(out)
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (255.0 * v) as i32 as u8
}

#[cfg(test)]
mod tests {
    use gi_core::{Image, ImageView};

    use super::from_f32;

    #[test]
    fn scales_and_truncates() {
        let src = Image::from_vec(4, 1, vec![0.0f32, 0.5, 0.999, 1.0]).expect("valid image");
        let out = from_f32(&src.as_view()).expect("converts");
        assert_eq!(out.row(0), &[0, 127, 254, 255]);
        assert_eq!(out.stride(), 96);
    }

    #[test]
    fn out_of_range_values_wrap() {
        let src = Image::from_vec(3, 1, vec![1.2f32, -0.01, -1.0]).expect("valid image");
        let out = from_f32(&src.as_view()).expect("converts");
        // 306 -> 50, -2.55 -> -2 -> 254, -255 -> 1
        assert_eq!(out.row(0), &[50, 254, 1]);
    }

    #[test]
    fn reads_through_padded_view() {
        let data = [0.0f32, 1.0, -7.0, 1.0, 0.0];
        let view = ImageView::from_slice(2, 2, 3, &data).expect("valid view");
        let out = from_f32(&view).expect("converts");
        assert_eq!(out.row(0), &[0, 255]);
        assert_eq!(out.row(1), &[255, 0]);
    }
}
