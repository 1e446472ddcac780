use gi_core::Image;

use crate::conv1d::convolve_u8;

/// Separable in-place filter: every row with `kernel`, then every column of
/// the row-filtered result.
///
/// Each line is copied into a heap scratch buffer before it is overwritten,
/// so no pass reads samples it has already written.
pub fn convolve_2d(img: &mut Image<u8>, kernel: &[u16]) {
    let w = img.width();
    let h = img.height();
    let mut line = vec![0u8; w.max(h)];
    let mut filtered = vec![0u8; h];

    for y in 0..h {
        let row = img.row_mut(y);
        line[..w].copy_from_slice(row);
        convolve_u8(&line[..w], kernel, row);
    }

    let stride = img.stride();
    let data = img.data_mut();
    for x in 0..w {
        for (y, v) in line[..h].iter_mut().enumerate() {
            *v = data[y * stride + x];
        }
        convolve_u8(&line[..h], kernel, &mut filtered);
        for (y, &v) in filtered.iter().enumerate() {
            data[y * stride + x] = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use gi_core::Image;

    use crate::conv2d::convolve_2d;

    fn image_from_rows(rows: &[&[u8]]) -> Image<u8> {
        let mut img = Image::new(rows[0].len(), rows.len()).expect("valid image");
        for (y, src) in rows.iter().enumerate() {
            img.row_mut(y).copy_from_slice(src);
        }
        img
    }

    #[test]
    fn identity_kernel_leaves_image_untouched() {
        let mut img = image_from_rows(&[&[1, 2, 3, 4], &[5, 6, 7, 8], &[9, 10, 11, 12]]);
        let before = img.clone();
        convolve_2d(&mut img, &[0, 256, 0]);
        assert_eq!(img, before);
    }

    #[test]
    fn impulse_spreads_through_interior_only() {
        let mut img = image_from_rows(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 255, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        convolve_2d(&mut img, &[64, 128, 64]);

        // Row pass: (255 * 64) >> 8 = 63, (255 * 128) >> 8 = 127.
        // Column pass on the row result: (63 * 64) >> 8 = 15, (63 * 128) >> 8 = 31,
        // (127 * 64) >> 8 = 31, (127 * 128) >> 8 = 63.
        assert_eq!(img.row(1), &[0, 15, 31, 15, 0]);
        assert_eq!(img.row(2), &[0, 31, 63, 31, 0]);
        assert_eq!(img.row(3), &[0, 15, 31, 15, 0]);
        assert_eq!(img.row(0), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn border_rows_and_columns_only_see_the_other_pass() {
        let mut img = image_from_rows(&[&[200, 200, 200], &[200, 200, 200], &[200, 200, 200]]);
        convolve_2d(&mut img, &[128, 0, 128]);
        // Corners are never filtered; edge centres get one pass; the centre two.
        assert_eq!(img.row(0), &[200, 200, 200]);
        assert_eq!(img.row(1), &[200, 200, 200]);
        assert_eq!(img.row(2), &[200, 200, 200]);
    }
}
