use gi_core::Image;
use log::{debug, trace};
use serde::Deserialize;

use crate::conv2d::convolve_2d;
use crate::kernels1d::GaussianKernel;

/// Separable Gaussian blur with a quantized `size`-tap kernel.
///
/// `sigma == 0` is a no-op. The caller picks `size` (odd) large enough for
/// `sigma`; the kernel tail beyond it is simply cut off.
pub fn gaussian_blur(img: &mut Image<u8>, sigma: f64, size: usize) {
    if sigma == 0.0 {
        return;
    }

    let kernel = GaussianKernel::new(sigma, size);
    debug!(
        "gaussian_blur {}x{} sigma={sigma} size={size}",
        img.width(),
        img.height()
    );
    trace!("gaussian taps {:?}", kernel.taps);

    convolve_2d(img, &kernel.taps);
}

/// Blur settings as they appear in detector configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlurParams {
    pub sigma: f64,
    pub kernel_size: usize,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            sigma: 0.0,
            kernel_size: 3,
        }
    }
}

impl BlurParams {
    /// Kernel spanning about two standard deviations each way:
    /// `size = trunc(4 * sigma)`, bumped to the next odd number.
    pub fn for_sigma(sigma: f64) -> Self {
        let size = (4.0 * sigma.abs()) as usize;
        let kernel_size = if size % 2 == 0 { size + 1 } else { size };
        Self { sigma, kernel_size }
    }

    pub fn apply(&self, img: &mut Image<u8>) {
        gaussian_blur(img, self.sigma, self.kernel_size);
    }
}

#[cfg(test)]
mod tests {
    use gi_core::Image;

    use super::{BlurParams, gaussian_blur};

    fn checker(width: usize, height: usize) -> Image<u8> {
        let mut img = Image::new(width, height).expect("valid image");
        for y in 0..height {
            for (x, px) in img.row_mut(y).iter_mut().enumerate() {
                *px = if (x / 2 + y / 2) % 2 == 0 { 230 } else { 20 };
            }
        }
        img
    }

    #[test]
    fn zero_sigma_is_a_no_op() {
        let mut img = checker(9, 7);
        let before = img.clone();
        gaussian_blur(&mut img, 0.0, 5);
        assert_eq!(img, before);
        gaussian_blur(&mut img, 0.0, 4);
        assert_eq!(img, before);
    }

    #[test]
    fn blur_reduces_contrast_in_the_interior() {
        let mut img = checker(12, 12);
        gaussian_blur(&mut img, 1.0, 5);

        for y in 2..10 {
            for &v in &img.row(y)[2..10] {
                assert!((20..230).contains(&v), "value {v} not smoothed");
            }
        }
        // Corners never see a filtered sample.
        assert_eq!(img.get(0, 0), Some(&230));
        assert_eq!(img.get(11, 11), Some(&230));
    }

    #[test]
    fn flat_image_darkens_by_quantization_only() {
        let mut img = Image::new(8, 8).expect("valid image");
        for y in 0..8 {
            img.row_mut(y).fill(200);
        }
        gaussian_blur(&mut img, 1.0, 5);
        // taps sum to 252: (200 * 252) >> 8 = 196, then (196 * 252) >> 8 = 192
        assert_eq!(img.get(4, 4), Some(&192));
        assert_eq!(img.get(0, 4), Some(&196));
        assert_eq!(img.get(0, 0), Some(&200));
    }

    #[test]
    fn params_from_sigma_and_json() {
        assert_eq!(BlurParams::for_sigma(0.8).kernel_size, 3);
        assert_eq!(BlurParams::for_sigma(1.0).kernel_size, 5);
        assert_eq!(BlurParams::for_sigma(1.5).kernel_size, 7);

        let params: BlurParams = serde_json::from_str(r#"{"sigma": 1.0}"#).expect("valid json");
        assert_eq!(
            params,
            BlurParams {
                sigma: 1.0,
                kernel_size: 3
            }
        );

        let mut img = checker(6, 6);
        let before = img.clone();
        BlurParams::default().apply(&mut img);
        assert_eq!(img, before);
    }
}
