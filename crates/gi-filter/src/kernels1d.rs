/// Sampled, normalized and quantized 1D Gaussian.
///
/// Conventions:
/// - `weights[i] = exp(-0.5 * ((i - size/2) / sigma)^2)`, normalized so
///   `sum(weights) == 1`.
/// - `taps[i] = floor(weights[i] * 255)`, so the fixed-point gain stays just
///   below unit (256) and a blurred flat image darkens slightly.
#[derive(Debug, Clone)]
pub struct GaussianKernel {
    pub sigma: f64,
    pub weights: Vec<f64>,
    pub taps: Vec<u16>,
}

impl GaussianKernel {
    pub fn new(sigma: f64, size: usize) -> Self {
        assert!(size % 2 == 1, "kernel size must be odd");

        let half = (size / 2) as f64;
        let mut weights: Vec<f64> = (0..size)
            .map(|i| {
                let x = (i as f64 - half) / sigma;
                (-0.5 * x * x).exp()
            })
            .collect();

        let sum: f64 = weights.iter().sum();
        for w in &mut weights {
            *w /= sum;
        }

        let taps = weights.iter().map(|&w| (w * 255.0) as u16).collect();

        Self {
            sigma,
            weights,
            taps,
        }
    }

    pub fn size(&self) -> usize {
        self.taps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::GaussianKernel;

    #[test]
    fn normalized_symmetric_and_quantized_down() {
        let k = GaussianKernel::new(1.0, 5);
        assert_eq!(k.size(), 5);

        let sum: f64 = k.weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);

        for i in 0..2 {
            assert_eq!(k.taps[i], k.taps[4 - i]);
            assert!((k.weights[i] - k.weights[4 - i]).abs() < 1e-15);
        }
        assert!(k.taps[2] > k.taps[1] && k.taps[1] > k.taps[0]);

        for (&t, &w) in k.taps.iter().zip(&k.weights) {
            assert_eq!(t, (w * 255.0).floor() as u16);
        }
        let gain: u16 = k.taps.iter().sum();
        assert!(gain <= 255);
    }

    #[test]
    fn sigma_one_size_five_values() {
        // weights ~ [0.0545, 0.2442, 0.4026, 0.2442, 0.0545]
        let k = GaussianKernel::new(1.0, 5);
        assert_eq!(k.taps, vec![13, 62, 102, 62, 13]);
    }

    #[test]
    fn size_one_is_a_single_tap() {
        let k = GaussianKernel::new(2.0, 1);
        assert_eq!(k.taps, vec![255]);
    }
}
