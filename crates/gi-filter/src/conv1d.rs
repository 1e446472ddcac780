/// Fixed-point correlation of `signal` with an odd-length `kernel`.
///
/// Taps are weights where 256 is unit gain, so they are stored as `u16`
/// even though quantized Gaussian taps never exceed 255. For
/// `i in [r, n - r)` with `r = kernel.len() / 2`:
///
/// `out[i] = (sum_j kernel[j] * signal[i - r + j]) >> 8`
///
/// The first and last `r` samples are copied through unfiltered (no
/// reflection, clamping or extrapolation). Exactly `r` samples pass through at
/// the end as at the start, so a signal as long as the kernel still gets its
/// center sample filtered; this is deliberately one sample more than a
/// `r + 1` trailing passthrough. A signal shorter than the kernel is copied
/// unchanged. Results above 255 (taps summing past unit gain) keep
/// their low byte.
pub fn convolve_u8(signal: &[u8], kernel: &[u16], out: &mut [u8]) {
    assert_eq!(out.len(), signal.len(), "out must match signal length");
    assert!(kernel.len() % 2 == 1, "kernel length must be odd");

    let n = signal.len();
    let klen = kernel.len();
    let radius = klen / 2;

    if n < klen {
        out.copy_from_slice(signal);
        return;
    }

    out[..radius].copy_from_slice(&signal[..radius]);

    for (window, out_i) in signal
        .windows(klen)
        .zip(out[radius..n - radius].iter_mut())
    {
        let acc = window
            .iter()
            .zip(kernel)
            .fold(0u32, |acc, (&s, &k)| acc + s as u32 * k as u32);
        *out_i = (acc >> 8) as u8;
    }

    out[n - radius..].copy_from_slice(&signal[n - radius..]);
}

#[cfg(test)]
mod tests {
    use crate::conv1d::convolve_u8;

    #[test]
    fn unit_gain_kernel_is_identity() {
        let signal = [9u8, 1, 200, 37, 255, 0, 4];
        let mut out = [0u8; 7];
        convolve_u8(&signal, &[0, 256, 0], &mut out);
        assert_eq!(out, signal);

        convolve_u8(&signal, &[0, 0, 256, 0, 0], &mut out);
        assert_eq!(out, signal);
    }

    #[test]
    fn borders_are_copied_not_filtered() {
        let signal = [9u8, 1, 200, 37, 255, 0, 4];
        let mut out = [0u8; 7];
        convolve_u8(&signal, &[0, 0, 0, 0, 0], &mut out);
        assert_eq!(out, [9, 1, 0, 0, 0, 0, 4]);
    }

    #[test]
    fn box_kernel_truncates() {
        let signal = [10u8, 20, 30, 40, 50];
        let mut out = [0u8; 5];
        convolve_u8(&signal, &[85, 85, 85], &mut out);
        // (85 * 60) >> 8 = 19, (85 * 90) >> 8 = 29, (85 * 120) >> 8 = 39
        assert_eq!(out, [10, 19, 29, 39, 50]);
    }

    #[test]
    fn correlation_is_not_flipped() {
        let signal = [0u8, 100, 0, 0, 0];
        let mut out = [0u8; 5];
        convolve_u8(&signal, &[256, 0, 0], &mut out);
        // out[i] reads signal[i - 1] through the first tap.
        assert_eq!(out, [0, 0, 100, 0, 0]);
    }

    #[test]
    fn kernel_length_signal_filters_center() {
        let signal = [10u8, 20, 30];
        let mut out = [0u8; 3];
        convolve_u8(&signal, &[0, 0, 256], &mut out);
        assert_eq!(out, [10, 30, 30]);
    }

    #[test]
    fn short_signal_is_copied() {
        let signal = [5u8, 6];
        let mut out = [0u8; 2];
        convolve_u8(&signal, &[1, 2, 3], &mut out);
        assert_eq!(out, signal);
    }

    #[test]
    #[should_panic(expected = "kernel length must be odd")]
    fn even_kernel_panics() {
        let mut out = [0u8; 4];
        convolve_u8(&[1, 2, 3, 4], &[1, 1], &mut out);
    }
}
