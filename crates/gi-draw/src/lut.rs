use gi_core::Error;

/// Maps squared distance from a line to an intensity.
///
/// Entry `i` covers squared distances in `[i / scale, (i + 1) / scale)`;
/// anything at or past `values.len() / scale` is outside the LUT.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceLut {
    values: Vec<u8>,
    scale: f32,
}

impl DistanceLut {
    pub fn new(values: Vec<u8>, scale: f32) -> Result<Self, Error> {
        if values.is_empty() {
            return Err(Error::InvalidGeometry("distance LUT has no values"));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::InvalidGeometry(
                "distance LUT scale must be positive and finite",
            ));
        }
        Ok(Self { values, scale })
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Largest squared distance that can still land in the LUT.
    pub fn max_dist2(&self) -> f32 {
        (self.values.len() - 1) as f32 / self.scale
    }

    pub fn lookup(&self, dist2: f32) -> Option<u8> {
        if !(dist2 >= 0.0) {
            return None;
        }
        let idx = (dist2 * self.scale) as usize;
        self.values.get(idx).copied()
    }
}

#[cfg(test)]
mod tests {
    use gi_core::Error;

    use super::DistanceLut;

    #[test]
    fn rejects_empty_values_and_bad_scale() {
        assert!(matches!(
            DistanceLut::new(Vec::new(), 1.0),
            Err(Error::InvalidGeometry(_))
        ));
        for scale in [0.0, -1.0, f32::INFINITY, f32::NAN] {
            assert!(DistanceLut::new(vec![1], scale).is_err(), "{scale}");
        }
    }

    #[test]
    fn lookup_floors_scaled_distance() {
        let lut = DistanceLut::new(vec![200, 100, 50], 2.0).expect("valid lut");
        assert_eq!(lut.max_dist2(), 1.0);
        assert_eq!(lut.lookup(0.0), Some(200));
        assert_eq!(lut.lookup(0.49), Some(200));
        assert_eq!(lut.lookup(0.5), Some(100));
        assert_eq!(lut.lookup(1.4), Some(50));
        assert_eq!(lut.lookup(1.5), None);
        assert_eq!(lut.lookup(f32::NAN), None);
    }
}
