/// Relative weight of an observation made `age` updates ago.
///
/// ```text
/// retention = factor ^ age
/// ```
pub fn retention(factor: f64, age: u32) -> f64 {
    factor.powi(age as i32)
}

/// Count left after decaying `count` by `factor` `age` times.
pub fn decayed(count: f64, factor: f64, age: u32) -> f64 {
    count * retention(factor, age)
}

/// Number of updates after which an observation weighs at most half.
///
/// `None` when decay is disabled (`factor >= 1`) or the factor is invalid.
pub fn half_life(factor: f64) -> Option<u32> {
    updates_until(factor, 0.5)
}

/// Smallest number of updates after which retention drops to `threshold` or below.
pub fn updates_until(factor: f64, threshold: f64) -> Option<u32> {
    if !(factor > 0.0 && factor < 1.0) || !(threshold > 0.0 && threshold < 1.0) {
        return None;
    }
    Some((threshold.ln() / factor.ln()).ceil() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retention_matches_documented_weights() {
        assert!((retention(0.95, 10) - 0.5987).abs() < 1e-3);
        assert!((retention(0.95, 50) - 0.0769).abs() < 1e-3);
        assert_eq!(retention(0.95, 0), 1.0);
    }

    #[test]
    fn half_life_of_default_factor() {
        assert_eq!(half_life(0.95), Some(14));
        assert_eq!(half_life(1.0), None);
    }

    #[test]
    fn decayed_scales_count() {
        assert!((decayed(3.0, 0.95, 1) - 2.85).abs() < 1e-12);
    }
}
