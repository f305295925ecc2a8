pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Smallest value, ignoring NaN. `None` for an empty slice.
pub fn min(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(f64::min)
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(v: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (v * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn min_basic() {
        assert_eq!(min(&[]), None);
        assert_eq!(min(&[95.0, 88.5, 91.0]), Some(88.5));
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(1.999, 2), 2.0);
        assert_eq!(round_to(95.25, 1), 95.3);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
