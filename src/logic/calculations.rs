/// Round to `places` decimals, halves rounding up (toward +∞)
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor + 0.5).floor() / factor
}

/// Round a monetary amount to cents
pub fn round_money(value: f64) -> f64 {
    round_half_up(value, 2)
}

/// Percent deviation of `value` from `mean`, rounded to one decimal.
///
/// A zero mean yields 0.0 rather than an infinite or NaN percentage.
pub fn deviation_percent(value: f64, mean: f64) -> f64 {
    if mean == 0.0 {
        return 0.0;
    }
    round_half_up((value - mean) / mean * 100.0, 1)
}

/// Combined effect of several weather multipliers
pub fn combined_multiplier(multipliers: &[f64]) -> f64 {
    multipliers.iter().product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_money(2.125), 2.13);
        assert_eq!(round_money(2.375), 2.38);
        assert_eq!(round_money(2.344), 2.34);
        // Negative halves move toward +∞
        assert_eq!(round_money(-1.125), -1.12);
        assert_eq!(round_half_up(12.25, 1), 12.3);
    }

    #[test]
    fn deviation_known_values() {
        assert_eq!(deviation_percent(250.0, 200.0), 25.0);
        assert_eq!(deviation_percent(150.0, 200.0), -25.0);
        assert_eq!(deviation_percent(200.0, 200.0), 0.0);
        assert_eq!(deviation_percent(100.0, 300.0), -66.7);
    }

    #[test]
    fn deviation_with_zero_mean_is_zero() {
        assert_eq!(deviation_percent(500.0, 0.0), 0.0);
        assert_eq!(deviation_percent(0.0, 0.0), 0.0);
    }

    #[test]
    fn combined_multiplier_is_product() {
        let total = combined_multiplier(&[1.28, 0.67, 0.66]);
        assert!((total - 1.28 * 0.67 * 0.66).abs() < 1e-12);
        assert_eq!(combined_multiplier(&[]), 1.0);
    }
}
