//! Tests for mean, population standard deviation and clamping helpers

#[cfg(test)]
mod tests {
    use inkposter::math::stats::{clamp_range, clamp01, mean, std_dev};

    // Tests mean and population standard deviation on a textbook sample
    // Verified by dividing by n - 1 in std_dev
    #[test]
    fn test_mean_and_population_std_dev() {
        let values: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values) - 5.0).abs() < 1e-12);
        assert!((std_dev(&values) - 2.0).abs() < 1e-12);

        let single = [0.25_f32];
        assert!((mean(&single) - 0.25).abs() < f32::EPSILON);
        assert!(std_dev(&single).abs() < f32::EPSILON);
    }

    // Tests empty input degenerates to zero rather than NaN
    // Verified by removing the empty guard in mean
    #[test]
    fn test_empty_input_is_zero() {
        let empty: [f64; 0] = [];
        assert!(mean(&empty).abs() < f64::EPSILON);
        assert!(std_dev(&empty).abs() < f64::EPSILON);
    }

    // Tests clamping bounds values and maps NaN to the lower bound
    // Verified by returning NaN unchanged
    #[test]
    fn test_clamping() {
        assert!((clamp01(1.7_f64) - 1.0).abs() < f64::EPSILON);
        assert!(clamp01(-0.2_f64).abs() < f64::EPSILON);
        assert!((clamp01(0.4_f64) - 0.4).abs() < f64::EPSILON);
        assert!(clamp01(f64::NAN).abs() < f64::EPSILON);

        assert!((clamp_range(0.1_f64, 0.3, 1.0) - 0.3).abs() < f64::EPSILON);
        assert!((clamp_range(f64::NAN, 0.3, 1.0) - 0.3).abs() < f64::EPSILON);
        assert!((clamp_range(f64::INFINITY, 0.0, 0.4) - 0.4).abs() < f64::EPSILON);
    }
}
