//! Summary statistics shared by profiling and parameter suggestion

use num_traits::Float;

/// Arithmetic mean, zero for an empty slice
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap_or_else(T::one)
}

/// Population standard deviation, zero for an empty slice
pub fn std_dev<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let m = mean(values);
    let squares: Vec<T> = values.iter().map(|&v| (v - m) * (v - m)).collect();
    mean(&squares).sqrt()
}

/// Clamp into the unit interval, mapping NaN to zero
pub fn clamp01<T: Float>(value: T) -> T {
    clamp_range(value, T::zero(), T::one())
}

/// Clamp into `[lo, hi]`, mapping NaN to `lo`
pub fn clamp_range<T: Float>(value: T, lo: T, hi: T) -> T {
    if value.is_nan() {
        return lo;
    }
    value.max(lo).min(hi)
}
