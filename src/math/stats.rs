//! Small numeric primitives.
//!
//! Note: All functions are total; empty or zero-weight input yields 0.0.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Weighted mean over `(value, weight)` pairs. A non-positive weight sum
/// yields 0.0 rather than dividing by zero.
pub fn weighted_mean(pairs: &[(f64, f64)]) -> f64 {
    let weight_sum: f64 = pairs.iter().map(|(_, w)| w).sum();
    if weight_sum <= 0.0 {
        return 0.0;
    }
    pairs.iter().map(|(v, w)| v * w).sum::<f64>() / weight_sum
}
