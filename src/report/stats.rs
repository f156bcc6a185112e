//! Duration aggregation
//!
//! Plain arithmetic means over small duration collections. An empty
//! collection means "no data" and must stay visibly distinct from zero,
//! so it yields NaN rather than 0.

/// Arithmetic mean of a duration collection.
///
/// Returns NaN for an empty input. Order-independent; input sizes are
/// commit counts per release, so ordinary summation is sufficient.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Convert a duration in seconds to hours. NaN passes through.
#[must_use]
pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_mean_of_single_value_is_that_value() {
        assert!((mean(&[42.5]) - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_of_several_values() {
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_is_order_independent() {
        let forward = mean(&[1.0, 2.0, 3.0, 4.0]);
        let backward = mean(&[4.0, 3.0, 2.0, 1.0]);
        assert!((forward - backward).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_of_zeros_is_zero_not_nan() {
        let result = mean(&[0.0, 0.0]);
        assert!(!result.is_nan());
        assert!(result.abs() < f64::EPSILON);
    }

    #[test]
    fn test_seconds_to_hours() {
        assert!((seconds_to_hours(7200.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seconds_to_hours_propagates_nan() {
        assert!(seconds_to_hours(f64::NAN).is_nan());
    }
}
