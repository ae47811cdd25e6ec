#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use std::cmp::Ordering;

/// Compares floats, NaN is considered as the greatest value.
pub fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a, b) {
        (x, y) if x.is_nan() && y.is_nan() => Ordering::Equal,
        (x, _) if x.is_nan() => Ordering::Greater,
        (_, y) if y.is_nan() => Ordering::Less,
        (_, _) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Checks whether two floats are equal within given absolute tolerance.
pub fn is_close(a: f64, b: f64, tolerance: f64) -> bool {
    compare_floats((a - b).abs(), tolerance) != Ordering::Greater
}
