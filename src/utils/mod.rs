//! Shared numeric helpers for column aggregates.

pub mod progress;

/// Arithmetic mean of a collection of values
///
/// # Returns
/// `None` if the collection is empty
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of a collection of floating-point values
///
/// Uses the midpoint of the two middle elements for even-length input.
///
/// # Returns
/// `None` if the collection is empty
#[must_use]
pub fn median_f64(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Median of a collection of integer values
///
/// Integer columns must stay integral after imputation, so for even-length
/// input this takes the lower of the two middle order statistics instead of
/// their midpoint.
///
/// # Returns
/// `None` if the collection is empty
#[must_use]
pub fn median_i32(values: &[i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    if sorted.len() % 2 == 0 {
        Some(sorted[sorted.len() / 2 - 1])
    } else {
        Some(sorted[sorted.len() / 2])
    }
}
