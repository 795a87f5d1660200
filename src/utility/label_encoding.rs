use crate::neural_network::Matrix;

/// Interprets a numeric label value as a class index.
///
/// The value is truncated toward zero, so `3.0` and `3.7` both map to class `3`.
///
/// # Parameters
///
/// * `value` - Label as read from a data row
///
/// # Returns
///
/// * `Option<usize>` - The class index, or `None` for negative or non-finite values
///
/// # Examples
///
/// ```rust
/// use digitnet::utility::label_index;
///
/// assert_eq!(label_index(7.0), Some(7));
/// assert_eq!(label_index(2.9), Some(2));
/// assert_eq!(label_index(-1.0), None);
/// assert_eq!(label_index(f64::NAN), None);
/// ```
pub fn label_index(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.trunc() as usize)
}

/// Converts a class index to a one-hot column vector
///
/// # Parameters
///
/// - `label` - Class index, `None` when the label could not be interpreted
/// - `size` - Number of classes (length of the resulting vector)
///
/// # Returns
///
/// * `Matrix` - Column vector of shape `(size, 1)` holding `1.0` at `label` and
///   `0.0` elsewhere. A missing label or one outside `0..size` yields all zeros.
///
/// # Examples
///
/// ```rust
/// use digitnet::utility::one_hot_encode;
///
/// let target = one_hot_encode(Some(2), 4);
/// assert_eq!(target.column(0).to_vec(), vec![0.0, 0.0, 1.0, 0.0]);
///
/// let target = one_hot_encode(Some(9), 4);
/// assert_eq!(target.sum(), 0.0);
/// ```
pub fn one_hot_encode(label: Option<usize>, size: usize) -> Matrix {
    let mut encoded = Matrix::zeros((size, 1));
    if let Some(index) = label.filter(|&index| index < size) {
        encoded[[index, 0]] = 1.0;
    }
    encoded
}

/// Splits a data row into its features and trailing label.
///
/// # Returns
///
/// * `Option<(&[f64], f64)>` - Features and label, or `None` when the row does not hold
///   at least one feature and a label
pub fn split_row(row: &[f64]) -> Option<(&[f64], f64)> {
    match row.split_last() {
        Some((&label, features)) if !features.is_empty() => Some((features, label)),
        _ => None,
    }
}
