use crate::neural_network::{LossFunction, Matrix};

/// Mean Squared Error loss function
///
/// # Example
///
/// ```rust
/// use digitnet::neural_network::{LossFunction, MeanSquaredError};
/// use ndarray::array;
///
/// let mse = MeanSquaredError::new();
///
/// let y_true = array![[1.0], [0.0], [0.0]];
/// let y_pred = array![[0.5], [0.0], [0.5]];
///
/// // ((0.5)^2 + 0 + (0.5)^2) / 3
/// let loss = mse.compute_loss(&y_true, &y_pred);
/// assert!((loss - 0.5 / 3.0).abs() < 1e-12);
///
/// // 2 * (y_pred - y_true) / 3
/// let grad = mse.compute_grad(&y_true, &y_pred);
/// assert!((grad[[0, 0]] + 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSquaredError;

impl MeanSquaredError {
    /// Creates a new instance of MeanSquaredError
    ///
    /// # Returns
    ///
    /// - `MeanSquaredError` - Returns a unit-like struct `MeanSquaredError`
    pub fn new() -> Self {
        Self {}
    }
}

impl LossFunction for MeanSquaredError {
    fn compute_loss(&self, y_true: &Matrix, y_pred: &Matrix) -> f64 {
        // Calculate the squared difference
        let squared_diff = (y_true - y_pred).mapv(|x| x * x);

        // Calculate the mean (sum divided by number of elements)
        let n = squared_diff.len() as f64;
        squared_diff.sum() / n
    }

    fn compute_grad(&self, y_true: &Matrix, y_pred: &Matrix) -> Matrix {
        // Gradient is 2 times the difference divided by the element count
        let n = y_pred.len() as f64;
        (y_pred - y_true).mapv(|x| 2.0 * x / n)
    }
}
