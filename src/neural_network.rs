/// Module that contains activation function implementations
pub mod activation;
/// Module that contains neural network layer implementations
pub mod layer;
/// Module that contains loss function implementations
pub mod loss_function;
/// Module that contains the network container orchestrating training and inference
pub mod network;

pub use activation::*;
pub use layer::*;
pub use loss_function::*;
pub use network::*;

use crate::ModelError;
use ndarray::Array2;

/// Type alias for the 2-D matrices used throughout the network.
///
/// Column vectors are matrices with a single column.
pub type Matrix = Array2<f64>;

pub use crate::traits::Layer;
pub use crate::traits::LossFunction;

/// Checks that `matrix` has exactly the `expected` `(rows, cols)` shape.
fn check_shape(matrix: &Matrix, expected: (usize, usize)) -> Result<(), ModelError> {
    if matrix.dim() != expected {
        return Err(ModelError::DimensionMismatch {
            expected,
            actual: matrix.dim(),
        });
    }
    Ok(())
}

/// Validates that the learning rate is positive and finite.
fn validate_learning_rate(learning_rate: f64) -> Result<(), ModelError> {
    if !(learning_rate > 0.0 && learning_rate.is_finite()) {
        return Err(ModelError::InputValidationError(format!(
            "learning_rate must be positive and finite, got {}",
            learning_rate
        )));
    }
    Ok(())
}
