use crate::ModelError;
use crate::neural_network::Matrix;

/// Defines the interface for neural network layers.
///
/// A layer consumes one column vector and produces another. It keeps the
/// operands of its most recent forward pass, because the backward pass
/// computes its gradients from them.
pub trait Layer {
    /// Performs forward propagation through the layer.
    ///
    /// # Parameters
    ///
    /// * `input` - Column vector of shape `(input_dim, 1)`
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - Column vector of shape `(output_dim, 1)`
    /// - `Err(ModelError::DimensionMismatch)` - If `input` has the wrong shape
    fn forward(&mut self, input: &Matrix) -> Result<Matrix, ModelError>;

    /// Performs backward propagation through the layer and updates its parameters
    /// by gradient descent.
    ///
    /// # Parameters
    ///
    /// - `grad_output` - Gradient of the loss with respect to this layer's output, shape `(output_dim, 1)`
    /// - `learning_rate` - Step size of the parameter update
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - The gradient to be passed to the previous layer, shape `(input_dim, 1)`
    /// - `Err(ModelError)` - If the gradient has the wrong shape, the learning rate is invalid,
    ///   or no forward pass has been run
    fn backward(&mut self, grad_output: &Matrix, learning_rate: f64) -> Result<Matrix, ModelError>;

    /// Number of entries the layer expects in its input vector.
    fn input_dim(&self) -> usize;

    /// Number of entries in the layer's output vector.
    fn output_dim(&self) -> usize;

    /// Returns the type name of the layer (e.g., "Dense").
    fn layer_type(&self) -> &str {
        "Unknown"
    }

    /// Returns a description of the output shape of the layer.
    fn output_shape(&self) -> String {
        format!("({}, 1)", self.output_dim())
    }

    /// Returns the total number of trainable parameters in the layer.
    fn param_count(&self) -> usize {
        0
    }
}

/// Defines the interface for loss functions used in neural network training.
pub trait LossFunction {
    /// Computes the loss between true and predicted values.
    ///
    /// # Parameters
    ///
    /// - `y_true` - Target values
    /// - `y_pred` - Predicted values, same shape as `y_true`
    ///
    /// # Returns
    ///
    /// * `f64` - The scalar loss
    fn compute_loss(&self, y_true: &Matrix, y_pred: &Matrix) -> f64;

    /// Computes the gradient of the loss with respect to the predictions.
    ///
    /// # Parameters
    ///
    /// - `y_true` - Target values
    /// - `y_pred` - Predicted values, same shape as `y_true`
    ///
    /// # Returns
    ///
    /// * `Matrix` - Gradient with the shape of `y_pred`
    fn compute_grad(&self, y_true: &Matrix, y_pred: &Matrix) -> Matrix;
}
