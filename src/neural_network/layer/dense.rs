use super::GradientRule;
use crate::ModelError;
use crate::neural_network::{Activation, Layer, Matrix, check_shape, validate_learning_rate};
use ndarray::Array;
use ndarray_rand::RandomExt;
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::Uniform;

/// Dense (Fully Connected) layer implementation for neural networks.
///
/// This layer maps a column vector through a weight matrix and bias vector,
/// followed by an elementwise activation: `output = activation(weights · input + biases)`.
///
/// Weights and biases are drawn independently from Uniform\[0, 1) at construction
/// and are changed only by `backward`. The layer keeps the input and output of its
/// most recent forward pass; `backward` needs the cached input to form the weight gradient.
///
/// # Dimensions
///
/// - Input shape: (input_dim, 1)
/// - Output shape: (output_dim, 1)
///
/// # Fields
/// ## Core fields
/// - `input_dim` - Input dimension size
/// - `output_dim` - Output dimension size
/// - `weights` - Weight matrix with shape (output_dim, input_dim)
/// - `biases` - Bias vector with shape (output_dim, 1)
/// - `activation` - Activation function for the layer
/// - `gradient_rule` - How `backward` turns an output gradient into updates
///
/// ## Cache
/// - `inputs` - Input of the last forward pass
/// - `outputs` - Activated output of the last forward pass
///
/// # Example
/// ```rust
/// use digitnet::prelude::*;
/// use ndarray::array;
/// use ndarray_rand::rand::SeedableRng;
/// use ndarray_rand::rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut layer = Dense::new(3, 2, Activation::Tanh, &mut rng).unwrap();
///
/// let output = layer.forward(&array![[0.5], [0.1], [0.9]]).unwrap();
/// assert_eq!(output.dim(), (2, 1));
///
/// let grad_input = layer.backward(&array![[0.1], [-0.2]], 0.01).unwrap();
/// assert_eq!(grad_input.dim(), (3, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Dense {
    /// Input dimension size
    input_dim: usize,
    /// Output dimension size
    output_dim: usize,
    /// Weight matrix with shape (output_dim, input_dim)
    weights: Matrix,
    /// Bias vector with shape (output_dim, 1)
    biases: Matrix,
    /// Activation function for the layer
    activation: Activation,
    gradient_rule: GradientRule,
    /// Input of the last forward pass
    inputs: Option<Matrix>,
    /// Activated output of the last forward pass
    outputs: Option<Matrix>,
}

impl Dense {
    /// Creates a new dense layer with parameters drawn from Uniform\[0, 1).
    ///
    /// # Parameters
    ///
    /// - `input_dim` - Number of inputs
    /// - `output_dim` - Number of outputs
    /// - `activation` - Elementwise activation applied to `weights · input + biases`
    /// - `rng` - Source of the initial weights and biases
    ///
    /// # Returns
    ///
    /// - `Ok(Dense)` - A new layer
    /// - `Err(ModelError::ConfigurationError)` - If either dimension is zero
    pub fn new<R: Rng + ?Sized>(
        input_dim: usize,
        output_dim: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ModelError> {
        validate_dims(input_dim, output_dim)?;

        let weights = Array::random_using((output_dim, input_dim), Uniform::new(0.0, 1.0), rng);
        let biases = Array::random_using((output_dim, 1), Uniform::new(0.0, 1.0), rng);

        Ok(Self::assemble(weights, biases, activation))
    }

    /// Creates a dense layer from explicit parameters.
    ///
    /// # Parameters
    ///
    /// - `weights` - Matrix with shape (output_dim, input_dim)
    /// - `biases` - Column vector with shape (output_dim, 1)
    /// - `activation` - Elementwise activation
    ///
    /// # Returns
    ///
    /// - `Ok(Dense)` - A new layer
    /// - `Err(ModelError::ConfigurationError)` - If `weights` has a zero dimension
    /// - `Err(ModelError::DimensionMismatch)` - If `biases` does not match the weight rows
    pub fn from_parameters(
        weights: Matrix,
        biases: Matrix,
        activation: Activation,
    ) -> Result<Self, ModelError> {
        let (output_dim, input_dim) = weights.dim();
        validate_dims(input_dim, output_dim)?;
        check_shape(&biases, (output_dim, 1))?;

        Ok(Self::assemble(weights, biases, activation))
    }

    fn assemble(weights: Matrix, biases: Matrix, activation: Activation) -> Self {
        let (output_dim, input_dim) = weights.dim();
        Self {
            input_dim,
            output_dim,
            weights,
            biases,
            activation,
            gradient_rule: GradientRule::default(),
            inputs: None,
            outputs: None,
        }
    }

    /// Sets the gradient rule used by `backward`.
    pub fn with_gradient_rule(mut self, rule: GradientRule) -> Self {
        self.gradient_rule = rule;
        self
    }

    pub(crate) fn set_gradient_rule(&mut self, rule: GradientRule) {
        self.gradient_rule = rule;
    }

    /// Returns the weight matrix, shape (output_dim, input_dim)
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Returns the bias vector, shape (output_dim, 1)
    pub fn biases(&self) -> &Matrix {
        &self.biases
    }

    /// Input of the most recent forward pass, if any
    pub fn inputs(&self) -> Option<&Matrix> {
        self.inputs.as_ref()
    }

    /// Output of the most recent forward pass, if any
    pub fn outputs(&self) -> Option<&Matrix> {
        self.outputs.as_ref()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn gradient_rule(&self) -> GradientRule {
        self.gradient_rule
    }

    /// Computes `weights · input + biases` followed by the activation and caches both operands.
    pub fn forward_propagate(&mut self, input: &Matrix) -> Result<Matrix, ModelError> {
        check_shape(input, (self.input_dim, 1))?;

        let z = self.weights.dot(input) + &self.biases;
        let a = self.activation.apply(&z);

        self.inputs = Some(input.clone());
        self.outputs = Some(a.clone());
        Ok(a)
    }

    /// Updates weights and biases from the gradient of the loss with respect to this
    /// layer's output and returns the gradient with respect to its input.
    pub fn backward_propagate(
        &mut self,
        output_gradient: &Matrix,
        learning_rate: f64,
    ) -> Result<Matrix, ModelError> {
        check_shape(output_gradient, (self.output_dim, 1))?;
        validate_learning_rate(learning_rate)?;

        let inputs = self.inputs.as_ref().ok_or_else(|| {
            ModelError::ProcessingError(String::from("Forward pass has not been run"))
        })?;

        match self.gradient_rule {
            GradientRule::Simplified | GradientRule::Canonical => {
                let grad = if self.gradient_rule == GradientRule::Canonical {
                    let outputs = self.outputs.as_ref().ok_or_else(|| {
                        ModelError::ProcessingError(String::from("Forward pass has not been run"))
                    })?;
                    output_gradient * &self.activation.derivative(outputs)
                } else {
                    output_gradient.clone()
                };

                // Input gradient comes from the weights used in the forward pass.
                let grad_input = self.weights.t().dot(&grad);
                let grad_weights = grad.dot(&inputs.t());

                self.weights.scaled_add(-learning_rate, &grad_weights);
                self.biases.scaled_add(-learning_rate, &grad);

                Ok(grad_input)
            }
            GradientRule::Legacy => {
                let grad_weights = output_gradient.dot(&inputs.t());

                self.weights.scaled_add(-learning_rate, &grad_weights);
                self.biases.scaled_add(-learning_rate, output_gradient);

                Ok(self.weights.t().dot(output_gradient))
            }
        }
    }
}

impl Layer for Dense {
    fn forward(&mut self, input: &Matrix) -> Result<Matrix, ModelError> {
        self.forward_propagate(input)
    }

    fn backward(&mut self, grad_output: &Matrix, learning_rate: f64) -> Result<Matrix, ModelError> {
        self.backward_propagate(grad_output, learning_rate)
    }

    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn output_dim(&self) -> usize {
        self.output_dim
    }

    fn layer_type(&self) -> &str {
        "Dense"
    }

    fn param_count(&self) -> usize {
        // Parameter count = number of weight parameters + number of bias parameters
        self.input_dim * self.output_dim + self.output_dim
    }
}

fn validate_dims(input_dim: usize, output_dim: usize) -> Result<(), ModelError> {
    if input_dim == 0 || output_dim == 0 {
        return Err(ModelError::ConfigurationError(format!(
            "Dense layer dimensions must be non-zero, got {} -> {}",
            input_dim, output_dim
        )));
    }
    Ok(())
}
