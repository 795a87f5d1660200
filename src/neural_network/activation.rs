use super::Matrix;

/// Activation function enum, supporting Tanh and Sigmoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Sigmoid,
}

impl Activation {
    /// Hyperbolic tangent of `x`.
    ///
    /// Saturates to ±1 for large |x| instead of overflowing.
    pub fn tanh(x: f64) -> f64 {
        x.tanh()
    }

    /// Logistic sigmoid of `x`, evaluated so that `exp` never receives a large positive argument.
    pub fn sigmoid(x: f64) -> f64 {
        if x >= 0.0 {
            1.0 / (1.0 + (-x).exp())
        } else {
            let e = x.exp();
            e / (1.0 + e)
        }
    }

    /// Applies the scalar function of this activation to a single value.
    pub fn apply_scalar(&self, x: f64) -> f64 {
        match self {
            Activation::Tanh => Self::tanh(x),
            Activation::Sigmoid => Self::sigmoid(x),
        }
    }

    /// Forward application of activation functions
    ///
    /// Applies the activation elementwise and returns a new matrix of the same shape.
    ///
    /// # Parameters
    ///
    /// * `z` - Pre-activation values
    ///
    /// # Returns
    ///
    /// * `Matrix` - A new matrix with the activation function applied
    pub fn apply(&self, z: &Matrix) -> Matrix {
        match self {
            Activation::Tanh => z.mapv(Self::tanh),
            Activation::Sigmoid => z.mapv(Self::sigmoid),
        }
    }

    /// Computes the activation derivative given the activated output.
    ///
    /// # Parameters
    ///
    /// * `activated` - The output after the activation function has been applied
    ///
    /// # Returns
    ///
    /// * `Matrix` - `1 - a^2` for Tanh, `a * (1 - a)` for Sigmoid
    pub fn derivative(&self, activated: &Matrix) -> Matrix {
        match self {
            Activation::Tanh => activated.mapv(|a| 1.0 - a * a),
            Activation::Sigmoid => activated.mapv(|a| a * (1.0 - a)),
        }
    }

    /// Name used in layer summaries.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Tanh => "tanh",
            Activation::Sigmoid => "sigmoid",
        }
    }
}
