/// Dense (fully connected) layer
pub mod dense;

pub use dense::*;

use super::Activation;

/// Rule a layer follows when turning an output gradient into parameter
/// updates and an input gradient.
///
/// # Variants
///
/// - `Simplified` - Uses the incoming gradient as is (no activation derivative) and
///   computes the input gradient from the weights that were active during the forward pass
/// - `Canonical` - Multiplies the incoming gradient by the activation derivative first,
///   otherwise identical to `Simplified`
/// - `Legacy` - Uses the incoming gradient as is, updates the parameters first and
///   computes the input gradient from the already updated weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientRule {
    #[default]
    Simplified,
    Canonical,
    Legacy,
}

/// Shape and activation of one dense layer, used to build a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpec {
    pub input_dim: usize,
    pub output_dim: usize,
    pub activation: Activation,
}

impl LayerSpec {
    /// Creates a spec for a tanh layer mapping `input_dim` values to `output_dim` values.
    pub fn new(input_dim: usize, output_dim: usize) -> Self {
        Self {
            input_dim,
            output_dim,
            activation: Activation::Tanh,
        }
    }

    /// Replaces the activation of this spec.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Builds the specs of a chain of layers from consecutive sizes.
    ///
    /// `[784, 16, 10, 10]` produces `784 -> 16`, `16 -> 10` and `10 -> 10`.
    /// Fewer than two sizes yields no specs.
    pub fn chain(sizes: &[usize]) -> Vec<LayerSpec> {
        sizes
            .windows(2)
            .map(|pair| LayerSpec::new(pair[0], pair[1]))
            .collect()
    }
}
