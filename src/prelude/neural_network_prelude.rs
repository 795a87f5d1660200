pub use crate::neural_network::Matrix;
pub use crate::neural_network::activation::Activation;
pub use crate::neural_network::layer::{Dense, GradientRule, LayerSpec};
pub use crate::neural_network::loss_function::*;
pub use crate::neural_network::network::Network;
pub use crate::neural_network::{Layer, LossFunction};
