/// Error types shared by the crate
///
/// - `ModelError` - raised by network construction, training and inference
/// - `IoError` - raised while reading and parsing datasets
pub mod error;

pub use error::{IoError, ModelError};

/// Capability traits implemented by the network components
///
/// - `Layer` - forward and backward passes over column vectors
/// - `LossFunction` - loss value and gradient with respect to predictions
pub mod traits;

/// Components for building and training a feed-forward neural network from scratch.
///
/// # Core Components
///
/// - **Activation**: Elementwise tanh and sigmoid functions
/// - **Dense**: Fully connected layer `activation(weights · input + biases)` that caches its
///   last input and output, and updates its own parameters in the backward pass
/// - **GradientRule**: How a dense layer turns an output gradient into parameter updates
/// - **MeanSquaredError**: Loss driving training
/// - **Network**: Ordered stack of dense layers with online (per-sample) training and inference
/// - **Matrix**: Type alias for the `f64` matrices used throughout, column vectors being `n × 1`
///
/// # Examples
/// ```rust
/// use digitnet::neural_network::*;
///
/// // 784 pixels -> 16 -> 10 -> 10 classes
/// let mut network = Network::new(&LayerSpec::chain(&[784, 16, 10, 10]), 7).unwrap();
///
/// let mut row = vec![0.0; 784];
/// row.push(3.0); // label
///
/// let history = network.train(&[row.clone()], 2, 10, 0.01).unwrap();
/// assert_eq!(history.len(), 2);
///
/// let predicted = network.predict(&row[..784], 10, Some(3)).unwrap();
/// assert!(predicted < 10);
///
/// println!("{}", network.summary());
/// ```
pub mod neural_network;

/// Helpers around class labels
///
/// - `label_index` - Interprets a numeric label as a class index
/// - `one_hot_encode` - Converts a class index to a one-hot column vector
/// - `split_row` - Splits a row into features and trailing label
pub mod utility;

/// Loading labelled pixel rows from CSV files.
///
/// Rows are returned as `features ++ label`, the layout `Network::train` consumes.
/// Fields are plain decimal numbers (digits and at most one `.`); anything else is
/// reported as `IoError::ParseError` naming the token.
///
/// # Examples
/// ```rust
/// use digitnet::dataset::{DatasetConfig, LabelPosition, load_rows};
///
/// let config = DatasetConfig {
///     normalize: false,
///     label_position: LabelPosition::Last,
///     ..DatasetConfig::default()
/// };
/// let rows = load_rows("0.5,0.25,1\n".as_bytes(), &config).unwrap();
/// assert_eq!(rows, vec![vec![0.5, 0.25, 1.0]]);
/// ```
pub mod dataset;

/// Evaluation of class predictions
///
/// - **accuracy**: Proportion of predictions matching the actual classes
/// - **Evaluation**: Correct/wrong/total tally produced by `Network::evaluate`
pub mod metric;

/// A convenience module that re-exports the most commonly used types and traits from this crate.
///
/// # Examples
/// ```rust
/// use digitnet::prelude::*;
///
/// let network = Network::new(&[LayerSpec::new(2, 3), LayerSpec::new(3, 2)], 1).unwrap();
/// assert_eq!(network.output_dim(), 2);
/// ```
pub mod prelude;
