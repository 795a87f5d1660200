use super::*;
use super::{check_shape, validate_learning_rate};
use crate::ModelError;
use crate::metric::Evaluation;
use crate::utility::{label_index, one_hot_encode, split_row};
use log::{debug, info, warn};
use ndarray::{Array1, Axis};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::{Rng, SeedableRng};

/// A feed-forward neural network made of an ordered stack of dense layers.
///
/// Each layer feeds its output to the next one. Training is online gradient
/// descent: every sample is forwarded through all layers, the gradient of the
/// mean squared error is propagated back through the layers in reverse order,
/// and every layer updates its parameters before the next sample is seen.
///
/// # Fields
///
/// * `layers` - The layers of the network, owned exclusively. Layer `i`'s output
///   dimension equals layer `i + 1`'s input dimension.
///
/// # Example
/// ```rust
/// use digitnet::prelude::*;
///
/// // Two features followed by the class label.
/// let data = vec![
///     vec![0.9, 0.1, 0.0],
///     vec![0.1, 0.9, 1.0],
///     vec![0.8, 0.2, 0.0],
///     vec![0.2, 0.8, 1.0],
/// ];
///
/// let mut network = Network::new(&LayerSpec::chain(&[2, 4, 2]), 42)
///     .unwrap()
///     .with_gradient_rule(GradientRule::Canonical);
///
/// let history = network.train(&data, 20, 2, 0.1).unwrap();
/// assert_eq!(history.len(), 20);
///
/// let class = network.predict(&[0.9, 0.1], 2, Some(0)).unwrap();
/// assert!(class < 2);
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Dense>,
}

impl Network {
    /// Builds a network from layer specs, drawing the initial parameters of every
    /// layer, in order, from one generator seeded with `seed`.
    ///
    /// The same specs and seed always produce the same network.
    ///
    /// # Parameters
    ///
    /// - `specs` - Layer shapes, first to last
    /// - `seed` - Seed of the generator used for parameter initialization
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - The wired network
    /// - `Err(ModelError::ConfigurationError)` - If `specs` is empty, a layer has a zero
    ///   dimension, or adjacent layers do not fit together
    pub fn new(specs: &[LayerSpec], seed: u64) -> Result<Self, ModelError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(specs, &mut rng)
    }

    /// Builds a network from layer specs using the given random generator.
    pub fn with_rng<R: Rng + ?Sized>(specs: &[LayerSpec], rng: &mut R) -> Result<Self, ModelError> {
        if specs.is_empty() {
            return Err(ModelError::ConfigurationError(
                "Layers not specified".to_string(),
            ));
        }

        let mut layers = Vec::with_capacity(specs.len());
        for spec in specs {
            layers.push(Dense::new(
                spec.input_dim,
                spec.output_dim,
                spec.activation,
                &mut *rng,
            )?);
        }

        Self::from_layers(layers)
    }

    /// Wires already constructed layers into a network.
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - The wired network
    /// - `Err(ModelError::ConfigurationError)` - If `layers` is empty or adjacent layers do not fit together
    pub fn from_layers(layers: Vec<Dense>) -> Result<Self, ModelError> {
        if layers.is_empty() {
            return Err(ModelError::ConfigurationError(
                "Layers not specified".to_string(),
            ));
        }

        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].output_dim() != pair[1].input_dim() {
                return Err(ModelError::ConfigurationError(format!(
                    "Layer {} outputs {} values but layer {} expects {} inputs",
                    i,
                    pair[0].output_dim(),
                    i + 1,
                    pair[1].input_dim()
                )));
            }
        }

        Ok(Self { layers })
    }

    /// Applies a gradient rule to every layer.
    pub fn with_gradient_rule(mut self, rule: GradientRule) -> Self {
        for layer in &mut self.layers {
            layer.set_gradient_rule(rule);
        }
        self
    }

    /// Layers of the network, first to last
    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    /// Layer at `index`, if any
    pub fn layer(&self, index: usize) -> Option<&Dense> {
        self.layers.get(index)
    }

    /// Number of features the first layer expects
    pub fn input_dim(&self) -> usize {
        self.layers[0].input_dim()
    }

    /// Number of values the last layer produces
    pub fn output_dim(&self) -> usize {
        self.last_layer().output_dim()
    }

    /// Output of the last layer from the most recent forward pass, if any
    pub fn output(&self) -> Option<&Matrix> {
        self.last_layer().outputs()
    }

    fn last_layer(&self) -> &Dense {
        &self.layers[self.layers.len() - 1]
    }

    /// Forward propagates a column vector through every layer in order.
    ///
    /// # Returns
    ///
    /// - `Ok(Matrix)` - Output of the last layer, shape `(output_dim, 1)`
    /// - `Err(ModelError::DimensionMismatch)` - If `input` is not `(input_dim, 1)`
    pub fn forward(&mut self, input: &Matrix) -> Result<Matrix, ModelError> {
        let mut output = input.clone();
        for layer in &mut self.layers {
            output = layer.forward(&output)?;
        }
        Ok(output)
    }

    /// Validates the model state and training data before any parameter is touched
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If validation passes
    /// - `Err(ModelError)` - If validation fails
    fn validate_training_inputs(
        &self,
        training_data: &[Vec<f64>],
        num_classes: usize,
        learning_rate: f64,
    ) -> Result<(), ModelError> {
        validate_learning_rate(learning_rate)?;

        if num_classes == 0 {
            return Err(ModelError::InputValidationError(
                "num_classes must be greater than 0".to_string(),
            ));
        }

        // The loss gradient is formed against a target of num_classes entries.
        if num_classes != self.output_dim() {
            return Err(ModelError::DimensionMismatch {
                expected: (self.output_dim(), 1),
                actual: (num_classes, 1),
            });
        }

        if training_data.is_empty() {
            return Err(ModelError::InputValidationError(
                "Training data cannot be empty".to_string(),
            ));
        }

        let mut unknown_labels = 0;
        for (i, row) in training_data.iter().enumerate() {
            let (features, label) = split_row(row).ok_or_else(|| {
                ModelError::InputValidationError(format!(
                    "Row {} must hold at least one feature and a label, got {} values",
                    i,
                    row.len()
                ))
            })?;

            if features.len() != self.input_dim() {
                return Err(ModelError::DimensionMismatch {
                    expected: (self.input_dim(), 1),
                    actual: (features.len(), 1),
                });
            }

            if !label_index(label).is_some_and(|index| index < num_classes) {
                unknown_labels += 1;
            }
        }

        if unknown_labels > 0 {
            warn!(
                "{} rows have labels outside 0..{}, their targets are all zeros",
                unknown_labels, num_classes
            );
        }

        Ok(())
    }

    /// Trains the network with online gradient descent.
    ///
    /// Every epoch walks the rows in their original order. For each row the
    /// features are forwarded through all layers, the mean squared error gradient
    /// `2 * (output - target) / num_classes` is computed against the one-hot encoded
    /// label, and the gradient is propagated back through the layers in reverse order.
    ///
    /// # Parameters
    ///
    /// - `training_data` - Rows of features followed by the numeric class label
    /// - `epochs` - Number of passes over `training_data`
    /// - `num_classes` - Number of classes, must equal the last layer's output dimension
    /// - `learning_rate` - Step size of every parameter update
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<f64>)` - Average per-sample error of every epoch
    /// - `Err(ModelError)` - If the data or arguments are invalid; no parameter has changed in that case
    pub fn train(
        &mut self,
        training_data: &[Vec<f64>],
        epochs: usize,
        num_classes: usize,
        learning_rate: f64,
    ) -> Result<Vec<f64>, ModelError> {
        self.validate_training_inputs(training_data, num_classes, learning_rate)?;

        let loss = MeanSquaredError::new();
        let mut history = Vec::with_capacity(epochs);

        info!(
            "Training {} layers on {} samples for {} epochs (learning rate {})",
            self.layers.len(),
            training_data.len(),
            epochs,
            learning_rate
        );

        for epoch in 0..epochs {
            let mut total_error = 0.0;

            for row in training_data {
                let Some((features, label)) = split_row(row) else {
                    continue;
                };
                let target = one_hot_encode(label_index(label), num_classes);

                let output = self.forward(&column_vector(features))?;

                let mut grad = loss.compute_grad(&target, &output);
                total_error += loss.compute_loss(&target, &output);

                for layer in self.layers.iter_mut().rev() {
                    grad = layer.backward(&grad, learning_rate)?;
                }
            }

            let mean_error = total_error / training_data.len() as f64;
            info!("Epoch {} done. Error: {}", epoch, mean_error);
            history.push(mean_error);
        }

        if let Some(last) = history.last() {
            info!("Training finished after {} epochs, final error {}", epochs, last);
        }

        Ok(history)
    }

    /// Predicts the class of a single sample.
    ///
    /// The sample is forwarded through all layers and the index of the largest of the
    /// first `num_classes` outputs is returned. The running best starts at index 0 with
    /// value 0.0 and is replaced only by a strictly larger output, so ties keep the lower
    /// index and an output with no positive entry predicts class 0.
    ///
    /// # Parameters
    ///
    /// - `data_point` - Feature vector
    /// - `num_classes` - Number of leading outputs to compare, `1..=output_dim`
    /// - `true_label` - Known label of the sample; only logged for diagnostics
    ///
    /// # Returns
    ///
    /// - `Ok(usize)` - The predicted class index
    /// - `Err(ModelError)` - If `num_classes` is out of range or the features have the wrong length
    pub fn predict(
        &mut self,
        data_point: &[f64],
        num_classes: usize,
        true_label: Option<usize>,
    ) -> Result<usize, ModelError> {
        if num_classes == 0 || num_classes > self.output_dim() {
            return Err(ModelError::InputValidationError(format!(
                "num_classes must be in 1..={}, got {}",
                self.output_dim(),
                num_classes
            )));
        }

        let output = self.forward(&column_vector(data_point))?;

        let mut predicted = 0;
        let mut best = 0.0;
        for (i, &value) in output.column(0).iter().take(num_classes).enumerate() {
            if value > best {
                best = value;
                predicted = i;
            }
        }

        if let Some(label) = true_label {
            debug!("Predicted class {} for a sample labelled {}", predicted, label);
        }

        Ok(predicted)
    }

    /// Predicts every row and tallies the predictions against the rows' trailing labels.
    ///
    /// # Parameters
    ///
    /// - `rows` - Rows of features followed by the numeric class label
    /// - `num_classes` - Number of leading outputs to compare
    ///
    /// # Returns
    ///
    /// - `Ok(Evaluation)` - Correct, wrong and total counts
    /// - `Err(ModelError)` - If a row is too short or a prediction fails
    pub fn evaluate(
        &mut self,
        rows: &[Vec<f64>],
        num_classes: usize,
    ) -> Result<Evaluation, ModelError> {
        let mut evaluation = Evaluation::default();

        for (i, row) in rows.iter().enumerate() {
            let (features, label) = split_row(row).ok_or_else(|| {
                ModelError::InputValidationError(format!(
                    "Row {} must hold at least one feature and a label, got {} values",
                    i,
                    row.len()
                ))
            })?;
            let label = label_index(label);

            let predicted = self.predict(features, num_classes, label)?;
            evaluation.record(Some(predicted) == label);
        }

        Ok(evaluation)
    }

    /// Mean of the squared elementwise differences between two equally shaped matrices
    ///
    /// # Returns
    ///
    /// - `Ok(f64)` - `sum((actual - predicted)^2) / len`
    /// - `Err(ModelError::DimensionMismatch)` - If the shapes differ
    pub fn mse(predicted: &Matrix, actual: &Matrix) -> Result<f64, ModelError> {
        check_shape(predicted, actual.dim())?;
        Ok(MeanSquaredError::new().compute_loss(actual, predicted))
    }

    /// Returns a summary of the network's structure
    ///
    /// Lists each layer's type, activation, output shape and parameter count in a
    /// tabular format, followed by the total parameter count.
    pub fn summary(&self) -> String {
        let col1_width = 33;
        let col2_width = 24;
        let col3_width = 15;

        let mut lines = Vec::with_capacity(self.layers.len() + 6);
        lines.push("Model: \"network\"".to_string());
        lines.push(format!(
            "┏{}┳{}┳{}┓",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width)
        ));
        lines.push(format!(
            "┃ {:<31} ┃ {:<22} ┃ {:>13} ┃",
            "Layer (type)", "Output Shape", "Param #"
        ));
        lines.push(format!(
            "┡{}╇{}╇{}┩",
            "━".repeat(col1_width),
            "━".repeat(col2_width),
            "━".repeat(col3_width)
        ));

        let mut total_params = 0;
        for (i, layer) in self.layers.iter().enumerate() {
            // First layer is named "Layer", then "Layer_1", "Layer_2", etc.
            let layer_name = if i == 0 {
                "Layer".to_string()
            } else {
                format!("Layer_{}", i)
            };
            total_params += layer.param_count();

            lines.push(format!(
                "│ {:<31} │ {:<22} │ {:>13} │",
                format!(
                    "{} ({}, {})",
                    layer_name,
                    layer.layer_type(),
                    layer.activation().name()
                ),
                layer.output_shape(),
                layer.param_count()
            ));
        }

        lines.push(format!(
            "└{}┴{}┴{}┘",
            "─".repeat(col1_width),
            "─".repeat(col2_width),
            "─".repeat(col3_width)
        ));
        // f64 parameters, 8 bytes each
        lines.push(format!(
            " Total params: {} ({} B)",
            total_params,
            total_params * 8
        ));

        lines.join("\n")
    }
}

/// Turns a feature slice into a column vector.
fn column_vector(values: &[f64]) -> Matrix {
    Array1::from(values.to_vec()).insert_axis(Axis(1))
}
