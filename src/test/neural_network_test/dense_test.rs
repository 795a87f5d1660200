use super::*;

fn hand_layer(rule: GradientRule) -> Dense {
    Dense::from_parameters(
        array![[1.0, 2.0], [3.0, 4.0]],
        array![[0.0], [0.0]],
        Activation::Tanh,
    )
    .unwrap()
    .with_gradient_rule(rule)
}

#[test]
fn test_dense_zero_input_yields_activated_biases() {
    let mut rng = seeded_rng(3);

    for (input_dim, output_dim) in [(1, 1), (3, 2), (2, 5), (784, 16)] {
        let mut layer = Dense::new(input_dim, output_dim, Activation::Tanh, &mut rng).unwrap();
        let output = layer.forward(&Array2::zeros((input_dim, 1))).unwrap();

        assert_eq!(output.dim(), (output_dim, 1));
        assert_matrix_eq(&output, &layer.biases().mapv(f64::tanh), 1e-12);
    }
}

#[test]
fn test_dense_initial_parameters_in_unit_interval() {
    let mut rng = seeded_rng(11);
    let layer = Dense::new(20, 30, Activation::Tanh, &mut rng).unwrap();

    assert_eq!(layer.weights().dim(), (30, 20));
    assert_eq!(layer.biases().dim(), (30, 1));
    assert!(
        layer
            .weights()
            .iter()
            .chain(layer.biases().iter())
            .all(|&v| (0.0..1.0).contains(&v))
    );
    assert!(layer.inputs().is_none());
    assert!(layer.outputs().is_none());
}

#[test]
fn test_dense_same_seed_same_parameters() {
    let a = Dense::new(4, 3, Activation::Sigmoid, &mut seeded_rng(5)).unwrap();
    let b = Dense::new(4, 3, Activation::Sigmoid, &mut seeded_rng(5)).unwrap();
    let c = Dense::new(4, 3, Activation::Sigmoid, &mut seeded_rng(6)).unwrap();

    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.biases(), b.biases());
    assert_ne!(a.weights(), c.weights());
}

#[test]
fn test_dense_zero_dimension_rejected() {
    let mut rng = seeded_rng(1);
    assert!(matches!(
        Dense::new(0, 3, Activation::Tanh, &mut rng),
        Err(ModelError::ConfigurationError(_))
    ));
    assert!(matches!(
        Dense::new(3, 0, Activation::Tanh, &mut rng),
        Err(ModelError::ConfigurationError(_))
    ));
}

#[test]
fn test_dense_from_parameters_validation() {
    let result = Dense::from_parameters(
        Array2::zeros((2, 3)),
        Array2::zeros((3, 1)),
        Activation::Tanh,
    );
    assert!(matches!(
        result,
        Err(ModelError::DimensionMismatch {
            expected: (2, 1),
            actual: (3, 1)
        })
    ));

    let result = Dense::from_parameters(
        Array2::zeros((0, 3)),
        Array2::zeros((0, 1)),
        Activation::Tanh,
    );
    assert!(matches!(result, Err(ModelError::ConfigurationError(_))));
}

#[test]
fn test_dense_forward_caches_latest_pass() {
    let mut layer = Dense::new(3, 2, Activation::Tanh, &mut seeded_rng(9)).unwrap();

    let first = array![[0.1], [0.2], [0.3]];
    let second = array![[0.9], [0.8], [0.7]];

    let out_first = layer.forward(&first).unwrap();
    assert_eq!(layer.inputs(), Some(&first));
    assert_eq!(layer.outputs(), Some(&out_first));

    let out_second = layer.forward(&second).unwrap();
    assert_eq!(layer.inputs(), Some(&second));
    assert_eq!(layer.outputs(), Some(&out_second));
}

#[test]
fn test_dense_forward_dimension_mismatch() {
    let mut layer = Dense::new(3, 2, Activation::Tanh, &mut seeded_rng(2)).unwrap();

    let result = layer.forward(&array![[1.0], [2.0]]);
    assert!(matches!(
        result,
        Err(ModelError::DimensionMismatch {
            expected: (3, 1),
            actual: (2, 1)
        })
    ));
    assert!(layer.inputs().is_none());
    assert!(layer.outputs().is_none());

    // Row vectors are not column vectors
    assert!(layer.forward(&array![[1.0, 2.0, 3.0]]).is_err());
}

#[test]
fn test_dense_backward_before_forward() {
    let mut layer = Dense::new(3, 2, Activation::Tanh, &mut seeded_rng(2)).unwrap();
    let result = layer.backward(&array![[0.1], [0.1]], 0.1);
    assert!(matches!(result, Err(ModelError::ProcessingError(_))));
}

#[test]
fn test_dense_backward_validation() {
    let mut layer = Dense::new(3, 2, Activation::Tanh, &mut seeded_rng(2)).unwrap();
    layer.forward(&array![[0.1], [0.2], [0.3]]).unwrap();
    let weights = layer.weights().clone();

    for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            layer.backward(&array![[0.1], [0.1]], lr),
            Err(ModelError::InputValidationError(_))
        ));
    }
    assert!(matches!(
        layer.backward(&array![[0.1], [0.1], [0.1]], 0.1),
        Err(ModelError::DimensionMismatch { .. })
    ));
    assert_eq!(layer.weights(), &weights);
}

#[test]
fn test_dense_zero_gradient_leaves_parameters() {
    for rule in [
        GradientRule::Simplified,
        GradientRule::Canonical,
        GradientRule::Legacy,
    ] {
        let mut layer = Dense::new(3, 4, Activation::Tanh, &mut seeded_rng(4))
            .unwrap()
            .with_gradient_rule(rule);
        let weights = layer.weights().clone();
        let biases = layer.biases().clone();

        layer.forward(&array![[0.3], [0.6], [0.9]]).unwrap();
        let grad_input = layer.backward(&Array2::zeros((4, 1)), 0.5).unwrap();

        assert_eq!(layer.weights(), &weights);
        assert_eq!(layer.biases(), &biases);
        assert_eq!(grad_input, Matrix::zeros((3, 1)));
    }
}

#[test]
fn test_dense_backward_simplified_rule() {
    let mut layer = hand_layer(GradientRule::Simplified);
    layer.forward(&array![[1.0], [0.5]]).unwrap();

    let grad_input = layer.backward(&array![[1.0], [-1.0]], 0.1).unwrap();

    assert_matrix_eq(&grad_input, &array![[-2.0], [-2.0]], 1e-12);
    assert_matrix_eq(layer.weights(), &array![[0.9, 1.95], [3.1, 4.05]], 1e-12);
    assert_matrix_eq(layer.biases(), &array![[-0.1], [0.1]], 1e-12);
}

#[test]
fn test_dense_backward_legacy_rule() {
    let mut layer = hand_layer(GradientRule::Legacy);
    layer.forward(&array![[1.0], [0.5]]).unwrap();

    let grad_input = layer.backward(&array![[1.0], [-1.0]], 0.1).unwrap();

    // Same update as the simplified rule, input gradient taken from the updated weights
    assert_matrix_eq(layer.weights(), &array![[0.9, 1.95], [3.1, 4.05]], 1e-12);
    assert_matrix_eq(layer.biases(), &array![[-0.1], [0.1]], 1e-12);
    assert_matrix_eq(&grad_input, &array![[-2.2], [-2.1]], 1e-12);
}

#[test]
fn test_dense_backward_canonical_rule() {
    let mut layer = hand_layer(GradientRule::Canonical);
    let output = layer.forward(&array![[1.0], [0.5]]).unwrap();
    assert_matrix_eq(&output, &array![[2.0_f64.tanh()], [5.0_f64.tanh()]], 1e-12);

    let d0 = 1.0 - 2.0_f64.tanh().powi(2);
    let d1 = 1.0 - 5.0_f64.tanh().powi(2);
    let delta = [d0, -d1];

    let grad_input = layer.backward(&array![[1.0], [-1.0]], 0.1).unwrap();

    assert_matrix_eq(
        &grad_input,
        &array![
            [1.0 * delta[0] + 3.0 * delta[1]],
            [2.0 * delta[0] + 4.0 * delta[1]]
        ],
        1e-12,
    );
    assert_matrix_eq(
        layer.weights(),
        &array![
            [1.0 - 0.1 * delta[0], 2.0 - 0.05 * delta[0]],
            [3.0 - 0.1 * delta[1], 4.0 - 0.05 * delta[1]]
        ],
        1e-12,
    );
    assert_matrix_eq(
        layer.biases(),
        &array![[-0.1 * delta[0]], [-0.1 * delta[1]]],
        1e-12,
    );
}

#[test]
fn test_dense_layer_metadata() {
    let layer = Dense::new(784, 16, Activation::Tanh, &mut seeded_rng(0)).unwrap();

    assert_eq!(layer.input_dim(), 784);
    assert_eq!(layer.output_dim(), 16);
    assert_eq!(layer.param_count(), 784 * 16 + 16);
    assert_eq!(layer.layer_type(), "Dense");
    assert_eq!(layer.output_shape(), "(16, 1)");
    assert_eq!(layer.gradient_rule(), GradientRule::Simplified);
    assert_eq!(layer.activation(), Activation::Tanh);
}
