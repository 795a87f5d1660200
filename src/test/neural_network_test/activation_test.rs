use super::*;

#[test]
fn test_tanh_scalar() {
    assert_abs_diff_eq!(Activation::tanh(0.0), 0.0);
    assert_abs_diff_eq!(Activation::tanh(0.5), 0.5_f64.tanh(), epsilon = 1e-15);
    assert_abs_diff_eq!(Activation::tanh(-2.0), -(2.0_f64.tanh()), epsilon = 1e-15);

    // Large magnitudes saturate instead of producing NaN
    assert_eq!(Activation::tanh(1000.0), 1.0);
    assert_eq!(Activation::tanh(-1000.0), -1.0);
}

#[test]
fn test_sigmoid_scalar() {
    assert_abs_diff_eq!(Activation::sigmoid(0.0), 0.5);
    assert_abs_diff_eq!(
        Activation::sigmoid(2.0),
        1.0 / (1.0 + (-2.0_f64).exp()),
        epsilon = 1e-15
    );
    assert_abs_diff_eq!(
        Activation::sigmoid(-2.0) + Activation::sigmoid(2.0),
        1.0,
        epsilon = 1e-15
    );

    let low = Activation::sigmoid(-1000.0);
    let high = Activation::sigmoid(1000.0);
    assert!(low.is_finite() && low >= 0.0 && low < 1e-300);
    assert_eq!(high, 1.0);
}

#[test]
fn test_apply_elementwise() {
    let z = array![[-1.0], [0.0], [3.0]];

    let tanh = Activation::Tanh.apply(&z);
    let sigmoid = Activation::Sigmoid.apply(&z);

    assert_eq!(tanh.dim(), (3, 1));
    for i in 0..3 {
        assert_abs_diff_eq!(tanh[[i, 0]], z[[i, 0]].tanh(), epsilon = 1e-15);
        assert_abs_diff_eq!(
            sigmoid[[i, 0]],
            Activation::sigmoid(z[[i, 0]]),
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            Activation::Tanh.apply_scalar(z[[i, 0]]),
            tanh[[i, 0]],
            epsilon = 1e-15
        );
    }
}

#[test]
fn test_derivative_from_activated_output() {
    let activated = array![[0.5], [0.0], [-0.5]];

    let tanh = Activation::Tanh.derivative(&activated);
    assert_abs_diff_eq!(tanh[[0, 0]], 0.75);
    assert_abs_diff_eq!(tanh[[1, 0]], 1.0);
    assert_abs_diff_eq!(tanh[[2, 0]], 0.75);

    let sigmoid = Activation::Sigmoid.derivative(&array![[0.5], [0.9]]);
    assert_abs_diff_eq!(sigmoid[[0, 0]], 0.25);
    assert_abs_diff_eq!(sigmoid[[1, 0]], 0.09, epsilon = 1e-12);
}

#[test]
fn test_default_activation_is_tanh() {
    assert_eq!(Activation::default(), Activation::Tanh);
    assert_eq!(Activation::Tanh.name(), "tanh");
    assert_eq!(Activation::Sigmoid.name(), "sigmoid");
}
