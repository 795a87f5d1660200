use super::*;

#[test]
fn test_label_index() {
    assert_eq!(label_index(0.0), Some(0));
    assert_eq!(label_index(9.0), Some(9));
    assert_eq!(label_index(3.7), Some(3));
    assert_eq!(label_index(-0.5), None);
    assert_eq!(label_index(-3.0), None);
    assert_eq!(label_index(f64::NAN), None);
    assert_eq!(label_index(f64::INFINITY), None);
}

#[test]
fn test_one_hot_encode() {
    for size in [1, 2, 10] {
        for label in 0..size {
            let encoded = one_hot_encode(Some(label), size);

            assert_eq!(encoded.dim(), (size, 1));
            assert_eq!(encoded.sum(), 1.0);
            assert_eq!(encoded[[label, 0]], 1.0);
        }
    }

    assert_eq!(one_hot_encode(Some(3), 5), array![[0.0], [0.0], [0.0], [1.0], [0.0]]);
}

#[test]
fn test_one_hot_encode_unknown_labels() {
    assert_eq!(one_hot_encode(Some(10), 10), Matrix::zeros((10, 1)));
    assert_eq!(one_hot_encode(None, 4), Matrix::zeros((4, 1)));
    assert_eq!(one_hot_encode(Some(0), 0).dim(), (0, 1));
}

#[test]
fn test_split_row() {
    let row = [0.1, 0.2, 0.3, 4.0];
    let (features, label) = split_row(&row).unwrap();
    assert_eq!(features, &[0.1, 0.2, 0.3]);
    assert_eq!(label, 4.0);

    assert_eq!(split_row(&[0.5, 1.0]), Some((&[0.5][..], 1.0)));
    assert_eq!(split_row(&[1.0]), None);
    assert_eq!(split_row(&[]), None);
}
