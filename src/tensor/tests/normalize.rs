use approx::assert_abs_diff_eq;

use crate::tensor::{DEFAULT_NEUTRAL_VALUE, Tensor, TensorShape};

#[test]
fn test_normalize_constant_tensor() {
    let tensor = Tensor::new(&[4.2; 6], TensorShape::new(1, 2, 3)).unwrap();
    let normalized = tensor.normalized();
    assert_eq!(normalized.shape(), tensor.shape());
    assert!(normalized.to_vec().iter().all(|&x| x == DEFAULT_NEUTRAL_VALUE));

    let custom = tensor.normalize_for_display(0.0);
    assert!(custom.to_vec().iter().all(|&x| x == 0.0));
}

#[test]
fn test_normalize_maps_extremes_exactly() {
    let tensor = Tensor::new(&[-3.0, 1.5, 7.0, 2.0], TensorShape::matrix(2, 2)).unwrap();
    let normalized = tensor.normalized().to_vec();
    assert_eq!(normalized[0], 0.0);
    assert_eq!(normalized[2], 1.0);
    assert_abs_diff_eq!(normalized[1], 0.45, epsilon = 1e-6);
    assert_abs_diff_eq!(normalized[3], 0.5, epsilon = 1e-6);
}

#[test]
fn test_normalize_random_tensor_in_unit_range() {
    let tensor = Tensor::new_random(-100.0, 100.0, TensorShape::new(8, 8, 3));
    let normalized = tensor.normalized();
    let (min, max) = normalized.min_max().unwrap();
    assert_eq!(min, 0.0);
    assert_eq!(max, 1.0);
}

#[test]
fn test_normalize_empty_tensor() {
    assert!(Tensor::empty().normalized().is_empty());
}
