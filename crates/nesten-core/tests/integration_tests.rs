//! Integration tests for nesten-core
//!
//! These tests verify end-to-end construction, validation, element-wise
//! arithmetic, and rendering across module boundaries.

use nesten_core::{Tensor, TensorError};

#[test]
fn test_construction_across_ranks() {
    let scalar = Tensor::make(7.5).unwrap();
    assert_eq!(scalar.rank(), 0);
    assert!(scalar.shape().is_empty());

    let vector = Tensor::make([1.0, 2.0, 3.0]).unwrap();
    assert_eq!(vector.shape().as_slice(), &[3]);

    let matrix = Tensor::make([[1, 2, 3], [4, 5, 6]]).unwrap();
    assert_eq!(matrix.shape().as_slice(), &[2, 3]);

    let cube = Tensor::make([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]).unwrap();
    assert_eq!(cube.shape().as_slice(), &[2, 2, 2]);
    assert_eq!(cube.rank(), 3);
}

#[test]
fn test_jagged_construction_fails_at_any_depth() {
    let top = Tensor::make([vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
    assert!(matches!(top, Err(TensorError::DimensionMismatch { .. })));

    let deep = Tensor::make([
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        vec![vec![5.0, 6.0], vec![7.0]],
    ]);
    assert!(matches!(deep, Err(TensorError::DimensionMismatch { .. })));
}

#[test]
fn test_plus_scale_chain() {
    let a = Tensor::make([1.0, 2.0, 3.0]).unwrap();
    let b = Tensor::make([4.0, 5.0, 6.0]).unwrap();

    let sum = a.plus(&b).unwrap();
    assert_eq!(sum, Tensor::make([5.0, 7.0, 9.0]).unwrap());

    // plus is commutative and zero is its identity
    assert_eq!(sum, b.plus(&a).unwrap());
    assert_eq!(sum.plus(&Tensor::zero(&sum.shape())).unwrap(), sum);

    // scale distributes over plus
    assert_eq!(
        sum.scale(2.0),
        a.scale(2.0).plus(&b.scale(2.0)).unwrap()
    );
}

#[test]
fn test_plus_dimension_mismatch_reports_shapes() {
    let a = Tensor::make([1.0, 2.0]).unwrap();
    let b = Tensor::make([1.0, 2.0, 3.0]).unwrap();
    match a.plus(&b) {
        Err(TensorError::DimensionMismatch { expected, got, .. }) => {
            assert_eq!(expected, vec![2]);
            assert_eq!(got, vec![3]);
        }
        other => panic!("expected dimension mismatch, got {:?}", other),
    }
}

#[test]
fn test_zero_builder_matches_derived_shape() {
    for shape in [&[][..], &[4][..], &[2, 3][..], &[2, 2, 2][..]] {
        let zeros = Tensor::zero(shape);
        assert_eq!(zeros.shape().as_slice(), shape);
        // Adding zeros to itself stays zeros
        assert_eq!(zeros.plus(&zeros).unwrap(), zeros);
    }
}

#[test]
fn test_display_and_parse_roundtrip() {
    let tensor = Tensor::make([[0.5, -1.0], [2.0, 3.25]]).unwrap();
    let rendered = tensor.to_string();
    assert_eq!(rendered, "[[0.5, -1], [2, 3.25]]");
    assert_eq!(rendered.parse::<Tensor>().unwrap(), tensor);
}

#[test]
fn test_parse_error_kinds() {
    assert_eq!("".parse::<Tensor>(), Err(TensorError::MissingInput));
    assert!(matches!(
        "[[1], [2]".parse::<Tensor>(),
        Err(TensorError::Parse { .. })
    ));
    assert!(matches!(
        "[[1], [2, 3]]".parse::<Tensor>(),
        Err(TensorError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_immutability_of_operands() {
    let a = Tensor::make([1.0, 2.0]).unwrap();
    let b = Tensor::make([3.0, 4.0]).unwrap();
    let before = (a.clone(), b.clone());

    let _ = a.plus(&b).unwrap();
    let _ = a.scale(10.0);
    let _ = a.abs();

    assert_eq!((a, b), before);
}
