//! Integration tests for nesten-kernels
//!
//! These tests verify the product operations end-to-end against worked
//! examples, combining construction from nesten-core with the kernels.

use nesten_core::Tensor;
use nesten_kernels::{dot, inner, norm, outer, sum_all, KernelError};

#[test]
fn test_vector_dot_product() {
    let u = Tensor::make([1.0, 2.0, 3.0]).unwrap();
    let v = Tensor::make([4.0, 5.0, 6.0]).unwrap();
    assert_eq!(inner(&u, &v).unwrap(), Tensor::make(32).unwrap());
    assert_eq!(dot(&u, &v).unwrap(), Tensor::scalar(32.0));
}

#[test]
fn test_outer_then_inner_roundtrip() {
    let u = Tensor::make([1.0, 2.0]).unwrap();
    let v = Tensor::make([3.0, 4.0]).unwrap();

    let m = outer(&u, &v);
    assert_eq!(m, Tensor::make([[3.0, 4.0], [6.0, 8.0]]).unwrap());

    // Contracting the outer product with u recovers v scaled by u.u
    let contracted = inner(&m, &u).unwrap();
    let u_dot_u = inner(&u, &u).unwrap().as_scalar().unwrap();
    assert_eq!(contracted, v.scale(u_dot_u));
}

#[test]
fn test_matrix_vector_contraction() {
    let m = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let v = Tensor::make([5.0, 6.0]).unwrap();

    // Contraction runs over the leading axis
    let result = inner(&m, &v).unwrap();
    assert_eq!(result, Tensor::make([23.0, 34.0]).unwrap());
    assert_eq!(result.rank(), m.rank() - v.rank());
}

#[test]
fn test_matrix_matrix_full_contraction() {
    let a = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Tensor::make([[5.0, 6.0], [7.0, 8.0]]).unwrap();
    assert_eq!(inner(&a, &b).unwrap(), Tensor::scalar(70.0));
}

#[test]
fn test_contraction_mismatch_is_rejected() {
    let u = Tensor::make([1.0, 2.0, 3.0]).unwrap();
    let m = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let err = inner(&u, &m).unwrap_err();
    assert!(matches!(err, KernelError::ContractionMismatch { .. }));
}

#[test]
fn test_scalar_degeneracies() {
    let t = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let k = Tensor::scalar(3.0);

    assert_eq!(outer(&k, &t), t.scale(3.0));
    assert_eq!(outer(&t, &k), t.scale(3.0));
    assert_eq!(inner(&t, &k).unwrap(), t.scale(3.0));
    assert_eq!(inner(&k, &k).unwrap(), Tensor::scalar(9.0));
}

#[test]
fn test_norm_consumption_pattern() {
    // norm is inner(self, self) raised to the 0.5 power
    let v = Tensor::make([3.0, 4.0]).unwrap();
    assert_eq!(norm(&v), 5.0);

    let squared = inner(&v, &v).unwrap().as_scalar().unwrap();
    assert_eq!(norm(&v), squared.sqrt());
}

#[test]
fn test_reductions_agree_with_products() {
    let ones = Tensor::ones(&[2, 3]);
    assert_eq!(sum_all(&ones), 6.0);
    // Contracting against a same-shape ones tensor sums the leaves
    let m = Tensor::make([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(inner(&m, &ones).unwrap(), Tensor::scalar(sum_all(&m)));
}
