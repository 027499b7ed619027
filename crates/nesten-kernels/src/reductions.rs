//! Whole-tensor reductions
//!
//! Reductions collapse a tensor to a single number. The Euclidean norm is
//! defined through the contraction itself: a tensor fully contracted with
//! itself yields the sum of its squared leaves.

use crate::contractions::inner;
use nesten_core::Tensor;

/// Compute the Euclidean (Frobenius) norm of a tensor.
///
/// Defined as the square root of the full self-contraction `inner(t, t)`.
/// For a vector this is the ordinary Euclidean norm; the same definition
/// covers every rank.
///
/// # Examples
///
/// ```
/// use nesten_core::Tensor;
/// use nesten_kernels::norm;
///
/// let v = Tensor::make([3.0, 4.0]).unwrap();
/// assert_eq!(norm(&v), 5.0);
///
/// let m = Tensor::make([[1.0, 2.0], [2.0, 4.0]]).unwrap();
/// assert_eq!(norm(&m), 5.0);
///
/// assert_eq!(norm(&Tensor::scalar(-2.0)), 2.0);
/// ```
pub fn norm(tensor: &Tensor) -> f64 {
    // A tensor always dimensionally contains itself, and the full
    // contraction leaves no trailing ranks.
    match inner(tensor, tensor) {
        Ok(Tensor::Scalar(squared)) => squared.sqrt(),
        _ => unreachable!("full self-contraction always yields a scalar"),
    }
}

/// Sum every leaf of a tensor.
///
/// # Examples
///
/// ```
/// use nesten_core::Tensor;
/// use nesten_kernels::sum_all;
///
/// let m = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(sum_all(&m), 10.0);
/// assert_eq!(sum_all(&Tensor::scalar(7.0)), 7.0);
/// ```
pub fn sum_all(tensor: &Tensor) -> f64 {
    match tensor {
        Tensor::Scalar(value) => *value,
        Tensor::Nested(components) => components.iter().map(sum_all).sum(),
    }
}
