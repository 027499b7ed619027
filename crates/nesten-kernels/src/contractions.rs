//! Inner (contracted) tensor product
//!
//! The inner product contracts the left operand's leading ranks against all
//! ranks of the right operand: `inner(a, b)` requires `b`'s full shape to be
//! a leading prefix of `a`'s shape, and the result keeps `a`'s trailing
//! uncontracted ranks.
//!
//! This one definition generalizes the vector dot product (rank-1 . rank-1
//! -> rank-0) and matrix-vector / matrix-matrix contraction; the whole of
//! the right operand is always contracted, never a single axis.

use crate::error::{KernelError, KernelResult};
use nesten_core::Tensor;

/// Compute the inner product of two tensors.
///
/// The recursion accumulates `inner(a[i], b[i])` with
/// [`Tensor::plus`], starting from the zero tensor of `a`'s trailing shape,
/// and terminates where the right operand is a scalar, which degenerates to
/// [`Tensor::scale`].
///
/// # Errors
///
/// Returns [`KernelError::ContractionMismatch`] when the right operand is
/// not a scalar and its shape is not a leading prefix of the left operand's
/// shape.
///
/// # Complexity
///
/// Time: O(len(a)) leaves visited
///
/// # Examples
///
/// ```
/// use nesten_core::Tensor;
/// use nesten_kernels::inner;
///
/// // Vector dot product
/// let u = Tensor::make([1.0, 2.0, 3.0]).unwrap();
/// let v = Tensor::make([4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(inner(&u, &v).unwrap(), Tensor::make(32).unwrap());
///
/// // Contracting a matrix with a vector leaves the trailing rank
/// let m = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let w = Tensor::make([5.0, 6.0]).unwrap();
/// assert_eq!(inner(&m, &w).unwrap(), Tensor::make([23.0, 34.0]).unwrap());
///
/// // A scalar right operand degenerates to scaling
/// assert_eq!(inner(&u, &Tensor::scalar(2.0)).unwrap(), u.scale(2.0));
///
/// // Containment failures are rejected
/// assert!(inner(&u, &m).is_err());
/// ```
pub fn inner(a: &Tensor, b: &Tensor) -> KernelResult<Tensor> {
    if let Tensor::Scalar(ratio) = b {
        return Ok(a.scale(*ratio));
    }
    if !a.shape_contains(b) {
        return Err(KernelError::contraction_mismatch(&a.shape(), &b.shape()));
    }
    match (a, b) {
        (Tensor::Nested(left), Tensor::Nested(right)) => {
            // The result keeps a's trailing, uncontracted ranks
            let shape = a.shape();
            let mut sum = Tensor::zero(&shape[b.rank()..]);
            for (x, y) in left.iter().zip(right.iter()) {
                sum = sum.plus(&inner(x, y)?)?;
            }
            Ok(sum)
        }
        // b is nested and contained in a, so a cannot be a scalar here
        _ => unreachable!("scalar left operand cannot contain a nested right operand"),
    }
}

/// Alias for [`inner`]; the contraction is the algebra's dot product.
pub fn dot(a: &Tensor, b: &Tensor) -> KernelResult<Tensor> {
    inner(a, b)
}
