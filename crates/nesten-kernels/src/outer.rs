//! Outer (tensor) product
//!
//! The outer product is the rank-additive product of the algebra: the result
//! holds every pairwise product of leaves, arranged so that
//! `shape(outer(a, b)) = shape(a) ++ shape(b)`.
//!
//! The recursion broadcasts the right operand unchanged into each component
//! of the left operand until the left operand bottoms out at a scalar, where
//! the product is ordinary scaling.

use nesten_core::Tensor;

/// Compute the outer product of two tensors.
///
/// The result's rank is the sum of the operands' ranks and its shape is the
/// concatenation of their shapes. A scalar on either side degenerates to
/// [`Tensor::scale`], so this operation never fails.
///
/// The product is not commutative in representation: the shape order follows
/// the operand order.
///
/// # Complexity
///
/// Time: O(len(a) x len(b)) leaves in the result
///
/// # Examples
///
/// ```
/// use nesten_core::Tensor;
/// use nesten_kernels::outer;
///
/// let u = Tensor::make([1.0, 2.0]).unwrap();
/// let v = Tensor::make([3.0, 4.0]).unwrap();
///
/// // [2] ++ [2] -> [2, 2]
/// let m = outer(&u, &v);
/// assert_eq!(m, Tensor::make([[3.0, 4.0], [6.0, 8.0]]).unwrap());
///
/// // Shapes concatenate at any rank
/// let cube = outer(&m, &u);
/// assert_eq!(cube.shape().as_slice(), &[2, 2, 2]);
///
/// // A scalar operand degenerates to scaling
/// assert_eq!(outer(&Tensor::scalar(3.0), &v), v.scale(3.0));
/// assert_eq!(outer(&v, &Tensor::scalar(3.0)), v.scale(3.0));
/// ```
pub fn outer(a: &Tensor, b: &Tensor) -> Tensor {
    match (a, b) {
        (_, Tensor::Scalar(ratio)) => a.scale(*ratio),
        (Tensor::Scalar(value), _) => b.scale(*value),
        (Tensor::Nested(components), _) => Tensor::Nested(
            components
                .iter()
                .map(|component| outer(component, b))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_vectors() {
        let u = Tensor::make([1.0, 2.0, 3.0]).unwrap();
        let v = Tensor::make([4.0, 5.0]).unwrap();
        let m = outer(&u, &v);
        assert_eq!(
            m,
            Tensor::make([[4.0, 5.0], [8.0, 10.0], [12.0, 15.0]]).unwrap()
        );
        assert_eq!(m.shape().as_slice(), &[3, 2]);
    }

    #[test]
    fn test_outer_shape_concatenation() {
        let a = Tensor::zero(&[2, 3]);
        let b = Tensor::zero(&[4]);
        assert_eq!(outer(&a, &b).shape().as_slice(), &[2, 3, 4]);
        assert_eq!(outer(&b, &a).shape().as_slice(), &[4, 2, 3]);
    }

    #[test]
    fn test_outer_scalar_degenerates_to_scale() {
        let t = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let k = Tensor::scalar(2.5);
        assert_eq!(outer(&k, &t), t.scale(2.5));
        assert_eq!(outer(&t, &k), t.scale(2.5));
        assert_eq!(outer(&k, &k), Tensor::scalar(6.25));
    }

    #[test]
    fn test_outer_empty_operand() {
        let empty = Tensor::Nested(vec![]);
        let v = Tensor::make([1.0, 2.0]).unwrap();
        assert_eq!(outer(&empty, &v), empty);
    }
}
