//! Shape derivation and compatibility checks
//!
//! A tensor's shape is computed from its structure: the length of the
//! outermost level followed by the shape of its first component. A scalar's
//! shape is empty. An empty tensor's shape is `[0]`; there is no first
//! component to recurse into.

use crate::types::{Rank, Shape};

use super::types::Tensor;

impl Tensor {
    /// Derive this tensor's shape, outermost axis first.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// assert!(Tensor::scalar(1.0).shape().is_empty());
    ///
    /// let matrix = Tensor::make([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(matrix.shape().as_slice(), &[2, 3]);
    ///
    /// let empty = Tensor::make(Vec::<f64>::new()).unwrap();
    /// assert_eq!(empty.shape().as_slice(), &[0]);
    /// ```
    pub fn shape(&self) -> Shape {
        match self {
            Tensor::Scalar(_) => Shape::new(),
            Tensor::Nested(components) => {
                let mut shape = Shape::new();
                shape.push(components.len());
                if let Some(first) = components.first() {
                    shape.extend(first.shape());
                }
                shape
            }
        }
    }

    /// The number of axes of this tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// assert_eq!(Tensor::scalar(1.0).rank(), 0);
    /// assert_eq!(Tensor::zero(&[4, 4, 4]).rank(), 3);
    /// ```
    pub fn rank(&self) -> Rank {
        match self {
            Tensor::Scalar(_) => 0,
            Tensor::Nested(components) => 1 + components.first().map_or(0, Tensor::rank),
        }
    }

    /// Whether the two tensors have element-wise equal shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let a = Tensor::zero(&[2, 3]);
    /// assert!(a.same_shape(&Tensor::ones(&[2, 3])));
    /// assert!(!a.same_shape(&Tensor::zero(&[3, 2])));
    /// assert!(!a.same_shape(&Tensor::zero(&[2])));
    /// ```
    pub fn same_shape(&self, other: &Tensor) -> bool {
        self.shape() == other.shape()
    }

    /// Whether `other`'s full shape is a leading prefix of this tensor's
    /// shape.
    ///
    /// This containment check drives contraction: the left operand of an
    /// inner product must dimensionally contain the right operand. A scalar
    /// is contained in everything; nothing but a scalar is contained in a
    /// scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let cube = Tensor::zero(&[2, 3, 4]);
    /// assert!(cube.shape_contains(&Tensor::scalar(1.0)));
    /// assert!(cube.shape_contains(&Tensor::zero(&[2, 3])));
    /// assert!(cube.shape_contains(&Tensor::zero(&[2, 3, 4])));
    /// assert!(!cube.shape_contains(&Tensor::zero(&[3, 4])));
    /// assert!(!Tensor::scalar(1.0).shape_contains(&cube));
    /// ```
    pub fn shape_contains(&self, other: &Tensor) -> bool {
        let shape = self.shape();
        let other_shape = other.shape();
        other_shape.len() <= shape.len()
            && shape.iter().zip(other_shape.iter()).all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_is_derived_recursively() {
        let cube = Tensor::make([[[1.0, 2.0]], [[3.0, 4.0]], [[5.0, 6.0]]]).unwrap();
        assert_eq!(cube.shape().as_slice(), &[3, 1, 2]);
        assert_eq!(cube.rank(), 3);
    }

    #[test]
    fn test_empty_tensor_shape() {
        let empty = Tensor::Nested(vec![]);
        assert_eq!(empty.shape().as_slice(), &[0]);
        assert_eq!(empty.rank(), 1);
    }

    #[test]
    fn test_same_shape_requires_equal_rank() {
        let vector = Tensor::zero(&[3]);
        let matrix = Tensor::zero(&[3, 1]);
        assert!(!vector.same_shape(&matrix));
        assert!(!matrix.same_shape(&vector));
        assert!(Tensor::scalar(1.0).same_shape(&Tensor::scalar(2.0)));
    }

    #[test]
    fn test_shape_contains_is_prefix_match() {
        let a = Tensor::zero(&[2, 3]);
        assert!(a.shape_contains(&Tensor::zero(&[2])));
        assert!(!a.shape_contains(&Tensor::zero(&[3])));
        // Containment is not symmetric
        assert!(!Tensor::zero(&[2]).shape_contains(&a));
    }
}
