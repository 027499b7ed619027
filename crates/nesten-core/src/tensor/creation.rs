//! Tensor construction and validation
//!
//! This module provides the polymorphic constructor [`Tensor::make`] together
//! with the zero/ones/full family of shape-driven builders.
//!
//! Construction accepts any nesting of numbers and sequences via the
//! [`NestedValue`] input tree, so plain Rust literals convert directly:
//!
//! ```
//! use nesten_core::Tensor;
//!
//! let matrix = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(matrix.shape().as_slice(), &[2, 2]);
//! ```
//!
//! Validation is eager: each level checks that all of its components share
//! one shape before the tensor above it is assembled.

use crate::error::{TensorError, TensorResult};

use super::types::Tensor;

/// Unvalidated nested input accepted by [`Tensor::make`].
///
/// A `NestedValue` is either a numeric leaf or an ordered list of nested
/// values. `From` impls cover numbers, arrays, vectors, slices, and already
/// built tensors, so call sites pass literals without naming this type.
///
/// # Examples
///
/// ```
/// use nesten_core::{NestedValue, Tensor};
///
/// let value: NestedValue = [[1.0, 2.0], [3.0, 4.0]].into();
/// let tensor = Tensor::make(value).unwrap();
/// assert_eq!(tensor.rank(), 2);
/// ```
#[derive(Clone, Debug)]
pub enum NestedValue {
    /// A numeric leaf
    Leaf(f64),
    /// An ordered list of nested values
    List(Vec<NestedValue>),
}

impl From<f64> for NestedValue {
    fn from(value: f64) -> Self {
        NestedValue::Leaf(value)
    }
}

impl From<i32> for NestedValue {
    fn from(value: i32) -> Self {
        NestedValue::Leaf(f64::from(value))
    }
}

impl<T: Into<NestedValue>> From<Vec<T>> for NestedValue {
    fn from(items: Vec<T>) -> Self {
        NestedValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<NestedValue>, const N: usize> From<[T; N]> for NestedValue {
    fn from(items: [T; N]) -> Self {
        NestedValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[f64]> for NestedValue {
    fn from(items: &[f64]) -> Self {
        NestedValue::List(items.iter().copied().map(NestedValue::Leaf).collect())
    }
}

impl From<Tensor> for NestedValue {
    fn from(tensor: Tensor) -> Self {
        match tensor {
            Tensor::Scalar(value) => NestedValue::Leaf(value),
            Tensor::Nested(components) => {
                NestedValue::List(components.into_iter().map(Into::into).collect())
            }
        }
    }
}

impl From<&Tensor> for NestedValue {
    fn from(tensor: &Tensor) -> Self {
        tensor.clone().into()
    }
}

impl Tensor {
    /// Construct a tensor from a number or nested sequence.
    ///
    /// A sequence becomes a [`Tensor::Nested`] of recursively constructed
    /// components; an atomic number becomes a [`Tensor::Scalar`]. Each level
    /// validates that all of its components share one shape.
    ///
    /// Feeding a tensor back in reproduces an equal tensor, so `make` is
    /// idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::DimensionMismatch`] when components of a level
    /// have unequal shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// // Scalars, vectors, and higher ranks through one constructor
    /// let scalar = Tensor::make(5.0).unwrap();
    /// assert_eq!(scalar.rank(), 0);
    ///
    /// let cube = Tensor::make([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]).unwrap();
    /// assert_eq!(cube.shape().as_slice(), &[2, 2, 2]);
    ///
    /// // Jagged input is rejected
    /// assert!(Tensor::make([vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).is_err());
    ///
    /// // Idempotence
    /// let again = Tensor::make(cube.clone()).unwrap();
    /// assert_eq!(again, cube);
    /// ```
    pub fn make<V: Into<NestedValue>>(value: V) -> TensorResult<Tensor> {
        Tensor::from_value(value.into())
    }

    fn from_value(value: NestedValue) -> TensorResult<Tensor> {
        match value {
            NestedValue::Leaf(leaf) => Ok(Tensor::scalar(leaf)),
            NestedValue::List(items) => {
                let components = items
                    .into_iter()
                    .map(Tensor::from_value)
                    .collect::<TensorResult<Vec<_>>>()?;
                Tensor::from_components(components)
            }
        }
    }

    /// Assemble a tensor from already constructed components.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::DimensionMismatch`] unless every component has
    /// the same shape as the first. An empty component list is valid and
    /// yields the shape `[0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let rows = vec![Tensor::vector(&[1.0, 2.0]), Tensor::vector(&[3.0, 4.0])];
    /// let matrix = Tensor::from_components(rows).unwrap();
    /// assert_eq!(matrix.shape().as_slice(), &[2, 2]);
    ///
    /// let jagged = vec![Tensor::vector(&[1.0]), Tensor::scalar(2.0)];
    /// assert!(Tensor::from_components(jagged).is_err());
    /// ```
    pub fn from_components(components: Vec<Tensor>) -> TensorResult<Tensor> {
        if let Some((first, rest)) = components.split_first() {
            let expected = first.shape();
            for component in rest {
                let got = component.shape();
                if got != expected {
                    return Err(TensorError::dimension_mismatch(
                        "tensor components have unequal dimensions",
                        &expected,
                        &got,
                    ));
                }
            }
        }
        Ok(Tensor::Nested(components))
    }

    /// Construct a rank-0 tensor wrapping `value`.
    ///
    /// NaN is coerced to `0.0` so a scalar is never left invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// assert_eq!(Tensor::scalar(2.5).as_scalar(), Some(2.5));
    /// assert_eq!(Tensor::scalar(f64::NAN).as_scalar(), Some(0.0));
    /// ```
    pub fn scalar(value: f64) -> Tensor {
        Tensor::Scalar(if value.is_nan() { 0.0 } else { value })
    }

    /// Construct a rank-1 tensor directly from numeric elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let v = Tensor::vector(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v.shape().as_slice(), &[3]);
    /// assert_eq!(v, Tensor::make([1.0, 2.0, 3.0]).unwrap());
    /// ```
    pub fn vector(elements: &[f64]) -> Tensor {
        Tensor::Nested(elements.iter().copied().map(Tensor::scalar).collect())
    }

    /// Construct a zero-filled tensor of the given shape.
    ///
    /// The empty shape yields the zero scalar; each recursive step consumes
    /// the leading shape entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let zeros = Tensor::zero(&[2, 3]);
    /// assert_eq!(zeros.shape().as_slice(), &[2, 3]);
    /// assert_eq!(Tensor::zero(&[]), Tensor::scalar(0.0));
    /// ```
    pub fn zero(shape: &[usize]) -> Tensor {
        Tensor::full(shape, 0.0)
    }

    /// Construct a one-filled tensor of the given shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let ones = Tensor::ones(&[3]);
    /// assert_eq!(ones, Tensor::vector(&[1.0, 1.0, 1.0]));
    /// ```
    pub fn ones(shape: &[usize]) -> Tensor {
        Tensor::full(shape, 1.0)
    }

    /// Construct a tensor of the given shape with every leaf set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let fives = Tensor::full(&[2, 2], 5.0);
    /// assert_eq!(fives, Tensor::make([[5.0, 5.0], [5.0, 5.0]]).unwrap());
    /// ```
    pub fn full(shape: &[usize], value: f64) -> Tensor {
        match shape.split_first() {
            None => Tensor::scalar(value),
            Some((&len, rest)) => {
                Tensor::Nested((0..len).map(|_| Tensor::full(rest, value)).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_scalar_and_vector() {
        assert_eq!(Tensor::make(3.5).unwrap(), Tensor::scalar(3.5));
        assert_eq!(
            Tensor::make([1, 2, 3]).unwrap(),
            Tensor::vector(&[1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn test_make_rejects_jagged_components() {
        let err = Tensor::make([vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap_err();
        assert!(matches!(err, TensorError::DimensionMismatch { .. }));

        // Mixed ranks are jagged too
        let err = Tensor::from_components(vec![Tensor::scalar(1.0), Tensor::vector(&[2.0])])
            .unwrap_err();
        assert!(matches!(err, TensorError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_make_validates_deep_levels() {
        let value = NestedValue::List(vec![
            vec![vec![1.0, 2.0], vec![3.0, 4.0]].into(),
            vec![vec![5.0, 6.0], vec![7.0]].into(),
        ]);
        assert!(Tensor::make(value).is_err());
    }

    #[test]
    fn test_make_empty_list() {
        let empty = Tensor::make(Vec::<f64>::new()).unwrap();
        assert_eq!(empty.shape().as_slice(), &[0]);
    }

    #[test]
    fn test_scalar_coerces_nan() {
        assert_eq!(Tensor::scalar(f64::NAN), Tensor::scalar(0.0));
        assert_eq!(Tensor::make(f64::NAN).unwrap(), Tensor::scalar(0.0));
    }

    #[test]
    fn test_full_family() {
        assert_eq!(Tensor::zero(&[]), Tensor::scalar(0.0));
        assert_eq!(Tensor::zero(&[2]), Tensor::vector(&[0.0, 0.0]));
        assert_eq!(Tensor::ones(&[2, 1]).shape().as_slice(), &[2, 1]);
        assert_eq!(Tensor::full(&[0], 7.0).shape().as_slice(), &[0]);
    }

    #[test]
    fn test_make_from_existing_tensor() {
        let t = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(Tensor::make(&t).unwrap(), t);
        assert_eq!(Tensor::make(t.clone()).unwrap(), t);
    }
}
