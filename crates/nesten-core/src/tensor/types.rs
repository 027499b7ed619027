//! Recursive tensor type definition and basic accessors
//!
//! This module defines the core [`Tensor`] sum type. Construction,
//! arithmetic, shape derivation, and parsing live in sibling modules.

/// Arbitrary-rank tensor over nested numeric values.
///
/// `Tensor` is a closed sum type with exactly two variants:
///
/// - **`Scalar`**: a rank-0 tensor wrapping a single `f64`; the recursion
///   base case
/// - **`Nested`**: a rank-N tensor (N >= 1) holding an ordered sequence of
///   rank-(N-1) components, all of identical shape
///
/// Every operation is implemented as a match over these two variants,
/// recursing into `Nested` components and terminating at `Scalar`. No third
/// variant is ever introduced.
///
/// Tensors are immutable value objects: all operations return newly
/// constructed instances.
///
/// # Invariants
///
/// - All components of a non-empty `Nested` tensor share one shape, checked
///   eagerly at construction (see [`Tensor::make`]) and never re-checked.
/// - A `Scalar` never holds NaN; construction coerces NaN to `0.0`.
///
/// # Examples
///
/// ```
/// use nesten_core::Tensor;
///
/// let vector = Tensor::make([1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(vector.rank(), 1);
/// assert_eq!(vector.shape().as_slice(), &[3]);
///
/// let scalar = Tensor::scalar(4.5);
/// assert_eq!(scalar.rank(), 0);
/// assert!(scalar.shape().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tensor {
    /// Rank-0 tensor: a single numeric value
    Scalar(f64),
    /// Rank-N tensor: ordered components of identical shape
    Nested(Vec<Tensor>),
}

impl Tensor {
    /// Whether this tensor is the rank-0 base case.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// assert!(Tensor::scalar(1.0).is_scalar());
    /// assert!(!Tensor::vector(&[1.0]).is_scalar());
    /// ```
    pub fn is_scalar(&self) -> bool {
        matches!(self, Tensor::Scalar(_))
    }

    /// The wrapped value if this tensor is a scalar, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// assert_eq!(Tensor::scalar(2.5).as_scalar(), Some(2.5));
    /// assert_eq!(Tensor::vector(&[2.5]).as_scalar(), None);
    /// ```
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Tensor::Scalar(value) => Some(*value),
            Tensor::Nested(_) => None,
        }
    }

    /// The ordered components of a nested tensor, `None` for a scalar.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let vector = Tensor::vector(&[1.0, 2.0]);
    /// assert_eq!(vector.components().unwrap().len(), 2);
    /// assert!(Tensor::scalar(1.0).components().is_none());
    /// ```
    pub fn components(&self) -> Option<&[Tensor]> {
        match self {
            Tensor::Scalar(_) => None,
            Tensor::Nested(components) => Some(components),
        }
    }

    /// The component at `index`, or `None` for a scalar or out-of-bounds
    /// index.
    ///
    /// See also the panicking `tensor[index]` form via `std::ops::Index`.
    pub fn get(&self, index: usize) -> Option<&Tensor> {
        self.components().and_then(|components| components.get(index))
    }
}
