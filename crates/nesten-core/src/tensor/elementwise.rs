//! Element-wise operations on tensors
//!
//! Addition and scaling decompose structurally: an operation on a nested
//! tensor applies the same operation per component, terminating at the
//! scalar base case where it is plain arithmetic. Leaf-wise transforms
//! (map, abs, sqrt, powf) follow the same recursion with a single operand.

use crate::error::{TensorError, TensorResult};

use super::types::Tensor;

impl Tensor {
    /// Element-wise sum of two tensors of equal shape.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::DimensionMismatch`] when the operands' shapes
    /// differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let a = Tensor::make([1.0, 2.0, 3.0]).unwrap();
    /// let b = Tensor::make([4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(a.plus(&b).unwrap(), Tensor::make([5.0, 7.0, 9.0]).unwrap());
    ///
    /// // The zero tensor of the same shape is the identity
    /// let zero = Tensor::zero(&a.shape());
    /// assert_eq!(a.plus(&zero).unwrap(), a);
    ///
    /// // Mismatched shapes are rejected
    /// assert!(a.plus(&Tensor::make([1.0, 2.0]).unwrap()).is_err());
    /// ```
    pub fn plus(&self, other: &Tensor) -> TensorResult<Tensor> {
        if !self.same_shape(other) {
            return Err(TensorError::dimension_mismatch(
                "cannot plus tensors with unequal dimensions",
                &self.shape(),
                &other.shape(),
            ));
        }
        Ok(self.plus_matched(other))
    }

    // Structural zip over operands already verified shape-equal.
    fn plus_matched(&self, other: &Tensor) -> Tensor {
        match (self, other) {
            (Tensor::Scalar(a), Tensor::Scalar(b)) => Tensor::Scalar(a + b),
            (Tensor::Nested(a), Tensor::Nested(b)) => Tensor::Nested(
                a.iter()
                    .zip(b.iter())
                    .map(|(x, y)| x.plus_matched(y))
                    .collect(),
            ),
            _ => unreachable!("operands verified shape-equal"),
        }
    }

    /// Multiply every leaf by `ratio`.
    ///
    /// No shape constraint applies; the ratio is always rank-0.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let m = Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.scale(2.0), Tensor::make([[2.0, 4.0], [6.0, 8.0]]).unwrap());
    /// ```
    pub fn scale(&self, ratio: f64) -> Tensor {
        self.map(|value| value * ratio)
    }

    /// Apply `f` to every leaf, preserving shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let v = Tensor::make([1.0, -2.0, 3.0]).unwrap();
    /// assert_eq!(v.map(|x| x * x), Tensor::make([1.0, 4.0, 9.0]).unwrap());
    /// ```
    pub fn map<F>(&self, f: F) -> Tensor
    where
        F: Fn(f64) -> f64 + Copy,
    {
        match self {
            Tensor::Scalar(value) => Tensor::Scalar(f(*value)),
            Tensor::Nested(components) => {
                Tensor::Nested(components.iter().map(|component| component.map(f)).collect())
            }
        }
    }

    /// Element-wise absolute value.
    pub fn abs(&self) -> Tensor {
        self.map(f64::abs)
    }

    /// Element-wise square root.
    pub fn sqrt(&self) -> Tensor {
        self.map(f64::sqrt)
    }

    /// Element-wise power.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let v = Tensor::make([1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.powf(2.0), Tensor::make([1.0, 4.0, 9.0]).unwrap());
    /// ```
    pub fn powf(&self, exponent: f64) -> Tensor {
        self.map(|value| value.powf(exponent))
    }
}
