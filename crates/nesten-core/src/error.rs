//! Error types for core tensor operations
//!
//! All invariant violations in nesten-core surface through [`TensorError`]:
//! shape errors at construction time, operand errors at call time, and
//! structural errors from the textual parser. Errors propagate to the
//! immediate caller; there is no internal retry or recovery.
//!
//! # Examples
//!
//! ```
//! use nesten_core::{Tensor, TensorError};
//!
//! let a = Tensor::make([1.0, 2.0]).unwrap();
//! let b = Tensor::make([1.0, 2.0, 3.0]).unwrap();
//! let err = a.plus(&b).unwrap_err();
//! assert!(matches!(err, TensorError::DimensionMismatch { .. }));
//! ```

use thiserror::Error;

/// Error type for core tensor operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    /// Construction was asked to build a tensor out of nothing at all
    #[error("no input received")]
    MissingInput,

    /// Shapes that were required to match did not
    #[error("{operation}: dimension mismatch - expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        operation: String,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// Textual input that could not be read as a tensor literal
    #[error("malformed tensor literal: {reason}")]
    Parse { reason: String },
}

/// Result type alias for core tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

impl TensorError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(
        operation: impl Into<String>,
        expected: &[usize],
        got: &[usize],
    ) -> Self {
        TensorError::DimensionMismatch {
            operation: operation.into(),
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a parse error with a reason
    pub fn parse(reason: impl Into<String>) -> Self {
        TensorError::Parse {
            reason: reason.into(),
        }
    }
}
