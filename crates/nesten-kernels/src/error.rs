//! Error types for tensor product kernels
//!
//! This module provides structured error types for the product operations,
//! making contraction failures informative at the call site.

use std::fmt;

use nesten_core::TensorError;

/// Error type for tensor product kernels
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// The right operand's shape is not a leading prefix of the left
    /// operand's shape (and the right operand is not a scalar)
    ContractionMismatch {
        shape_a: Vec<usize>,
        shape_b: Vec<usize>,
    },

    /// A core tensor error surfaced inside a kernel
    Core(TensorError),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::ContractionMismatch { shape_a, shape_b } => write!(
                f,
                "inner product: left operand shape {:?} does not dimensionally contain right operand shape {:?}",
                shape_a, shape_b
            ),

            KernelError::Core(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for KernelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KernelError::Core(err) => Some(err),
            KernelError::ContractionMismatch { .. } => None,
        }
    }
}

impl From<TensorError> for KernelError {
    fn from(err: TensorError) -> Self {
        KernelError::Core(err)
    }
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl KernelError {
    /// Create a contraction mismatch error
    pub fn contraction_mismatch(shape_a: &[usize], shape_b: &[usize]) -> Self {
        KernelError::ContractionMismatch {
            shape_a: shape_a.to_vec(),
            shape_b: shape_b.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contraction_mismatch_message() {
        let err = KernelError::contraction_mismatch(&[3], &[2, 2]);
        assert_eq!(
            err.to_string(),
            "inner product: left operand shape [3] does not dimensionally contain right operand shape [2, 2]"
        );
    }

    #[test]
    fn test_core_error_wraps() {
        let core = TensorError::dimension_mismatch("plus", &[2], &[3]);
        let err: KernelError = core.clone().into();
        assert_eq!(err, KernelError::Core(core));
        assert_eq!(err.to_string(), "plus: dimension mismatch - expected [2], got [3]");
    }
}
