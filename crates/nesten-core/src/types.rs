//! Core type definitions for NesTen tensors.
//!
//! This module defines the shape vocabulary used throughout the NesTen
//! stack: the rank of a tensor and its per-axis shape. A shape is always
//! *derived* from a tensor's structure; no tensor stores one.

use smallvec::SmallVec;

/// Type alias for tensor rank (number of axes).
///
/// 0 for a scalar, 1 for a vector, 2 for a matrix, and so on.
///
/// # Examples
///
/// ```
/// use nesten_core::{Rank, Tensor};
///
/// let matrix = Tensor::zero(&[2, 3]);
/// let rank: Rank = matrix.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 axes (covers most use cases), with
/// automatic fallback to heap allocation for higher ranks. The empty shape
/// `[]` is the shape of a scalar.
///
/// # Examples
///
/// ```
/// use nesten_core::{Shape, Tensor};
///
/// let tensor = Tensor::zero(&[2, 3, 4]);
/// let shape: Shape = tensor.shape();
/// assert_eq!(shape.as_slice(), &[2, 3, 4]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;
