//! # nesten-core
//!
//! Core recursive tensor types and element-wise algebra for NesTen.
//!
//! This crate provides the foundational building blocks of the NesTen stack:
//!
//! - **Recursive tensor representation** ([`Tensor`]): a closed sum type
//!   whose rank-0 case is a scalar and whose rank-N case is an ordered
//!   sequence of rank-(N-1) components of identical shape
//! - **Derived shapes** ([`Shape`]): a tensor's shape is computed from its
//!   structure, never stored
//! - **Construction & validation** ([`Tensor::make`]): nested Rust literals
//!   convert into tensors with eager per-level shape checking
//! - **Element-wise algebra**: [`Tensor::plus`], [`Tensor::scale`], and
//!   leaf-wise transforms
//! - **Rendering & parsing**: bracketed textual form with a round-tripping
//!   parser
//!
//! Multi-operand products (outer and inner/contracted products) live in the
//! companion `nesten-kernels` crate.
//!
//! ## Core Principles
//!
//! ### One recursive definition
//!
//! Every operation is a match over the two variants of [`Tensor`], recursing
//! into nested components and terminating at the scalar base case. Rank-0,
//! rank-1, and arbitrary higher ranks all flow through the same code path.
//!
//! ### Immutability
//!
//! Tensors are immutable value objects. Every operation returns a newly
//! constructed tensor; nothing mutates an existing one. This makes the
//! algebra trivially safe to evaluate concurrently.
//!
//! ### Eager validation
//!
//! Structural validity (all components of a tensor share one shape) is
//! established once at construction and never re-checked.
//!
//! ## Quick Start
//!
//! ```
//! use nesten_core::Tensor;
//!
//! // Build a 2x3 matrix from a nested literal
//! let matrix = Tensor::make([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
//! assert_eq!(matrix.shape().as_slice(), &[2, 3]);
//! assert_eq!(matrix.rank(), 2);
//!
//! // Element-wise arithmetic
//! let doubled = matrix.scale(2.0);
//! let sum = matrix.plus(&doubled).unwrap();
//! assert_eq!(sum, matrix.scale(3.0));
//!
//! // Rendering round-trips through the parser
//! let rendered = sum.to_string();
//! assert_eq!(rendered.parse::<Tensor>().unwrap(), sum);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<_, TensorError>`; every invariant
//! violation surfaces as an immediate error rather than a silently wrong
//! result:
//!
//! ```
//! use nesten_core::{Tensor, TensorError};
//!
//! // Jagged components are rejected at construction
//! let jagged = Tensor::make([vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
//! assert!(matches!(jagged, Err(TensorError::DimensionMismatch { .. })));
//! ```
//!
//! One documented leniency: a non-numeric leaf (NaN, or an unreadable atom in
//! the textual form) is coerced to `0`, never left invalid.
//!
//! ## Features
//!
//! - `serde`: enable serialization/deserialization support for [`Tensor`]

#![deny(warnings)]

pub mod error;
pub mod tensor;
pub mod types;


pub use error::{TensorError, TensorResult};
pub use tensor::{NestedValue, Tensor};
pub use types::{Rank, Shape};
