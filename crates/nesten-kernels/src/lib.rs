//! # nesten-kernels
//!
//! Multi-operand tensor products for NesTen.
//!
//! ## Overview
//!
//! This crate provides the product operations of the NesTen algebra as free
//! functions over `nesten_core::Tensor`:
//!
//! - **Outer product** ([`outer`]) - rank-additive product whose shape is the
//!   concatenation of both operands' shapes
//! - **Inner product** ([`inner`], [`dot`]) - contraction of the left
//!   operand's leading ranks against all ranks of the right operand
//! - **Reductions** ([`norm`], [`sum_all`]) - whole-tensor reductions defined
//!   through the contraction
//!
//! All operations are pure: operands are never mutated, results are newly
//! constructed, and every shape violation surfaces as an error at the call
//! site.
//!
//! ## Quick Start
//!
//! ```
//! use nesten_core::Tensor;
//! use nesten_kernels::{inner, norm, outer};
//!
//! let a = Tensor::make([1.0, 2.0]).unwrap();
//! let b = Tensor::make([3.0, 4.0]).unwrap();
//!
//! // Outer product concatenates shapes: [2] ++ [2] -> [2, 2]
//! let product = outer(&a, &b);
//! assert_eq!(product, Tensor::make([[3.0, 4.0], [6.0, 8.0]]).unwrap());
//!
//! // Inner product of equal-length vectors is their dot product
//! let dot = inner(&a, &b).unwrap();
//! assert_eq!(dot, Tensor::scalar(11.0));
//!
//! // Euclidean norm through full self-contraction
//! assert_eq!(norm(&Tensor::make([3.0, 4.0]).unwrap()), 5.0);
//! ```

#![deny(warnings)]

pub mod contractions;
pub mod error;
pub mod outer;
pub mod reductions;


// Re-export all public APIs
pub use contractions::*;
pub use error::{KernelError, KernelResult};
pub use outer::*;
pub use reductions::*;
