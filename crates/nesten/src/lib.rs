//! # NesTen - Recursive Tensor Algebra
//!
//! Arbitrary-rank tensor algebra over nested numeric values: one recursive
//! definition covers scalars, vectors, and every higher rank.
//!
//! This is the **meta crate** that re-exports all NesTen components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use nesten::prelude::*;
//!
//! // Construct tensors of any rank from nested literals
//! let m = Tensor::make([[1.0, 2.0], [3.0, 4.0]])?;
//! let v = Tensor::make([5.0, 6.0])?;
//!
//! // Element-wise algebra
//! let doubled = m.scale(2.0);
//! assert_eq!(m.plus(&m)?, doubled);
//!
//! // Rank-additive outer product: [2, 2] ++ [2] -> [2, 2, 2]
//! assert_eq!(outer(&m, &v).shape().as_slice(), &[2, 2, 2]);
//!
//! // Contraction over the leading ranks
//! assert_eq!(inner(&m, &v)?, Tensor::make([23.0, 34.0])?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor Algebra ([`core`])
//!
//! The recursive [`Tensor`](core::Tensor) sum type, derived shapes,
//! construction/validation, element-wise operations, and the textual form.
//!
//! ### Product Kernels ([`kernels`])
//!
//! Outer products, inner (contracted) products, and norm reductions as free
//! functions over the core type.
//!
//! ## Features
//!
//! - `serde`: enable serialization/deserialization support for tensors

#![deny(warnings)]

// Re-export all components
pub use nesten_core as core;
pub use nesten_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use nesten::prelude::*;
    //!
    //! let tensor = Tensor::zero(&[2, 3]);
    //! assert_eq!(tensor.rank(), 2);
    //! ```

    // Core types
    pub use crate::core::{NestedValue, Rank, Shape, Tensor, TensorError, TensorResult};

    // Product kernels and reductions
    pub use crate::kernels::{dot, inner, norm, outer, sum_all, KernelError, KernelResult};
}
