//! Recursive tensor implementation and operations
//!
//! This module provides the [`Tensor`] sum type together with its operations,
//! organized into functional sub-modules.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod creation;
mod elementwise;
mod parse;
mod shape_ops;

// Trait implementations (Display, Index)
mod tensor_traits;

// Re-export the main types
pub use creation::NestedValue;
pub use types::Tensor;
