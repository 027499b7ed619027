//! # Tensor - Trait Implementations
//!
//! This module contains trait implementations for [`Tensor`].
//!
//! ## Implemented Traits
//!
//! - `Display` - bracketed, comma-joined rendering of components; a scalar
//!   renders as its bare numeric value
//! - `Index<usize>` - panicking component access

use std::fmt;
use std::ops::Index;

use super::types::Tensor;

impl fmt::Display for Tensor {
    /// Render the tensor in its bracketed textual form.
    ///
    /// The rendered form re-parses to an equal tensor via `str::parse`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::Tensor;
    ///
    /// let m = Tensor::make([[1.0, 2.0], [3.0, 4.5]]).unwrap();
    /// assert_eq!(m.to_string(), "[[1, 2], [3, 4.5]]");
    /// assert_eq!(Tensor::scalar(-7.0).to_string(), "-7");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tensor::Scalar(value) => write!(f, "{}", value),
            Tensor::Nested(components) => {
                write!(f, "[")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", component)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Index<usize> for Tensor {
    type Output = Tensor;

    /// Access the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics when indexing a scalar or past the last component. Use
    /// [`Tensor::get`] for the non-panicking form.
    fn index(&self, index: usize) -> &Tensor {
        match self {
            Tensor::Scalar(_) => panic!("cannot index into a rank-0 tensor"),
            Tensor::Nested(components) => &components[index],
        }
    }
}
