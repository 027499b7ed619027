//! Parsing tensors from their bracketed textual form
//!
//! The parser accepts what `Display` renders: nested bracket lists with
//! comma-separated items, e.g. `[[1, 2], [3, 4]]`, or a bare number for a
//! scalar. Whitespace is insignificant.
//!
//! Following the construction leniency, an atom that does not read as a
//! number parses as `0`. Structural problems are strict errors: empty input
//! is [`TensorError::MissingInput`], unbalanced brackets or trailing input
//! are [`TensorError::Parse`], and jagged nesting is rejected by the same
//! validation as [`Tensor::make`].

use std::str::FromStr;

use crate::error::{TensorError, TensorResult};

use super::creation::NestedValue;
use super::types::Tensor;

impl FromStr for Tensor {
    type Err = TensorError;

    /// Parse a tensor from its bracketed textual form.
    ///
    /// # Examples
    ///
    /// ```
    /// use nesten_core::{Tensor, TensorError};
    ///
    /// let t: Tensor = "[[1, 2], [3, 4]]".parse().unwrap();
    /// assert_eq!(t, Tensor::make([[1.0, 2.0], [3.0, 4.0]]).unwrap());
    ///
    /// assert_eq!("".parse::<Tensor>(), Err(TensorError::MissingInput));
    /// assert!("[1, 2".parse::<Tensor>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(TensorError::MissingInput);
        }
        let mut parser = Parser { input, pos: 0 };
        let value = parser.value()?;
        parser.skip_whitespace();
        if parser.pos < parser.input.len() {
            return Err(TensorError::parse("unexpected trailing input"));
        }
        Tensor::make(value)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn value(&mut self) -> TensorResult<NestedValue> {
        self.skip_whitespace();
        match self.peek() {
            Some('[') => self.list(),
            Some(_) => Ok(self.atom()),
            None => Err(TensorError::parse("unexpected end of input")),
        }
    }

    fn list(&mut self) -> TensorResult<NestedValue> {
        self.bump(); // consume '['
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.bump();
            return Ok(NestedValue::List(items));
        }
        loop {
            items.push(self.value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.bump(),
                Some(']') => {
                    self.bump();
                    return Ok(NestedValue::List(items));
                }
                Some(other) => {
                    return Err(TensorError::parse(format!(
                        "expected ',' or ']', found '{}'",
                        other
                    )))
                }
                None => return Err(TensorError::parse("unbalanced brackets")),
            }
        }
    }

    // Atoms run to the next delimiter; unreadable ones coerce to zero.
    fn atom(&mut self) -> NestedValue {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == ',' || c == ']' {
                break;
            }
            self.bump();
        }
        let token = self.input[start..self.pos].trim();
        NestedValue::Leaf(token.parse::<f64>().unwrap_or(0.0))
    }
}
