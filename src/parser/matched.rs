//! The view a handler gets of the match it is converting.

use std::any::{Any, type_name};
use std::ops::Range;

use crate::error::UsageError;
use crate::value::Value;

/// The text and result of a successful match, handed to handlers.
///
/// Results are addressed by index: 0 is the node's own (post-flatten)
/// value, and `i >= 1` is the i-th entry of that value when it is a list,
/// i.e. the i-th child's contribution for a sequence or repetition.
///
/// The plain accessors panic on a bad index or an unexpected shape; the
/// `try_` variants return a [`UsageError`] instead.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    text: &'a [char],
    value: &'a Value,
    span: (usize, usize),
    depth: usize,
}

impl<'a> Match<'a> {
    pub(crate) fn new(
        text: &'a [char],
        value: &'a Value,
        span: Range<usize>,
        depth: usize,
    ) -> Self {
        Self {
            text,
            value,
            span: (span.start, span.end),
            depth,
        }
    }

    /// The matched text, without the whitespace skipped before it.
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn chars(&self) -> &'a [char] {
        self.text
    }

    /// Character offsets of the match within the parsed input.
    pub fn span(&self) -> Range<usize> {
        self.span.0..self.span.1
    }

    /// Invocation depth of the node being handled.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The node's own result.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Number of entries when the result is a list, otherwise 0.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The list entries, or an empty slice when the result is not a list.
    pub fn values(&self) -> &'a [Value] {
        self.value.as_list().unwrap_or(&[])
    }

    #[track_caller]
    pub fn get(&self, index: usize) -> &'a Value {
        match self.try_get(index) {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    pub fn try_get(&self, index: usize) -> Result<&'a Value, UsageError> {
        if index == 0 {
            return Ok(self.value);
        }
        match self.value {
            Value::List(items) => items.get(index - 1).ok_or(UsageError::IndexOutOfRange {
                index,
                len: items.len(),
            }),
            other => Err(UsageError::NotAList {
                index,
                found: other.kind_name(),
            }),
        }
    }

    #[track_caller]
    pub fn str(&self, index: usize) -> &'a str {
        match self.try_str(index) {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    pub fn try_str(&self, index: usize) -> Result<&'a str, UsageError> {
        let value = self.try_get(index)?;
        value.as_str().ok_or_else(|| mismatch(index, "text", value))
    }

    #[track_caller]
    pub fn float(&self, index: usize) -> f64 {
        match self.try_float(index) {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    pub fn try_float(&self, index: usize) -> Result<f64, UsageError> {
        let value = self.try_get(index)?;
        value.as_float().ok_or_else(|| mismatch(index, "float", value))
    }

    #[track_caller]
    pub fn int(&self, index: usize) -> i64 {
        match self.try_int(index) {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    pub fn try_int(&self, index: usize) -> Result<i64, UsageError> {
        let value = self.try_get(index)?;
        value.as_int().ok_or_else(|| mismatch(index, "int", value))
    }

    /// Borrow a custom value produced by a nested handler.
    #[track_caller]
    pub fn custom<T: Any>(&self, index: usize) -> &'a T {
        match self.try_custom(index) {
            Ok(value) => value,
            Err(err) => err.raise(),
        }
    }

    pub fn try_custom<T: Any>(&self, index: usize) -> Result<&'a T, UsageError> {
        let value = self.try_get(index)?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| mismatch(index, type_name::<T>(), value))
    }
}

fn mismatch(index: usize, expected: &'static str, value: &Value) -> UsageError {
    UsageError::ShapeMismatch {
        index,
        expected,
        found: value.kind_name(),
    }
}
