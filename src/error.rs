//! Usage errors.
//!
//! A failed match is not an error: it is reported through
//! [`Outcome::matched`](crate::Outcome::matched). The errors here are
//! programming mistakes in how a grammar is built or how a handler reads
//! its results. Panicking APIs raise them with their display text; the
//! `try_` variants hand them back instead.

use thiserror::Error;

/// Mistakes in grammar construction or result access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A deferred node was invoked before `bind` was called on it.
    #[error("deferred parser '{0}' was invoked before being bound")]
    UnboundDeferred(String),

    /// `bind` was called on a deferred node that already has a target.
    #[error("deferred parser '{0}' is already bound")]
    AlreadyBound(String),

    /// A deferred node was bound to itself.
    #[error("deferred parser '{0}' cannot be bound to itself")]
    SelfBound(String),

    /// `bind` was called on a parser that is not a deferred node.
    #[error("parser '{0}' is not a deferred parser and cannot be bound")]
    NotDeferred(String),

    /// A result-shaping decorator was applied to a deferred node, whose
    /// result is always its target's result.
    #[error("'{decorator}' cannot be applied to deferred parser '{parser}'")]
    DecoratedDeferred {
        decorator: &'static str,
        parser: String,
    },

    /// A result index past the end of the sequence.
    #[error("result index {index} is out of range (result has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A positive index was requested from a result that is not a sequence.
    #[error("result index {index} requested from a {found} result, expected a list")]
    NotAList { index: usize, found: &'static str },

    /// A result had a different kind than the accessor expected.
    #[error("result {index} is {found}, expected {expected}")]
    ShapeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

impl UsageError {
    /// Abort with this error. Usage errors are bugs in the calling code.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = UsageError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "result index 4 is out of range (result has 2 entries)"
        );

        let err = UsageError::ShapeMismatch {
            index: 1,
            expected: "float",
            found: "text",
        };
        assert_eq!(err.to_string(), "result 1 is text, expected float");
    }

    #[test]
    #[should_panic(expected = "deferred parser 'expr' was invoked before being bound")]
    fn test_raise_panics_with_message() {
        UsageError::UnboundDeferred("expr".to_string()).raise();
    }
}
