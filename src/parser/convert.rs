//! Converters from matched text or sub-results to typed values.
//!
//! Conversion is strict: text that does not parse as the requested number
//! rejects the match, so an enclosing choice can try its next alternative.

use super::matched::Match;
use crate::value::Value;

/// Turns a match into a value, or `None` to reject the match.
///
/// Closures with the matching signature are converters too.
pub trait Converter: Send + Sync {
    fn convert(&self, m: &Match<'_>) -> Option<Value>;
}

impl<F> Converter for F
where
    F: Fn(&Match<'_>) -> Option<Value> + Send + Sync,
{
    fn convert(&self, m: &Match<'_>) -> Option<Value> {
        self(m)
    }
}

/// Matched text as a 64-bit float.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

/// Matched text as a base-10 64-bit integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int;

/// Matched text, verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

/// A list of text results gathered into [`Value::Strings`].
///
/// Every entry must be text; anything else is a usage error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strings;

impl Converter for Float {
    fn convert(&self, m: &Match<'_>) -> Option<Value> {
        m.text().parse::<f64>().ok().map(Value::Float)
    }
}

impl Converter for Int {
    fn convert(&self, m: &Match<'_>) -> Option<Value> {
        m.text().parse::<i64>().ok().map(Value::Int)
    }
}

impl Converter for Text {
    fn convert(&self, m: &Match<'_>) -> Option<Value> {
        Some(Value::Text(m.text()))
    }
}

impl Converter for Strings {
    fn convert(&self, m: &Match<'_>) -> Option<Value> {
        let strings = (1..=m.len()).map(|i| m.str(i).to_string()).collect();
        Some(Value::Strings(strings))
    }
}
