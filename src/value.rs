//! Result values threaded through a parse.
//!
//! Leaves produce [`Value::Absent`] or whatever their handler returns;
//! combinators collect child values into [`Value::List`] until a handler
//! turns them into something else.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A polymorphic parse result.
#[derive(Clone, Default)]
pub enum Value {
    /// No value: unhandled leaves and optional parsers that did not match.
    #[default]
    Absent,
    /// Matched text.
    Text(String),
    Float(f64),
    Int(i64),
    Strings(Vec<String>),
    /// Child values of a combinator, in match order.
    List(Vec<Value>),
    /// Any client type produced by a handler.
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wrap a client value.
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Value::Custom(Arc::new(value))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Value::Strings(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow a custom value as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Number of entries when this is a list, otherwise 0.
    pub fn len(&self) -> usize {
        match self {
            Value::List(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Text(_) => "text",
            Value::Float(_) => "float",
            Value::Int(_) => "int",
            Value::Strings(_) => "strings",
            Value::List(_) => "list",
            Value::Custom(_) => "custom",
        }
    }

    /// Collapse nested lists into their parent, `depth` levels deep.
    ///
    /// A depth of 0 flattens completely. Non-list values are returned
    /// unchanged, and non-list entries are kept as they are at any depth.
    ///
    /// ```text
    /// [a, [b, [c]]]  flatten(1) -> [a, b, [c]]
    /// [a, [b, [c]]]  flatten(0) -> [a, b, c]
    /// ```
    pub fn flatten(self, depth: usize) -> Value {
        let levels = if depth == 0 { None } else { Some(depth) };
        match self {
            Value::List(items) => {
                let mut flat = Vec::with_capacity(items.len());
                for item in items {
                    splice(&mut flat, item, levels);
                }
                Value::List(flat)
            }
            other => other,
        }
    }
}

fn splice(out: &mut Vec<Value>, item: Value, levels: Option<usize>) {
    match (item, levels) {
        (Value::List(inner), None) => {
            for value in inner {
                splice(out, value, None);
            }
        }
        (Value::List(inner), Some(n)) if n > 0 => {
            for value in inner {
                splice(out, value, Some(n - 1));
            }
        }
        (other, _) => out.push(other),
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("Absent"),
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Value::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Value::Strings(items) => f.debug_tuple("Strings").field(items).finish(),
            Value::List(items) => f.debug_list().entries(items).finish(),
            Value::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Custom values compare by identity, everything else structurally.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Absent, Value::Absent) => true,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Strings(a), Value::Strings(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Strings(items)
    }
}
