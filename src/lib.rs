//! # pegweave
//!
//! Composable PEG parser combinators: build recursive-descent parsers in
//! code from literal and character-class matchers, sequences, ordered
//! choices, repetitions and optional parts.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Combinators, invocation engine, handlers, converters, tracing
//!   ↓
//! value     → Polymorphic results, flattening
//!   ↓
//! error     → Usage errors
//! ```
//!
//! ## Example
//!
//! ```
//! use pegweave::{any_of, one_or_more, sequence, Float};
//!
//! let digits = one_or_more([any_of("0123456789")]).adjacent();
//! let number = sequence([digits.clone(), ".".into(), digits])
//!     .adjacent()
//!     .convert(Float);
//!
//! let outcome = number.parse("  3.25");
//! assert!(outcome.matched);
//! assert_eq!(outcome.consumed, 6);
//! assert_eq!(outcome.value.as_float(), Some(3.25));
//! ```

/// Usage errors: mistakes in grammar construction or result access
pub mod error;

/// Parser nodes, combinators and the invocation engine
pub mod parser;

/// Result values and flattening
pub mod value;

pub use error::UsageError;
pub use parser::{
    Converter, Float, Int, Match, NoopSink, Outcome, ParseOptions, Parser, Strings, Text,
    TraceEvent, TraceSink, TracingSink, any_of, deferred, literal, one_of, one_or_more, optional,
    sequence, zero_or_more,
};
pub use value::Value;
