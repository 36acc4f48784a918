//! PEG parser combinators
//!
//! Grammars are trees of [`Parser`] nodes built in code:
//!
//! ```text
//! Leaves       → any_of, literal
//!     ↓
//! Combinators  → sequence, one_of, zero_or_more, one_or_more, optional
//!     ↓
//! deferred     → placeholder bound later, for recursive rules
//!     ↓
//! Decorators   → adjacent, handle, convert, pick, flatten, describe, debug
//! ```
//!
//! ## Invocation
//!
//! Every match attempt runs through one engine (see `engine.rs`): leading
//! whitespace is skipped unless an adjacent ancestor is active, the node's
//! rule runs, and the raw result is flattened and handed to the node's
//! handler. All mutable bookkeeping lives in a per-call session, so trees
//! are immutable while parsing and may be shared across threads.
//!
//! ## Results
//!
//! Leaves yield [`Value::Absent`](crate::Value::Absent) (literals yield
//! their text), sequences and repetitions yield a list with one entry per
//! matched child, and handlers replace that with whatever they return.

mod combinators;
mod convert;
mod engine;
mod matched;
mod node;
mod options;
mod session;
mod trace;

pub use combinators::{
    any_of, deferred, literal, one_of, one_or_more, optional, sequence, zero_or_more,
};
pub use convert::{Converter, Float, Int, Strings, Text};
pub use engine::Outcome;
pub use matched::Match;
pub use node::Parser;
pub use options::ParseOptions;
pub use trace::{NoopSink, TraceEvent, TraceSink, TracingSink};
