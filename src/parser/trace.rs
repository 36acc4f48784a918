//! Invocation tracing.
//!
//! Tracing is observational only. A [`TraceSink`] receives events while the
//! parse's trace budget is positive; the budget shrinks by one per nesting
//! level, so `debug(3)` shows the root and two levels below it.

use super::engine::Outcome;
use crate::value::Value;

/// Something that happened while invoking a parser.
#[derive(Debug, Clone, Copy)]
pub enum TraceEvent<'a> {
    /// The parser is about to run on `remaining`.
    Enter { remaining: &'a [char] },
    /// The raw result was flattened.
    Flatten { before: &'a Value, after: &'a Value },
    /// A flatten depth is set but the result is not a list.
    FlattenSkipped { value: &'a Value },
    /// The handler is about to run on `value`.
    HandlerInput { value: &'a Value },
    /// The handler returned `value`.
    HandlerOutput { value: &'a Value },
    /// The handler rejected the match.
    HandlerRejected,
    /// The parser finished.
    Exit { outcome: &'a Outcome },
}

/// Receiver of trace events.
pub trait TraceSink {
    /// `depth` is the invocation nesting level, `parser` the node's
    /// description.
    fn record(&mut self, depth: usize, parser: &str, event: TraceEvent<'_>);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&mut self, _depth: usize, _parser: &str, _event: TraceEvent<'_>) {}
}

/// Forwards events to `tracing` at debug level, target `pegweave::trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&mut self, depth: usize, parser: &str, event: TraceEvent<'_>) {
        let indent = " ".repeat(depth * 4);
        match event {
            TraceEvent::Enter { remaining } => {
                let remaining: String = remaining.iter().collect();
                tracing::debug!(
                    target: "pegweave::trace",
                    depth,
                    "{indent}-> {parser} on '{remaining}'"
                );
            }
            TraceEvent::Flatten { before, after } => {
                tracing::debug!(
                    target: "pegweave::trace",
                    depth,
                    "{indent}flatten {before:?} => {after:?}"
                );
            }
            TraceEvent::FlattenSkipped { value } => {
                tracing::debug!(
                    target: "pegweave::trace",
                    depth,
                    "{indent}can't flatten {value:?}"
                );
            }
            TraceEvent::HandlerInput { value } => {
                tracing::debug!(target: "pegweave::trace", depth, "{indent}handler <= {value:?}");
            }
            TraceEvent::HandlerOutput { value } => {
                tracing::debug!(target: "pegweave::trace", depth, "{indent}handler => {value:?}");
            }
            TraceEvent::HandlerRejected => {
                tracing::debug!(
                    target: "pegweave::trace",
                    depth,
                    "{indent}handler rejected the match"
                );
            }
            TraceEvent::Exit { outcome } => {
                tracing::debug!(
                    target: "pegweave::trace",
                    depth,
                    "{indent}<- {parser} {}, len={}, result={:?}",
                    outcome.matched,
                    outcome.consumed,
                    outcome.value
                );
            }
        }
    }
}
