//! The invocation protocol shared by every node.
//!
//! Each attempt to match a node goes through [`Parser::invoke`]:
//!
//! ```text
//! skip leading whitespace (unless inside an adjacent region)
//!     ↓
//! reject empty input for nodes that need at least one character
//!     ↓
//! node-specific rule (adjacent nodes suppress skipping for descendants)
//!     ↓
//! flatten the raw result, if requested
//!     ↓
//! run the handler, if any
//! ```
//!
//! A failed attempt always reports zero consumption, so callers backtrack
//! by simply trying the next alternative on the same input.

use super::matched::Match;
use super::node::{NodeKind, Parser};
use super::options::ParseOptions;
use super::session::Session;
use super::trace::{TraceEvent, TraceSink, TracingSink};
use crate::value::Value;

/// Result of matching a parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub matched: bool,
    /// Characters consumed, including skipped leading whitespace.
    pub consumed: usize,
    pub value: Value,
}

impl Outcome {
    pub fn success(consumed: usize, value: Value) -> Self {
        Self {
            matched: true,
            consumed,
            value,
        }
    }

    pub fn failure() -> Self {
        Self {
            matched: false,
            consumed: 0,
            value: Value::Absent,
        }
    }

    /// Whether the match covered all of `text`.
    pub fn is_complete(&self, text: &str) -> bool {
        self.matched && self.consumed == text.chars().count()
    }
}

impl Parser {
    /// Match this parser against the start of `text`.
    ///
    /// Trailing input that was not consumed is not an error; compare
    /// [`Outcome::consumed`] with the input length, or use
    /// [`Outcome::is_complete`], to require a full match. Trace events go to
    /// `tracing` when the parser was given a [`debug`](Parser::debug) depth.
    pub fn parse(&self, text: &str) -> Outcome {
        self.parse_with(text, &ParseOptions::default(), &mut TracingSink)
    }

    /// Match with explicit options and trace sink.
    pub fn parse_with(
        &self,
        text: &str,
        options: &ParseOptions,
        sink: &mut dyn TraceSink,
    ) -> Outcome {
        let input: Vec<char> = text.chars().collect();
        let mut session = Session::new(&input, self.node.trace_depth, options, sink);
        self.invoke(&mut session, &input)
    }

    pub(crate) fn invoke(&self, session: &mut Session<'_>, input: &[char]) -> Outcome {
        let description = &self.node.description;
        session.trace(description, TraceEvent::Enter { remaining: input });
        let outcome = {
            let mut frame = session.enter();
            self.attempt(&mut frame, input)
        };
        session.trace(description, TraceEvent::Exit { outcome: &outcome });
        outcome
    }

    fn attempt(&self, session: &mut Session<'_>, input: &[char]) -> Outcome {
        let node = &*self.node;

        let space = session.leading_space(input);
        let input = &input[space..];
        if input.is_empty() && !self.accepts_empty() {
            return Outcome::failure();
        }

        let raw = {
            let mut region = session.adjacency(node.adjacent);
            node.kind.apply(&node.description, &mut region, input)
        };
        if !raw.matched {
            return Outcome::failure();
        }
        let Outcome {
            consumed: used,
            mut value,
            ..
        } = raw;

        if let Some(depth) = node.flatten {
            value = flatten_traced(session, &node.description, value, depth);
        }

        if let Some(handler) = &node.handler {
            let start = session.offset_of(input);
            session.trace(&node.description, TraceEvent::HandlerInput { value: &value });
            let matched = Match::new(&input[..used], &value, start..start + used, session.depth);
            match handler(&matched) {
                Some(converted) => {
                    session.trace(
                        &node.description,
                        TraceEvent::HandlerOutput { value: &converted },
                    );
                    value = converted;
                }
                None => {
                    session.trace(&node.description, TraceEvent::HandlerRejected);
                    return Outcome::failure();
                }
            }
        }

        Outcome::success(used + space, value)
    }

    /// `allows_empty`, except that an unbound deferred node is a usage
    /// error rather than a quiet rejection.
    fn accepts_empty(&self) -> bool {
        match &self.node.kind {
            NodeKind::Deferred(slot) => {
                Parser::target(slot, &self.node.description).accepts_empty()
            }
            _ => self.node.allows_empty,
        }
    }
}

fn flatten_traced(
    session: &mut Session<'_>,
    description: &str,
    value: Value,
    depth: usize,
) -> Value {
    if !value.is_list() {
        session.trace(description, TraceEvent::FlattenSkipped { value: &value });
        return value;
    }
    if !session.is_tracing() {
        return value.flatten(depth);
    }
    let before = value.clone();
    let after = value.flatten(depth);
    session.trace(description, TraceEvent::Flatten { before: &before, after: &after });
    after
}
