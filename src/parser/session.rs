//! Per-parse mutable state.
//!
//! A session is created by each top-level parse call and threaded by
//! reference through every invocation, so parser trees themselves never
//! change while parsing and can be shared between threads.

use std::ops::{Deref, DerefMut};

use super::options::ParseOptions;
use super::trace::{TraceEvent, TraceSink};

pub(crate) struct Session<'a> {
    /// The whole input, for computing offsets of sub-slices.
    input: &'a [char],
    /// Nesting depth of invocations.
    pub(crate) depth: usize,
    /// Whitespace is skipped only while this is 0.
    no_skip: usize,
    /// Remaining nesting levels that emit trace events.
    trace_budget: isize,
    sink: &'a mut dyn TraceSink,
}

impl<'a> Session<'a> {
    pub(crate) fn new(
        input: &'a [char],
        trace_depth: usize,
        options: &ParseOptions,
        sink: &'a mut dyn TraceSink,
    ) -> Self {
        let trace_depth = options.trace_depth.unwrap_or(trace_depth);
        Self {
            input,
            depth: 0,
            no_skip: usize::from(!options.skip_whitespace),
            trace_budget: isize::try_from(trace_depth).unwrap_or(isize::MAX),
            sink,
        }
    }

    /// Offset of `rest`, a suffix of the session input, from the start.
    pub(crate) fn offset_of(&self, rest: &[char]) -> usize {
        self.input.len() - rest.len()
    }

    /// Length of the leading whitespace run, or 0 inside adjacent regions.
    pub(crate) fn leading_space(&self, input: &[char]) -> usize {
        if self.no_skip > 0 {
            return 0;
        }
        input.iter().take_while(|c| c.is_whitespace()).count()
    }

    pub(crate) fn is_tracing(&self) -> bool {
        self.trace_budget > 0
    }

    pub(crate) fn trace(&mut self, parser: &str, event: TraceEvent<'_>) {
        if self.is_tracing() {
            self.sink.record(self.depth, parser, event);
        }
    }

    /// Enter one invocation level. Restored when the frame drops.
    pub(crate) fn enter<'s>(&'s mut self) -> Frame<'s, 'a> {
        self.depth += 1;
        self.trace_budget -= 1;
        Frame { session: self }
    }

    /// Suppress whitespace skipping while the region lives, if `adjacent`.
    pub(crate) fn adjacency<'s>(&'s mut self, adjacent: bool) -> Adjacency<'s, 'a> {
        if adjacent {
            self.no_skip += 1;
        }
        Adjacency {
            session: self,
            adjacent,
        }
    }
}

/// One level of invocation depth.
pub(crate) struct Frame<'s, 'a> {
    session: &'s mut Session<'a>,
}

impl Drop for Frame<'_, '_> {
    fn drop(&mut self) {
        self.session.depth -= 1;
        self.session.trace_budget += 1;
    }
}

impl<'a> Deref for Frame<'_, 'a> {
    type Target = Session<'a>;

    fn deref(&self) -> &Self::Target {
        self.session
    }
}

impl DerefMut for Frame<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.session
    }
}

/// A region where whitespace is not skipped.
pub(crate) struct Adjacency<'s, 'a> {
    session: &'s mut Session<'a>,
    adjacent: bool,
}

impl Drop for Adjacency<'_, '_> {
    fn drop(&mut self) {
        if self.adjacent {
            self.session.no_skip -= 1;
        }
    }
}

impl<'a> Deref for Adjacency<'_, 'a> {
    type Target = Session<'a>;

    fn deref(&self) -> &Self::Target {
        self.session
    }
}

impl DerefMut for Adjacency<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.session
    }
}
