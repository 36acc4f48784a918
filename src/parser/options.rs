//! Per-call parse configuration.

/// Options for [`Parser::parse_with`](crate::Parser::parse_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Trace depth for this call, overriding the root's `debug` setting.
    pub trace_depth: Option<usize>,
    /// Skip leading whitespace before each parser outside adjacent regions.
    /// When `false` the whole parse behaves as if the root were adjacent.
    pub skip_whitespace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            trace_depth: None,
            skip_whitespace: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trace_depth(mut self, depth: usize) -> Self {
        self.trace_depth = Some(depth);
        self
    }

    pub fn without_whitespace_skipping(mut self) -> Self {
        self.skip_whitespace = false;
        self
    }
}
