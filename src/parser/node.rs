//! Parser nodes and their builder-style decorators.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::convert::Converter;
use super::matched::Match;
use crate::error::UsageError;
use crate::value::Value;

/// Handler attached to a node. Returning `None` rejects the match.
pub(crate) type Handler = Arc<dyn Fn(&Match<'_>) -> Option<Value> + Send + Sync>;

/// A node of a parser tree.
///
/// Cloning is cheap and shares the node. Decorators take the handle by
/// value and return it: a clone that was already embedded in another
/// parser keeps the configuration it had at that point. The one exception
/// is [`bind`](Parser::bind), whose target is shared by every clone of the
/// deferred placeholder.
#[derive(Clone)]
pub struct Parser {
    pub(crate) node: Arc<Node>,
}

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) description: SmolStr,
    pub(crate) allows_empty: bool,
    pub(crate) adjacent: bool,
    /// Flatten depth, 0 meaning complete.
    pub(crate) flatten: Option<usize>,
    pub(crate) handler: Option<Handler>,
    /// Trace budget when this node is the root of a parse.
    pub(crate) trace_depth: usize,
}

#[derive(Clone)]
pub(crate) enum NodeKind {
    CharSet(FxHashSet<char>),
    Literal(Box<[char]>),
    Sequence(Vec<Parser>),
    Choice(Vec<Parser>),
    Repeat {
        at_least_one: bool,
        candidates: Vec<Parser>,
    },
    Optional(Parser),
    Deferred(Arc<OnceCell<Parser>>),
}

impl Parser {
    pub(crate) fn new(description: SmolStr, allows_empty: bool, kind: NodeKind) -> Self {
        Self {
            node: Arc::new(Node {
                kind,
                description,
                allows_empty,
                adjacent: false,
                flatten: None,
                handler: None,
                trace_depth: 0,
            }),
        }
    }

    /// Debug label of this node.
    pub fn description(&self) -> &str {
        &self.node.description
    }

    /// Whether a zero-length match counts as success.
    ///
    /// A deferred node answers for its target, and `false` while unbound.
    pub fn allows_empty(&self) -> bool {
        match &self.node.kind {
            NodeKind::Deferred(slot) => slot.get().is_some_and(Parser::allows_empty),
            _ => self.node.allows_empty,
        }
    }

    pub fn is_adjacent(&self) -> bool {
        self.node.adjacent
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self.node.kind, NodeKind::Deferred(_))
    }

    /// Whether a deferred node has been bound. Other nodes report `true`.
    pub fn is_bound(&self) -> bool {
        match &self.node.kind {
            NodeKind::Deferred(slot) => slot.get().is_some(),
            _ => true,
        }
    }

    // =========================================================================
    // Decorators
    // =========================================================================

    /// Disable whitespace skipping while this node and its descendants match.
    pub fn adjacent(self) -> Self {
        self.shaping("adjacent", |node| node.adjacent = true)
    }

    /// Replace this node's result with the handler's return value.
    pub fn handle<F>(self, handler: F) -> Self
    where
        F: Fn(&Match<'_>) -> Value + Send + Sync + 'static,
    {
        self.shaping("handle", move |node| {
            node.handler = Some(Arc::new(move |m: &Match<'_>| Some(handler(m))));
        })
    }

    /// Like [`handle`](Parser::handle), but `None` turns the match into a
    /// failure.
    pub fn try_handle<F>(self, handler: F) -> Self
    where
        F: Fn(&Match<'_>) -> Option<Value> + Send + Sync + 'static,
    {
        self.shaping("handle", move |node| node.handler = Some(Arc::new(handler)))
    }

    /// Convert the match with a [`Converter`].
    pub fn convert<C>(self, converter: C) -> Self
    where
        C: Converter + 'static,
    {
        self.try_handle(move |m| converter.convert(m))
    }

    /// Keep only the indexed result: 0 is the whole value, `i` the i-th
    /// child's.
    pub fn pick(self, index: usize) -> Self {
        self.handle(move |m| m.get(index).clone())
    }

    /// Collapse `depth` levels of nested results before the handler runs.
    /// A depth of 0 flattens completely.
    pub fn flatten(self, depth: usize) -> Self {
        self.shaping("flatten", |node| node.flatten = Some(depth))
    }

    /// Set the debug label.
    pub fn describe(mut self, label: impl AsRef<str>) -> Self {
        Arc::make_mut(&mut self.node).description = SmolStr::new(label);
        self
    }

    /// Trace `depth` levels of nested invocations when parsing from this
    /// node.
    pub fn debug(mut self, depth: usize) -> Self {
        Arc::make_mut(&mut self.node).trace_depth = depth;
        self
    }

    /// Bind a deferred node to the parser it stands for.
    ///
    /// # Panics
    ///
    /// If this is not a deferred node, if it is already bound, or if
    /// `target` is this same placeholder.
    #[track_caller]
    pub fn bind(&self, target: impl Into<Parser>) -> Self {
        match self.try_bind(target) {
            Ok(parser) => parser,
            Err(err) => err.raise(),
        }
    }

    pub fn try_bind(&self, target: impl Into<Parser>) -> Result<Self, UsageError> {
        let NodeKind::Deferred(slot) = &self.node.kind else {
            return Err(UsageError::NotDeferred(self.description().to_string()));
        };
        let target = target.into();
        if let NodeKind::Deferred(other) = &target.node.kind {
            if Arc::ptr_eq(slot, other) {
                return Err(UsageError::SelfBound(self.description().to_string()));
            }
        }
        slot.set(target)
            .map_err(|_| UsageError::AlreadyBound(self.description().to_string()))?;
        Ok(self.clone())
    }

    /// The bound target of a deferred node.
    #[track_caller]
    pub(crate) fn target<'s>(slot: &'s OnceCell<Parser>, description: &str) -> &'s Parser {
        match slot.get() {
            Some(target) => target,
            None => UsageError::UnboundDeferred(description.to_string()).raise(),
        }
    }

    /// Apply a decorator that changes the node's result or matching. A
    /// deferred node always yields its target's outcome, so these are
    /// refused there.
    #[track_caller]
    fn shaping(mut self, decorator: &'static str, apply: impl FnOnce(&mut Node)) -> Self {
        if self.is_deferred() {
            UsageError::DecoratedDeferred {
                decorator,
                parser: self.description().to_string(),
            }
            .raise();
        }
        apply(Arc::make_mut(&mut self.node));
        self
    }
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("description", &self.node.description)
            .field("allows_empty", &self.allows_empty())
            .field("adjacent", &self.node.adjacent)
            .field("flatten", &self.node.flatten)
            .field("handler", &self.node.handler.is_some())
            .finish()
    }
}
