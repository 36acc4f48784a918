//! Parser constructors and the matching rule of each node kind.
//!
//! Constructors that take sub-parsers accept anything convertible into a
//! [`Parser`]; plain strings become [`literal`] matchers.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use smol_str::{SmolStr, format_smolstr};

use super::engine::Outcome;
use super::node::{NodeKind, Parser};
use super::session::Session;
use crate::value::Value;

impl From<&str> for Parser {
    fn from(text: &str) -> Self {
        literal(text)
    }
}

impl From<String> for Parser {
    fn from(text: String) -> Self {
        literal(&text)
    }
}

impl From<&Parser> for Parser {
    fn from(parser: &Parser) -> Self {
        parser.clone()
    }
}

fn collect<I>(parsers: I) -> Vec<Parser>
where
    I: IntoIterator,
    I::Item: Into<Parser>,
{
    parsers.into_iter().map(Into::into).collect()
}

// =============================================================================
// Leaves
// =============================================================================

/// Match one character out of `chars`.
pub fn any_of(chars: &str) -> Parser {
    Parser::new(
        format_smolstr!("AnyOf({chars})"),
        false,
        NodeKind::CharSet(chars.chars().collect()),
    )
}

/// Match `text` exactly. The default handler yields the matched text.
pub fn literal(text: &str) -> Parser {
    Parser::new(
        format_smolstr!("Literal({text})"),
        text.is_empty(),
        NodeKind::Literal(text.chars().collect()),
    )
    .handle(|m| Value::Text(m.text()))
}

// =============================================================================
// Combinators
// =============================================================================

/// Match every parser in turn. The result lists each child's value.
pub fn sequence<I>(parsers: I) -> Parser
where
    I: IntoIterator,
    I::Item: Into<Parser>,
{
    Parser::new(
        SmolStr::new_static("Sequence"),
        false,
        NodeKind::Sequence(collect(parsers)),
    )
}

/// Ordered choice: the first parser that matches wins.
pub fn one_of<I>(parsers: I) -> Parser
where
    I: IntoIterator,
    I::Item: Into<Parser>,
{
    Parser::new(
        SmolStr::new_static("OneOf"),
        false,
        NodeKind::Choice(collect(parsers)),
    )
}

/// Greedily match any of the candidates, as many times as possible.
///
/// A candidate that matches without consuming input ends the repetition.
pub fn zero_or_more<I>(candidates: I) -> Parser
where
    I: IntoIterator,
    I::Item: Into<Parser>,
{
    Parser::new(
        SmolStr::new_static("ZeroOrMore"),
        true,
        NodeKind::Repeat {
            at_least_one: false,
            candidates: collect(candidates),
        },
    )
}

/// Like [`zero_or_more`], but at least one repetition must match.
pub fn one_or_more<I>(candidates: I) -> Parser
where
    I: IntoIterator,
    I::Item: Into<Parser>,
{
    Parser::new(
        SmolStr::new_static("OneOrMore"),
        false,
        NodeKind::Repeat {
            at_least_one: true,
            candidates: collect(candidates),
        },
    )
}

/// Match `parser` if possible, otherwise succeed with nothing.
pub fn optional(parser: impl Into<Parser>) -> Parser {
    Parser::new(
        SmolStr::new_static("Optional"),
        true,
        NodeKind::Optional(parser.into()),
    )
}

/// A placeholder for a rule defined later; see [`Parser::bind`].
///
/// ```
/// use pegweave::{deferred, one_of, sequence};
///
/// let expr = deferred().describe("expr");
/// let atom = one_of([sequence(["(".into(), expr.clone(), ")".into()]), "x".into()]);
/// expr.bind(atom);
/// assert!(expr.parse("((x))").matched);
/// ```
pub fn deferred() -> Parser {
    Parser::new(
        SmolStr::new_static("Deferred"),
        false,
        NodeKind::Deferred(Arc::new(OnceCell::new())),
    )
}

// =============================================================================
// Matching rules
// =============================================================================

impl NodeKind {
    /// Match this kind against `input`, which already had leading
    /// whitespace skipped and is non-empty unless the node allows empty
    /// matches.
    pub(crate) fn apply(
        &self,
        description: &str,
        session: &mut Session<'_>,
        input: &[char],
    ) -> Outcome {
        match self {
            NodeKind::CharSet(chars) => match input.first() {
                Some(c) if chars.contains(c) => Outcome::success(1, Value::Absent),
                _ => Outcome::failure(),
            },
            NodeKind::Literal(target) => {
                if input.starts_with(target) {
                    Outcome::success(target.len(), Value::Absent)
                } else {
                    Outcome::failure()
                }
            }
            NodeKind::Sequence(children) => match_sequence(children, session, input),
            NodeKind::Choice(children) => children
                .iter()
                .map(|child| child.invoke(session, input))
                .find(|outcome| outcome.matched)
                .unwrap_or_else(Outcome::failure),
            NodeKind::Repeat {
                at_least_one,
                candidates,
            } => match_repeat(*at_least_one, candidates, session, input),
            NodeKind::Optional(child) => {
                let outcome = child.invoke(session, input);
                if outcome.matched {
                    outcome
                } else {
                    Outcome::success(0, Value::Absent)
                }
            }
            NodeKind::Deferred(slot) => Parser::target(slot, description).invoke(session, input),
        }
    }
}

fn match_sequence(children: &[Parser], session: &mut Session<'_>, mut input: &[char]) -> Outcome {
    let mut used = 0;
    let mut results = Vec::with_capacity(children.len());
    for child in children {
        let outcome = child.invoke(session, input);
        if !outcome.matched {
            return Outcome::failure();
        }
        used += outcome.consumed;
        input = &input[outcome.consumed..];
        results.push(outcome.value);
    }
    Outcome::success(used, Value::List(results))
}

fn match_repeat(
    at_least_one: bool,
    candidates: &[Parser],
    session: &mut Session<'_>,
    mut input: &[char],
) -> Outcome {
    let mut used = 0;
    let mut results = Vec::new();
    'rounds: loop {
        for candidate in candidates {
            let outcome = candidate.invoke(session, input);
            if !outcome.matched {
                continue;
            }
            used += outcome.consumed;
            input = &input[outcome.consumed..];
            results.push(outcome.value);
            if outcome.consumed == 0 {
                // would match at the same position forever
                break 'rounds;
            }
            continue 'rounds;
        }
        break;
    }
    if at_least_one && results.is_empty() {
        return Outcome::failure();
    }
    Outcome::success(used, Value::List(results))
}
