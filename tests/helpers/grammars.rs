//! Small grammars built on the combinators.

use pegweave::{
    Float, Match, Parser, Value, any_of, deferred, literal, one_of, one_or_more, optional,
    sequence, zero_or_more,
};

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_";
pub const DIGITS: &str = "0123456789";

/// `letter (letter | digit)*` with no inner whitespace, yielding its text.
pub fn identifier() -> Parser {
    let letter = any_of(LETTERS);
    let digit = any_of(DIGITS);
    sequence([letter.clone(), zero_or_more([one_of([letter, digit])])])
        .adjacent()
        .describe("identifier")
        .handle(|m| Value::Text(m.text()))
}

/// A pending binary operation: the operator and its right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub op: String,
    pub rhs: f64,
}

impl BinaryOp {
    pub fn apply(&self, lhs: f64) -> f64 {
        match self.op.as_str() {
            "+" => lhs + self.rhs,
            "-" => lhs - self.rhs,
            "*" => lhs * self.rhs,
            "/" => lhs / self.rhs,
            other => panic!("bad operator: {other}"),
        }
    }
}

fn make_op(m: &Match<'_>) -> Value {
    Value::custom(BinaryOp {
        op: m.str(1).to_string(),
        rhs: m.float(2),
    })
}

/// Left-to-right fold of `operand op*` after flattening.
fn fold_ops(m: &Match<'_>) -> Value {
    let mut acc = m.float(1);
    for i in 2..=m.len() {
        acc = m.custom::<BinaryOp>(i).apply(acc);
    }
    Value::Float(acc)
}

/// Floating-point calculator:
///
/// ```text
/// sum     := product (('+' | '-') product)*
/// product := term (('*' | '/') term)*
/// term    := number | '(' sum ')'
/// number  := digits? '.' digits | digits
/// ```
pub fn calculator() -> Parser {
    let digits = one_or_more([any_of(DIGITS)]).adjacent().describe("digits");
    let number = one_of([
        sequence([optional(&digits), literal("."), digits.clone()]),
        digits,
    ])
    .adjacent()
    .describe("number")
    .convert(Float);

    let expr = deferred().describe("expr");
    let term = one_of([number, sequence(["(".into(), expr.clone(), ")".into()]).pick(2)])
        .describe("term");

    let mul_op = sequence([one_of(["*", "/"]), term.clone()])
        .describe("mulop")
        .handle(make_op);
    let product = sequence([term, zero_or_more([mul_op])])
        .flatten(1)
        .describe("product")
        .handle(fold_ops);

    let add_op = sequence([one_of(["+", "-"]), product.clone()])
        .describe("addop")
        .handle(make_op);
    let sum = sequence([product, zero_or_more([add_op])])
        .flatten(1)
        .describe("sum")
        .handle(fold_ops);

    expr.bind(sum)
}

/// Evaluate `text` with a fresh calculator, requiring a complete match.
pub fn evaluate(text: &str) -> Option<f64> {
    let outcome = calculator().parse(text);
    if outcome.is_complete(text) {
        outcome.value.as_float()
    } else {
        None
    }
}
