//! Deferred references and recursive grammars

use pegweave::{
    Outcome, UsageError, Value, any_of, deferred, literal, one_of, optional, sequence,
    zero_or_more,
};

#[test]
fn test_deferred_delegates_to_bound_target() {
    let placeholder = deferred();
    assert!(!placeholder.is_bound());
    placeholder.bind(literal("x"));
    assert!(placeholder.is_bound());
    assert_eq!(placeholder.parse("  x"), Outcome::success(3, Value::from("x")));
}

#[test]
fn test_binding_is_shared_by_embedded_copies() {
    let item = deferred().describe("item");
    let list = sequence(["[".into(), zero_or_more([item.clone()]), "]".into()]);
    item.bind(any_of("abc"));
    let outcome = list.parse("[a b c]");
    assert!(outcome.is_complete("[a b c]"));
}

#[test]
fn test_self_recursive_rule() {
    // nested := '(' nested? ')'
    let nested = deferred().describe("nested");
    nested.bind(
        sequence(["(".into(), optional(&nested), ")".into()])
            .handle(|m| Value::Int(1 + m.get(2).as_int().unwrap_or(0))),
    );
    assert_eq!(nested.parse("((()))").value, Value::Int(3));
    assert_eq!(nested.parse("( ( ) )").value, Value::Int(2));
    assert!(!nested.parse("(()").matched);
}

#[test]
fn test_mutually_recursive_rules() {
    // list := '[' value* ']'
    // value := atom | list
    let value = deferred().describe("value");
    let list = sequence(["[".into(), zero_or_more([value.clone()]), "]".into()])
        .handle(|m| Value::Int(m.get(2).len() as i64));
    value.bind(one_of([any_of("xyz").handle(|_| Value::Int(0)), list]));

    let outcome = value.parse("[x [y z] [] x]");
    assert!(outcome.is_complete("[x [y z] [] x]"));
    assert_eq!(outcome.value, Value::Int(4));
}

#[test]
fn test_deferred_target_can_be_reused_across_grammars() {
    let word = literal("hi");
    let first = deferred();
    let second = deferred();
    first.bind(&word);
    second.bind(&word);
    assert!(first.parse("hi").matched);
    assert!(second.parse("hi").matched);
}

#[test]
fn test_deferred_allows_empty_follows_target() {
    let placeholder = deferred();
    assert!(!placeholder.allows_empty());
    placeholder.bind(optional("x"));
    assert!(placeholder.allows_empty());
    assert_eq!(placeholder.parse(""), Outcome::success(0, Value::Absent));
}

#[test]
#[should_panic(expected = "deferred parser 'expr' was invoked before being bound")]
fn test_unbound_deferred_panics_when_invoked() {
    let expr = deferred().describe("expr");
    let statement = sequence([expr, literal(";")]);
    statement.parse("x;");
}

#[test]
#[should_panic(expected = "deferred parser 'expr' was invoked before being bound")]
fn test_unbound_deferred_panics_on_empty_input() {
    deferred().describe("expr").parse("");
}

#[test]
fn test_second_bind_is_rejected() {
    let placeholder = deferred().describe("rule");
    placeholder.bind("a");
    assert_eq!(
        placeholder.try_bind("b").unwrap_err(),
        UsageError::AlreadyBound("rule".to_string())
    );
    assert!(placeholder.parse("a").matched);
}

#[test]
fn test_bind_to_itself_is_rejected() {
    let placeholder = deferred().describe("loop");
    assert_eq!(
        placeholder.try_bind(&placeholder).unwrap_err(),
        UsageError::SelfBound("loop".to_string())
    );
}

#[test]
fn test_bind_on_non_deferred_is_rejected() {
    let plain = literal("a");
    assert_eq!(
        plain.try_bind("b").unwrap_err(),
        UsageError::NotDeferred("Literal(a)".to_string())
    );
}

#[test]
#[should_panic(expected = "'flatten' cannot be applied to deferred parser 'expr'")]
fn test_result_shaping_on_deferred_panics() {
    let _ = deferred().describe("expr").flatten(1);
}

#[test]
#[should_panic(expected = "'adjacent' cannot be applied to deferred parser 'expr'")]
fn test_adjacent_on_deferred_panics() {
    let _ = deferred().describe("expr").adjacent();
}

#[test]
#[should_panic(expected = "'handle' cannot be applied to deferred parser 'expr'")]
fn test_handle_on_deferred_panics() {
    let _ = deferred().describe("expr").handle(|_| Value::Absent);
}

#[test]
fn test_describe_and_debug_on_deferred_keep_the_binding() {
    let expr = deferred().describe("expr");
    let traced = expr.clone().debug(2).describe("traced expr");
    expr.bind("x");
    assert!(traced.is_bound());
    assert!(traced.parse("x").matched);
}
