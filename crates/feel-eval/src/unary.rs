//! Unary-test matching for decision table cells

use crate::Environment;
use crate::engine::evaluate;
use feel_ast::{Expr, Expression};
use feel_types::{Value, values_equal};

/// Match one test against an input value
///
/// The test is evaluated with `?` bound to `input`. A boolean result is
/// taken as-is, a range is a membership test, a list matches when any
/// element does, and any other non-null value must equal the input.
pub fn evaluate_unary_test(test: &Expr, input: &Value, env: &Environment) -> bool {
    let scope = env.with_input(input.clone());
    match evaluate(test, &scope) {
        Value::Boolean(b) => b,
        Value::Null => false,
        Value::List(items) => items.iter().any(|item| member(item, input)),
        other => member(&other, input),
    }
}

/// Match the root of a parsed unary-test cell against an input value
pub fn evaluate_unary_tests(tests: &Expr, input: &Value, env: &Environment) -> bool {
    match &tests.inner {
        Expression::AnyInput => true,
        Expression::UnaryTests(tests) => tests.iter().any(|t| evaluate_unary_tests(t, input, env)),
        Expression::Negation(tests) => !tests.iter().any(|t| evaluate_unary_tests(t, input, env)),
        _ => evaluate_unary_test(tests, input, env),
    }
}

fn member(candidate: &Value, input: &Value) -> bool {
    match candidate {
        Value::Range(range) => range.contains(input) == Some(true),
        other => values_equal(other, input),
    }
}
