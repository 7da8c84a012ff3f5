//! Unary-Test Matching Tests
//!
//! Tests for: wildcard, comparisons against the input, ranges, lists,
//! disjunction, negation and `?` inside expressions

use feel_eval::{Environment, Value, evaluate_unary_test, evaluate_unary_tests};
use feel_parser::{parse_expression, parse_unary_tests};
use rstest::rstest;

fn matches(cell: &str, input: Value) -> bool {
    matches_in(cell, input, &Environment::new())
}

fn matches_in(cell: &str, input: Value, env: &Environment) -> bool {
    let ast = parse_unary_tests(cell)
        .into_result()
        .unwrap_or_else(|e| panic!("Failed to parse '{cell}': {e:?}"));
    evaluate_unary_tests(&ast, &input, env)
}

fn n(x: f64) -> Value {
    Value::number(x)
}

#[rstest]
#[case("< 5", n(3.0), true)]
#[case("< 5", n(7.0), false)]
#[case("< 5", Value::Null, false)]
#[case("-", n(3.0), true)]
#[case("-", Value::Null, true)]
#[case("not(1,2)", n(3.0), true)]
#[case("not(1,2)", n(1.0), false)]
#[case("[1..10]", n(10.0), true)]
#[case("(1..10)", n(10.0), false)]
#[case("\"gold\", \"silver\"", Value::string("silver"), true)]
#[case("\"gold\", \"silver\"", Value::string("bronze"), false)]
#[case("[1, 2, 3]", n(2.0), true)]
#[case("[[1..2], 5]", n(1.5), true)]
#[case("? > 5 and ? < 10", n(7.0), true)]
#[case(">= @\"2024-01-01\"", Value::string("2024-06-01"), false)]
#[case("null", Value::Null, false)]
#[case("!= 5", n(6.0), true)]
fn test_cells(#[case] cell: &str, #[case] input: Value, #[case] expected: bool) {
    assert_eq!(matches(cell, input), expected, "{cell}");
}

#[test]
fn test_cells_reference_variables() {
    let env = Environment::builder().variable("limit", n(100.0)).build();
    assert!(matches_in("<= limit", n(100.0), &env));
    assert!(!matches_in("> limit", n(100.0), &env));
}

#[test]
fn test_single_test_on_expression_node() {
    let ast = parse_expression("[1..5]").into_result().unwrap();
    assert!(evaluate_unary_test(&ast, &n(2.0), &Environment::new()));
    assert!(!evaluate_unary_test(&ast, &n(6.0), &Environment::new()));
}
