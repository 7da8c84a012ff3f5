//! Tests for unary-test parsing
//!
//! Covers:
//! - The `-` wildcard
//! - Comparison tests against the implicit input
//! - Ranges, lists and plain expressions as tests
//! - Comma-separated disjunctions and `not(...)`

use feel_ast::{BinaryOp, Expr, Expression};
use feel_diagnostics::FEEL0010;
use feel_parser::parse_unary_tests;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn parse_tests(input: &str) -> Expr {
    parse_unary_tests(input)
        .into_result()
        .unwrap_or_else(|e| panic!("Failed to parse '{input}': {e:?}"))
}

#[test]
fn test_any_input() {
    assert_eq!(parse_tests(" - ").inner, Expression::AnyInput);
}

#[rstest]
#[case("< 10", BinaryOp::Less)]
#[case("<= 10", BinaryOp::LessOrEqual)]
#[case("> 10", BinaryOp::Greater)]
#[case(">= 10", BinaryOp::GreaterOrEqual)]
#[case("= 10", BinaryOp::Equal)]
#[case("!= 10", BinaryOp::NotEqual)]
fn test_comparison_tests(#[case] input: &str, #[case] expected: BinaryOp) {
    let Expression::Binary(test) = parse_tests(input).inner else {
        panic!("Expected Binary");
    };
    assert_eq!(test.op, expected);
    assert_eq!(test.left.inner, Expression::input());
}

#[rstest]
#[case("[1..10]", "range")]
#[case("\"gold\"", "literal")]
#[case("[1, 2, 3]", "list")]
#[case("? > 5 and ? < 10", "binary")]
#[case("date(\"2024-01-01\")", "call")]
fn test_expression_tests(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse_tests(input).kind(), expected);
}

#[test]
fn test_disjunction() {
    let Expression::UnaryTests(tests) = parse_tests("\"a\", \"b\", < 0").inner else {
        panic!("Expected UnaryTests");
    };
    assert_eq!(tests.len(), 3);
    assert_eq!(tests[2].kind(), "binary");
}

#[test]
fn test_negation() {
    let Expression::Negation(tests) = parse_tests("not(1, 2)").inner else {
        panic!("Expected Negation");
    };
    assert_eq!(tests.len(), 2);
}

#[test]
fn test_not_function_is_still_an_expression_inside_a_list() {
    let Expression::UnaryTests(tests) = parse_tests("not(true), false").inner else {
        panic!("Expected UnaryTests");
    };
    assert_eq!(tests[0].kind(), "call");
}

#[test]
fn test_misplaced_wildcard() {
    let result = parse_unary_tests("-, 1");
    assert!(!result.is_success());
    assert_eq!(result.errors[0].code, FEEL0010);
}
