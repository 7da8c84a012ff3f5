//! Built-in table tests through the public lookup API
//!
//! Covers:
//! - Lookup and naming of every category
//! - Named-argument binding against declared parameters
//! - Null propagation on bad arguments

use feel_builtins::{builtin_names, call_builtin, get_builtin, is_builtin, is_builtin_prefix};
use feel_types::Value;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn n(v: f64) -> Value {
    Value::number(v)
}

fn s(v: &str) -> Value {
    Value::string(v)
}

fn ns(values: &[f64]) -> Value {
    Value::list(values.iter().copied().map(Value::number))
}

// === Registry ===

#[rstest]
#[case("string length")]
#[case("round half down")]
#[case("years and months duration")]
#[case("last day of month")]
#[case("overlaps before")]
#[case("get or else")]
#[case("context merge")]
#[case("random number")]
fn test_multi_word_names_registered(#[case] name: &str) {
    assert!(is_builtin(name), "{name} missing");
    let words: Vec<&str> = name.split(' ').collect();
    for end in 1..words.len() {
        assert!(is_builtin_prefix(&words[..end].join(" ")));
    }
}

#[test]
fn test_builtin_names_cover_every_category() {
    let names = builtin_names();
    for expected in ["substring", "modulo", "flatten", "not", "get entries", "duration", "today", "coincides"] {
        assert!(names.contains(&expected), "{expected} missing");
    }
}

// === Calls ===

#[rstest]
#[case("count", vec![ns(&[1.0, 2.0, 3.0])], n(3.0))]
#[case("sum", vec![ns(&[1.0, 2.0, 3.0])], n(6.0))]
#[case("reverse", vec![ns(&[1.0, 2.0, 3.0])], ns(&[3.0, 2.0, 1.0]))]
#[case("sort", vec![ns(&[3.0, 1.0, 2.0])], ns(&[1.0, 2.0, 3.0]))]
#[case("distinct values", vec![ns(&[1.0, 1.0, 2.0])], ns(&[1.0, 2.0]))]
#[case("upper case", vec![s("abc")], s("ABC"))]
#[case("string", vec![Value::year_month_duration(14)], s("P1Y2M"))]
#[case("modulo", vec![n(-12.0), n(5.0)], n(3.0))]
#[case("day of week", vec![call_builtin("date", &[s("2024-03-01")])], s("Friday"))]
fn test_call_builtin(#[case] name: &str, #[case] args: Vec<Value>, #[case] expected: Value) {
    assert_eq!(call_builtin(name, &args), expected);
}

#[rstest]
#[case("substring", vec![n(1.0), n(1.0)])]
#[case("count", vec![s("abc")])]
#[case("sqrt", vec![s("4")])]
#[case("date", vec![s("2024-02-30")])]
#[case("matches", vec![s("a"), s("[")])]
#[case("no such function", vec![])]
fn test_bad_arguments_are_null(#[case] name: &str, #[case] args: Vec<Value>) {
    assert!(call_builtin(name, &args).is_null());
}

// === Named arguments ===

#[test]
fn test_named_arguments_follow_declared_order() {
    let substring = get_builtin("substring").unwrap();
    let args = substring
        .bind_named(vec![
            ("start position".into(), n(2.0)),
            ("string".into(), s("abc")),
        ])
        .unwrap();
    assert_eq!(substring.call(&args), s("bc"));
    assert!(substring.bind_named(vec![("position".into(), n(1.0))]).is_none());
}

#[test]
fn test_named_arguments_select_overload() {
    let date = get_builtin("date").unwrap();
    let parts = date
        .bind_named(vec![("day".into(), n(2.0)), ("month".into(), n(1.0)), ("year".into(), n(2024.0))])
        .unwrap();
    let from = date.bind_named(vec![("from".into(), s("2024-01-02"))]).unwrap();
    assert_eq!(date.call(&parts), date.call(&from));
}
