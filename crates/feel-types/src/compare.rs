//! Equality and ordering over FEEL values
//!
//! Equality is total: every pair of values is either equal or not, and
//! cross-type pairs are simply unequal. Ordering is partial: only values of a
//! compatible kind can be ordered, everything else is incomparable (`None`),
//! which the evaluator surfaces as `null`.

use crate::Value;
use std::cmp::Ordering;

/// Deep structural equality
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::Time(x), Value::Time(y)) => x == y,
        (Value::DateTime(x), Value::DateTime(y)) => x == y,
        (Value::DayTimeDuration(x), Value::DayTimeDuration(y)) => x.0 == y.0,
        (Value::YearMonthDuration(x), Value::YearMonthDuration(y)) => x.0 == y.0,
        (Value::List(x), Value::List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| values_equal(a, b))
        }
        // key order does not take part in equality
        (Value::Context(x), Value::Context(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| values_equal(v, w)))
        }
        (Value::Range(x), Value::Range(y)) => {
            x.start_included == y.start_included
                && x.end_included == y.end_included
                && values_equal(&x.start, &y.start)
                && values_equal(&x.end, &y.end)
        }
        (Value::Function(x), Value::Function(y)) => x == y,
        _ => false,
    }
}

/// Type-aware ordering; `None` when the values are incomparable
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.partial_cmp(y),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Date(x), Value::Date(y)) => x.partial_cmp(y),
        (Value::Time(x), Value::Time(y)) => x.partial_cmp(y),
        (Value::DateTime(x), Value::DateTime(y)) => x.partial_cmp(y),
        (Value::DayTimeDuration(x), Value::DayTimeDuration(y)) => x.0.partial_cmp(&y.0),
        (Value::YearMonthDuration(x), Value::YearMonthDuration(y)) => Some(x.0.cmp(&y.0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeelDate, FeelRange};
    use rstest::rstest;

    fn n(x: f64) -> Value {
        Value::number(x)
    }

    #[rstest]
    #[case(n(1.0), n(1.0), true)]
    #[case(n(1.0), Value::string("1"), false)]
    #[case(Value::Null, Value::Null, true)]
    #[case(Value::Null, n(0.0), false)]
    #[case(Value::list([n(1.0), Value::list([n(2.0)])]), Value::list([n(1.0), Value::list([n(2.0)])]), true)]
    #[case(Value::list([n(1.0)]), Value::list([n(1.0), n(2.0)]), false)]
    fn test_equality(#[case] a: Value, #[case] b: Value, #[case] expected: bool) {
        assert_eq!(values_equal(&a, &b), expected);
    }

    #[test]
    fn test_context_equality_ignores_order() {
        let a = Value::context([("x", n(1.0)), ("y", n(2.0))]);
        let b = Value::context([("y", n(2.0)), ("x", n(1.0))]);
        assert!(values_equal(&a, &b));
    }

    #[test]
    fn test_range_equality() {
        let a = Value::range(FeelRange::closed(n(1.0), n(2.0)));
        let b = Value::range(FeelRange::new(n(1.0), true, n(2.0), false));
        assert!(!values_equal(&a, &b));
        assert!(values_equal(&a, &a.clone()));
    }

    #[rstest]
    #[case(n(1.0), n(2.0), Some(Ordering::Less))]
    #[case(Value::string("b"), Value::string("a"), Some(Ordering::Greater))]
    #[case(n(1.0), Value::string("1"), None)]
    #[case(Value::Null, n(1.0), None)]
    #[case(Value::Boolean(true), Value::Boolean(false), None)]
    #[case(Value::day_time_duration(60.0), Value::day_time_duration(3600.0), Some(Ordering::Less))]
    #[case(Value::year_month_duration(1), Value::day_time_duration(1.0), None)]
    fn test_ordering(#[case] a: Value, #[case] b: Value, #[case] expected: Option<Ordering>) {
        assert_eq!(compare_values(&a, &b), expected);
    }

    #[test]
    fn test_date_ordering() {
        let a = Value::Date(FeelDate::new(2023, 12, 31).unwrap());
        let b = Value::Date(FeelDate::new(2024, 1, 1).unwrap());
        assert_eq!(compare_values(&a, &b), Some(Ordering::Less));
    }
}
