//! Interval relations
//!
//! Implements: before, after, meets, met by, overlaps, overlaps before,
//! overlaps after, during, includes, starts, started by, finishes,
//! finished by, coincides
//!
//! Each relation accepts points and ranges in the combinations Allen's
//! algebra defines for it. Boundary comparisons are three-valued: an
//! incomparable pair of boundaries makes the relation `Null` unless another
//! clause already decides it.

use crate::Builtin;
use crate::args::arg;
use feel_types::{FeelRange, Value, compare_values};
use std::cmp::Ordering;

const PARAMS: &[&str] = &["point1|range1", "point2|range2"];

pub const FUNCTIONS: &[Builtin] = &[
    Builtin::new("before", PARAMS, before),
    Builtin::new("after", PARAMS, after),
    Builtin::new("meets", &["range1", "range2"], meets),
    Builtin::new("met by", &["range1", "range2"], met_by),
    Builtin::new("overlaps", &["range1", "range2"], overlaps),
    Builtin::new("overlaps before", &["range1", "range2"], overlaps_before),
    Builtin::new("overlaps after", &["range1", "range2"], overlaps_after),
    Builtin::new("during", PARAMS, during),
    Builtin::new("includes", PARAMS, includes),
    Builtin::new("starts", PARAMS, starts),
    Builtin::new("started by", PARAMS, started_by),
    Builtin::new("finishes", PARAMS, finishes),
    Builtin::new("finished by", PARAMS, finished_by),
    Builtin::new("coincides", PARAMS, coincides),
];

#[derive(Debug, Clone, Copy)]
enum Operand<'a> {
    Point(&'a Value),
    Range(&'a FeelRange),
}

impl<'a> Operand<'a> {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Range(r) => Some(Operand::Range(r)),
            v => Some(Operand::Point(v)),
        }
    }
}

/// Three-valued truth
type Truth = Option<bool>;

fn ordering(a: &Value, b: &Value, expected: Ordering) -> Truth {
    compare_values(a, b).map(|o| o == expected)
}

fn lt(a: &Value, b: &Value) -> Truth {
    ordering(a, b, Ordering::Less)
}

fn gt(a: &Value, b: &Value) -> Truth {
    ordering(a, b, Ordering::Greater)
}

fn eq(a: &Value, b: &Value) -> Truth {
    ordering(a, b, Ordering::Equal)
}

fn and(a: Truth, b: Truth) -> Truth {
    match (a, b) {
        (Some(false), _) | (_, Some(false)) => Some(false),
        (Some(true), Some(true)) => Some(true),
        _ => None,
    }
}

fn or(a: Truth, b: Truth) -> Truth {
    match (a, b) {
        (Some(true), _) | (_, Some(true)) => Some(true),
        (Some(false), Some(false)) => Some(false),
        _ => None,
    }
}

fn k(b: bool) -> Truth {
    Some(b)
}

fn relation(args: &[Value], rule: fn(Operand<'_>, Operand<'_>) -> Truth) -> Value {
    match (Operand::from_value(arg(args, 0)), Operand::from_value(arg(args, 1))) {
        (Some(a), Some(b)) => Value::from_option(rule(a, b)),
        _ => Value::Null,
    }
}

fn before_rule(a: Operand<'_>, b: Operand<'_>) -> Truth {
    match (a, b) {
        (Operand::Point(p), Operand::Point(q)) => lt(p, q),
        (Operand::Point(p), Operand::Range(r)) => {
            or(lt(p, &r.start), and(eq(p, &r.start), k(!r.start_included)))
        }
        (Operand::Range(r), Operand::Point(p)) => {
            or(lt(&r.end, p), and(eq(&r.end, p), k(!r.end_included)))
        }
        (Operand::Range(r1), Operand::Range(r2)) => or(
            lt(&r1.end, &r2.start),
            and(
                k(!r1.end_included || !r2.start_included),
                eq(&r1.end, &r2.start),
            ),
        ),
    }
}

fn before(args: &[Value]) -> Value {
    relation(args, before_rule)
}

fn after(args: &[Value]) -> Value {
    relation(args, |a, b| before_rule(b, a))
}

fn meets_rule(a: Operand<'_>, b: Operand<'_>) -> Truth {
    match (a, b) {
        (Operand::Range(r1), Operand::Range(r2)) => and(
            k(r1.end_included && r2.start_included),
            eq(&r1.end, &r2.start),
        ),
        _ => None,
    }
}

fn meets(args: &[Value]) -> Value {
    relation(args, meets_rule)
}

fn met_by(args: &[Value]) -> Value {
    relation(args, |a, b| meets_rule(b, a))
}

fn overlaps(args: &[Value]) -> Value {
    relation(args, |a, b| match (a, b) {
        (Operand::Range(r1), Operand::Range(r2)) => and(
            or(
                gt(&r1.end, &r2.start),
                and(eq(&r1.end, &r2.start), k(r1.end_included && r2.start_included)),
            ),
            or(
                lt(&r1.start, &r2.end),
                and(eq(&r1.start, &r2.end), k(r1.start_included && r2.end_included)),
            ),
        ),
        _ => None,
    })
}

fn overlaps_before_rule(a: Operand<'_>, b: Operand<'_>) -> Truth {
    let (Operand::Range(r1), Operand::Range(r2)) = (a, b) else {
        return None;
    };
    let starts_first = or(
        lt(&r1.start, &r2.start),
        and(eq(&r1.start, &r2.start), k(r1.start_included && !r2.start_included)),
    );
    let reaches_in = or(
        gt(&r1.end, &r2.start),
        and(eq(&r1.end, &r2.start), k(r1.end_included && r2.start_included)),
    );
    let ends_first = or(
        lt(&r1.end, &r2.end),
        and(eq(&r1.end, &r2.end), k(!r1.end_included || r2.end_included)),
    );
    and(and(starts_first, reaches_in), ends_first)
}

fn overlaps_before(args: &[Value]) -> Value {
    relation(args, overlaps_before_rule)
}

fn overlaps_after(args: &[Value]) -> Value {
    relation(args, |a, b| overlaps_before_rule(b, a))
}

fn includes_rule(a: Operand<'_>, b: Operand<'_>) -> Truth {
    match (a, b) {
        (Operand::Range(r), Operand::Point(p)) => or(
            and(lt(&r.start, p), gt(&r.end, p)),
            or(
                and(eq(&r.start, p), k(r.start_included)),
                and(eq(&r.end, p), k(r.end_included)),
            ),
        ),
        (Operand::Range(r1), Operand::Range(r2)) => and(
            or(
                lt(&r1.start, &r2.start),
                and(eq(&r1.start, &r2.start), k(r1.start_included || !r2.start_included)),
            ),
            or(
                gt(&r1.end, &r2.end),
                and(eq(&r1.end, &r2.end), k(r1.end_included || !r2.end_included)),
            ),
        ),
        _ => None,
    }
}

fn includes(args: &[Value]) -> Value {
    relation(args, includes_rule)
}

fn during(args: &[Value]) -> Value {
    relation(args, |a, b| includes_rule(b, a))
}

fn starts_rule(a: Operand<'_>, b: Operand<'_>) -> Truth {
    match (a, b) {
        (Operand::Point(p), Operand::Range(r)) => and(eq(&r.start, p), k(r.start_included)),
        (Operand::Range(r1), Operand::Range(r2)) => and(
            and(eq(&r1.start, &r2.start), k(r1.start_included == r2.start_included)),
            or(
                lt(&r1.end, &r2.end),
                and(eq(&r1.end, &r2.end), k(!r1.end_included || r2.end_included)),
            ),
        ),
        _ => None,
    }
}

fn starts(args: &[Value]) -> Value {
    relation(args, starts_rule)
}

fn started_by(args: &[Value]) -> Value {
    relation(args, |a, b| starts_rule(b, a))
}

fn finishes_rule(a: Operand<'_>, b: Operand<'_>) -> Truth {
    match (a, b) {
        (Operand::Point(p), Operand::Range(r)) => and(eq(&r.end, p), k(r.end_included)),
        (Operand::Range(r1), Operand::Range(r2)) => and(
            and(eq(&r1.end, &r2.end), k(r1.end_included == r2.end_included)),
            or(
                gt(&r1.start, &r2.start),
                and(eq(&r1.start, &r2.start), k(!r1.start_included || r2.start_included)),
            ),
        ),
        _ => None,
    }
}

fn finishes(args: &[Value]) -> Value {
    relation(args, finishes_rule)
}

fn finished_by(args: &[Value]) -> Value {
    relation(args, |a, b| finishes_rule(b, a))
}

fn coincides(args: &[Value]) -> Value {
    relation(args, |a, b| match (a, b) {
        (Operand::Point(p), Operand::Point(q)) => eq(p, q),
        (Operand::Range(r1), Operand::Range(r2)) => and(
            and(eq(&r1.start, &r2.start), eq(&r1.end, &r2.end)),
            k(r1.start_included == r2.start_included && r1.end_included == r2.end_included),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn n(v: f64) -> Value {
        Value::number(v)
    }

    /// Numeric range with explicit inclusivity
    fn r(start_included: bool, start: f64, end: f64, end_included: bool) -> Value {
        Value::range(FeelRange::new(n(start), start_included, n(end), end_included))
    }

    fn t() -> Value {
        Value::Boolean(true)
    }

    fn f() -> Value {
        Value::Boolean(false)
    }

    #[rstest]
    #[case(n(1.0), n(10.0), t())]
    #[case(n(10.0), n(1.0), f())]
    #[case(n(1.0), r(true, 2.0, 5.0, true), t())]
    #[case(n(1.0), r(false, 1.0, 5.0, true), t())]
    #[case(n(1.0), r(true, 1.0, 5.0, true), f())]
    #[case(r(true, 1.0, 5.0, true), n(10.0), t())]
    #[case(r(true, 1.0, 5.0, false), n(5.0), t())]
    #[case(r(true, 1.0, 5.0, true), r(true, 6.0, 8.0, true), t())]
    #[case(r(true, 1.0, 5.0, true), r(true, 5.0, 8.0, true), f())]
    #[case(r(true, 1.0, 5.0, false), r(true, 5.0, 8.0, true), t())]
    fn test_before(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
        assert_eq!(before(&[a.clone(), b.clone()]), expected);
        assert_eq!(after(&[b, a]), expected);
    }

    #[rstest]
    #[case(r(true, 1.0, 5.0, true), r(true, 5.0, 8.0, true), t())]
    #[case(r(true, 1.0, 5.0, false), r(true, 5.0, 8.0, true), f())]
    #[case(r(true, 1.0, 5.0, true), r(true, 6.0, 8.0, true), f())]
    fn test_meets(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
        assert_eq!(meets(&[a.clone(), b.clone()]), expected);
        assert_eq!(met_by(&[b, a]), expected);
    }

    #[rstest]
    #[case(r(true, 1.0, 5.0, true), r(true, 3.0, 8.0, true), t())]
    #[case(r(true, 3.0, 8.0, true), r(true, 1.0, 5.0, true), t())]
    #[case(r(true, 1.0, 5.0, true), r(true, 6.0, 8.0, true), f())]
    #[case(r(true, 1.0, 5.0, false), r(true, 5.0, 8.0, true), f())]
    #[case(r(true, 1.0, 5.0, true), r(true, 5.0, 8.0, true), t())]
    fn test_overlaps(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
        assert_eq!(overlaps(&[a, b]), expected);
    }

    #[rstest]
    #[case(r(true, 1.0, 5.0, true), r(true, 3.0, 8.0, true), t())]
    #[case(r(true, 1.0, 5.0, true), r(true, 6.0, 8.0, true), f())]
    #[case(r(true, 1.0, 5.0, true), r(false, 1.0, 5.0, true), t())]
    #[case(r(false, 1.0, 5.0, true), r(true, 1.0, 5.0, true), f())]
    fn test_overlaps_before(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
        assert_eq!(overlaps_before(&[a.clone(), b.clone()]), expected);
        assert_eq!(overlaps_after(&[b, a]), expected);
    }

    #[rstest]
    #[case(n(5.0), r(true, 1.0, 10.0, true), t())]
    #[case(n(1.0), r(true, 1.0, 10.0, true), t())]
    #[case(n(1.0), r(false, 1.0, 10.0, true), f())]
    #[case(r(true, 4.0, 6.0, true), r(true, 1.0, 10.0, true), t())]
    #[case(r(true, 1.0, 5.0, true), r(false, 1.0, 10.0, true), f())]
    fn test_during(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
        assert_eq!(during(&[a.clone(), b.clone()]), expected);
        assert_eq!(includes(&[b, a]), expected);
    }

    #[rstest]
    #[case(n(1.0), r(true, 1.0, 10.0, true), t())]
    #[case(n(1.0), r(false, 1.0, 10.0, true), f())]
    #[case(r(true, 1.0, 5.0, true), r(true, 1.0, 10.0, true), t())]
    #[case(r(false, 1.0, 5.0, true), r(true, 1.0, 10.0, true), f())]
    fn test_starts(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
        assert_eq!(starts(&[a.clone(), b.clone()]), expected);
        assert_eq!(started_by(&[b, a]), expected);
    }

    #[rstest]
    #[case(n(10.0), r(true, 1.0, 10.0, true), t())]
    #[case(n(10.0), r(true, 1.0, 10.0, false), f())]
    #[case(r(true, 3.0, 10.0, true), r(true, 1.0, 10.0, true), t())]
    #[case(r(true, 3.0, 10.0, false), r(true, 1.0, 10.0, true), f())]
    fn test_finishes(#[case] a: Value, #[case] b: Value, #[case] expected: Value) {
        assert_eq!(finishes(&[a.clone(), b.clone()]), expected);
        assert_eq!(finished_by(&[b, a]), expected);
    }

    #[test]
    fn test_coincides() {
        assert_eq!(coincides(&[n(5.0), n(5.0)]), t());
        assert_eq!(coincides(&[r(true, 1.0, 5.0, true), r(true, 1.0, 5.0, true)]), t());
        assert_eq!(coincides(&[r(false, 1.0, 5.0, true), r(true, 1.0, 5.0, true)]), f());
    }

    #[test]
    fn test_incomparable_is_null() {
        assert!(before(&[n(1.0), Value::string("a")]).is_null());
        assert!(before(&[Value::Null, n(1.0)]).is_null());
        assert!(meets(&[n(1.0), n(2.0)]).is_null());
    }
}
