//! List functions
//!
//! Implements: count, list contains, min, max, sum, product, mean, median,
//! stddev, mode, all, any, sublist, append, concatenate, insert before,
//! remove, reverse, index of, union, distinct values, flatten, sort
//!
//! The aggregate functions accept either one list argument or the items
//! spread as arguments (`max([1, 2])` and `max(1, 2)`).

use crate::Builtin;
use crate::args::{arg, index, int, items, list, opt_int};
use feel_types::{Value, compare_values, values_equal};
use std::cmp::Ordering;

pub const FUNCTIONS: &[Builtin] = &[
    Builtin::new("count", &["list"], count),
    Builtin::new("list contains", &["list", "element"], list_contains),
    Builtin::new("min", &["list"], min),
    Builtin::new("max", &["list"], max),
    Builtin::new("sum", &["list"], sum),
    Builtin::new("product", &["list"], product),
    Builtin::new("mean", &["list"], mean),
    Builtin::new("median", &["list"], median),
    Builtin::new("stddev", &["list"], stddev),
    Builtin::new("mode", &["list"], mode),
    Builtin::new("all", &["list"], all),
    Builtin::new("any", &["list"], any),
    Builtin::new("sublist", &["list", "start position", "length"], sublist),
    Builtin::new("append", &["list", "item"], append),
    Builtin::new("concatenate", &["list"], concatenate),
    Builtin::new("insert before", &["list", "position", "newItem"], insert_before),
    Builtin::new("remove", &["list", "position"], remove),
    Builtin::new("reverse", &["list"], reverse),
    Builtin::new("index of", &["list", "match"], index_of),
    Builtin::new("union", &["list"], union),
    Builtin::new("distinct values", &["list"], distinct_values),
    Builtin::new("flatten", &["list"], flatten),
    Builtin::new("sort", &["list", "precedes"], sort),
];

fn count(args: &[Value]) -> Value {
    list(args, 0).map_or(Value::Null, |l| Value::number(l.len() as f64))
}

fn list_contains(args: &[Value]) -> Value {
    let element = arg(args, 1);
    list(args, 0).map_or(Value::Null, |l| {
        Value::Boolean(l.iter().any(|v| values_equal(v, element)))
    })
}

/// Pick the extreme element; any incomparable pair makes it `Null`
fn extreme(args: &[Value], keep: Ordering) -> Value {
    let Some((first, rest)) = items(args).and_then(<[Value]>::split_first) else {
        return Value::Null;
    };
    let mut best = first;
    for v in rest {
        match compare_values(v, best) {
            Some(ordering) if ordering == keep => best = v,
            Some(_) => {}
            None => return Value::Null,
        }
    }
    best.clone()
}

fn min(args: &[Value]) -> Value {
    extreme(args, Ordering::Less)
}

fn max(args: &[Value]) -> Value {
    extreme(args, Ordering::Greater)
}

/// All items as numbers, `None` if any is not a number
fn numbers(args: &[Value]) -> Option<Vec<f64>> {
    items(args)?.iter().map(Value::as_number).collect()
}

/// Numbers or durations of a single kind
fn sum(args: &[Value]) -> Value {
    let Some((first, rest)) = items(args).and_then(<[Value]>::split_first) else {
        return Value::Null;
    };
    if !matches!(
        first,
        Value::Number(_) | Value::DayTimeDuration(_) | Value::YearMonthDuration(_)
    ) {
        return Value::Null;
    }
    rest.iter()
        .try_fold(first.clone(), |total, v| {
            let next = feel_types::add(&total, v);
            (!next.is_null()).then_some(next)
        })
        .unwrap_or(Value::Null)
}

fn product(args: &[Value]) -> Value {
    match numbers(args) {
        Some(ns) if !ns.is_empty() => Value::number(ns.iter().product()),
        _ => Value::Null,
    }
}

fn mean(args: &[Value]) -> Value {
    let Some(values) = items(args) else {
        return Value::Null;
    };
    if values.is_empty() {
        return Value::Null;
    }
    feel_types::divide(&sum(values), &Value::number(values.len() as f64))
}

fn median(args: &[Value]) -> Value {
    let Some(mut ns) = numbers(args) else {
        return Value::Null;
    };
    if ns.is_empty() {
        return Value::Null;
    }
    ns.sort_by(f64::total_cmp);
    let mid = ns.len() / 2;
    if ns.len() % 2 == 1 {
        Value::number(ns[mid])
    } else {
        Value::number((ns[mid - 1] + ns[mid]) / 2.0)
    }
}

/// Sample standard deviation
fn stddev(args: &[Value]) -> Value {
    let Some(ns) = numbers(args) else {
        return Value::Null;
    };
    if ns.len() < 2 {
        return Value::Null;
    }
    let n = ns.len() as f64;
    let mean = ns.iter().sum::<f64>() / n;
    let variance = ns.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Value::number(variance.sqrt())
}

/// Every value tied for the highest frequency, ascending
fn mode(args: &[Value]) -> Value {
    if matches!(args, [Value::List(l)] if l.is_empty()) {
        return Value::list([]);
    }
    let Some(mut ns) = numbers(args) else {
        return Value::Null;
    };
    ns.sort_by(f64::total_cmp);
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for x in ns {
        match runs.last_mut() {
            Some((value, count)) if *value == x => *count += 1,
            _ => runs.push((x, 1)),
        }
    }
    let highest = runs.iter().map(|(_, c)| *c).max().unwrap_or(0);
    Value::list(
        runs.into_iter()
            .filter(|(_, c)| *c == highest)
            .map(|(x, _)| Value::number(x)),
    )
}

/// Three-valued fold: `decisive` wins outright, anything non-boolean taints
/// the result with `Null`
fn quantify(args: &[Value], decisive: bool) -> Value {
    let values: &[Value] = match args {
        [Value::List(l)] => l,
        [] | [Value::Null] => return Value::Null,
        _ => args,
    };
    let mut unknown = false;
    for v in values {
        match v {
            Value::Boolean(b) if *b == decisive => return Value::Boolean(decisive),
            Value::Boolean(_) => {}
            _ => unknown = true,
        }
    }
    if unknown { Value::Null } else { Value::Boolean(!decisive) }
}

fn all(args: &[Value]) -> Value {
    quantify(args, false)
}

fn any(args: &[Value]) -> Value {
    quantify(args, true)
}

fn sublist(args: &[Value]) -> Value {
    let (Some(l), Some(start), Some(length)) = (list(args, 0), int(args, 1), opt_int(args, 2))
    else {
        return Value::Null;
    };
    let Some(from) = index(start, l.len()) else {
        return Value::Null;
    };
    let to = match length {
        Some(n) if n < 0 => return Value::Null,
        Some(n) => from.saturating_add(n as usize).min(l.len()),
        None => l.len(),
    };
    Value::list(l[from..to].iter().cloned())
}

fn append(args: &[Value]) -> Value {
    list(args, 0).map_or(Value::Null, |l| {
        Value::list(l.iter().chain(args.iter().skip(1)).cloned())
    })
}

/// Lists are spliced in, other arguments appended as single items
fn concatenate(args: &[Value]) -> Value {
    Value::list(args.iter().flat_map(|a| match a {
        Value::List(l) => l.clone(),
        other => vec![other.clone()],
    }))
}

fn insert_before(args: &[Value]) -> Value {
    let (Some(l), Some(position)) = (list(args, 0), int(args, 1)) else {
        return Value::Null;
    };
    let Some(at) = index(position, l.len()) else {
        return Value::Null;
    };
    let mut result = l.to_vec();
    result.insert(at, arg(args, 2).clone());
    Value::List(result)
}

fn remove(args: &[Value]) -> Value {
    let (Some(l), Some(position)) = (list(args, 0), int(args, 1)) else {
        return Value::Null;
    };
    let Some(at) = index(position, l.len()) else {
        return Value::Null;
    };
    let mut result = l.to_vec();
    result.remove(at);
    Value::List(result)
}

fn reverse(args: &[Value]) -> Value {
    list(args, 0).map_or(Value::Null, |l| Value::list(l.iter().rev().cloned()))
}

/// 1-based positions of every matching element
fn index_of(args: &[Value]) -> Value {
    let target = arg(args, 1);
    list(args, 0).map_or(Value::Null, |l| {
        Value::list(
            l.iter()
                .enumerate()
                .filter(|(_, v)| values_equal(v, target))
                .map(|(i, _)| Value::number((i + 1) as f64)),
        )
    })
}

fn dedup(values: impl IntoIterator<Item = Value>) -> Vec<Value> {
    let mut seen: Vec<Value> = Vec::new();
    for v in values {
        if !seen.iter().any(|s| values_equal(s, &v)) {
            seen.push(v);
        }
    }
    seen
}

fn union(args: &[Value]) -> Value {
    match concatenate(args) {
        Value::List(all) => Value::List(dedup(all)),
        other => other,
    }
}

fn distinct_values(args: &[Value]) -> Value {
    list(args, 0).map_or(Value::Null, |l| Value::List(dedup(l.iter().cloned())))
}

fn flatten_into(values: &[Value], out: &mut Vec<Value>) {
    for v in values {
        match v {
            Value::List(inner) => flatten_into(inner, out),
            other => out.push(other.clone()),
        }
    }
}

fn flatten(args: &[Value]) -> Value {
    list(args, 0).map_or(Value::Null, |l| {
        let mut out = Vec::with_capacity(l.len());
        flatten_into(l, &mut out);
        Value::List(out)
    })
}

/// Stable insertion sort; an element only moves left past one it strictly
/// precedes, so incomparable pairs keep their order
fn sort(args: &[Value]) -> Value {
    let Some(l) = list(args, 0) else {
        return Value::Null;
    };
    let comparator = match arg(args, 1) {
        Value::Null => None,
        Value::Function(f) => Some(f),
        _ => return Value::Null,
    };
    let precedes = |a: &Value, b: &Value| match comparator {
        Some(f) => f.call(&[a.clone(), b.clone()]).is_true(),
        None => compare_values(a, b) == Some(Ordering::Less),
    };
    let mut sorted: Vec<Value> = Vec::with_capacity(l.len());
    for item in l {
        let mut at = sorted.len();
        while at > 0 && precedes(item, &sorted[at - 1]) {
            at -= 1;
        }
        sorted.insert(at, item.clone());
    }
    Value::List(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feel_types::FeelFunction;
    use pretty_assertions::assert_eq;

    fn n(v: f64) -> Value {
        Value::number(v)
    }

    fn ns(values: &[f64]) -> Value {
        Value::list(values.iter().copied().map(Value::number))
    }

    #[test]
    fn test_aggregates() {
        assert_eq!(count(&[ns(&[1.0, 2.0, 3.0])]), n(3.0));
        assert_eq!(sum(&[ns(&[1.0, 2.0, 3.0])]), n(6.0));
        assert_eq!(sum(&[n(1.0), n(2.0)]), n(3.0));
        assert_eq!(product(&[ns(&[2.0, 3.0, 4.0])]), n(24.0));
        assert_eq!(mean(&[ns(&[1.0, 2.0, 3.0])]), n(2.0));
        assert_eq!(median(&[ns(&[8.0, 2.0, 5.0, 3.0, 4.0])]), n(4.0));
        assert_eq!(median(&[ns(&[6.0, 1.0, 2.0, 3.0])]), n(2.5));
        assert!(sum(&[ns(&[])]).is_null());
        assert!(sum(&[Value::list([n(1.0), Value::string("2")])]).is_null());
    }

    #[test]
    fn test_sum_of_durations() {
        let hours = Value::list([Value::day_time_duration(3600.0), Value::day_time_duration(1800.0)]);
        assert_eq!(sum(&[hours]), Value::day_time_duration(5400.0));
    }

    #[test]
    fn test_stddev_and_mode() {
        let result = stddev(&[ns(&[2.0, 4.0, 7.0, 5.0])]).as_number().unwrap();
        assert!((result - 2.0816659994661326).abs() < 1e-12);
        assert!(stddev(&[ns(&[1.0])]).is_null());
        assert_eq!(mode(&[ns(&[6.0, 3.0, 9.0, 6.0, 6.0])]), ns(&[6.0]));
        assert_eq!(mode(&[ns(&[6.0, 1.0, 9.0, 6.0, 1.0])]), ns(&[1.0, 6.0]));
        assert_eq!(mode(&[ns(&[])]), ns(&[]));
    }

    #[test]
    fn test_min_max_incomparable() {
        assert_eq!(min(&[ns(&[3.0, 1.0, 2.0])]), n(1.0));
        assert_eq!(max(&[n(3.0), n(7.0), n(2.0)]), n(7.0));
        assert_eq!(max(&[Value::list([Value::string("a"), Value::string("c")])]), Value::string("c"));
        assert!(min(&[Value::list([n(1.0), Value::string("a")])]).is_null());
        assert!(min(&[ns(&[])]).is_null());
    }

    #[test]
    fn test_three_valued_all_any() {
        let t = Value::Boolean(true);
        let f = Value::Boolean(false);
        assert_eq!(all(&[Value::list([t.clone(), f.clone(), Value::Null])]), f);
        assert!(all(&[Value::list([t.clone(), Value::Null])]).is_null());
        assert_eq!(all(&[Value::list([])]), t);
        assert_eq!(any(&[Value::list([f.clone(), Value::Null, t.clone()])]), t);
        assert!(any(&[Value::list([f.clone(), Value::Null])]).is_null());
        assert_eq!(any(&[Value::list([])]), f);
    }

    #[test]
    fn test_positional_functions() {
        let l = ns(&[1.0, 2.0, 3.0]);
        assert_eq!(sublist(&[l.clone(), n(2.0)]), ns(&[2.0, 3.0]));
        assert_eq!(sublist(&[l.clone(), n(-2.0), n(1.0)]), ns(&[2.0]));
        assert!(sublist(&[l.clone(), n(4.0)]).is_null());
        assert_eq!(insert_before(&[l.clone(), n(1.0), n(0.0)]), ns(&[0.0, 1.0, 2.0, 3.0]));
        assert_eq!(remove(&[l.clone(), n(-1.0)]), ns(&[1.0, 2.0]));
        assert_eq!(reverse(&[l.clone()]), ns(&[3.0, 2.0, 1.0]));
        assert_eq!(index_of(&[ns(&[1.0, 2.0, 1.0]), n(1.0)]), ns(&[1.0, 3.0]));
        assert_eq!(append(&[l, n(4.0), n(5.0)]), ns(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    }

    #[test]
    fn test_set_like_functions() {
        assert_eq!(distinct_values(&[ns(&[1.0, 1.0, 2.0])]), ns(&[1.0, 2.0]));
        assert_eq!(union(&[ns(&[1.0, 2.0]), ns(&[2.0, 3.0])]), ns(&[1.0, 2.0, 3.0]));
        assert_eq!(
            concatenate(&[ns(&[1.0]), Value::list([ns(&[2.0])])]),
            Value::list([n(1.0), ns(&[2.0])])
        );
        let nested = Value::list([n(1.0), Value::list([n(2.0), Value::list([n(3.0)])])]);
        assert_eq!(flatten(&[nested]), ns(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_sort_default_and_comparator() {
        assert_eq!(sort(&[ns(&[3.0, 1.0, 2.0])]), ns(&[1.0, 2.0, 3.0]));
        let descending = FeelFunction::new(None, vec!["x".into(), "y".into()], |args| {
            match (&args[0], &args[1]) {
                (Value::Number(x), Value::Number(y)) => Value::Boolean(x > y),
                _ => Value::Null,
            }
        });
        assert_eq!(
            sort(&[ns(&[3.0, 1.0, 2.0]), Value::Function(descending)]),
            ns(&[3.0, 2.0, 1.0])
        );
    }

    #[test]
    fn test_sort_keeps_incomparable_order() {
        let mixed = Value::list([Value::string("b"), n(2.0), Value::string("a"), n(1.0)]);
        assert_eq!(
            sort(&[mixed]),
            Value::list([Value::string("b"), n(2.0), Value::string("a"), n(1.0)])
        );
    }
}
