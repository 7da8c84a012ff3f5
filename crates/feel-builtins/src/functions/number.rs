//! Numeric functions
//!
//! Implements: number, decimal, floor, ceiling, round half up,
//! round half down, round up, round down, abs, modulo, sqrt, log, exp, odd,
//! even, random number

use crate::Builtin;
use crate::args::{arg, int, num, opt_int, text};
use feel_types::Value;

pub const FUNCTIONS: &[Builtin] = &[
    Builtin::new("number", &["from", "grouping separator", "decimal separator"], number),
    Builtin::new("decimal", &["n", "scale"], decimal),
    Builtin::new("floor", &["n", "scale"], floor),
    Builtin::new("ceiling", &["n", "scale"], ceiling),
    Builtin::new("round half up", &["n", "scale"], round_half_up),
    Builtin::new("round half down", &["n", "scale"], round_half_down),
    Builtin::new("round up", &["n", "scale"], round_up),
    Builtin::new("round down", &["n", "scale"], round_down),
    Builtin::new("abs", &["n"], abs),
    Builtin::new("modulo", &["dividend", "divisor"], modulo),
    Builtin::new("sqrt", &["number"], sqrt),
    Builtin::new("log", &["number"], log),
    Builtin::new("exp", &["number"], exp),
    Builtin::new("odd", &["number"], odd),
    Builtin::new("even", &["number"], even),
    Builtin::new("random number", &[], random_number),
];

/// Parse a number, stripping the grouping separator and mapping the decimal
/// separator to `.`
fn number(args: &[Value]) -> Value {
    let Some(from) = text(args, 0) else {
        return Value::Null;
    };
    let (Some(grouping), Some(decimal)) = (
        separator(arg(args, 1), &[" ", ",", "."]),
        separator(arg(args, 2), &[".", ","]),
    ) else {
        return Value::Null;
    };
    if grouping.is_some() && grouping == decimal {
        return Value::Null;
    }
    let mut normalized = from.trim().to_string();
    if let Some(g) = grouping {
        normalized = normalized.replace(g, "");
    }
    if let Some(d) = decimal {
        normalized = normalized.replace(d, ".");
    }
    // reject forms Rust accepts but FEEL does not ("inf", "NaN", "+1")
    if !normalized
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | 'e' | 'E'))
    {
        return Value::Null;
    }
    normalized.parse::<f64>().map_or(Value::Null, Value::number)
}

/// `Some(None)` when absent, `None` when not one of the allowed separators
fn separator<'a>(value: &'a Value, allowed: &[&str]) -> Option<Option<&'a str>> {
    match value {
        Value::Null => Some(None),
        Value::String(s) if allowed.iter().any(|a| *a == s) => Some(Some(s.as_str())),
        _ => None,
    }
}

/// Round at a scale with a rounding function applied to the scaled value
fn scaled(args: &[Value], round: fn(f64) -> f64) -> Value {
    let (Some(n), Some(scale)) = (num(args, 0), opt_int(args, 1)) else {
        return Value::Null;
    };
    let Some(scale) = scale else {
        return Value::number(round(n));
    };
    let Ok(exp) = i32::try_from(scale) else {
        return Value::Null;
    };
    let factor = 10f64.powi(exp);
    Value::number(round(n * factor) / factor)
}

/// Round half toward positive infinity
fn decimal(args: &[Value]) -> Value {
    if arg(args, 1).is_null() {
        return Value::Null;
    }
    scaled(args, |x| (x + 0.5).floor())
}

fn floor(args: &[Value]) -> Value {
    scaled(args, f64::floor)
}

fn ceiling(args: &[Value]) -> Value {
    scaled(args, f64::ceil)
}

/// Ties away from zero
fn round_half_up(args: &[Value]) -> Value {
    scaled(args, |x| x.signum() * (x.abs() + 0.5).floor())
}

/// Ties toward zero
fn round_half_down(args: &[Value]) -> Value {
    scaled(args, |x| x.signum() * (x.abs() - 0.5).ceil())
}

/// Away from zero
fn round_up(args: &[Value]) -> Value {
    scaled(args, |x| x.signum() * x.abs().ceil())
}

/// Toward zero
fn round_down(args: &[Value]) -> Value {
    scaled(args, f64::trunc)
}

fn abs(args: &[Value]) -> Value {
    feel_types::abs(arg(args, 0))
}

/// Floored modulo: the result has the sign of the divisor
fn modulo(args: &[Value]) -> Value {
    match (num(args, 0), num(args, 1)) {
        (Some(_), Some(divisor)) if divisor == 0.0 => Value::Null,
        (Some(dividend), Some(divisor)) => {
            Value::number(dividend - divisor * (dividend / divisor).floor())
        }
        _ => Value::Null,
    }
}

fn unary(args: &[Value], f: fn(f64) -> f64) -> Value {
    num(args, 0).map_or(Value::Null, |n| Value::number(f(n)))
}

fn sqrt(args: &[Value]) -> Value {
    unary(args, f64::sqrt)
}

fn log(args: &[Value]) -> Value {
    unary(args, f64::ln)
}

fn exp(args: &[Value]) -> Value {
    unary(args, f64::exp)
}

fn odd(args: &[Value]) -> Value {
    match arg(args, 0) {
        Value::Number(_) => Value::Boolean(int(args, 0).is_some_and(|i| i % 2 != 0)),
        _ => Value::Null,
    }
}

fn even(args: &[Value]) -> Value {
    match arg(args, 0) {
        Value::Number(_) => Value::Boolean(int(args, 0).is_some_and(|i| i % 2 == 0)),
        _ => Value::Null,
    }
}

fn random_number(_args: &[Value]) -> Value {
    Value::number(rand::random::<f64>())
}
