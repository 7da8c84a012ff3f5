//! Arithmetic over FEEL values
//!
//! Every operation is total: unsupported operand kinds, division by zero and
//! out-of-range results produce `Null`.

use crate::{DayTimeDuration, FeelDateTime, Value, YearMonthDuration};

pub fn add(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Value::number(x + y),
        (Value::String(x), Value::String(y)) => Value::String(format!("{}{}", x, y)),
        (Value::DayTimeDuration(x), Value::DayTimeDuration(y)) => {
            Value::day_time_duration(x.0 + y.0)
        }
        (Value::YearMonthDuration(x), Value::YearMonthDuration(y)) => {
            Value::from_option(x.0.checked_add(y.0).map(YearMonthDuration))
        }
        _ if is_temporal(a) && is_duration(b) => shift(a, b, 1),
        _ if is_duration(a) && is_temporal(b) => shift(b, a, 1),
        _ => Value::Null,
    }
}

pub fn subtract(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Value::number(x - y),
        (Value::DayTimeDuration(x), Value::DayTimeDuration(y)) => {
            Value::day_time_duration(x.0 - y.0)
        }
        (Value::YearMonthDuration(x), Value::YearMonthDuration(y)) => {
            Value::from_option(x.0.checked_sub(y.0).map(YearMonthDuration))
        }
        (Value::Date(x), Value::Date(y)) => {
            Value::from(DayTimeDuration::from_days(x.days() - y.days()))
        }
        (Value::DateTime(x), Value::DateTime(y)) => elapsed(x.seconds_since(y)),
        (Value::DateTime(x), Value::Date(y)) => {
            elapsed(x.seconds_since(&FeelDateTime::from_date(*y)))
        }
        (Value::Date(x), Value::DateTime(y)) => {
            elapsed(FeelDateTime::from_date(*x).seconds_since(y))
        }
        (Value::Time(x), Value::Time(y)) => elapsed(x.seconds_since(y)),
        _ if is_temporal(a) && is_duration(b) => shift(a, b, -1),
        _ => Value::Null,
    }
}

fn is_temporal(v: &Value) -> bool {
    matches!(v, Value::Date(_) | Value::DateTime(_) | Value::Time(_))
}

fn is_duration(v: &Value) -> bool {
    matches!(v, Value::DayTimeDuration(_) | Value::YearMonthDuration(_))
}

fn elapsed(seconds: Option<f64>) -> Value {
    Value::from_option(seconds.map(DayTimeDuration))
}

/// Move a temporal value by a duration in the given direction
fn shift(temporal: &Value, duration: &Value, sign: i64) -> Value {
    match (temporal, duration) {
        // whole days only, truncated toward zero
        (Value::Date(d), Value::DayTimeDuration(k)) => {
            Value::from_option(k.whole_days().checked_mul(sign).and_then(|n| d.add_days(n)))
        }
        (Value::Date(d), Value::YearMonthDuration(k)) => {
            Value::from_option(k.0.checked_mul(sign).and_then(|n| d.add_months(n)))
        }
        (Value::DateTime(dt), Value::DayTimeDuration(k)) => {
            Value::from_option(dt.add_seconds(sign as f64 * k.0))
        }
        (Value::DateTime(dt), Value::YearMonthDuration(k)) => {
            Value::from_option(k.0.checked_mul(sign).and_then(|n| dt.add_months(n)))
        }
        (Value::Time(t), Value::DayTimeDuration(k)) => {
            Value::from_option(t.add_seconds(sign as f64 * k.0))
        }
        _ => Value::Null,
    }
}

pub fn multiply(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Value::number(x * y),
        (Value::DayTimeDuration(d), Value::Number(n))
        | (Value::Number(n), Value::DayTimeDuration(d)) => Value::day_time_duration(d.0 * n),
        (Value::YearMonthDuration(d), Value::Number(n))
        | (Value::Number(n), Value::YearMonthDuration(d)) => months(d.0 as f64 * n),
        _ => Value::Null,
    }
}

pub fn divide(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (_, Value::Number(y)) if *y == 0.0 => Value::Null,
        (Value::Number(x), Value::Number(y)) => Value::number(x / y),
        (Value::DayTimeDuration(d), Value::Number(n)) => Value::day_time_duration(d.0 / n),
        (Value::YearMonthDuration(d), Value::Number(n)) => months(d.0 as f64 / n),
        (Value::DayTimeDuration(x), Value::DayTimeDuration(y)) if y.0 != 0.0 => {
            Value::number(x.0 / y.0)
        }
        (Value::YearMonthDuration(x), Value::YearMonthDuration(y)) if y.0 != 0 => {
            Value::number(x.0 as f64 / y.0 as f64)
        }
        _ => Value::Null,
    }
}

pub fn power(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Value::number(x.powf(*y)),
        _ => Value::Null,
    }
}

pub fn negate(a: &Value) -> Value {
    match a {
        Value::Number(x) => Value::number(-x),
        Value::DayTimeDuration(d) => Value::day_time_duration(-d.0),
        Value::YearMonthDuration(d) => Value::from_option(d.0.checked_neg().map(YearMonthDuration)),
        _ => Value::Null,
    }
}

/// Absolute value of a number or duration
pub fn abs(a: &Value) -> Value {
    match a {
        Value::Number(x) => Value::number(x.abs()),
        Value::DayTimeDuration(d) => Value::day_time_duration(d.0.abs()),
        Value::YearMonthDuration(d) => Value::from_option(d.0.checked_abs().map(YearMonthDuration)),
        _ => Value::Null,
    }
}

fn months(m: f64) -> Value {
    if m.is_finite() {
        Value::year_month_duration(m.trunc() as i64)
    } else {
        Value::Null
    }
}
