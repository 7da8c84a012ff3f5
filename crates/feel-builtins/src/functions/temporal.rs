//! Temporal utility functions
//!
//! Implements: now, today, day of week, day of year, week of year,
//! month of year, last day of month

use crate::Builtin;
use crate::args::arg;
use chrono::{Datelike, Local, Timelike};
use feel_types::{DAY_NAMES, FeelDate, FeelDateTime, FeelTime, MONTH_NAMES, Value};

pub const FUNCTIONS: &[Builtin] = &[
    Builtin::new("now", &[], now),
    Builtin::new("today", &[], today),
    Builtin::new("day of week", &["date"], day_of_week),
    Builtin::new("day of year", &["date"], day_of_year),
    Builtin::new("week of year", &["date"], week_of_year),
    Builtin::new("month of year", &["date"], month_of_year),
    Builtin::new("last day of month", &["date"], last_day_of_month),
];

/// Wall-clock date in the local zone
fn local_date() -> Option<FeelDate> {
    let today = Local::now().date_naive();
    FeelDate::new(today.year(), u8::try_from(today.month()).ok()?, u8::try_from(today.day()).ok()?)
}

/// Current local date-time carrying the local UTC offset
fn now(_args: &[Value]) -> Value {
    let current = Local::now();
    let (Some(date), Ok(hour), Ok(minute), Ok(second)) = (
        local_date(),
        u8::try_from(current.hour()),
        u8::try_from(current.minute()),
        // leap seconds are folded into :59
        u8::try_from(current.second().min(59)),
    ) else {
        return Value::Null;
    };
    let nanos = current.nanosecond().min(999_999_999);
    FeelTime::new(hour, minute, second, nanos)
        .and_then(|t| t.with_offset(current.offset().local_minus_utc()))
        .map_or(Value::Null, |t| Value::DateTime(FeelDateTime::new(date, t)))
}

fn today(_args: &[Value]) -> Value {
    Value::from_option(local_date())
}

fn day_of_week(args: &[Value]) -> Value {
    arg(args, 0).as_date().map_or(Value::Null, |d| {
        Value::string(DAY_NAMES[usize::from(d.weekday() - 1)])
    })
}

fn day_of_year(args: &[Value]) -> Value {
    arg(args, 0).as_date().map_or(Value::Null, |d| Value::number(f64::from(d.day_of_year())))
}

/// ISO-8601 week number
fn week_of_year(args: &[Value]) -> Value {
    arg(args, 0).as_date().map_or(Value::Null, |d| Value::number(f64::from(d.iso_week())))
}

fn month_of_year(args: &[Value]) -> Value {
    arg(args, 0).as_date().map_or(Value::Null, |d| {
        Value::string(MONTH_NAMES[usize::from(d.month - 1)])
    })
}

fn last_day_of_month(args: &[Value]) -> Value {
    arg(args, 0)
        .as_date()
        .map_or(Value::Null, |d| Value::number(f64::from(d.last_day_of_month())))
}
