//! Temporal construction and conversion
//!
//! Implements: date, time, date and time, duration, years and months duration
//!
//! Each constructor is overloaded on arity: one argument converts a string
//! or another temporal value, more arguments build from components.

use crate::Builtin;
use crate::args::{arg, int, num, text};
use feel_types::{
    FeelDate, FeelDateTime, FeelTime, Value, YearMonthDuration, parse_date, parse_date_time,
    parse_duration, parse_time,
};

pub const FUNCTIONS: &[Builtin] = &[
    Builtin::new("date", &["from|year", "month", "day"], date),
    Builtin::new("time", &["from|hour", "minute", "second", "offset"], time),
    Builtin::new("date and time", &["from|date", "time"], date_and_time),
    Builtin::new("duration", &["from"], duration),
    Builtin::new("years and months duration", &["from", "to"], years_and_months_duration),
];

fn date(args: &[Value]) -> Value {
    if args.len() > 1 {
        return date_from_parts(args);
    }
    match arg(args, 0) {
        Value::String(s) => Value::from_option(
            parse_date(s).or_else(|| parse_date_time(s).map(|dt| dt.date)),
        ),
        v => Value::from_option(v.as_date()),
    }
}

fn date_from_parts(args: &[Value]) -> Value {
    let (Some(year), Some(month), Some(day)) = (int(args, 0), int(args, 1), int(args, 2)) else {
        return Value::Null;
    };
    let (Ok(year), Ok(month), Ok(day)) = (i32::try_from(year), u8::try_from(month), u8::try_from(day))
    else {
        return Value::Null;
    };
    Value::from_option(FeelDate::new(year, month, day))
}

fn time(args: &[Value]) -> Value {
    if args.len() > 1 {
        return time_from_parts(args);
    }
    match arg(args, 0) {
        Value::String(s) => Value::from_option(
            parse_time(s).or_else(|| parse_date_time(s).map(|dt| dt.time)),
        ),
        Value::Time(t) => Value::Time(t.clone()),
        Value::DateTime(dt) => Value::Time(dt.time.clone()),
        Value::Date(_) => Value::from_option(FeelTime::midnight().with_offset(0)),
        _ => Value::Null,
    }
}

/// `second` may carry a fraction; `offset` is a days-time duration
fn time_from_parts(args: &[Value]) -> Value {
    let (Some(hour), Some(minute), Some(second)) = (int(args, 0), int(args, 1), num(args, 2))
    else {
        return Value::Null;
    };
    if !(0.0..60.0).contains(&second) {
        return Value::Null;
    }
    let (Ok(hour), Ok(minute)) = (u8::try_from(hour), u8::try_from(minute)) else {
        return Value::Null;
    };
    let nanos = (second.fract() * 1e9).round() as u32;
    let Some(t) = FeelTime::new(hour, minute, second.trunc() as u8, nanos) else {
        return Value::Null;
    };
    match arg(args, 3) {
        Value::Null => Value::Time(t),
        Value::DayTimeDuration(d) => Value::from_option(t.with_offset(d.seconds() as i32)),
        _ => Value::Null,
    }
}

fn date_and_time(args: &[Value]) -> Value {
    if args.len() > 1 {
        return match (arg(args, 0).as_date(), arg(args, 1)) {
            (Some(d), Value::Time(t)) => Value::DateTime(FeelDateTime::new(d, t.clone())),
            _ => Value::Null,
        };
    }
    match arg(args, 0) {
        Value::String(s) => Value::from_option(
            parse_date_time(s).or_else(|| parse_date(s).map(FeelDateTime::from_date)),
        ),
        Value::DateTime(dt) => Value::DateTime(dt.clone()),
        Value::Date(d) => Value::DateTime(FeelDateTime::from_date(*d)),
        _ => Value::Null,
    }
}

fn duration(args: &[Value]) -> Value {
    text(args, 0)
        .and_then(|s| parse_duration(s.trim()))
        .unwrap_or(Value::Null)
}

/// Whole calendar months between two dates or date-times
fn years_and_months_duration(args: &[Value]) -> Value {
    match (arg(args, 0).as_date(), arg(args, 1).as_date()) {
        (Some(from), Some(to)) => Value::from(YearMonthDuration::between(&from, &to)),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn s(v: &str) -> Value {
        Value::string(v)
    }

    fn n(v: f64) -> Value {
        Value::number(v)
    }

    #[test]
    fn test_date_overloads() {
        let expected = Value::Date(FeelDate::new(2024, 3, 1).unwrap());
        assert_eq!(date(&[s("2024-03-01")]), expected);
        assert_eq!(date(&[s("2024-03-01T10:00:00")]), expected);
        assert_eq!(date(&[n(2024.0), n(3.0), n(1.0)]), expected);
        assert_eq!(date(&[date_and_time(&[s("2024-03-01T23:59:00Z")])]), expected);
        assert!(date(&[n(2023.0), n(2.0), n(29.0)]).is_null());
        assert!(date(&[s("yesterday")]).is_null());
    }

    #[test]
    fn test_time_overloads() {
        assert_eq!(time(&[s("10:30:00")]).to_string(), "10:30:00");
        assert_eq!(
            time(&[n(10.0), n(30.0), n(15.5), Value::day_time_duration(3600.0)]).to_string(),
            "10:30:15.5+01:00"
        );
        assert_eq!(time(&[date(&[s("2024-03-01")])]).to_string(), "00:00:00Z");
        assert!(time(&[n(24.0), n(0.0), n(0.0)]).is_null());
    }

    #[test]
    fn test_date_and_time_overloads() {
        assert_eq!(date_and_time(&[s("2024-03-01")]).to_string(), "2024-03-01T00:00:00");
        assert_eq!(
            date_and_time(&[date(&[s("2024-03-01")]), time(&[s("08:00:00Z")])]).to_string(),
            "2024-03-01T08:00:00Z"
        );
        assert!(date_and_time(&[s("2024-03-01"), s("08:00:00")]).is_null());
    }

    #[test]
    fn test_durations() {
        assert_eq!(duration(&[s("P1DT2H")]), Value::day_time_duration(93_600.0));
        assert_eq!(duration(&[s("P2Y")]), Value::year_month_duration(24));
        assert!(duration(&[s("P1Y1D")]).is_null());
        assert_eq!(
            years_and_months_duration(&[date(&[s("2011-12-22")]), date(&[s("2013-08-24")])]),
            Value::year_month_duration(20)
        );
        assert_eq!(
            years_and_months_duration(&[date(&[s("2013-08-24")]), date(&[s("2011-12-22")])]),
            Value::year_month_duration(-20)
        );
    }
}
