//! FEEL Value types - runtime representation of all FEEL values
//!
//! The variant is closed: every runtime value, including the results of
//! failed operations (`Null`), is one of these cases.

use crate::{
    DayTimeDuration, FeelDate, FeelDateTime, FeelFunction, FeelRange, FeelTime, YearMonthDuration,
};
use indexmap::IndexMap;
use std::fmt;

/// Ordered mapping from key to value
pub type Context = IndexMap<String, Value>;

/// The primary value type for FEEL runtime values.
#[derive(Debug, Clone, Default)]
pub enum Value {
    // === Primitive Types ===
    /// Unknown, missing, or the result of an invalid operation
    #[default]
    Null,
    Boolean(bool),
    /// IEEE-754 double; never NaN or infinite
    Number(f64),
    String(String),

    // === Temporal Types ===
    Date(FeelDate),
    Time(FeelTime),
    DateTime(FeelDateTime),
    DayTimeDuration(DayTimeDuration),
    YearMonthDuration(YearMonthDuration),

    // === Collection Types ===
    /// Ordered sequence, duplicates and nesting allowed
    List(Vec<Value>),
    /// Insertion-ordered key/value mapping
    Context(Context),
    Range(Box<FeelRange>),

    /// A callable: built-in or user-defined closure
    Function(FeelFunction),
}

impl Value {
    /// Build a number, collapsing NaN and infinities to `Null`
    pub fn number(n: f64) -> Self {
        if n.is_finite() {
            // no negative zero
            Self::Number(if n == 0.0 { 0.0 } else { n })
        } else {
            Self::Null
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
        Self::List(values.into_iter().collect())
    }

    pub fn context<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Self::Context(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn range(range: FeelRange) -> Self {
        Self::Range(Box::new(range))
    }

    pub fn day_time_duration(seconds: f64) -> Self {
        if seconds.is_finite() {
            Self::DayTimeDuration(DayTimeDuration(seconds))
        } else {
            Self::Null
        }
    }

    pub fn year_month_duration(months: i64) -> Self {
        Self::YearMonthDuration(YearMonthDuration(months))
    }

    /// Wrap an optional value, `None` becoming `Null`
    pub fn from_option<T: Into<Value>>(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Self::Boolean(false))
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Number with no fractional part that fits an `i64`
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => Some(*n as i64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_context(&self) -> Option<&Context> {
        match self {
            Self::Context(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&FeelRange> {
        match self {
            Self::Range(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FeelFunction> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Date part of a date or date-time
    pub fn as_date(&self) -> Option<FeelDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::DateTime(dt) => Some(dt.date),
            _ => None,
        }
    }

    /// The value as a list, wrapping a scalar as a singleton
    pub fn into_list(self) -> Vec<Value> {
        match self {
            Self::List(l) => l,
            other => vec![other],
        }
    }

    /// FEEL type name, as accepted by `instance of`
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::DateTime(_) => "date and time",
            Self::DayTimeDuration(_) => "days and time duration",
            Self::YearMonthDuration(_) => "years and months duration",
            Self::List(_) => "list",
            Self::Context(_) => "context",
            Self::Range(_) => "range",
            Self::Function(_) => "function",
        }
    }

    /// Runtime type check; `Any` matches everything except `null`
    pub fn is_instance_of(&self, type_name: &str) -> bool {
        match type_name {
            "Any" => !self.is_null(),
            name => self.type_name() == name,
        }
    }

    /// Named property lookup (context key or temporal component)
    ///
    /// Lists are not handled here; path access over a list is element-wise
    /// and belongs to the evaluator.
    pub fn property(&self, name: &str) -> Value {
        match self {
            Self::Context(ctx) => ctx.get(name).cloned().unwrap_or(Value::Null),
            Self::Date(d) => date_property(d, name),
            Self::Time(t) => time_property(t, name),
            Self::DateTime(dt) => match date_property(&dt.date, name) {
                Value::Null => time_property(&dt.time, name),
                v => v,
            },
            Self::DayTimeDuration(d) => {
                let (days, hours, minutes, seconds) = d.components();
                match name {
                    "days" => Value::number(days as f64),
                    "hours" => Value::number(hours as f64),
                    "minutes" => Value::number(minutes as f64),
                    "seconds" => Value::number(seconds),
                    _ => Value::Null,
                }
            }
            Self::YearMonthDuration(d) => match name {
                "years" => Value::number(d.years_part() as f64),
                "months" => Value::number(d.months_part() as f64),
                _ => Value::Null,
            },
            Self::Range(r) => match name {
                "start" => r.start.clone(),
                "end" => r.end.clone(),
                "start included" => Value::Boolean(r.start_included),
                "end included" => Value::Boolean(r.end_included),
                _ => Value::Null,
            },
            _ => Value::Null,
        }
    }
}

fn date_property(date: &FeelDate, name: &str) -> Value {
    match name {
        "year" => Value::number(f64::from(date.year)),
        "month" => Value::number(f64::from(date.month)),
        "day" => Value::number(f64::from(date.day)),
        "weekday" => Value::number(f64::from(date.weekday())),
        _ => Value::Null,
    }
}

fn time_property(time: &FeelTime, name: &str) -> Value {
    match name {
        "hour" => Value::number(f64::from(time.hour)),
        "minute" => Value::number(f64::from(time.minute)),
        "second" => Value::number(f64::from(time.second) + f64::from(time.nanosecond) / 1e9),
        "time offset" => Value::from_option(time.offset.map(|o| DayTimeDuration(f64::from(o)))),
        "timezone" => Value::from_option(time.zone.clone()),
        _ => Value::Null,
    }
}

// === Conversions ===

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<FeelDate> for Value {
    fn from(d: FeelDate) -> Self {
        Self::Date(d)
    }
}

impl From<FeelTime> for Value {
    fn from(t: FeelTime) -> Self {
        Self::Time(t)
    }
}

impl From<FeelDateTime> for Value {
    fn from(dt: FeelDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<DayTimeDuration> for Value {
    fn from(d: DayTimeDuration) -> Self {
        Self::day_time_duration(d.0)
    }
}

impl From<YearMonthDuration> for Value {
    fn from(d: YearMonthDuration) -> Self {
        Self::YearMonthDuration(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Self::List(l)
    }
}

impl From<FeelFunction> for Value {
    fn from(f: FeelFunction) -> Self {
        Self::Function(f)
    }
}

impl From<FeelRange> for Value {
    fn from(r: FeelRange) -> Self {
        Self::range(r)
    }
}

/// Structural equality, see [`crate::values_equal`]
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::values_equal(self, other)
    }
}

/// Textual rendering; strings nested in collections are quoted
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "\"{}\"", escape(s)),
            Self::Date(d) => write!(f, "{}", d),
            Self::Time(t) => write!(f, "{}", t),
            Self::DateTime(dt) => write!(f, "{}", dt),
            Self::DayTimeDuration(d) => write!(f, "{}", d),
            Self::YearMonthDuration(d) => write!(f, "{}", d),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Context(ctx) => {
                write!(f, "{{")?;
                for (i, (key, value)) in ctx.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Self::Range(r) => write!(f, "{}", r),
            Self::Function(func) => write!(f, "{}", func),
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Rendering used by the `string` built-in: top-level strings are bare
pub fn to_feel_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
