//! Boolean and null functions
//!
//! Implements: not, is defined, get or else

use crate::Builtin;
use crate::args::arg;
use feel_types::Value;

pub const FUNCTIONS: &[Builtin] = &[
    Builtin::new("not", &["negand"], not),
    Builtin::new("is defined", &["value"], is_defined),
    Builtin::new("get or else", &["value", "default"], get_or_else),
];

fn not(args: &[Value]) -> Value {
    match arg(args, 0) {
        Value::Boolean(b) => Value::Boolean(!b),
        _ => Value::Null,
    }
}

fn is_defined(args: &[Value]) -> Value {
    Value::Boolean(!arg(args, 0).is_null())
}

fn get_or_else(args: &[Value]) -> Value {
    match arg(args, 0) {
        Value::Null => arg(args, 1).clone(),
        value => value.clone(),
    }
}
