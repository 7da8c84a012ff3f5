//! Argument helpers shared by the built-in functions

use feel_types::Value;

static NULL: Value = Value::Null;

/// Positional argument, `Null` when omitted
pub fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&NULL)
}

pub fn num(args: &[Value], index: usize) -> Option<f64> {
    arg(args, index).as_number()
}

pub fn int(args: &[Value], index: usize) -> Option<i64> {
    arg(args, index).as_integer()
}

pub fn text(args: &[Value], index: usize) -> Option<&str> {
    arg(args, index).as_str()
}

pub fn list(args: &[Value], index: usize) -> Option<&[Value]> {
    arg(args, index).as_list()
}

/// Optional integer argument: `Some(None)` when omitted or null
pub fn opt_int(args: &[Value], index: usize) -> Option<Option<i64>> {
    match arg(args, index) {
        Value::Null => Some(None),
        v => v.as_integer().map(Some),
    }
}

/// Items of a variadic function: one list argument or the arguments themselves
pub fn items(args: &[Value]) -> Option<&[Value]> {
    match args {
        [] | [Value::Null] => None,
        [Value::List(items)] => Some(items),
        _ => Some(args),
    }
}

/// Resolve a 1-based, negative-from-end position to a 0-based index
pub fn index(position: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let resolved = match position {
        0 => return None,
        p if p > 0 => p - 1,
        p => len + p,
    };
    (0..len).contains(&resolved).then_some(resolved as usize)
}
