//! Context functions
//!
//! Implements: get value, get entries, context put, context merge, context

use crate::Builtin;
use crate::args::{arg, items, text};
use feel_types::{Context, Value};

pub const FUNCTIONS: &[Builtin] = &[
    Builtin::new("get value", &["m", "key"], get_value),
    Builtin::new("get entries", &["m"], get_entries),
    Builtin::new("context put", &["context", "key", "value"], context_put),
    Builtin::new("context merge", &["contexts"], context_merge),
    Builtin::new("context", &["entries"], context),
];

fn get_value(args: &[Value]) -> Value {
    match (arg(args, 0), text(args, 1)) {
        (Value::Context(m), Some(key)) => m.get(key).cloned().unwrap_or_default(),
        _ => Value::Null,
    }
}

fn entry(key: &str, value: &Value) -> Value {
    Value::context([("key", Value::string(key)), ("value", value.clone())])
}

/// Entries as `{key, value}` contexts, in insertion order
fn get_entries(args: &[Value]) -> Value {
    match arg(args, 0) {
        Value::Context(m) => Value::list(m.iter().map(|(k, v)| entry(k, v))),
        _ => Value::Null,
    }
}

/// Set `value` at a key path, creating intermediate contexts
fn put_path(context: &Context, path: &[&str], value: Value) -> Option<Context> {
    let (key, rest) = path.split_first()?;
    let mut result = context.clone();
    let nested = if rest.is_empty() {
        value
    } else {
        let inner = match context.get(*key) {
            Some(Value::Context(inner)) => inner.clone(),
            None | Some(Value::Null) => Context::new(),
            Some(_) => return None,
        };
        Value::Context(put_path(&inner, rest, value)?)
    };
    result.insert(key.to_string(), nested);
    Some(result)
}

/// `key` is a single key or a list of keys naming a nested path
fn context_put(args: &[Value]) -> Value {
    let Value::Context(m) = arg(args, 0) else {
        return Value::Null;
    };
    let path: Option<Vec<&str>> = match arg(args, 1) {
        Value::String(key) => Some(vec![key.as_str()]),
        Value::List(keys) => keys.iter().map(Value::as_str).collect(),
        _ => None,
    };
    path.and_then(|p| put_path(m, &p, arg(args, 2).clone()))
        .map_or(Value::Null, Value::Context)
}

/// Later contexts override earlier keys
fn context_merge(args: &[Value]) -> Value {
    let Some(contexts) = items(args) else {
        return Value::Null;
    };
    let mut merged = Context::new();
    for c in contexts {
        let Value::Context(c) = c else {
            return Value::Null;
        };
        for (k, v) in c {
            merged.insert(k.clone(), v.clone());
        }
    }
    Value::Context(merged)
}

/// Build a context from `{key, value}` entries; a repeated key is `Null`
fn context(args: &[Value]) -> Value {
    let Some(entries) = items(args) else {
        return Value::Null;
    };
    let mut built = Context::new();
    for e in entries {
        let Value::Context(e) = e else {
            return Value::Null;
        };
        let (Some(Value::String(key)), Some(value)) = (e.get("key"), e.get("value")) else {
            return Value::Null;
        };
        if built.insert(key.clone(), value.clone()).is_some() {
            log::debug!("duplicate context key {:?}", key);
            return Value::Null;
        }
    }
    Value::Context(built)
}
