//! String functions
//!
//! Implements: string, string length, substring, substring before,
//! substring after, upper case, lower case, contains, starts with, ends with,
//! matches, replace, split, string join

use crate::Builtin;
use crate::args::{arg, int, list, opt_int, text};
use feel_types::{Value, to_feel_string};
use regex::Regex;

pub const FUNCTIONS: &[Builtin] = &[
    Builtin::new("string", &["from"], string),
    Builtin::new("string length", &["string"], string_length),
    Builtin::new("substring", &["string", "start position", "length"], substring),
    Builtin::new("substring before", &["string", "match"], substring_before),
    Builtin::new("substring after", &["string", "match"], substring_after),
    Builtin::new("upper case", &["string"], upper_case),
    Builtin::new("lower case", &["string"], lower_case),
    Builtin::new("contains", &["string", "match"], contains),
    Builtin::new("starts with", &["string", "match"], starts_with),
    Builtin::new("ends with", &["string", "match"], ends_with),
    Builtin::new("matches", &["input", "pattern", "flags"], matches),
    Builtin::new("replace", &["input", "pattern", "replacement", "flags"], replace),
    Builtin::new("split", &["string", "delimiter"], split),
    Builtin::new("string join", &["list", "delimiter"], string_join),
];

fn string(args: &[Value]) -> Value {
    Value::from_option(to_feel_string(arg(args, 0)))
}

fn string_length(args: &[Value]) -> Value {
    match text(args, 0) {
        Some(s) => Value::number(s.chars().count() as f64),
        None => Value::Null,
    }
}

/// 1-based start, negative counts from the end, optional length
fn substring(args: &[Value]) -> Value {
    let (Some(s), Some(start), Some(length)) = (text(args, 0), int(args, 1), opt_int(args, 2))
    else {
        return Value::Null;
    };
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len() as i64;
    let from = match start {
        0 => return Value::Null,
        p if p > 0 => p - 1,
        p => (len + p).max(0),
    };
    if from >= len {
        return Value::string("");
    }
    let to = match length {
        Some(n) if n < 0 => return Value::Null,
        Some(n) => (from + n).min(len),
        None => len,
    };
    Value::String(chars[from as usize..to as usize].iter().collect())
}

fn substring_before(args: &[Value]) -> Value {
    match (text(args, 0), text(args, 1)) {
        (Some(s), Some(m)) => Value::string(s.find(m).map_or("", |i| &s[..i])),
        _ => Value::Null,
    }
}

fn substring_after(args: &[Value]) -> Value {
    match (text(args, 0), text(args, 1)) {
        (Some(s), Some(m)) => Value::string(s.find(m).map_or("", |i| &s[i + m.len()..])),
        _ => Value::Null,
    }
}

fn upper_case(args: &[Value]) -> Value {
    text(args, 0).map_or(Value::Null, |s| Value::String(s.to_uppercase()))
}

fn lower_case(args: &[Value]) -> Value {
    text(args, 0).map_or(Value::Null, |s| Value::String(s.to_lowercase()))
}

fn string_test(args: &[Value], test: fn(&str, &str) -> bool) -> Value {
    match (text(args, 0), text(args, 1)) {
        (Some(s), Some(m)) => Value::Boolean(test(s, m)),
        _ => Value::Null,
    }
}

fn contains(args: &[Value]) -> Value {
    string_test(args, |s, m| s.contains(m))
}

fn starts_with(args: &[Value]) -> Value {
    string_test(args, |s, m| s.starts_with(m))
}

fn ends_with(args: &[Value]) -> Value {
    string_test(args, |s, m| s.ends_with(m))
}

/// Compile a pattern with XPath-style flags (`i`, `s`, `m`, `x`)
///
/// A malformed pattern or an unknown flag yields `None`.
fn compile(pattern: &str, flags: &Value) -> Option<Regex> {
    let flags = match flags {
        Value::Null => "",
        Value::String(f) => f.as_str(),
        _ => return None,
    };
    if !flags.chars().all(|c| matches!(c, 'i' | 's' | 'm' | 'x')) {
        log::debug!("unsupported regex flags {:?}", flags);
        return None;
    }
    let source = if flags.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{}){}", flags, pattern)
    };
    match Regex::new(&source) {
        Ok(regex) => Some(regex),
        Err(err) => {
            log::debug!("invalid regular expression {:?}: {}", pattern, err);
            None
        }
    }
}

fn matches(args: &[Value]) -> Value {
    match (text(args, 0), text(args, 1)) {
        (Some(input), Some(pattern)) => compile(pattern, arg(args, 2))
            .map_or(Value::Null, |regex| Value::Boolean(regex.is_match(input))),
        _ => Value::Null,
    }
}

/// Replaces every match
fn replace(args: &[Value]) -> Value {
    match (text(args, 0), text(args, 1), text(args, 2)) {
        (Some(input), Some(pattern), Some(replacement)) => compile(pattern, arg(args, 3))
            .map_or(Value::Null, |regex| {
                Value::String(regex.replace_all(input, replacement).into_owned())
            }),
        _ => Value::Null,
    }
}

/// Split on a regular-expression delimiter
fn split(args: &[Value]) -> Value {
    match (text(args, 0), text(args, 1)) {
        (Some(s), Some(delimiter)) => compile(delimiter, &Value::Null)
            .map_or(Value::Null, |regex| Value::list(regex.split(s).map(Value::string))),
        _ => Value::Null,
    }
}

/// Joins the non-null strings of a list; any other element makes it null
fn string_join(args: &[Value]) -> Value {
    let Some(items) = list(args, 0) else {
        return Value::Null;
    };
    let delimiter = match arg(args, 1) {
        Value::Null => "",
        Value::String(d) => d.as_str(),
        _ => return Value::Null,
    };
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => parts.push(s.as_str()),
            Value::Null => {}
            _ => return Value::Null,
        }
    }
    Value::String(parts.join(delimiter))
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
    fn test_substring_positions() {
        assert_eq!(substring(&[s("foobar"), n(3.0)]), s("obar"));
        assert_eq!(substring(&[s("foobar"), n(3.0), n(3.0)]), s("oba"));
        assert_eq!(substring(&[s("foobar"), n(-2.0), n(1.0)]), s("a"));
        assert_eq!(substring(&[s("foobar"), n(10.0)]), s(""));
        assert!(substring(&[s("foobar"), n(0.0)]).is_null());
        assert!(substring(&[s("foobar")]).is_null());
    }

    #[test]
    fn test_unicode_length() {
        assert_eq!(string_length(&[s("żółw")]), n(4.0));
    }

    #[test]
    fn test_regex_functions() {
        assert_eq!(matches(&[s("FooBar"), s("^fo*b"), s("i")]), Value::Boolean(true));
        assert_eq!(replace(&[s("abcd"), s("(ab)|(a)"), s("[1=$1][2=$2]")]), s("[1=ab][2=]cd"));
        assert_eq!(replace(&[s("a.b.c"), s("\\."), s("-")]), s("a-b-c"));
        assert_eq!(
            split(&[s("John Doe  Smith"), s("\\s+")]),
            Value::list([s("John"), s("Doe"), s("Smith")])
        );
    }

    #[test]
    fn test_malformed_pattern_is_null() {
        assert!(matches(&[s("abc"), s("(")]).is_null());
        assert!(matches(&[s("abc"), s("a"), s("q")]).is_null());
    }

    #[test]
    fn test_string_join() {
        let list = Value::list([s("a"), Value::Null, s("c")]);
        assert_eq!(string_join(&[list.clone(), s(", ")]), s("a, c"));
        assert_eq!(string_join(&[list]), s("ac"));
        assert!(string_join(&[Value::list([n(1.0)])]).is_null());
    }

    #[test]
    fn test_string_rendering() {
        assert_eq!(string(&[n(1.5)]), s("1.5"));
        assert_eq!(string(&[s("x")]), s("x"));
        assert!(string(&[Value::Null]).is_null());
        assert_eq!(string(&[Value::list([n(1.0), s("a")])]), s("[1, \"a\"]"));
    }
}
