//! The built-in function table
//!
//! Names are exact and may contain spaces. The parser uses
//! [`is_builtin_prefix`] to join consecutive name tokens into a multi-word
//! built-in name.

use crate::functions;
use feel_types::{FeelFunction, Value};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Native implementation of a built-in
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A built-in function definition
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// Exact name, possibly multi-word
    pub name: &'static str,
    /// Parameter names, used to bind named arguments
    pub params: &'static [&'static str],
    pub func: BuiltinFn,
}

impl Builtin {
    pub const fn new(
        name: &'static str,
        params: &'static [&'static str],
        func: BuiltinFn,
    ) -> Self {
        Self { name, params, func }
    }
}

static REGISTRY: Lazy<IndexMap<&'static str, FeelFunction>> = Lazy::new(|| {
    let registry: IndexMap<_, _> = functions::ALL
        .iter()
        .flat_map(|group| group.iter())
        .map(|b| (b.name, FeelFunction::native(b.name, b.params, b.func)))
        .collect();
    log::trace!("registered {} built-in functions", registry.len());
    registry
});

/// Proper word prefixes of every multi-word name ("string" for "string length")
static PREFIXES: Lazy<HashSet<String>> = Lazy::new(|| {
    let mut prefixes = HashSet::new();
    for name in REGISTRY.keys() {
        let words: Vec<&str> = name.split(' ').collect();
        for n in 1..words.len() {
            prefixes.insert(words[..n].join(" "));
        }
    }
    prefixes
});

/// Look up a built-in by exact name
pub fn get_builtin(name: &str) -> Option<FeelFunction> {
    REGISTRY.get(name).cloned()
}

/// All built-in names, sorted
pub fn builtin_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

pub fn is_builtin(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

/// Whether `words` can still grow into a longer built-in name
pub fn is_builtin_prefix(words: &str) -> bool {
    PREFIXES.contains(words)
}

/// Call a built-in by name, `Null` when there is no such built-in
pub fn call_builtin(name: &str, args: &[Value]) -> Value {
    match REGISTRY.get(name) {
        Some(function) => function.call(args),
        None => {
            log::debug!("no built-in named {:?}", name);
            Value::Null
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_prefixes() {
        assert!(is_builtin_prefix("string"));
        assert!(is_builtin_prefix("round"));
        assert!(is_builtin_prefix("round half"));
        assert!(is_builtin_prefix("date and"));
        assert!(!is_builtin_prefix("string length"));
        assert!(!is_builtin_prefix("count"));
        assert!(is_builtin("round half up"));
        assert!(!is_builtin("round half"));
    }

    #[test]
    fn test_names_are_unique_and_sorted() {
        let names = builtin_names();
        assert_eq!(names.len(), REGISTRY.len());
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        let total: usize = functions::ALL.iter().map(|g| g.len()).sum();
        assert_eq!(total, names.len(), "duplicate built-in name");
    }

    #[test]
    fn test_builtin_function_values_share_identity() {
        assert_eq!(get_builtin("count"), get_builtin("count"));
        assert_eq!(get_builtin("count").map(|f| f.params().to_vec()), Some(vec!["list".to_string()]));
        assert!(get_builtin("no such function").is_none());
    }
}
