//! Callable values: built-ins and user-defined closures

use crate::Value;
use std::fmt;
use std::sync::Arc;

/// Native body of a function value
pub type FunctionBody = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A function value
///
/// Cloning is cheap; clones share the body. Two function values are equal
/// only when they share the same body.
#[derive(Clone)]
pub struct FeelFunction {
    name: Option<Arc<str>>,
    params: Arc<[String]>,
    body: Arc<FunctionBody>,
}

impl FeelFunction {
    pub fn new<F>(name: Option<&str>, params: Vec<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.map(Arc::from),
            params: params.into(),
            body: Arc::new(body),
        }
    }

    /// Function built from a plain function pointer
    pub fn native(name: &str, params: &[&str], body: fn(&[Value]) -> Value) -> Self {
        Self::new(Some(name), params.iter().map(|p| p.to_string()).collect(), body)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Declared parameter names, in positional order
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }

    /// Map named arguments onto positional slots by declared name
    ///
    /// Returns `None` when a name is not declared. A parameter may declare
    /// alternative names separated by `|` (`from|year`). Without declared
    /// names the written order is used. Unfilled slots are `Null`.
    pub fn bind_named(&self, args: Vec<(String, Value)>) -> Option<Vec<Value>> {
        if self.params.is_empty() {
            return Some(args.into_iter().map(|(_, v)| v).collect());
        }
        let mut slots: Vec<Option<Value>> = vec![None; self.params.len()];
        for (name, value) in args {
            let index = self
                .params
                .iter()
                .position(|p| p.split('|').any(|alias| alias == name))?;
            slots[index] = Some(value);
        }
        // trailing unfilled slots are omitted arguments, not nulls
        while matches!(slots.last(), Some(None)) {
            slots.pop();
        }
        Some(slots.into_iter().map(Option::unwrap_or_default).collect())
    }
}

impl PartialEq for FeelFunction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for FeelFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeelFunction")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FeelFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function({})", self.params.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub() -> FeelFunction {
        FeelFunction::new(None, vec!["a".into(), "b".into()], |args| {
            match (args.first().and_then(Value::as_number), args.get(1).and_then(Value::as_number)) {
                (Some(a), Some(b)) => Value::number(a - b),
                _ => Value::Null,
            }
        })
    }

    #[test]
    fn test_call_and_equality() {
        let f = sub();
        let g = f.clone();
        assert_eq!(f.call(&[Value::number(5.0), Value::number(2.0)]), Value::number(3.0));
        assert_eq!(f, g);
        assert_ne!(f, sub());
        assert_eq!(f.to_string(), "function(a, b)");
    }

    #[test]
    fn test_bind_named() {
        let f = sub();
        let args = f
            .bind_named(vec![("b".into(), Value::number(1.0)), ("a".into(), Value::number(4.0))])
            .unwrap();
        assert_eq!(f.call(&args), Value::number(3.0));
        assert!(f.bind_named(vec![("c".into(), Value::Null)]).is_none());
    }

    #[test]
    fn test_bind_named_gap_is_null() {
        let f = sub();
        let args = f.bind_named(vec![("b".into(), Value::number(1.0))]).unwrap();
        assert_eq!(args, vec![Value::Null, Value::number(1.0)]);
    }

    #[test]
    fn test_bind_named_alias() {
        let f = FeelFunction::native("date", &["from|year", "month", "day"], |args| {
            Value::number(args.len() as f64)
        });
        let by_year = f
            .bind_named(vec![("year".into(), Value::number(2024.0)), ("day".into(), Value::number(1.0))])
            .unwrap();
        assert_eq!(by_year.len(), 3);
        let by_from = f.bind_named(vec![("from".into(), Value::string("2024-01-01"))]).unwrap();
        assert_eq!(by_from, vec![Value::string("2024-01-01")]);
    }
}
