//! Lexical environments
//!
//! An [`Environment`] is an immutable frame of bindings with an optional
//! parent and an optional implicit input (`?`). Nested scopes never touch
//! their parent; they push a new frame that points at it. Frames are shared
//! through `Arc`, so closures keep their defining scope alive and several
//! threads can evaluate against the same environment.

use feel_diagnostics::{FEEL0402, FeelError, Result};
use feel_types::{Context, Value};
use serde_json::Value as Json;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Frame {
    bindings: Context,
    parent: Option<Environment>,
    input: Option<Value>,
}

/// Immutable, shareable scope chain
#[derive(Debug, Clone, Default)]
pub struct Environment(Arc<Frame>);

impl Environment {
    /// Create an empty root environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::default()
    }

    /// Root environment from a JSON object of process data
    pub fn from_json(json: &Json) -> Result<Self> {
        let Json::Object(map) = json else {
            return Err(FeelError::system(
                FEEL0402,
                "variables must be given as a JSON object",
            ));
        };
        let bindings = map
            .iter()
            .map(|(name, value)| (name.clone(), Value::from_json(value)))
            .collect();
        Ok(Self(Arc::new(Frame {
            bindings,
            ..Frame::default()
        })))
    }

    /// Child scope holding `bindings`
    pub fn child(&self, bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self(Arc::new(Frame {
            bindings: bindings.into_iter().collect(),
            parent: Some(self.clone()),
            input: None,
        }))
    }

    /// Child scope holding a single binding
    pub fn bind(&self, name: impl Into<String>, value: Value) -> Self {
        self.child([(name.into(), value)])
    }

    /// Child scope with the implicit input set
    pub fn with_input(&self, input: Value) -> Self {
        Self(Arc::new(Frame {
            bindings: Context::new(),
            parent: Some(self.clone()),
            input: Some(input),
        }))
    }

    /// Look a variable up along the scope chain, innermost first
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut frame = &self.0;
        loop {
            if let Some(value) = frame.bindings.get(name) {
                return Some(value);
            }
            frame = &frame.parent.as_ref()?.0;
        }
    }

    /// Nearest implicit input along the scope chain
    pub fn input(&self) -> Option<&Value> {
        let mut frame = &self.0;
        loop {
            if let Some(input) = &frame.input {
                return Some(input);
            }
            frame = &frame.parent.as_ref()?.0;
        }
    }

    /// Names visible from this scope, innermost first, without duplicates
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let mut frame = Some(&self.0);
        while let Some(current) = frame {
            for name in current.bindings.keys() {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            frame = current.parent.as_ref().map(|p| &p.0);
        }
        names
    }
}

/// Builder for a root [`Environment`]
#[derive(Debug, Default)]
pub struct EnvironmentBuilder {
    bindings: Context,
    input: Option<Value>,
}

impl EnvironmentBuilder {
    /// Bind a variable; a later binding of the same name wins
    pub fn variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.bindings.insert(name.into(), value);
        self
    }

    pub fn variables(mut self, bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.bindings.extend(bindings);
        self
    }

    /// Set the implicit input `?`
    pub fn input(mut self, input: Value) -> Self {
        self.input = Some(input);
        self
    }

    pub fn build(self) -> Environment {
        Environment(Arc::new(Frame {
            bindings: self.bindings,
            parent: None,
            input: self.input,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_child_shadows_without_touching_parent() {
        let root = Environment::builder().variable("x", Value::number(1.0)).build();
        let child = root.bind("x", Value::number(2.0));
        assert_eq!(child.lookup("x"), Some(&Value::number(2.0)));
        assert_eq!(root.lookup("x"), Some(&Value::number(1.0)));
        assert_eq!(child.lookup("y"), None);
    }

    #[test]
    fn test_input_is_inherited() {
        let env = Environment::new().with_input(Value::string("in")).bind("a", Value::Null);
        assert_eq!(env.input(), Some(&Value::string("in")));
        assert_eq!(Environment::new().input(), None);
    }

    #[test]
    fn test_from_json() {
        let env = Environment::from_json(&json!({"age": 42, "tags": ["a"]})).unwrap();
        assert_eq!(env.lookup("age"), Some(&Value::number(42.0)));
        assert_eq!(env.names(), vec!["age", "tags"]);
        let error = Environment::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(error.code(), FEEL0402);
    }
}
