//! FEEL expression language for Rust
//!
//! This crate ties the workspace together:
//! - Parsing full expressions and decision table unary tests
//! - Tree-walking evaluation with three-valued logic
//! - The built-in function library
//! - Temporal values, ranges and JSON bridging
//!
//! # Example
//!
//! ```
//! use feel::{Environment, Value, eval_str};
//!
//! let env = Environment::builder().variable("age", Value::number(42.0)).build();
//! let result = eval_str("if age >= 18 then \"adult\" else \"minor\"", &env).unwrap();
//! assert_eq!(result, Value::string("adult"));
//! ```

// Re-export all public APIs from internal crates
pub use feel_ast as ast;
pub use feel_builtins as builtins;
pub use feel_diagnostics as diagnostics;
pub use feel_eval as eval;
pub use feel_parser as parser;
pub use feel_types as types;

// Convenience re-exports
pub use feel_ast::{Expr, Expression};
pub use feel_builtins::{builtin_names, get_builtin};
pub use feel_diagnostics::{FeelError, ParseError, Result};
pub use feel_eval::{
    Environment, EnvironmentBuilder, evaluate, evaluate_unary_test, evaluate_unary_tests,
};
pub use feel_parser::{ParseResult, parse_expression, parse_unary_tests};
pub use feel_types::{FeelFunction, Value, compare_values, parse_temporal};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;

/// Parse and evaluate an expression
///
/// Fails only when the text does not parse; evaluation problems yield
/// `Value::Null`.
pub fn eval_str(text: &str, env: &Environment) -> Result<Value> {
    let ast = parse_expression(text).into_result()?;
    Ok(evaluate(&ast, env))
}

/// Parse a unary-test cell and match it against an input value
pub fn matches_unary_tests(text: &str, input: &Value, env: &Environment) -> Result<bool> {
    let ast = parse_unary_tests(text).into_result()?;
    Ok(evaluate_unary_tests(&ast, input, env))
}
