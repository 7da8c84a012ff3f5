//! Eval and test command implementation

use super::output::{self, OutputFormat};
use crate::{Environment, Expr, ParseResult, Value, evaluate, evaluate_unary_tests};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the eval command
pub struct EvalConfig {
    pub expression: String,
    pub vars: Vec<String>,
    pub context: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Configuration for the test command
pub struct TestConfig {
    pub tests: String,
    pub input: String,
    pub vars: Vec<String>,
    pub context: Option<PathBuf>,
}

/// Evaluate one expression and print its value
pub fn eval(config: EvalConfig) -> Result<()> {
    let env = build_environment(config.context.as_deref(), &config.vars)?;
    let value = eval_text(&config.expression, &env)?;
    output::print_value(&value, config.format)
}

/// Match a unary-test cell against an input and print `true` or `false`
pub fn test(config: TestConfig) -> Result<()> {
    let env = build_environment(config.context.as_deref(), &config.vars)?;
    let input = eval_text(&config.input, &env)?;
    let tests = parsed(&config.tests, crate::parse_unary_tests(&config.tests))?;
    let matched = evaluate_unary_tests(&tests, &input, &env);
    log::debug!("input {input} against `{}`: {matched}", config.tests);
    println!("{matched}");
    Ok(())
}

/// Environment from an optional JSON file plus `name=expression` bindings
///
/// Each binding is evaluated in the environment built so far, so later
/// bindings can use earlier ones.
pub fn build_environment(context: Option<&Path>, vars: &[String]) -> Result<Environment> {
    let mut env = match context {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read context file: {}", path.display()))?;
            let json: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?;
            Environment::from_json(&json)?
        }
        None => Environment::new(),
    };
    for var in vars {
        let (name, text) = parse_binding(var)?;
        let value = eval_text(text, &env)?;
        log::debug!("bound {name} = {value}");
        env = env.bind(name, value);
    }
    Ok(env)
}

/// Split `name=expression` at the first `=`
pub fn parse_binding(binding: &str) -> Result<(&str, &str)> {
    let Some((name, text)) = binding.split_once('=') else {
        bail!("Expected name=expression, got `{binding}`");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("Missing variable name in `{binding}`");
    }
    Ok((name, text.trim()))
}

pub(super) fn eval_text(text: &str, env: &Environment) -> Result<Value> {
    let ast = parsed(text, crate::parse_expression(text))?;
    Ok(evaluate(&ast, env))
}

/// The tree of a clean parse; diagnostics go to stderr otherwise
pub(super) fn parsed(source: &str, result: ParseResult) -> Result<Expr> {
    match result.into_result() {
        Ok(ast) => Ok(ast),
        Err(error) => {
            eprintln!("{}", output::render_diagnostics(source, error.parse_errors()));
            Err(error).with_context(|| format!("Cannot parse `{source}`"))
        }
    }
}
