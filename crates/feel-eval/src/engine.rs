//! Tree-walking evaluator
//!
//! Evaluation is a pure function of a node and an environment. Nothing here
//! fails: type mismatches, unresolved names and bad calls all collapse to
//! `null`, with a `debug!` record of why.

use crate::Environment;
use crate::comprehension::{for_each, quantified};
use crate::operators::{between, binary};
use crate::unary::evaluate_unary_tests;
use feel_ast::{
    CallExpr, Expr, Expression, FilterExpr, FunctionDefinition, INPUT_NAME, Literal,
    NamedCallExpr,
};
use feel_builtins::get_builtin;
use feel_types::{Context, FeelFunction, FeelRange, Value};
use std::sync::Arc;

/// Evaluate an expression in an environment
pub fn evaluate(expr: &Expr, env: &Environment) -> Value {
    match &expr.inner {
        Expression::Literal(literal) => eval_literal(literal),
        Expression::Name(name) => resolve(name, env),
        Expression::Path(path) => property(evaluate(&path.base, env), &path.name),
        Expression::Negate(operand) => feel_types::negate(&evaluate(operand, env)),
        Expression::Binary(expr) => binary(expr, env),
        Expression::Between(expr) => between(expr, env),
        Expression::In(expr) => {
            let operand = evaluate(&expr.operand, env);
            Value::Boolean(evaluate_unary_tests(&expr.test, &operand, env))
        }
        Expression::InstanceOf(expr) => {
            Value::Boolean(evaluate(&expr.operand, env).is_instance_of(expr.type_name.as_str()))
        }
        Expression::List(items) => Value::List(items.iter().map(|e| evaluate(e, env)).collect()),
        Expression::Context(entries) => {
            // later entries see the earlier ones
            let mut context = Context::new();
            for entry in entries {
                let scope = env.child(context.clone());
                let value = evaluate(&entry.value, &scope);
                context.insert(entry.key.clone(), value);
            }
            Value::Context(context)
        }
        Expression::Range(range) => Value::range(FeelRange::new(
            evaluate(&range.start, env),
            range.start_included,
            evaluate(&range.end, env),
            range.end_included,
        )),
        Expression::FunctionDefinition(def) => closure(def, env),
        Expression::Filter(filter) => eval_filter(filter, env),
        Expression::Call(call) => eval_call(call, env),
        Expression::NamedCall(call) => eval_named_call(call, env),
        Expression::If(expr) => {
            if evaluate(&expr.condition, env).is_true() {
                evaluate(&expr.then_branch, env)
            } else {
                evaluate(&expr.else_branch, env)
            }
        }
        Expression::For(expr) => for_each(expr, env),
        Expression::Quantified(expr) => quantified(expr, env),
        Expression::AnyInput | Expression::UnaryTests(_) | Expression::Negation(_) => {
            let input = env.input().cloned().unwrap_or_default();
            Value::Boolean(evaluate_unary_tests(expr, &input, env))
        }
    }
}

fn eval_literal(literal: &Literal) -> Value {
    match literal {
        Literal::Null => Value::Null,
        Literal::Boolean(b) => Value::Boolean(*b),
        Literal::Number(n) => Value::number(*n),
        Literal::String(s) => Value::string(s.as_str()),
        Literal::Temporal(raw) => {
            let value = feel_types::parse_temporal(raw);
            if value.is_null() {
                log::debug!("invalid temporal literal @\"{raw}\"");
            }
            value
        }
    }
}

/// Input, then built-ins, then the scope chain
fn resolve(name: &str, env: &Environment) -> Value {
    if name == INPUT_NAME {
        return env.input().cloned().unwrap_or_default();
    }
    if let Some(function) = get_builtin(name) {
        return Value::Function(function);
    }
    match env.lookup(name) {
        Some(value) => value.clone(),
        None => {
            log::debug!("unresolved name `{name}`");
            Value::Null
        }
    }
}

/// `.name` access, element-wise over lists
fn property(base: Value, name: &str) -> Value {
    match base {
        Value::List(items) => Value::List(items.iter().map(|item| item.property(name)).collect()),
        other => other.property(name),
    }
}

fn closure(def: &FunctionDefinition, env: &Environment) -> Value {
    let captured = env.clone();
    let params = def.params.clone();
    let body = Arc::clone(&def.body);
    let function = FeelFunction::new(None, def.params.clone(), move |args: &[Value]| {
        let bindings = params
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), args.get(i).cloned().unwrap_or_default()));
        evaluate(&body, &captured.child(bindings))
    });
    Value::Function(function)
}

/// Index when the bracket is a number, predicate filter otherwise
fn eval_filter(filter: &FilterExpr, env: &Environment) -> Value {
    let items = match evaluate(&filter.base, env) {
        Value::Null => return Value::Null,
        Value::List(items) => items,
        single => vec![single],
    };
    if let Value::Number(n) = evaluate(&filter.filter, env) {
        return index(&items, n);
    }
    let kept = items
        .into_iter()
        .filter(|item| {
            let mut bindings = vec![("item".to_string(), item.clone())];
            if let Value::Context(entries) = item {
                bindings.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            let scope = env.child(bindings).with_input(item.clone());
            match evaluate(&filter.filter, &scope) {
                Value::Boolean(keep) => keep,
                Value::Null => true,
                _ => false,
            }
        })
        .collect::<Vec<_>>();
    Value::List(kept)
}

/// 1-based, negative from the end
fn index(items: &[Value], n: f64) -> Value {
    if n.fract() != 0.0 || n == 0.0 {
        return Value::Null;
    }
    let len = items.len() as f64;
    let position = if n > 0.0 { n - 1.0 } else { len + n };
    if position < 0.0 || position >= len {
        return Value::Null;
    }
    items[position as usize].clone()
}

fn callee(expr: &Expr, env: &Environment) -> Option<FeelFunction> {
    match evaluate(expr, env) {
        Value::Function(function) => Some(function),
        other => {
            log::debug!("cannot call a {} value", other.type_name());
            None
        }
    }
}

fn eval_call(call: &CallExpr, env: &Environment) -> Value {
    let args: Vec<Value> = call.args.iter().map(|arg| evaluate(arg, env)).collect();
    callee(&call.callee, env).map_or(Value::Null, |f| f.call(&args))
}

fn eval_named_call(call: &NamedCallExpr, env: &Environment) -> Value {
    let args = call
        .args
        .iter()
        .map(|arg| (arg.name.clone(), evaluate(&arg.value, env)))
        .collect();
    let Some(function) = callee(&call.callee, env) else {
        return Value::Null;
    };
    match function.bind_named(args) {
        Some(positional) => function.call(&positional),
        None => {
            log::debug!(
                "named arguments do not match the parameters of `{}`",
                call.callee_name().unwrap_or("function")
            );
            Value::Null
        }
    }
}
