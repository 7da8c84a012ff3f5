//! `for`, `some` and `every`
//!
//! Bindings nest left to right, so the last binding varies fastest. A later
//! domain is evaluated in the scope of the earlier bindings.

use crate::Environment;
use crate::engine::evaluate;
use feel_ast::{Binding, Domain, ForExpr, QuantifiedExpr, Quantifier};
use feel_types::Value;
use std::ops::ControlFlow;

/// Name of the running result list inside a `for` body
const PARTIAL: &str = "partial";

pub fn for_each(expr: &ForExpr, env: &Environment) -> Value {
    let mut results: Vec<Value> = Vec::new();
    let _ = iterate(&expr.bindings, env, &mut |scope| {
        let scope = scope.bind(PARTIAL, Value::List(results.clone()));
        results.push(evaluate(&expr.body, &scope));
        ControlFlow::Continue(())
    });
    Value::List(results)
}

/// Three-valued quantifier: a deciding result short-circuits, otherwise any
/// unknown result makes the whole result unknown
pub fn quantified(expr: &QuantifiedExpr, env: &Environment) -> Value {
    let deciding = matches!(expr.quantifier, Quantifier::Some);
    let mut unknown = false;
    let flow = iterate(&expr.bindings, env, &mut |scope| {
        match evaluate(&expr.condition, scope).as_boolean() {
            Some(b) if b == deciding => ControlFlow::Break(()),
            Some(_) => ControlFlow::Continue(()),
            None => {
                unknown = true;
                ControlFlow::Continue(())
            }
        }
    });
    if flow.is_break() {
        Value::Boolean(deciding)
    } else if unknown {
        Value::Null
    } else {
        Value::Boolean(!deciding)
    }
}

fn iterate(
    bindings: &[Binding],
    env: &Environment,
    visit: &mut dyn FnMut(&Environment) -> ControlFlow<()>,
) -> ControlFlow<()> {
    let Some((first, rest)) = bindings.split_first() else {
        return visit(env);
    };
    for item in domain(&first.domain, env) {
        iterate(rest, &env.bind(first.name.as_str(), item), visit)?;
    }
    ControlFlow::Continue(())
}

/// Items of a binding domain; scalars iterate once
fn domain(domain: &Domain, env: &Environment) -> Vec<Value> {
    match domain {
        Domain::Interval { start, end } => {
            let (start, end) = (evaluate(start, env), evaluate(end, env));
            match (start.as_integer(), end.as_integer()) {
                (Some(from), Some(to)) if from <= to => {
                    (from..=to).map(|i| Value::number(i as f64)).collect()
                }
                (Some(from), Some(to)) => (to..=from).rev().map(|i| Value::number(i as f64)).collect(),
                _ => {
                    log::debug!("domain {start}..{end} does not have integer bounds");
                    Vec::new()
                }
            }
        }
        Domain::Expr(expr) => match evaluate(expr, env) {
            Value::List(items) => items,
            Value::Range(range) => range.integer_points().unwrap_or_else(|| {
                log::debug!("cannot iterate the range {range}");
                Vec::new()
            }),
            Value::Null => Vec::new(),
            single => vec![single],
        },
    }
}
