//! Binary operators and `between`
//!
//! Logic is three-valued: `null` (or any non-boolean) is unknown, `false`
//! dominates `and` and `true` dominates `or`.

use crate::Environment;
use crate::engine::evaluate;
use feel_ast::{BetweenExpr, BinaryOp, BinaryOpExpr};
use feel_types::{Value, compare_values, values_equal};
use std::cmp::Ordering;

pub fn binary(expr: &BinaryOpExpr, env: &Environment) -> Value {
    match expr.op {
        BinaryOp::And => {
            let left = evaluate(&expr.left, env).as_boolean();
            if left == Some(false) {
                return Value::Boolean(false);
            }
            let right = evaluate(&expr.right, env).as_boolean();
            and(left, right)
        }
        BinaryOp::Or => {
            let left = evaluate(&expr.left, env).as_boolean();
            if left == Some(true) {
                return Value::Boolean(true);
            }
            let right = evaluate(&expr.right, env).as_boolean();
            or(left, right)
        }
        op => {
            let left = evaluate(&expr.left, env);
            let right = evaluate(&expr.right, env);
            apply(op, &left, &right)
        }
    }
}

fn and(left: Option<bool>, right: Option<bool>) -> Value {
    match (left, right) {
        (Some(false), _) | (_, Some(false)) => Value::Boolean(false),
        (Some(true), Some(true)) => Value::Boolean(true),
        _ => Value::Null,
    }
}

fn or(left: Option<bool>, right: Option<bool>) -> Value {
    match (left, right) {
        (Some(true), _) | (_, Some(true)) => Value::Boolean(true),
        (Some(false), Some(false)) => Value::Boolean(false),
        _ => Value::Null,
    }
}

/// Strict (non short-circuit) operators over evaluated operands
pub fn apply(op: BinaryOp, left: &Value, right: &Value) -> Value {
    match op {
        BinaryOp::Equal => Value::Boolean(values_equal(left, right)),
        BinaryOp::NotEqual => Value::Boolean(!values_equal(left, right)),
        BinaryOp::Less => ordered(left, right, |o| o == Ordering::Less),
        BinaryOp::LessOrEqual => ordered(left, right, |o| o != Ordering::Greater),
        BinaryOp::Greater => ordered(left, right, |o| o == Ordering::Greater),
        BinaryOp::GreaterOrEqual => ordered(left, right, |o| o != Ordering::Less),
        BinaryOp::Add => feel_types::add(left, right),
        BinaryOp::Subtract => feel_types::subtract(left, right),
        BinaryOp::Multiply => feel_types::multiply(left, right),
        BinaryOp::Divide => feel_types::divide(left, right),
        BinaryOp::Power => feel_types::power(left, right),
        BinaryOp::And => and(left.as_boolean(), right.as_boolean()),
        BinaryOp::Or => or(left.as_boolean(), right.as_boolean()),
    }
}

fn ordered(left: &Value, right: &Value, test: impl Fn(Ordering) -> bool) -> Value {
    compare_values(left, right).map_or(Value::Null, |o| Value::Boolean(test(o)))
}

/// Inclusive on both ends
pub fn between(expr: &BetweenExpr, env: &Environment) -> Value {
    let value = evaluate(&expr.operand, env);
    let low = evaluate(&expr.low, env);
    let high = evaluate(&expr.high, env);
    match (compare_values(&value, &low), compare_values(&value, &high)) {
        (Some(above), Some(below)) => {
            Value::Boolean(above != Ordering::Less && below != Ordering::Greater)
        }
        _ => Value::Null,
    }
}
