//! FEEL evaluation engine
//!
//! Walks the tree produced by `feel-parser` against an [`Environment`] and
//! produces a [`Value`]. Evaluation never fails: every error case yields
//! `null`, the language's unknown value.
//!
//! - `and`/`or`: three-valued, `false` dominates `and`, `true` dominates `or`
//! - `=`/`!=`: total structural equality, cross-type pairs are unequal
//! - `<`, `<=`, `>`, `>=`: partial, incomparable operands give `null`
//! - `for`/`some`/`every`: Cartesian product over the binding domains
//!
//! Decision tables use [`evaluate_unary_tests`] to match a parsed cell
//! against an input value.

mod comprehension;
mod engine;
mod environment;
mod operators;
mod unary;

pub use engine::evaluate;
pub use environment::{Environment, EnvironmentBuilder};
pub use unary::{evaluate_unary_test, evaluate_unary_tests};

pub use feel_types::Value;
