//! FEEL Abstract Syntax Tree definitions
//!
//! This crate defines the AST nodes for the FEEL expression language and its
//! decision-table "unary tests" grammar. Nodes are produced fresh per parse,
//! carry their source span, and are never mutated by the evaluator.

mod expression;
mod literal;
mod operator;

pub use expression::*;
pub use literal::*;
pub use operator::*;

/// A node with source span information
pub type Spanned<T> = feel_diagnostics::Spanned<T>;

/// A spanned expression, the unit the parser returns and the evaluator walks
pub type Expr = Spanned<Expression>;

/// Type alias for boxed expressions
pub type BoxExpr = Box<Expr>;

/// Name of the implicit input of a unary test
pub const INPUT_NAME: &str = "?";
