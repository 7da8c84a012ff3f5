//! Expression AST nodes for FEEL
//!
//! One closed sum type covers both grammars: full expressions and the
//! decision-table unary tests (`AnyInput`, `UnaryTests`, `Negation`).

use crate::{BinaryOp, BoxExpr, Expr, Literal, Quantifier, Spanned, TypeName, INPUT_NAME};
use feel_diagnostics::Span;
use std::sync::Arc;

/// All FEEL expression types
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    // === Literals ===
    /// Literal value (null, boolean, number, string, temporal)
    Literal(Literal),

    // === References ===
    /// Name reference; `?` is the implicit input
    Name(String),
    /// Property path (`base.name`)
    Path(PathExpr),

    // === Operators ===
    /// Unary minus
    Negate(BoxExpr),
    /// Binary operation
    Binary(BinaryOpExpr),
    /// `operand between low and high`
    Between(BetweenExpr),
    /// `operand in test`
    In(InExpr),
    /// `operand instance of type`
    InstanceOf(InstanceOfExpr),

    // === Constructors ===
    /// List literal
    List(Vec<Expr>),
    /// Context literal
    Context(Vec<ContextEntry>),
    /// Range literal (`[a..b)`, `(a..b]`, ...)
    Range(RangeExpr),
    /// Function definition (`function(a, b) body`)
    FunctionDefinition(FunctionDefinition),

    // === Access and calls ===
    /// Filter or index (`base[filter]`)
    Filter(FilterExpr),
    /// Positional call
    Call(CallExpr),
    /// Named-argument call
    NamedCall(NamedCallExpr),

    // === Control flow ===
    /// If-then-else expression
    If(IfExpr),
    /// `for ... return` comprehension
    For(ForExpr),
    /// `some`/`every ... satisfies` quantifier
    Quantified(QuantifiedExpr),

    // === Unary tests ===
    /// The `-` wildcard, matching every input
    AnyInput,
    /// Comma-separated tests, matching when any test matches
    UnaryTests(Vec<Expr>),
    /// `not(...)`, matching when none of the inner tests matches
    Negation(Vec<Expr>),
}

impl Expression {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Reference to the implicit input `?`
    pub fn input() -> Self {
        Self::Name(INPUT_NAME.to_string())
    }

    pub fn spanned(self, span: Span) -> Expr {
        Spanned::new(self, span)
    }

    /// Whether this is a literal `null`
    pub fn is_null_literal(&self) -> bool {
        matches!(self, Self::Literal(Literal::Null))
    }

    /// Short human name of the node kind, used in debug logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Name(_) => "name",
            Self::Path(_) => "path",
            Self::Negate(_) => "negation",
            Self::Binary(_) => "binary",
            Self::Between(_) => "between",
            Self::In(_) => "in",
            Self::InstanceOf(_) => "instance of",
            Self::List(_) => "list",
            Self::Context(_) => "context",
            Self::Range(_) => "range",
            Self::FunctionDefinition(_) => "function definition",
            Self::Filter(_) => "filter",
            Self::Call(_) => "call",
            Self::NamedCall(_) => "named call",
            Self::If(_) => "if",
            Self::For(_) => "for",
            Self::Quantified(_) => "quantified",
            Self::AnyInput => "any input",
            Self::UnaryTests(_) => "unary tests",
            Self::Negation(_) => "negated unary tests",
        }
    }
}

// === Expression Components ===

/// Property path access
#[derive(Debug, Clone, PartialEq)]
pub struct PathExpr {
    /// Source expression
    pub base: BoxExpr,
    /// Property name, possibly multi-word (`time offset`)
    pub name: String,
}

/// Binary operation expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOpExpr {
    pub left: BoxExpr,
    pub op: BinaryOp,
    pub right: BoxExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BetweenExpr {
    pub operand: BoxExpr,
    pub low: BoxExpr,
    pub high: BoxExpr,
}

/// Membership test
///
/// `test` is evaluated with the implicit input bound to the operand, so it
/// may be a plain value, a range, a list, or a comparison test (`x in < 5`).
#[derive(Debug, Clone, PartialEq)]
pub struct InExpr {
    pub operand: BoxExpr,
    pub test: BoxExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstanceOfExpr {
    pub operand: BoxExpr,
    pub type_name: TypeName,
}

/// Context literal entry
#[derive(Debug, Clone, PartialEq)]
pub struct ContextEntry {
    pub key: String,
    pub value: Expr,
}

/// Range literal
#[derive(Debug, Clone, PartialEq)]
pub struct RangeExpr {
    pub start: BoxExpr,
    pub start_included: bool,
    pub end: BoxExpr,
    pub end_included: bool,
}

/// Function definition
///
/// The body is shared so closures built from it outlive the parse tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub params: Vec<String>,
    pub body: Arc<Expr>,
}

/// Filter or index access
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    pub base: BoxExpr,
    pub filter: BoxExpr,
}

/// Positional call
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: BoxExpr,
    pub args: Vec<Expr>,
}

/// Named argument (`start position: 2`)
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArg {
    pub name: String,
    pub value: Expr,
}

/// Named-argument call
#[derive(Debug, Clone, PartialEq)]
pub struct NamedCallExpr {
    pub callee: BoxExpr,
    pub args: Vec<NamedArg>,
}

impl CallExpr {
    /// Name of the callee when it is a plain name reference
    pub fn callee_name(&self) -> Option<&str> {
        match &self.callee.inner {
            Expression::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl NamedCallExpr {
    pub fn callee_name(&self) -> Option<&str> {
        match &self.callee.inner {
            Expression::Name(name) => Some(name),
            _ => None,
        }
    }
}

/// If-then-else expression (else is mandatory)
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: BoxExpr,
    pub then_branch: BoxExpr,
    pub else_branch: BoxExpr,
}

/// Iteration domain of a comprehension binding
#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
    /// Any expression; scalars are treated as a one-element list
    Expr(Expr),
    /// Inclusive integer range `start..end`, descending when start > end
    Interval { start: Expr, end: Expr },
}

/// `name in domain`
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub domain: Domain,
}

/// Bindings of a comprehension, nested left to right
pub type Bindings = Vec<Binding>;

/// `for` comprehension
#[derive(Debug, Clone, PartialEq)]
pub struct ForExpr {
    pub bindings: Bindings,
    pub body: BoxExpr,
}

/// `some`/`every` quantified expression
#[derive(Debug, Clone, PartialEq)]
pub struct QuantifiedExpr {
    pub quantifier: Quantifier,
    pub bindings: Bindings,
    pub condition: BoxExpr,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64, start: usize) -> Expr {
        Expression::Literal(Literal::Number(n)).spanned(Span::new(start, start + 1))
    }

    #[test]
    fn test_build_binary() {
        let expr = Expression::Binary(BinaryOpExpr {
            left: Box::new(num(1.0, 0)),
            op: BinaryOp::Add,
            right: Box::new(num(2.0, 4)),
        })
        .spanned(Span::new(0, 5));
        assert_eq!(expr.kind(), "binary");
        assert_eq!(expr.span, Span::new(0, 5));
    }

    #[test]
    fn test_callee_name() {
        let call = CallExpr {
            callee: Box::new(Expression::name("string length").spanned(Span::new(0, 13))),
            args: vec![],
        };
        assert_eq!(call.callee_name(), Some("string length"));
        assert_eq!(Expression::input(), Expression::Name("?".into()));
    }
}
