//! FEEL parser
//!
//! A winnow lexer feeds a hand-written recursive descent parser that uses
//! precedence climbing for binary operators. Two entry points share the
//! same grammar: [`parse_expression`] for full expressions and
//! [`parse_unary_tests`] for decision table input entries. Both collect
//! every error they can recover from instead of stopping at the first.

mod expression;
mod lexer;
mod token;
mod unary;

pub use lexer::tokenize;
pub use token::{KEYWORDS, Token, TokenKind, is_keyword};

use expression::Parser;
use feel_ast::Expr;
use feel_diagnostics::{FEEL0002, FeelError, ParseError, Result, Span};

/// Parse result with accumulated errors
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed tree; may be partial when errors were recovered from, and
    /// absent when recovery failed entirely
    pub ast: Option<Expr>,
    /// Errors in source order of discovery
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Check if parsing succeeded without errors
    pub fn is_success(&self) -> bool {
        self.ast.is_some() && self.errors.is_empty()
    }

    /// Convert to a Result, failing if any error was recorded
    pub fn into_result(self) -> Result<Expr> {
        if self.errors.is_empty() {
            self.ast.ok_or_else(|| {
                FeelError::Parse(ParseError::new(
                    FEEL0002,
                    "unexpected end of input",
                    Span::point(0),
                ))
            })
        } else {
            Err(FeelError::from_parse_errors(self.errors))
        }
    }
}

/// Parse a full FEEL expression
pub fn parse_expression(text: &str) -> ParseResult {
    let mut parser = Parser::new(text, tokenize(text));
    let ast = parser.expression_root();
    finish("expression", ast, parser.errors)
}

/// Parse a comma-separated list of unary tests
pub fn parse_unary_tests(text: &str) -> ParseResult {
    let mut parser = Parser::new(text, tokenize(text));
    let ast = parser.unary_tests_root();
    finish("unary tests", ast, parser.errors)
}

fn finish(what: &str, ast: Option<Expr>, errors: Vec<ParseError>) -> ParseResult {
    match &ast {
        Some(expr) => log::trace!("parsed {what} as {} with {} errors", expr.kind(), errors.len()),
        None => log::trace!("failed to parse {what}: {} errors", errors.len()),
    }
    ParseResult { ast, errors }
}
