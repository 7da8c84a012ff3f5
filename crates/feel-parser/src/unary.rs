//! Unary-test grammar used by decision table input entries
//!
//! ```text
//! tests     := "-" | "not" "(" test_list ")" | test_list
//! test_list := test ("," test)*
//! test      := comparison expression | expression
//! ```

use crate::expression::{Parser, comparison_operator};
use feel_ast::{Expr, Expression};
use feel_diagnostics::{FEEL0006, FEEL0007, FEEL0010, Span};

impl Parser {
    pub fn unary_tests_root(&mut self) -> Option<Expr> {
        if self.is_empty() {
            self.error(FEEL0007, "expected a unary test, found end of input", Span::point(0));
            return None;
        }
        let ast = self.unary_tests();
        self.finish(ast)
    }

    fn unary_tests(&mut self) -> Option<Expr> {
        let start = self.here().start;
        if self.at_symbol("-") && self.peek_at(1).is_none() {
            self.advance();
            return Some(Expression::AnyInput.spanned(Span::new(start, self.prev_end())));
        }
        let negated = self.at_keyword("not") && self.closes_input(1);
        if negated {
            self.advance();
            self.advance();
        }
        let mut tests = vec![self.unary_test()?];
        while self.eat_symbol(",") {
            tests.push(self.unary_test()?);
        }
        if negated {
            if !self.expect_symbol(")", FEEL0006) {
                return None;
            }
            let span = Span::new(start, self.prev_end());
            return Some(Expression::Negation(tests).spanned(span));
        }
        if tests.len() == 1 {
            return tests.pop();
        }
        let span = Span::new(start, self.prev_end());
        Some(Expression::UnaryTests(tests).spanned(span))
    }

    /// Whether the bracket opened at `offset` closes on the last token, so
    /// that `not(...)` wraps the whole input rather than starting a list
    fn closes_input(&self, offset: usize) -> bool {
        if !self.peek_at(offset).is_some_and(|t| t.is_symbol("(")) {
            return false;
        }
        let mut depth = 0usize;
        let mut i = offset;
        while let Some(token) = self.peek_at(i) {
            if ["(", "[", "{"].iter().any(|s| token.is_symbol(s)) {
                depth += 1;
            } else if [")", "]", "}"].iter().any(|s| token.is_symbol(s)) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return self.peek_at(i + 1).is_none();
                }
            }
            i += 1;
        }
        false
    }

    fn unary_test(&mut self) -> Option<Expr> {
        let wildcard = self.at_symbol("-")
            && self
                .peek_at(1)
                .is_none_or(|t| t.is_symbol(",") || t.is_symbol(")"));
        if wildcard {
            let span = self.here();
            self.error(FEEL0010, "`-` must be the only unary test", span);
            self.advance();
            return Some(Expression::AnyInput.spanned(span));
        }
        if self.peek().and_then(comparison_operator).is_some() {
            return self.comparison_test();
        }
        self.expression()
    }
}
