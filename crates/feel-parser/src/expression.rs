//! Expression grammar
//!
//! Recursive descent over the token stream with precedence climbing for
//! binary operators. Errors are collected rather than returned: a failed
//! production records a [`ParseError`] and yields `None`, and the root
//! parse skips the offending token and keeps going so that one call
//! reports as many problems as it can find.

use crate::token::{Token, TokenKind};
use feel_ast::{
    BetweenExpr, BinaryOp, BinaryOpExpr, Binding, Bindings, COMPARISON_PRECEDENCE, CallExpr,
    ContextEntry, Domain, Expr, Expression, FilterExpr, ForExpr, FunctionDefinition, IfExpr,
    InExpr, InstanceOfExpr, Literal, NamedArg, NamedCallExpr, PathExpr, QuantifiedExpr,
    Quantifier, RangeExpr, TypeName,
};
use feel_builtins::{is_builtin, is_builtin_prefix};
use feel_diagnostics::{
    ErrorCode, FEEL0001, FEEL0002, FEEL0003, FEEL0004, FEEL0005, FEEL0006, FEEL0007, FEEL0008,
    FEEL0009, FEEL0011, FEEL0012, FEEL0013, ParseError, Span,
};
use std::sync::Arc;

/// Properties whose name spans several words
const MULTI_WORD_PROPERTIES: &[&str] = &["time offset", "start included", "end included"];

/// Tokens that close an enclosing production; recovery never skips them
const CLOSERS: &[&str] = &[")", "]", "}", ",", ":", ".."];
const CLOSING_KEYWORDS: &[&str] = &["then", "else", "return", "satisfies", "and", "or"];

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Source length, the position of end-of-input errors
    len: usize,
    pub errors: Vec<ParseError>,
}

impl Parser {
    /// Build a parser, turning lexer error tokens into parse errors
    pub fn new(text: &str, tokens: Vec<Token>) -> Self {
        let mut errors = Vec::new();
        let mut kept = Vec::with_capacity(tokens.len());
        for mut token in tokens {
            match token.kind {
                TokenKind::UnterminatedString => {
                    errors.push(ParseError::new(FEEL0003, "unterminated literal", token.span));
                }
                TokenKind::Unknown => errors.push(ParseError::new(
                    FEEL0011,
                    format!("unknown character `{}`", token.text),
                    token.span,
                )),
                TokenKind::InvalidEscape => {
                    errors.push(ParseError::new(FEEL0012, "invalid escape sequence", token.span));
                    token.kind = TokenKind::String;
                    kept.push(token);
                }
                _ => kept.push(token),
            }
        }
        Self {
            tokens: kept,
            pos: 0,
            len: text.len(),
            errors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    // === Token access ===

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.tokens.len());
    }

    pub fn at_symbol(&self, symbol: &str) -> bool {
        self.peek().is_some_and(|t| t.is_symbol(symbol))
    }

    pub fn at_keyword(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(keyword))
    }

    pub fn eat_symbol(&mut self, symbol: &str) -> bool {
        let found = self.at_symbol(symbol);
        if found {
            self.pos += 1;
        }
        found
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let found = self.at_keyword(keyword);
        if found {
            self.pos += 1;
        }
        found
    }

    /// End offset of the last consumed token
    pub fn prev_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(0, Token::end)
    }

    /// Span of the current token, or the end of input
    pub fn here(&self) -> Span {
        self.peek().map_or(Span::point(self.len), |t| t.span)
    }

    fn found(&self) -> String {
        self.peek()
            .map_or_else(|| "end of input".to_string(), |t| format!("`{t}`"))
    }

    pub fn error(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        let error = ParseError::new(code, message, span);
        log::trace!("parse error: {error}");
        self.errors.push(error);
    }

    pub fn expect_symbol(&mut self, symbol: &str, code: ErrorCode) -> bool {
        if self.eat_symbol(symbol) {
            return true;
        }
        let message = format!("expected `{symbol}`, found {}", self.found());
        let code = if self.at_end() { FEEL0002 } else { code };
        self.error(code, message, self.here());
        false
    }

    fn expect_keyword(&mut self, keyword: &str) -> bool {
        if self.eat_keyword(keyword) {
            return true;
        }
        let message = format!("expected `{keyword}`, found {}", self.found());
        let code = if self.at_end() { FEEL0002 } else { FEEL0009 };
        self.error(code, message, self.here());
        false
    }

    // === Root ===

    /// Report and skip whatever follows a complete root production
    pub fn finish(&mut self, ast: Option<Expr>) -> Option<Expr> {
        while let Some(token) = self.peek() {
            let span = token.span;
            let message = format!("unexpected token `{token}`");
            let reported = self.errors.last().is_some_and(|e| e.span.start == span.start);
            if !reported {
                self.error(FEEL0001, message, span);
            }
            self.advance();
            if !self.at_end() {
                // surface errors in the remainder; its value is discarded
                let _ = self.expression();
            }
        }
        ast
    }

    pub fn expression_root(&mut self) -> Option<Expr> {
        let ast = self.expression();
        self.finish(ast)
    }

    // === Binary operators ===

    pub fn expression(&mut self) -> Option<Expr> {
        self.binary(0)
    }

    /// Precedence climbing over operators binding at least `min_prec`
    pub fn binary(&mut self, min_prec: u8) -> Option<Expr> {
        let mut left = self.unary()?;
        while let Some(token) = self.peek() {
            if let Some(op) = infix_operator(token) {
                let prec = op.precedence();
                if prec < min_prec {
                    break;
                }
                self.advance();
                let next_min = if op.is_right_associative() { prec } else { prec + 1 };
                let right = self.binary(next_min)?;
                let span = left.span.merge(right.span);
                left = Expression::Binary(BinaryOpExpr {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                })
                .spanned(span);
                continue;
            }
            if COMPARISON_PRECEDENCE < min_prec {
                break;
            }
            left = if token.is_keyword("between") {
                self.advance();
                self.between(left)?
            } else if token.is_keyword("in") {
                self.advance();
                let test = self.in_test()?;
                let span = left.span.merge(test.span);
                Expression::In(InExpr {
                    operand: Box::new(left),
                    test: Box::new(test),
                })
                .spanned(span)
            } else if token.is_keyword("instance") {
                self.advance();
                if !self.expect_keyword("of") {
                    return None;
                }
                let type_name = self.type_name()?;
                let span = Span::new(left.span.start, self.prev_end());
                Expression::InstanceOf(InstanceOfExpr {
                    operand: Box::new(left),
                    type_name,
                })
                .spanned(span)
            } else {
                break;
            };
        }
        Some(left)
    }

    fn between(&mut self, operand: Expr) -> Option<Expr> {
        let low = self.binary(COMPARISON_PRECEDENCE + 1)?;
        if !self.expect_keyword("and") {
            return None;
        }
        let high = self.binary(COMPARISON_PRECEDENCE + 1)?;
        let span = operand.span.merge(high.span);
        Some(
            Expression::Between(BetweenExpr {
                operand: Box::new(operand),
                low: Box::new(low),
                high: Box::new(high),
            })
            .spanned(span),
        )
    }

    /// Right side of `in`: a comparison test or a plain operand
    fn in_test(&mut self) -> Option<Expr> {
        if self.peek().and_then(comparison_operator).is_some() {
            self.comparison_test()
        } else {
            self.binary(COMPARISON_PRECEDENCE + 1)
        }
    }

    /// `< e`, `= e` and friends, compared against the implicit input
    pub fn comparison_test(&mut self) -> Option<Expr> {
        let token = self.bump()?;
        let op = comparison_operator(&token)?;
        let rhs = self.binary(COMPARISON_PRECEDENCE + 1)?;
        let span = token.span.merge(rhs.span);
        Some(
            Expression::Binary(BinaryOpExpr {
                left: Box::new(Expression::input().spanned(token.span)),
                op,
                right: Box::new(rhs),
            })
            .spanned(span),
        )
    }

    fn type_name(&mut self) -> Option<TypeName> {
        for candidate in TypeName::ALL {
            let mut offset = 0;
            let matched = candidate.as_str().split(' ').all(|word| {
                let ok = self
                    .peek_at(offset)
                    .is_some_and(|t| t.is_word() && t.text == word);
                offset += 1;
                ok
            });
            if matched {
                self.pos += offset;
                return Some(candidate);
            }
        }
        let message = format!("unknown type name {}", self.found());
        self.error(FEEL0013, message, self.here());
        None
    }

    // === Prefix and postfix ===

    fn unary(&mut self) -> Option<Expr> {
        if self.at_symbol("-") {
            let start = self.here().start;
            self.advance();
            let operand = self.unary()?;
            let span = Span::new(start, operand.span.end);
            return Some(Expression::Negate(Box::new(operand)).spanned(span));
        }
        self.postfix()
    }

    fn postfix(&mut self) -> Option<Expr> {
        let mut expr = self.primary()?;
        loop {
            if self.eat_symbol(".") {
                let name = self.property_name()?;
                let span = Span::new(expr.span.start, self.prev_end());
                expr = Expression::Path(PathExpr {
                    base: Box::new(expr),
                    name,
                })
                .spanned(span);
            } else if self.eat_symbol("[") {
                let filter = self.expression()?;
                if !self.expect_symbol("]", FEEL0006) {
                    return None;
                }
                let span = Span::new(expr.span.start, self.prev_end());
                expr = Expression::Filter(FilterExpr {
                    base: Box::new(expr),
                    filter: Box::new(filter),
                })
                .spanned(span);
            } else if self.at_symbol("(") {
                expr = self.call(expr)?;
            } else {
                break;
            }
        }
        Some(expr)
    }

    fn property_name(&mut self) -> Option<String> {
        let Some(token) = self
            .peek()
            .filter(|t| t.is_word() || t.kind == TokenKind::BacktickName)
        else {
            let message = format!("expected a property name, found {}", self.found());
            self.error(FEEL0008, message, self.here());
            return None;
        };
        let mut name = token.text.clone();
        self.advance();
        if let Some(next) = self.peek().filter(|t| t.is_word()) {
            let joined = format!("{name} {}", next.text);
            if MULTI_WORD_PROPERTIES.contains(&joined.as_str()) {
                name = joined;
                self.advance();
            }
        }
        Some(name)
    }

    /// Argument list after a callee; the current token is `(`
    fn call(&mut self, callee: Expr) -> Option<Expr> {
        self.advance();
        let start = callee.span.start;
        if self.eat_symbol(")") {
            let span = Span::new(start, self.prev_end());
            return Some(
                Expression::Call(CallExpr {
                    callee: Box::new(callee),
                    args: Vec::new(),
                })
                .spanned(span),
            );
        }
        let expr = if self.named_argument_ahead() {
            let mut args = Vec::new();
            loop {
                let name = self.words();
                if !self.expect_symbol(":", FEEL0001) {
                    return None;
                }
                let value = self.expression()?;
                args.push(NamedArg { name, value });
                if !self.eat_symbol(",") {
                    break;
                }
            }
            Expression::NamedCall(NamedCallExpr {
                callee: Box::new(callee),
                args,
            })
        } else {
            let mut args = Vec::new();
            loop {
                args.push(self.expression()?);
                if !self.eat_symbol(",") {
                    break;
                }
            }
            Expression::Call(CallExpr {
                callee: Box::new(callee),
                args,
            })
        };
        if !self.expect_symbol(")", FEEL0006) {
            return None;
        }
        Some(expr.spanned(Span::new(start, self.prev_end())))
    }

    /// Whether the tokens ahead read `words :`
    fn named_argument_ahead(&self) -> bool {
        let mut offset = 0;
        while self
            .peek_at(offset)
            .is_some_and(|t| t.is_word() || t.kind == TokenKind::BacktickName)
        {
            offset += 1;
        }
        offset > 0 && self.peek_at(offset).is_some_and(|t| t.is_symbol(":"))
    }

    /// Consume a run of words and join them with single spaces
    fn words(&mut self) -> String {
        let mut words: Vec<String> = Vec::new();
        while let Some(token) = self
            .peek()
            .filter(|t| t.is_word() || t.kind == TokenKind::BacktickName)
        {
            words.push(token.text.clone());
            self.advance();
        }
        words.join(" ")
    }

    // === Primary ===

    fn primary(&mut self) -> Option<Expr> {
        let Some(token) = self.peek().cloned() else {
            self.error(FEEL0002, "unexpected end of input", Span::point(self.len));
            return None;
        };
        let span = token.span;
        match token.kind {
            TokenKind::Number => {
                self.advance();
                match token.text.parse::<f64>() {
                    Ok(n) => Some(Expression::Literal(Literal::Number(n)).spanned(span)),
                    Err(_) => {
                        self.error(FEEL0005, format!("invalid number `{}`", token.text), span);
                        None
                    }
                }
            }
            TokenKind::String => {
                self.advance();
                Some(Expression::Literal(Literal::String(token.text)).spanned(span))
            }
            TokenKind::Temporal => {
                self.advance();
                if feel_types::parse_temporal(&token.text).is_null() {
                    self.error(
                        FEEL0004,
                        format!("invalid temporal literal `@\"{}\"`", token.text),
                        span,
                    );
                }
                Some(Expression::Literal(Literal::Temporal(token.text)).spanned(span))
            }
            TokenKind::Name => Some(self.name_reference()),
            TokenKind::BacktickName => {
                self.advance();
                Some(Expression::Name(token.text).spanned(span))
            }
            TokenKind::Operator if token.text == "?" => {
                self.advance();
                Some(Expression::input().spanned(span))
            }
            TokenKind::Punct if token.text == "(" => self.parenthesized(),
            TokenKind::Punct if token.text == "[" => self.list_or_range(),
            TokenKind::Punct if token.text == "{" => self.context(),
            TokenKind::Keyword => self.keyword_form(&token),
            _ => self.unexpected(&token),
        }
    }

    /// Report an expression-less token, skipping it unless it closes an
    /// enclosing production
    fn unexpected(&mut self, token: &Token) -> Option<Expr> {
        self.error(
            FEEL0007,
            format!("expected an expression, found `{token}`"),
            token.span,
        );
        let closes = CLOSERS.iter().any(|s| token.is_symbol(s))
            || CLOSING_KEYWORDS.iter().any(|k| token.is_keyword(k));
        if closes {
            return None;
        }
        self.advance();
        if self.at_end() {
            return None;
        }
        self.primary()
    }

    /// A name, extended over following words while it can still become a
    /// multi-word built-in name
    fn name_reference(&mut self) -> Expr {
        let first = self.tokens[self.pos].clone();
        self.advance();
        let mut name = first.text.clone();
        let mut best = (first.text, self.pos, first.span);
        let mut offset = self.pos;
        while is_builtin_prefix(&name) {
            let Some(next) = self.tokens.get(offset).filter(|t| t.is_word()) else {
                break;
            };
            name.push(' ');
            name.push_str(&next.text);
            offset += 1;
            if is_builtin(&name) {
                best = (name.clone(), offset, first.span.merge(next.span));
            }
        }
        let (name, pos, span) = best;
        self.pos = pos;
        Expression::Name(name).spanned(span)
    }

    /// `(e)` or a range opening with `(`
    fn parenthesized(&mut self) -> Option<Expr> {
        let start = self.here().start;
        self.advance();
        let inner = self.expression()?;
        if self.eat_symbol("..") {
            return self.range_end(start, inner, false);
        }
        if !self.expect_symbol(")", FEEL0006) {
            return None;
        }
        Some(inner.inner.spanned(Span::new(start, self.prev_end())))
    }

    /// `[]`, `[a, b]` or a range opening with `[`
    fn list_or_range(&mut self) -> Option<Expr> {
        let start = self.here().start;
        self.advance();
        if self.eat_symbol("]") {
            return Some(Expression::List(Vec::new()).spanned(Span::new(start, self.prev_end())));
        }
        let first = self.expression()?;
        if self.eat_symbol("..") {
            return self.range_end(start, first, true);
        }
        let mut items = vec![first];
        while self.eat_symbol(",") {
            items.push(self.expression()?);
        }
        if !self.expect_symbol("]", FEEL0006) {
            return None;
        }
        Some(Expression::List(items).spanned(Span::new(start, self.prev_end())))
    }

    fn range_end(&mut self, start: usize, low: Expr, start_included: bool) -> Option<Expr> {
        let high = self.expression()?;
        let end_included = if self.eat_symbol("]") {
            true
        } else if self.eat_symbol(")") {
            false
        } else {
            let message = format!("expected `]` or `)` to close the range, found {}", self.found());
            let code = if self.at_end() { FEEL0002 } else { FEEL0006 };
            self.error(code, message, self.here());
            return None;
        };
        Some(
            Expression::Range(RangeExpr {
                start: Box::new(low),
                start_included,
                end: Box::new(high),
                end_included,
            })
            .spanned(Span::new(start, self.prev_end())),
        )
    }

    fn context(&mut self) -> Option<Expr> {
        let start = self.here().start;
        self.advance();
        let mut entries = Vec::new();
        if !self.eat_symbol("}") {
            loop {
                let key = self.context_key()?;
                if !self.expect_symbol(":", FEEL0001) {
                    return None;
                }
                let value = self.expression()?;
                entries.push(ContextEntry { key, value });
                if !self.eat_symbol(",") {
                    break;
                }
            }
            if !self.expect_symbol("}", FEEL0006) {
                return None;
            }
        }
        Some(Expression::Context(entries).spanned(Span::new(start, self.prev_end())))
    }

    fn context_key(&mut self) -> Option<String> {
        if let Some(token) = self.peek().filter(|t| t.kind == TokenKind::String) {
            let key = token.text.clone();
            self.advance();
            return Some(key);
        }
        let key = self.words();
        if key.is_empty() {
            let message = format!("expected a context key, found {}", self.found());
            self.error(FEEL0008, message, self.here());
            return None;
        }
        Some(key)
    }

    // === Keyword forms ===

    fn keyword_form(&mut self, token: &Token) -> Option<Expr> {
        let span = token.span;
        let literal = match token.text.as_str() {
            "true" => Some(Literal::Boolean(true)),
            "false" => Some(Literal::Boolean(false)),
            "null" => Some(Literal::Null),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Some(Expression::Literal(literal).spanned(span));
        }
        match token.text.as_str() {
            "if" => self.if_expression(),
            "for" => self.for_expression(),
            "some" => self.quantified(Quantifier::Some),
            "every" => self.quantified(Quantifier::Every),
            "function" => self.function_definition(),
            "not" if self.peek_at(1).is_some_and(|t| t.is_symbol("(")) => {
                self.advance();
                self.call(Expression::name("not").spanned(span))
            }
            _ => self.unexpected(token),
        }
    }

    fn if_expression(&mut self) -> Option<Expr> {
        let start = self.here().start;
        self.advance();
        let condition = self.expression()?;
        if !self.expect_keyword("then") {
            return None;
        }
        let then_branch = self.expression()?;
        if !self.expect_keyword("else") {
            return None;
        }
        let else_branch = self.expression()?;
        let span = Span::new(start, else_branch.span.end);
        Some(
            Expression::If(IfExpr {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            })
            .spanned(span),
        )
    }

    fn for_expression(&mut self) -> Option<Expr> {
        let start = self.here().start;
        self.advance();
        let bindings = self.bindings()?;
        if !self.expect_keyword("return") {
            return None;
        }
        let body = self.expression()?;
        let span = Span::new(start, body.span.end);
        Some(
            Expression::For(ForExpr {
                bindings,
                body: Box::new(body),
            })
            .spanned(span),
        )
    }

    fn quantified(&mut self, quantifier: Quantifier) -> Option<Expr> {
        let start = self.here().start;
        self.advance();
        let bindings = self.bindings()?;
        if !self.expect_keyword("satisfies") {
            return None;
        }
        let condition = self.expression()?;
        let span = Span::new(start, condition.span.end);
        Some(
            Expression::Quantified(QuantifiedExpr {
                quantifier,
                bindings,
                condition: Box::new(condition),
            })
            .spanned(span),
        )
    }

    /// `name in domain, ...` where a domain is an expression or `a..b`
    fn bindings(&mut self) -> Option<Bindings> {
        let mut bindings = Bindings::new();
        loop {
            let name = self.binding_name()?;
            if !self.expect_keyword("in") {
                return None;
            }
            let first = self.expression()?;
            let domain = if self.eat_symbol("..") {
                let end = self.expression()?;
                Domain::Interval { start: first, end }
            } else {
                Domain::Expr(first)
            };
            bindings.push(Binding { name, domain });
            if !self.eat_symbol(",") {
                break;
            }
        }
        Some(bindings)
    }

    fn binding_name(&mut self) -> Option<String> {
        match self.peek() {
            Some(t) if matches!(t.kind, TokenKind::Name | TokenKind::BacktickName) => {
                let name = t.text.clone();
                self.advance();
                Some(name)
            }
            _ => {
                let message = format!("expected a name, found {}", self.found());
                self.error(FEEL0008, message, self.here());
                None
            }
        }
    }

    fn function_definition(&mut self) -> Option<Expr> {
        let start = self.here().start;
        self.advance();
        if !self.expect_symbol("(", FEEL0001) {
            return None;
        }
        let mut params = Vec::new();
        if !self.at_symbol(")") {
            loop {
                params.push(self.binding_name()?);
                if !self.eat_symbol(",") {
                    break;
                }
            }
        }
        if !self.expect_symbol(")", FEEL0006) {
            return None;
        }
        let body = self.expression()?;
        let span = Span::new(start, body.span.end);
        Some(
            Expression::FunctionDefinition(FunctionDefinition {
                params,
                body: Arc::new(body),
            })
            .spanned(span),
        )
    }
}

fn infix_operator(token: &Token) -> Option<BinaryOp> {
    match token.kind {
        TokenKind::Keyword if token.text == "and" => Some(BinaryOp::And),
        TokenKind::Keyword if token.text == "or" => Some(BinaryOp::Or),
        TokenKind::Operator => BinaryOp::from_symbol(&token.text),
        _ => None,
    }
}

pub fn comparison_operator(token: &Token) -> Option<BinaryOp> {
    infix_operator(token).filter(|op| op.is_comparison())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> (Option<Expr>, Vec<ParseError>) {
        let mut parser = Parser::new(text, tokenize(text));
        let ast = parser.expression_root();
        (ast, parser.errors)
    }

    fn kind(text: &str) -> &'static str {
        let (ast, errors) = parse(text);
        assert!(errors.is_empty(), "{text}: {errors:?}");
        ast.map_or("none", |e| e.kind())
    }

    #[test]
    fn test_precedence_climbing() {
        let (ast, _) = parse("1 + 2 * 3");
        let Some(Expression::Binary(add)) = ast.map(|e| e.inner) else {
            panic!("expected a binary expression");
        };
        assert_eq!(add.op, BinaryOp::Add);
        assert!(matches!(&add.right.inner, Expression::Binary(m) if m.op == BinaryOp::Multiply));
    }

    #[test]
    fn test_power_is_right_associative() {
        let (ast, _) = parse("2 ** 3 ** 2");
        let Some(Expression::Binary(pow)) = ast.map(|e| e.inner) else {
            panic!("expected a binary expression");
        };
        assert!(matches!(pow.left.inner, Expression::Literal(Literal::Number(n)) if n == 2.0));
        assert!(matches!(&pow.right.inner, Expression::Binary(_)));
    }

    #[test]
    fn test_multi_word_builtin_names() {
        let (ast, _) = parse("string length(\"abc\")");
        let Some(Expression::Call(call)) = ast.map(|e| e.inner) else {
            panic!("expected a call");
        };
        assert_eq!(call.callee_name(), Some("string length"));
    }

    #[test]
    fn test_keyword_forms() {
        assert_eq!(kind("if x then 1 else 2"), "if");
        assert_eq!(kind("for i in 1..3 return i"), "for");
        assert_eq!(kind("every x in [1] satisfies x > 0"), "quantified");
        assert_eq!(kind("function(a, b) a + b"), "function definition");
        assert_eq!(kind("x between 1 and 2"), "between");
        assert_eq!(kind("x instance of days and time duration"), "instance of");
        assert_eq!(kind("not(true)"), "call");
    }

    #[test]
    fn test_missing_operand_reports_end_of_input() {
        let (ast, errors) = parse("1 +");
        assert!(ast.is_none());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, FEEL0002);
        assert_eq!(errors[0].span, Span::point(3));
    }
}
