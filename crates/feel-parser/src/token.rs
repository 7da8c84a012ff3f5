//! Tokens produced by the lexer

use feel_diagnostics::Span;
use std::fmt;

/// Reserved words; they are never plain names
pub const KEYWORDS: &[&str] = &[
    "true",
    "false",
    "null",
    "if",
    "then",
    "else",
    "for",
    "return",
    "some",
    "every",
    "satisfies",
    "between",
    "and",
    "or",
    "in",
    "instance",
    "of",
    "not",
    "function",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Decimal number literal
    Number,
    /// String literal; the token text holds the unescaped content
    String,
    /// `@"..."` literal; the token text holds the payload
    Temporal,
    /// Identifier
    Name,
    /// Backtick-quoted name; the token text holds the content
    BacktickName,
    Keyword,
    /// `= != < <= > >= + - * / ** .. ?`
    Operator,
    /// `( ) [ ] { } , : .`
    Punct,
    /// A string, temporal or backtick literal with no closing quote
    UnterminatedString,
    /// A string containing an unknown escape sequence
    InvalidEscape,
    /// A character that starts no token
    Unknown,
}

impl TokenKind {
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::UnterminatedString | Self::InvalidEscape | Self::Unknown
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Whether this is the operator or punctuation `symbol`
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self.kind, TokenKind::Operator | TokenKind::Punct) && self.text == symbol
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == keyword
    }

    /// Names and keywords, the pieces of multi-word names
    pub fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Name | TokenKind::Keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", self.text),
            TokenKind::Temporal => write!(f, "@\"{}\"", self.text),
            TokenKind::BacktickName => write!(f, "`{}`", self.text),
            _ => f.write_str(&self.text),
        }
    }
}
