//! Byte spans into FEEL source text
//!
//! Tokens, AST nodes and parse errors all carry a [`Span`]. Line and column
//! numbers are only computed when a diagnostic is rendered for a person.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open byte range `start..end` of a source string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span, used for errors at the end of input
    #[inline]
    pub const fn point(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Smallest span covering both
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// The covered text, `None` when the span does not fit `source`
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and character column where a span starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl SourceLocation {
    /// Resolve a span against the text it was taken from
    pub fn locate(span: Span, source: &str) -> Self {
        let before = source.get(..span.start).unwrap_or(source);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Self { line, column, span }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A node with the span it was parsed from
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub inner: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub const fn new(inner: T, span: Span) -> Self {
        Self { inner, span }
    }
}

impl<T> std::ops::Deref for Spanned<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge() {
        let a = Span::new(0, 5);
        let b = Span::new(3, 10);
        assert_eq!(a.merge(b), Span::new(0, 10));
        assert_eq!(b.merge(a), Span::new(0, 10));
        assert_eq!(Span::point(4).len(), 0);
        assert!(Span::point(4).is_empty());
    }

    #[test]
    fn test_span_text() {
        assert_eq!(Span::new(4, 7).text("1 + foo"), Some("foo"));
        assert_eq!(Span::new(4, 70).text("1 + foo"), None);
    }

    #[test]
    fn test_locate() {
        let source = "a +\n  b\n\"c\"";
        assert_eq!(SourceLocation::locate(Span::point(0), source).to_string(), "1:1");
        assert_eq!(SourceLocation::locate(Span::point(2), source).to_string(), "1:3");
        assert_eq!(SourceLocation::locate(Span::point(6), source).to_string(), "2:3");
        assert_eq!(SourceLocation::locate(Span::new(8, 11), source).to_string(), "3:1");
    }

    #[test]
    fn test_locate_counts_characters() {
        let loc = SourceLocation::locate(Span::new(10, 11), "\"żółw\" )");
        assert_eq!((loc.line, loc.column), (1, 8));
    }
}
