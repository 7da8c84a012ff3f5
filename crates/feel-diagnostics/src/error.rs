//! FEEL error types

use crate::{ErrorCode, SourceLocation, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A structured, non-fatal parse diagnostic
///
/// The parser accumulates these across a whole input so several problems
/// can be reported together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
        }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Attach line/column information for display
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        Diagnostic {
            code: self.code,
            message: self.message.clone(),
            location: SourceLocation::locate(self.span, source),
            help: self.code.info().help,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.code, self.message, self.span)
    }
}

impl std::error::Error for ParseError {}

/// A parse error resolved to a line and column, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub location: SourceLocation,
    pub help: Option<&'static str>,
}

impl Diagnostic {
    /// Render with the offending source line and a caret underline
    pub fn render(&self, source: &str) -> String {
        let loc = &self.location;
        let mut out = self.headline();
        if let Some(line) = source.lines().nth(loc.line - 1) {
            let width = loc.span.text(source).map_or(1, |s| s.chars().count()).max(1);
            out.push_str(&format!(
                "\n  | {}\n  | {}{}",
                line,
                " ".repeat(loc.column - 1),
                "^".repeat(width)
            ));
        }
        if let Some(help) = self.help {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }

    #[cfg(feature = "colored")]
    fn headline(&self) -> String {
        use colored::Colorize;
        format!("{}[{}]: {} at {}", "error".red().bold(), self.code, self.message, self.location)
    }

    #[cfg(not(feature = "colored"))]
    fn headline(&self) -> String {
        format!("error[{}]: {} at {}", self.code, self.message, self.location)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.code, self.location, self.message)
    }
}

/// Main FEEL error type
///
/// Only raised at API boundaries that genuinely fail. Evaluating a parsed
/// expression never produces one of these.
#[derive(Debug, Clone, Error)]
pub enum FeelError {
    /// A single parse error
    #[error("{}: {} at {}", .0.code, .0.message, .0.span)]
    Parse(ParseError),

    /// Several parse errors collected from one input
    #[error("{} parse errors, first: {}", .0.len(), .0.first().map(|e| e.message.as_str()).unwrap_or(""))]
    Multiple(Vec<ParseError>),

    /// I/O, input format or configuration problem
    #[error("{code}: {message}")]
    System { code: ErrorCode, message: String },
}

impl FeelError {
    /// Build the error for a list of parse errors
    pub fn from_parse_errors(mut errors: Vec<ParseError>) -> Self {
        if errors.len() == 1 {
            Self::Parse(errors.remove(0))
        } else {
            Self::Multiple(errors)
        }
    }

    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse(e) => e.code,
            Self::Multiple(errors) => errors.first().map(|e| e.code).unwrap_or(ErrorCode::new(0)),
            Self::System { code, .. } => *code,
        }
    }

    /// Parse errors carried by this error, if any
    pub fn parse_errors(&self) -> &[ParseError] {
        match self {
            Self::Parse(e) => std::slice::from_ref(e),
            Self::Multiple(errors) => errors,
            _ => &[],
        }
    }
}

impl From<ParseError> for FeelError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}
