//! FEEL error codes following a structured numbering system
//!
//! Error code ranges:
//! - FEEL0001-FEEL0099: Parse errors (syntax)
//! - FEEL0400-FEEL0499: System errors (I/O, input formats, configuration)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Static description of this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    pub const fn is_parse_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FEEL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Parse errors (0001-0099)
    map.insert(1, ErrorInfo::new("Unexpected token"));
    map.insert(2, ErrorInfo::new("Unexpected end of input"));
    map.insert(3, ErrorInfo::new("Unterminated string literal"));
    map.insert(
        4,
        ErrorInfo::new("Invalid temporal literal")
            .with_help("Use @\"YYYY-MM-DD\", @\"hh:mm:ss\", @\"YYYY-MM-DDThh:mm:ss\" or @\"P1DT2H\""),
    );
    map.insert(5, ErrorInfo::new("Invalid number literal"));
    map.insert(6, ErrorInfo::new("Missing closing delimiter"));
    map.insert(7, ErrorInfo::new("Expected expression"));
    map.insert(8, ErrorInfo::new("Expected name"));
    map.insert(9, ErrorInfo::new("Expected keyword"));
    map.insert(
        10,
        ErrorInfo::new("Invalid unary test")
            .with_help("The wildcard '-' must be the only test in a cell"),
    );
    map.insert(11, ErrorInfo::new("Unknown character"));
    map.insert(12, ErrorInfo::new("Invalid escape sequence"));
    map.insert(13, ErrorInfo::new("Invalid type name"));

    // System errors (0400-0499)
    map.insert(400, ErrorInfo::new("Internal error"));
    map.insert(401, ErrorInfo::new("I/O error"));
    map.insert(402, ErrorInfo::new("Invalid input format"));
    map.insert(403, ErrorInfo::new("Invalid argument"));

    map
});

// Parse errors
pub const FEEL0001: ErrorCode = ErrorCode::new(1);
pub const FEEL0002: ErrorCode = ErrorCode::new(2);
pub const FEEL0003: ErrorCode = ErrorCode::new(3);
pub const FEEL0004: ErrorCode = ErrorCode::new(4);
pub const FEEL0005: ErrorCode = ErrorCode::new(5);
pub const FEEL0006: ErrorCode = ErrorCode::new(6);
pub const FEEL0007: ErrorCode = ErrorCode::new(7);
pub const FEEL0008: ErrorCode = ErrorCode::new(8);
pub const FEEL0009: ErrorCode = ErrorCode::new(9);
pub const FEEL0010: ErrorCode = ErrorCode::new(10);
pub const FEEL0011: ErrorCode = ErrorCode::new(11);
pub const FEEL0012: ErrorCode = ErrorCode::new(12);
pub const FEEL0013: ErrorCode = ErrorCode::new(13);

// System errors
pub const FEEL0400: ErrorCode = ErrorCode::new(400);
pub const FEEL0401: ErrorCode = ErrorCode::new(401);
pub const FEEL0402: ErrorCode = ErrorCode::new(402);
pub const FEEL0403: ErrorCode = ErrorCode::new(403);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(FEEL0001.to_string(), "FEEL0001");
        assert_eq!(FEEL0402.to_string(), "FEEL0402");
    }

    #[test]
    fn test_error_code_ranges() {
        assert!(FEEL0004.is_parse_error());
        assert!(FEEL0401.is_system_error());
        assert!(!FEEL0401.is_parse_error());
    }

    #[test]
    fn test_error_info_lookup() {
        assert_eq!(FEEL0003.info().description, "Unterminated string literal");
        assert!(FEEL0010.info().help.is_some());
        assert_eq!(ErrorCode::new(99).info().description, "Unknown error");
    }
}
