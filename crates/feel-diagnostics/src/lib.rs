//! FEEL diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the FEEL
//! parser, evaluator and command-line tool: byte spans, line/column
//! locations, error codes, parse diagnostics and the crate-level error type.
//!
//! Evaluation never fails with an error from this crate; unknown results are
//! represented as the `null` value. These types only describe failures that
//! happen *before* evaluation (syntax) or *around* it (I/O, JSON input).

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for FEEL operations that can fail
pub type Result<T> = std::result::Result<T, FeelError>;
