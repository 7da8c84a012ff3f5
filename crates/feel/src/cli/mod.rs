//! CLI functionality for the `feel` tool
//!
//! This module contains all CLI-related functionality including:
//! - Expression evaluation and unary-test matching
//! - Syntax checking with rendered diagnostics
//! - The interactive REPL
//! - Output formatting and logging

pub mod check;
pub mod eval;
pub mod logger;
pub mod output;
pub mod repl;
