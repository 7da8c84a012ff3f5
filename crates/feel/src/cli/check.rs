//! Check command implementation

use super::output::{self, OutputFormat};
use anyhow::Result;
use colored::Colorize;

/// Configuration for the check command
pub struct CheckConfig {
    pub text: String,
    pub unary_tests: bool,
    pub format: OutputFormat,
}

/// Parse without evaluating and report every diagnostic
///
/// Returns whether the text parsed cleanly.
pub fn check(config: CheckConfig) -> Result<bool> {
    let result = if config.unary_tests {
        crate::parse_unary_tests(&config.text)
    } else {
        crate::parse_expression(&config.text)
    };
    match config.format {
        OutputFormat::Json => println!("{}", output::diagnostics_json(&result.errors)?),
        OutputFormat::Pretty if result.errors.is_empty() => {
            let what = match result.ast.as_ref() {
                Some(ast) => ast.kind(),
                None => "input",
            };
            println!("{}", output::format_success(&format!("valid {what}")));
        }
        OutputFormat::Pretty => {
            eprintln!("{}", output::render_diagnostics(&config.text, &result.errors));
            eprintln!(
                "{} {}",
                "Check failed:".red().bold(),
                format!("{} error(s)", result.errors.len()).red()
            );
        }
    }
    Ok(result.errors.is_empty())
}
