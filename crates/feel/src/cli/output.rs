//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use feel_diagnostics::ParseError;
use feel_types::Value;
use serde_json::json;
use std::io::IsTerminal;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// FEEL rendering of the value
    #[default]
    Pretty,
    /// JSON document
    Json,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    let enabled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    };
    colored::control::set_override(enabled);
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Render a value in the requested format
pub fn render_value(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(value.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&value.to_json()).context("Failed to serialize JSON")
        }
    }
}

pub fn print_value(value: &Value, format: OutputFormat) -> Result<()> {
    println!("{}", render_value(value, format)?);
    Ok(())
}

/// Parse errors rendered against their source, one block per error
pub fn render_diagnostics(source: &str, errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|error| error.to_diagnostic(source).render(source))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse errors as a JSON array of `{code, message, start, end}`
pub fn diagnostics_json(errors: &[ParseError]) -> Result<String> {
    let items: Vec<_> = errors
        .iter()
        .map(|error| {
            json!({
                "code": error.code.to_string(),
                "message": error.message,
                "start": error.start(),
                "end": error.end(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&items).context("Failed to serialize JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use feel_diagnostics::{FEEL0002, Span};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_value() {
        let value = Value::list([Value::number(1.0), Value::string("a")]);
        assert_eq!(render_value(&value, OutputFormat::Json).unwrap(), "[\n  1,\n  \"a\"\n]");
        assert_eq!(render_value(&Value::Null, OutputFormat::Pretty).unwrap(), "null");
    }

    #[test]
    fn test_diagnostics_json() {
        let errors = [ParseError::new(FEEL0002, "unexpected end of input", Span::point(3))];
        let rendered = diagnostics_json(&errors).unwrap();
        assert!(rendered.contains("\"code\": \"FEEL0002\""));
        assert!(rendered.contains("\"start\": 3"));
    }
}
