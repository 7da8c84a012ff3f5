//! REPL implementation

use super::eval::{eval_text, parse_binding};
use super::output::{self, OutputFormat};
use crate::{Environment, builtin_names};
use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

/// Configuration for REPL
pub struct ReplConfig {
    pub env: Environment,
    pub format: OutputFormat,
}

/// What the loop does after a line
enum Step {
    Continue,
    Quit,
}

/// Run the interactive REPL
pub fn run(config: ReplConfig) -> Result<()> {
    println!("{}", "FEEL Interactive REPL".cyan().bold());
    println!("Type {} for help, {} to quit", ":help".green(), ":quit".green());
    println!();

    let mut env = config.env;
    let mut rl = DefaultEditor::new()?;
    let history = history_file();
    if let Some(path) = &history {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("feel> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                match handle_line(line, &mut env, config.format) {
                    Ok(Step::Continue) => {}
                    Ok(Step::Quit) => break,
                    Err(e) => eprintln!("{}", output::format_error(&e)),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &history {
        let _ = rl.save_history(path);
    }
    Ok(())
}

fn handle_line(line: &str, env: &mut Environment, format: OutputFormat) -> Result<Step> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        ":quit" | ":q" | ":exit" => return Ok(Step::Quit),
        ":help" | ":h" => print_help(),
        ":builtins" => {
            for name in builtin_names() {
                println!("  {}", name.cyan());
            }
        }
        ":vars" => {
            for name in env.names() {
                let value = env.lookup(name).cloned().unwrap_or_default();
                println!("  {} = {}", name.cyan(), value);
            }
        }
        ":let" => {
            let (name, text) = parse_binding(rest)?;
            let value = eval_text(text, env)?;
            println!("{} = {}", name.cyan(), output::render_value(&value, format)?);
            *env = env.bind(name, value);
        }
        other if other.starts_with(':') => {
            anyhow::bail!("Unknown command: {other}. Type :help for help");
        }
        _ => {
            let value = eval_text(line, env)?;
            println!("{}", output::render_value(&value, format)?.green());
        }
    }
    Ok(Step::Continue)
}

fn print_help() {
    println!("{}", "FEEL REPL Commands:".bold());
    println!();
    println!("  {}  Show this help message", ":help, :h".green());
    println!("  {}  Quit the REPL", ":quit, :q".green());
    println!("  {}  Bind a variable", ":let name = expression".green());
    println!("  {}  List bound variables", ":vars".green());
    println!("  {}  List built-in functions", ":builtins".green());
    println!();
    println!("{}", "Examples:".bold());
    println!();
    println!("  {}", ":let rate = 0.2".cyan());
    println!("  {}", "for x in [100, 250] return x * (1 + rate)".cyan());
    println!("  {}", "date(\"2024-03-01\") - date(\"2024-02-01\")".cyan());
}

fn history_file() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".feel_history"))
}
