//! FEEL command-line interface

use anyhow::Result;
use clap::{Parser, Subcommand};
use feel::cli::output::{self, ColorMode, OutputFormat};
use feel::cli::{check, eval, logger, repl};
use feel::builtin_names;
use std::path::PathBuf;
use std::process::ExitCode;

/// FEEL command-line tool
#[derive(Parser)]
#[command(name = "feel")]
#[command(author, version, about = "FEEL expression language tools", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t, global = true)]
    format: OutputFormat,

    /// Color output
    #[arg(long, value_enum, default_value_t, global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression
    Eval {
        /// FEEL expression
        expression: String,

        /// Variables (name=expression), bound in order
        #[arg(long = "var")]
        vars: Vec<String>,

        /// Context data file (JSON object)
        #[arg(short, long)]
        context: Option<PathBuf>,
    },

    /// Match an input value against unary tests
    Test {
        /// Unary tests, e.g. "< 10, [20..30]"
        tests: String,

        /// Input value as a FEEL expression
        #[arg(short, long)]
        input: String,

        /// Variables (name=expression), bound in order
        #[arg(long = "var")]
        vars: Vec<String>,

        /// Context data file (JSON object)
        #[arg(short, long)]
        context: Option<PathBuf>,
    },

    /// Parse only and report diagnostics
    Check {
        /// Text to check
        text: String,

        /// Parse as unary tests instead of an expression
        #[arg(short, long)]
        unary_tests: bool,
    },

    /// List built-in functions
    Builtins,

    /// Start interactive REPL
    Repl {
        /// Context data file (JSON object)
        #[arg(short, long)]
        context: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    output::setup_colors(cli.color);
    logger::init(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Eval {
            expression,
            vars,
            context,
        } => {
            let config = eval::EvalConfig {
                expression,
                vars,
                context,
                format: cli.format,
            };
            eval::eval(config)?;
        }

        Commands::Test {
            tests,
            input,
            vars,
            context,
        } => {
            let config = eval::TestConfig {
                tests,
                input,
                vars,
                context,
            };
            eval::test(config)?;
        }

        Commands::Check { text, unary_tests } => {
            let config = check::CheckConfig {
                text,
                unary_tests,
                format: cli.format,
            };
            return check::check(config);
        }

        Commands::Builtins => {
            for name in builtin_names() {
                println!("{name}");
            }
        }

        Commands::Repl { context } => {
            let env = eval::build_environment(context.as_deref(), &[])?;
            repl::run(repl::ReplConfig {
                env,
                format: cli.format,
            })?;
        }
    }
    Ok(true)
}
