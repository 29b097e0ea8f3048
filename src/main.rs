use clap::{Parser as ClapParser, Subcommand};
use codefield_lang::cli::{self, CheckOptions, CheckResult, CliError};
use codefield_lang::output::{to_json, to_json_pretty};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "codefield")]
#[command(about = "Codefield - tokenize, parse, and diagnose code-input expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an expression: tokens, AST, and diagnostics as JSON
    Check {
        /// The expression to analyze (reads from stdin if not provided)
        expression: Option<String>,

        /// Known symbol names, comma-separated
        #[arg(short, long, value_delimiter = ',')]
        symbols: Vec<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't build a report
        #[arg(long)]
        syntax_only: bool,
    },

    /// Scan an expression and print its raw token stream
    Tokens {
        /// The expression to scan (reads from stdin if not provided)
        expression: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            symbols,
            pretty,
            syntax_only,
        } => run_check(expression, symbols, pretty, syntax_only),
        Commands::Tokens { expression, pretty } => run_tokens(expression, pretty),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_expression(expression: Option<String>) -> Result<String, CliError> {
    match expression {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim_end_matches('\n').to_string())
        }
        None => Err(CliError::NoExpression),
    }
}

fn run_check(
    expression: Option<String>,
    symbols: Vec<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let options = CheckOptions {
        expression: read_expression(expression)?,
        symbols,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Report { json, clean } => {
            let rendered = if pretty {
                to_json_pretty(&json)
            } else {
                to_json(&json)
            };
            println!("{}", rendered);
            if !clean {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

fn run_tokens(expression: Option<String>, pretty: bool) -> Result<(), CliError> {
    let expression = read_expression(expression)?;
    let json = cli::execute_tokens(&expression);
    let rendered = if pretty {
        to_json_pretty(&json)
    } else {
        to_json(&json)
    };
    println!("{}", rendered);
    Ok(())
}
