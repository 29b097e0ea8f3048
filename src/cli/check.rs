//! Analyze expressions and report tokens, AST, and diagnostics

use super::CliError;
use crate::editor::analyze;
use crate::lexer::tokenize;
use crate::output::{analysis_to_json, tokens_to_json};
use crate::parser::Parser;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to analyze
    pub expression: String,
    /// Known symbol names, in display order
    pub symbols: Vec<String>,
    /// Only validate syntax, don't build a report
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Full analysis report
    Report {
        json: serde_json::Value,
        /// Whether the report carries no diagnostics
        clean: bool,
    },
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    if options.syntax_only {
        let mut parser = Parser::new(tokenize(&options.expression));
        parser.parse().map_err(CliError::Parse)?;
        return Ok(CheckResult::SyntaxValid);
    }

    let analysis = analyze(&options.expression, &options.symbols);
    let clean = analysis.errors.is_empty();
    Ok(CheckResult::Report {
        json: analysis_to_json(&analysis),
        clean,
    })
}

/// Scan an expression and return its raw token stream as JSON
pub fn execute_tokens(expression: &str) -> serde_json::Value {
    tokens_to_json(&tokenize(expression))
}
