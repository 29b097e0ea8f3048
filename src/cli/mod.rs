//! CLI support for codefield-lang
//!
//! Provides programmatic access to the CLI functionality for embedding in
//! other tools.

mod check;

pub use check::{CheckOptions, CheckResult, execute_check, execute_tokens};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Parser error
    Parse(crate::ParseError),
    /// IO error
    Io(io::Error),
    /// No expression provided
    NoExpression,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoExpression => {
                write!(f, "No expression provided. Pass one as an argument or pipe it to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
