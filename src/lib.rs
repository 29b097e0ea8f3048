pub mod annotate;
pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod editor;
pub mod lexer;
pub mod output;
pub mod parser;

pub use annotate::{AnnotatedToken, TokenVariant, annotate};
pub use ast::{Expr, Ident, LiteralValue, Token, TokenKind};
pub use editor::{Analysis, Diagnostic, analyze, apply_hint, hints_at, token_at};
pub use lexer::{Lexer, tokenize};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, ParseErrorKind, Parser};
