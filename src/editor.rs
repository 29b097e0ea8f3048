//! Embedding surface for text-field hosts.
//!
//! The UI layer owns rendering, caret handling, and the dropdown; this
//! module owns everything with language content in it: running a full
//! tokenize + annotate + parse pass over the field's text, mapping a
//! cursor offset to its token, surfacing that token's hints, and applying
//! a chosen hint back onto the text. Hosts call [`analyze`] on every
//! keystroke and re-tokenize after [`apply_hint`].

use crate::annotate::{AnnotatedToken, annotate};
use crate::ast::{Expr, TokenKind};
use crate::lexer::tokenize;
use crate::parser::Parser;

/// A positioned, displayable problem with the current input.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub start: usize,
    pub end: usize,
}

/// One full pass over the field's text.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Annotated token stream, for per-token styling and underlining.
    pub tokens: Vec<AnnotatedToken>,
    /// The parsed tree, `None` for empty input or on parse failure.
    pub ast: Option<Expr>,
    /// Validity failures from annotation plus at most one parse error.
    pub errors: Vec<Diagnostic>,
}

/// Tokenize, annotate, and parse `source` in one pass.
///
/// Annotation failures do not block parsing: an input can parse cleanly
/// while still carrying unknown-symbol diagnostics, and vice versa.
pub fn analyze(source: &str, symbols: &[String]) -> Analysis {
    let raw_tokens = tokenize(source);
    let tokens = annotate(&raw_tokens, symbols);

    let mut errors: Vec<Diagnostic> = tokens
        .iter()
        .filter(|t| !t.valid)
        .map(|t| {
            let message = match t.token.kind {
                TokenKind::Identifier => format!("Cannot find identifier {}", t.token.value),
                _ => format!("Invalid token {}", t.token.value),
            };
            Diagnostic {
                message,
                start: t.token.start,
                end: t.token.end,
            }
        })
        .collect();

    let ast = match Parser::new(raw_tokens).parse() {
        Ok(ast) => ast,
        Err(err) => {
            let (start, end) = err.span();
            errors.push(Diagnostic {
                message: err.message(),
                start,
                end,
            });
            None
        }
    };

    Analysis {
        tokens,
        ast,
        errors,
    }
}

/// Index of the token under the cursor.
///
/// A cursor sitting immediately after a token still belongs to it (so a
/// caret at the end of `su` keeps `su`'s hints active), hence the lookup
/// uses the offset one before the cursor.
pub fn token_at(tokens: &[AnnotatedToken], cursor: usize) -> Option<usize> {
    let offset = cursor.saturating_sub(1);
    tokens.iter().position(|t| t.token.contains(offset))
}

/// Hints for the token under the cursor; empty when there are none.
pub fn hints_at(tokens: &[AnnotatedToken], cursor: usize) -> &[String] {
    match token_at(tokens, cursor) {
        Some(i) => &tokens[i].hints,
        None => &[],
    }
}

/// Apply a chosen hint to the token at `active`.
///
/// Identifier tokens are replaced by the hint; any other kind keeps its
/// text and the hint is appended after it. Returns the new source text and
/// the cursor position just after the completion. Callers re-tokenize.
pub fn apply_hint(tokens: &[AnnotatedToken], active: usize, hint: &str) -> (String, usize) {
    if tokens.is_empty() {
        return (hint.to_string(), hint.chars().count());
    }

    let mut completed = String::new();
    let mut cursor = 0;
    for (i, t) in tokens.iter().enumerate() {
        if i == active {
            if t.token.kind == TokenKind::Identifier {
                completed.push_str(hint);
            } else {
                completed.push_str(t.token.source_text());
                completed.push_str(hint);
            }
            cursor = completed.chars().count();
        } else {
            completed.push_str(t.token.source_text());
        }
    }
    (completed, cursor)
}
