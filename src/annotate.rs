//! Validity and autocomplete annotation over a token stream.
//!
//! A pure pass: the same tokens and symbol list always produce the same
//! annotations, and nothing here blocks or depends on parsing. Invalid
//! tokens (unknown symbols, malformed numbers, unclassifiable characters)
//! are flagged for inline underlining while the parser independently
//! decides whether the whole input hangs together.

use crate::ast::{Token, TokenKind};

/// Extra classification attached to a token by annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenVariant {
    /// Identifier in call position: the next non-whitespace token is `(`.
    CallExpression,
}

/// A token decorated with validity and completion data.
///
/// Built fresh on every annotation pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedToken {
    pub token: Token,
    /// Whether the token is acceptable given the supplied symbol set.
    pub valid: bool,
    /// Candidate completions for identifier tokens, in symbol-list order.
    pub hints: Vec<String>,
    pub variant: Option<TokenVariant>,
}

impl AnnotatedToken {
    fn plain(token: Token, valid: bool) -> Self {
        AnnotatedToken {
            token,
            valid,
            hints: Vec::new(),
            variant: None,
        }
    }
}

/// Decorate each token with validity and autocomplete hints.
///
/// Rules by kind:
/// - `Identifier`: valid iff the text is exactly one of `symbols`; hints
///   are the symbols the text is a strict prefix of, in supplied order.
/// - `Number`: valid iff the text has fewer than two dots.
/// - `Unknown`: never valid.
/// - Everything else is unconditionally valid. In particular operators are
///   not checked against an allowed set here; callers wanting strict
///   operator validation re-check `token.value` themselves.
pub fn annotate(tokens: &[Token], symbols: &[String]) -> Vec<AnnotatedToken> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| match token.kind {
            TokenKind::Identifier => {
                let hints: Vec<String> = symbols
                    .iter()
                    .filter(|s| {
                        s.len() >= token.value.len()
                            && s.starts_with(&token.value)
                            && **s != token.value
                    })
                    .cloned()
                    .collect();

                let variant = next_non_whitespace(tokens, i)
                    .filter(|next| next.kind == TokenKind::LeftParen)
                    .map(|_| TokenVariant::CallExpression);

                AnnotatedToken {
                    token: token.clone(),
                    valid: symbols.iter().any(|s| *s == token.value),
                    hints,
                    variant,
                }
            }
            TokenKind::Number => {
                let dots = token.value.chars().filter(|c| *c == '.').count();
                AnnotatedToken::plain(token.clone(), dots < 2)
            }
            TokenKind::Unknown => AnnotatedToken::plain(token.clone(), false),
            _ => AnnotatedToken::plain(token.clone(), true),
        })
        .collect()
}

fn next_non_whitespace(tokens: &[Token], i: usize) -> Option<&Token> {
    tokens[i + 1..]
        .iter()
        .find(|t| t.kind != TokenKind::Whitespace)
}
