//! # Codefield Expression Language - Tokens and Syntax Tree
//!
//! This module defines the lexical tokens and the Abstract Syntax Tree (AST)
//! for the codefield expression language, a small arithmetic/call/array
//! expression language designed to live inside an editable text field and
//! stay useful while the input is half-typed.
//!
//! ## Architecture Overview
//!
//! The module is organized into focused submodules:
//!
//! - **[tokens]** - Positioned lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, identifiers, calls,
//!   binary operations, array literals)
//!
//! ## Core Concepts
//!
//! ### Positioned tokens
//!
//! Every token records the half-open `[start, end)` span of source text it
//! was scanned from. Tokens are contiguous: each token starts where the
//! previous one ended, and concatenating the original text of all tokens
//! reproduces the input exactly. This is what makes caret-accurate error
//! messages and cursor-to-token lookup possible.
//!
//! ### Tolerant scanning
//!
//! The lexer never rejects input. Characters it cannot classify become
//! `unknown` tokens, unterminated strings degrade to `unknown`, and numeric
//! well-formedness (`1.2.3`) is deferred to the annotation pass. A field
//! being typed into is malformed most of the time; the token stream has to
//! survive that.
//!
//! ### Expression grammar
//!
//! ```text
//! sum(prices) * (1 + tax_rate)
//! [1, 2, 3]
//! "label" + name
//! ```
//!
//! Parenthesized groups affect grouping only and produce no node of their
//! own. An identifier directly followed by `(` is promoted to a call.
pub mod expressions;
pub mod tokens;

pub use expressions::{Expr, Ident, LiteralValue};
pub use tokens::{Token, TokenKind, source_text};
