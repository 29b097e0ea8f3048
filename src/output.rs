//! JSON views of tokens, annotations, and syntax trees.
//!
//! Everything the core produces can be rendered as [`serde_json::Value`]
//! for the CLI and for embedding hosts that live outside Rust. Token kinds
//! use their camelCase wire names (`leftParen`, `rightSquare`, ...) and AST
//! nodes use ESTree-flavored type tags (`Literal`, `CallExpression`, ...).
//!
//! # Examples
//!
//! ```
//! use codefield_lang::lexer::tokenize;
//! use codefield_lang::output::{to_json, tokens_to_json};
//!
//! let tokens = tokenize("1");
//! assert_eq!(
//!     to_json(&tokens_to_json(&tokens)),
//!     r#"[{"end":1,"start":0,"type":"number","value":"1"}]"#
//! );
//! ```

use crate::annotate::{AnnotatedToken, TokenVariant};
use crate::ast::{Expr, LiteralValue, Token, TokenKind};
use crate::editor::Analysis;
use serde_json::{Value, json};

fn kind_str(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::LeftParen => "leftParen",
        TokenKind::RightParen => "rightParen",
        TokenKind::LeftSquare => "leftSquare",
        TokenKind::RightSquare => "rightSquare",
        TokenKind::Identifier => "identifier",
        TokenKind::Operator => "operator",
        TokenKind::Number => "number",
        TokenKind::String => "string",
        TokenKind::Boolean => "boolean",
        TokenKind::Comma => "comma",
        TokenKind::Whitespace => "whitespace",
        TokenKind::Unknown => "unknown",
    }
}

fn token_to_json(token: &Token) -> Value {
    let mut value = json!({
        "type": kind_str(token.kind),
        "value": token.value,
        "start": token.start,
        "end": token.end,
    });
    if let Some(raw) = &token.raw
        && let Value::Object(map) = &mut value
    {
        map.insert("raw".to_string(), json!(raw));
    }
    value
}

/// Render a raw token stream.
pub fn tokens_to_json(tokens: &[Token]) -> Value {
    Value::Array(tokens.iter().map(token_to_json).collect())
}

/// Render an annotated token stream.
pub fn annotated_to_json(tokens: &[AnnotatedToken]) -> Value {
    Value::Array(
        tokens
            .iter()
            .map(|t| {
                let mut value = token_to_json(&t.token);
                if let Value::Object(map) = &mut value {
                    map.insert("valid".to_string(), json!(t.valid));
                    if !t.hints.is_empty() {
                        map.insert("hints".to_string(), json!(t.hints));
                    }
                    if let Some(TokenVariant::CallExpression) = t.variant {
                        map.insert("variant".to_string(), json!("CallExpression"));
                    }
                }
                value
            })
            .collect(),
    )
}

/// Render a syntax tree.
///
/// Non-finite literal numbers (the NaN of a malformed token) render as
/// `null`, matching what JSON can express.
pub fn ast_to_json(ast: &Expr) -> Value {
    match ast {
        Expr::Literal { value, start, end } => {
            let value = match value {
                LiteralValue::Number(n) => json!(n),
                LiteralValue::String(s) => json!(s),
                LiteralValue::Boolean(b) => json!(b),
            };
            json!({ "type": "Literal", "value": value, "start": start, "end": end })
        }
        Expr::Identifier(ident) => json!({
            "type": "Identifier",
            "name": ident.name,
            "start": ident.start,
            "end": ident.end,
        }),
        Expr::Call {
            callee,
            arguments,
            start,
            end,
        } => json!({
            "type": "CallExpression",
            "callee": {
                "type": "Identifier",
                "name": callee.name,
                "start": callee.start,
                "end": callee.end,
            },
            "arguments": arguments.iter().map(ast_to_json).collect::<Vec<_>>(),
            "start": start,
            "end": end,
        }),
        Expr::Binary {
            operator,
            left,
            right,
            start,
            end,
        } => json!({
            "type": "BinaryExpression",
            "operator": operator,
            "left": ast_to_json(left),
            "right": ast_to_json(right),
            "start": start,
            "end": end,
        }),
        Expr::Array {
            elements,
            start,
            end,
        } => json!({
            "type": "ArrayExpression",
            "elements": elements.iter().map(ast_to_json).collect::<Vec<_>>(),
            "start": start,
            "end": end,
        }),
    }
}

/// Render a full analysis report.
pub fn analysis_to_json(analysis: &Analysis) -> Value {
    json!({
        "tokens": annotated_to_json(&analysis.tokens),
        "ast": analysis.ast.as_ref().map(ast_to_json).unwrap_or(Value::Null),
        "errors": analysis
            .errors
            .iter()
            .map(|e| json!({ "message": e.message, "start": e.start, "end": e.end }))
            .collect::<Vec<_>>(),
    })
}

/// Compact JSON string.
pub fn to_json(value: &Value) -> String {
    value.to_string()
}

/// Pretty JSON string with 2-space indentation.
pub fn to_json_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
