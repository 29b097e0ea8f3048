use crate::ast::{Expr, Ident, LiteralValue, Token, TokenKind, source_text};
use std::fmt;

/// The three ways a parse can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A terminal position holds a token that can never start a terminal,
    /// e.g. a stray `$`.
    UnknownToken(Token),
    /// A token appeared where the grammar allows none, e.g. trailing input
    /// after a complete expression.
    UnexpectedToken(Token),
    /// Input ended while more was expected; carries the missing closer
    /// when one is known.
    EndOfLine(Option<&'static str>),
}

/// A failed parse, with everything needed to render a caret diagram.
///
/// Carries the full original token list (whitespace included) so the
/// source line can be reconstructed exactly as typed. `Display` renders
/// the message followed by the source and a caret under the offending
/// column:
///
/// ```text
/// Unexpected token 1
///
/// 1 1
///   ^
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    tokens: Vec<Token>,
}

impl ParseError {
    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::UnknownToken(t) => format!("Invalid token {}", t.value),
            ParseErrorKind::UnexpectedToken(t) => format!("Unexpected token {}", t.value),
            ParseErrorKind::EndOfLine(Some(expected)) => format!("Expected {expected}"),
            ParseErrorKind::EndOfLine(None) => "Unexpected end of line".to_string(),
        }
    }

    /// The offending token, or `None` at end of input.
    pub fn token(&self) -> Option<&Token> {
        match &self.kind {
            ParseErrorKind::UnknownToken(t) | ParseErrorKind::UnexpectedToken(t) => Some(t),
            ParseErrorKind::EndOfLine(_) => None,
        }
    }

    /// Column the caret points at: the offending token's start, or the last
    /// column of input at end of line.
    pub fn column(&self) -> usize {
        match self.token() {
            Some(t) => t.start,
            None => self
                .tokens
                .last()
                .map(|t| t.end.saturating_sub(1))
                .unwrap_or(0),
        }
    }

    /// Source span to underline: the offending token's span, or the empty
    /// span at end of input.
    pub fn span(&self) -> (usize, usize) {
        match self.token() {
            Some(t) => (t.start, t.end),
            None => {
                let end = self.tokens.last().map(|t| t.end).unwrap_or(0);
                (end, end)
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\n{}\n{}^",
            self.message(),
            source_text(&self.tokens),
            " ".repeat(self.column())
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser over a token list.
///
/// Keeps the full token list for diagnostics and works through a
/// whitespace-filtered copy with an explicit position cursor; one token of
/// lookahead past the current one drives the precedence tie-break.
pub struct Parser {
    all: Vec<Token>,
    tokens: Vec<Token>,
    position: usize,
}

fn is_add_sub(op: &str) -> bool {
    matches!(op, "+" | "-")
}

fn is_mul_div(op: &str) -> bool {
    matches!(op, "*" | "/")
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let filtered = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .cloned()
            .collect();
        Parser {
            all: tokens,
            tokens: filtered,
            position: 0,
        }
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|t| t.kind)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position + 1)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn unknown(&self, token: Token) -> ParseError {
        ParseError {
            kind: ParseErrorKind::UnknownToken(token),
            tokens: self.all.clone(),
        }
    }

    fn unexpected(&self, token: Token) -> ParseError {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken(token),
            tokens: self.all.clone(),
        }
    }

    fn end_of_line(&self, expected: Option<&'static str>) -> ParseError {
        ParseError {
            kind: ParseErrorKind::EndOfLine(expected),
            tokens: self.all.clone(),
        }
    }

    /// Parse the whole input.
    ///
    /// Returns `Ok(None)` for empty (or whitespace-only) input. Anything
    /// left over after one complete expression is an error.
    pub fn parse(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.tokens.is_empty() {
            return Ok(None);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(self.unexpected(token.clone()));
        }

        Ok(Some(ast))
    }

    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut node = match self.current_kind() {
            // Sub-expression: parentheses group but produce no node
            Some(TokenKind::LeftParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                match self.current_kind() {
                    None => return Err(self.end_of_line(Some(")"))),
                    Some(TokenKind::RightParen) => self.advance(),
                    Some(_) => {
                        let token = self.tokens[self.position].clone();
                        return Err(self.unexpected(token));
                    }
                }
                inner
            }
            Some(TokenKind::LeftSquare) => self.parse_array()?,
            _ => self.parse_terminal()?,
        };

        // Call promotion: an identifier directly followed by `(`
        if let Expr::Identifier(ident) = &node
            && self.current_kind() == Some(TokenKind::LeftParen)
        {
            let callee = ident.clone();
            self.advance();
            let mut arguments = Vec::new();
            let end = loop {
                match self.current_kind() {
                    None => return Err(self.end_of_line(Some(")"))),
                    Some(TokenKind::RightParen) => {
                        let end = self.tokens[self.position].end;
                        self.advance();
                        break end;
                    }
                    Some(TokenKind::Comma) => self.advance(),
                    Some(_) => {
                        arguments.push(self.parse_expression()?);
                        // After an argument only `,` or `)` may follow
                        if let Some(t) = self.current()
                            && t.kind != TokenKind::Comma
                            && t.kind != TokenKind::RightParen
                        {
                            return Err(self.unexpected(t.clone()));
                        }
                    }
                }
            };
            node = Expr::Call {
                start: callee.start,
                callee,
                arguments,
                end,
            };
        }

        // Binary expressions build left-associatively; how much of the
        // remainder the right operand swallows is decided by the tie-break
        // below rather than a precedence table.
        while self.current_kind() == Some(TokenKind::Operator) {
            let operator = self.tokens[self.position].value.clone();
            self.advance();

            // Tie-break: look one token past the start of the right
            // operand. `+`/`-` followed by another additive operator, or
            // `*`/`/` followed by any operator, caps the right side at a
            // single terminal; otherwise it takes a full expression.
            let next_operator = self
                .peek()
                .filter(|t| t.kind == TokenKind::Operator)
                .map(|t| t.value.clone());

            let right_is_terminal = match next_operator.as_deref() {
                Some(next) => (is_add_sub(&operator) && is_add_sub(next)) || is_mul_div(&operator),
                None => false,
            };

            let right = if right_is_terminal {
                self.parse_terminal()?
            } else {
                self.parse_expression()?
            };

            node = Expr::Binary {
                operator,
                start: node.start(),
                end: right.end(),
                left: Box::new(node),
                right: Box::new(right),
            };
        }

        Ok(node)
    }

    /// Array literal. Bare commas between elements are skipped, so leading,
    /// trailing, and doubled commas are all tolerated.
    fn parse_array(&mut self) -> Result<Expr, ParseError> {
        let start = self.tokens[self.position].start;
        self.advance();

        let mut elements = Vec::new();
        let end = loop {
            match self.current_kind() {
                None => return Err(self.end_of_line(Some("]"))),
                Some(TokenKind::RightSquare) => {
                    let end = self.tokens[self.position].end;
                    self.advance();
                    break end;
                }
                Some(TokenKind::Comma) => self.advance(),
                Some(_) => elements.push(self.parse_expression()?),
            }
        };

        Ok(Expr::Array {
            elements,
            start,
            end,
        })
    }

    /// Consume exactly one literal or identifier token.
    fn parse_terminal(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.current().cloned() else {
            return Err(self.end_of_line(None));
        };

        let node = match token.kind {
            TokenKind::Number => Expr::Literal {
                // Malformed shapes like `1.2.3` become NaN; the annotator
                // is the layer that flags them
                value: LiteralValue::Number(token.value.parse::<f64>().unwrap_or(f64::NAN)),
                start: token.start,
                end: token.end,
            },
            TokenKind::String => Expr::Literal {
                value: LiteralValue::String(token.value.clone()),
                start: token.start,
                end: token.end,
            },
            TokenKind::Boolean => Expr::Literal {
                value: LiteralValue::Boolean(token.value == "true"),
                start: token.start,
                end: token.end,
            },
            TokenKind::Identifier => Expr::Identifier(Ident {
                name: token.value.clone(),
                start: token.start,
                end: token.end,
            }),
            _ => return Err(self.unknown(token)),
        };

        self.advance();
        Ok(node)
    }
}
