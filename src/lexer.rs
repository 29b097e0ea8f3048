use crate::ast::{Token, TokenKind};

/// Characters that merge into operator tokens.
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Scanner over a source string.
///
/// Total: every character ends up in exactly one token, and characters the
/// scanner cannot classify become [`TokenKind::Unknown`] tokens instead of
/// errors. Offsets are character indices into the input.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char) -> Token {
        let start = self.position;
        self.advance(); // consume opening quote

        let interior = self.read_while(|ch| ch != quote);

        if self.current_char() == Some(quote) {
            self.advance();
            let mut raw = String::with_capacity(interior.len() + 2);
            raw.push(quote);
            raw.push_str(&interior);
            raw.push(quote);
            Token {
                kind: TokenKind::String,
                value: interior,
                raw: Some(raw),
                start,
                end: self.position,
            }
        } else {
            // Unterminated: the run degrades to a single unknown token so
            // the stream stays total while the closing quote is typed.
            let mut value = String::with_capacity(interior.len() + 1);
            value.push(quote);
            value.push_str(&interior);
            Token::new(TokenKind::Unknown, value, start, self.position)
        }
    }

    /// Scan the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        let start = self.position;
        let ch = self.current_char()?;

        let single = |kind: TokenKind| Some(Token::new(kind, ch, start, start + 1));

        match ch {
            '(' => {
                self.advance();
                single(TokenKind::LeftParen)
            }
            ')' => {
                self.advance();
                single(TokenKind::RightParen)
            }
            '[' => {
                self.advance();
                single(TokenKind::LeftSquare)
            }
            ']' => {
                self.advance();
                single(TokenKind::RightSquare)
            }
            ',' => {
                self.advance();
                single(TokenKind::Comma)
            }
            _ if OPERATORS.contains(&ch) => {
                let seq = self.read_while(|c| OPERATORS.contains(&c));
                Some(Token::new(TokenKind::Operator, seq, start, self.position))
            }
            _ if ch.is_ascii_digit() || ch == '.' => {
                // Dots merge freely; `1.2.3` is one (invalid) number token.
                let seq = self.read_while(|c| c.is_ascii_digit() || c == '.');
                Some(Token::new(TokenKind::Number, seq, start, self.position))
            }
            '\'' | '"' => Some(self.read_string(ch)),
            _ if ch.is_alphabetic() || ch == '_' => {
                let seq = self.read_while(|c| c.is_alphanumeric() || c == '_');
                let kind = match seq.as_str() {
                    "true" | "false" => TokenKind::Boolean,
                    _ => TokenKind::Identifier,
                };
                Some(Token::new(kind, seq, start, self.position))
            }
            _ if ch.is_whitespace() => {
                let seq = self.read_while(char::is_whitespace);
                Some(Token::new(TokenKind::Whitespace, seq, start, self.position))
            }
            _ => {
                self.advance();
                single(TokenKind::Unknown)
            }
        }
    }
}

/// Scan a source string into its complete token list.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }
    tokens
}

#[test]
fn test_operator_run_merges() {
    let tokens = tokenize("1+-+2");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, "+-+");
    assert_eq!((tokens[1].start, tokens[1].end), (1, 4));
}

#[test]
fn test_unterminated_string_is_unknown() {
    let tokens = tokenize("\"abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Unknown);
    assert_eq!(tokens[0].value, "\"abc");
    assert_eq!((tokens[0].start, tokens[0].end), (0, 4));
}
