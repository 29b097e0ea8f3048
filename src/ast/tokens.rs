use std::borrow::Cow;

/// Classification of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Left parenthesis for grouping or call arguments
    LeftParen,

    /// Right parenthesis
    RightParen,

    /// Left square bracket opening an array literal
    LeftSquare,

    /// Right square bracket
    RightSquare,

    /// Symbol name
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores.
    ///
    /// # Examples
    /// ```text
    /// price
    /// item_count
    /// _internal
    /// ```
    Identifier,

    /// Maximal run of operator characters (`+`, `-`, `*`, `/`)
    ///
    /// Adjacent operator characters merge into a single token; `+-+` is one
    /// operator token, not three. How such runs combine with operands is the
    /// parser's decision, not the lexer's.
    Operator,

    /// Maximal run of digits and dots
    ///
    /// The lexer does not validate numeric shape: `1.2.3` scans as one
    /// number token and is flagged later by the annotator.
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// 1.2.3
    /// ```
    Number,

    /// String literal enclosed in single or double quotes
    ///
    /// `value` holds the interior, `raw` the full quoted text.
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'item #1'
    /// ```
    String,

    /// The words `true` and `false`
    Boolean,

    /// Comma separating call arguments or array elements
    Comma,

    /// Maximal run of whitespace characters
    Whitespace,

    /// Anything the lexer could not classify
    ///
    /// Covers stray characters (`$`, `#`, ...) and unterminated string
    /// literals. Unknown tokens keep the lexer total; the annotator marks
    /// them invalid and the parser rejects them with a positioned error.
    Unknown,
}

/// A classified, positioned substring of the source.
///
/// `start`/`end` are half-open character offsets. Tokens produced by one
/// lexer pass are contiguous and cover the whole input, so
/// [`source_text`] reproduces the original string exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The matched text, unescaped for strings (quotes stripped).
    pub value: String,
    /// Original text where it differs from `value`: the full quoted form
    /// of string literals. `None` for every other kind.
    pub raw: Option<String>,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, start: usize, end: usize) -> Self {
        Token {
            kind,
            value: value.into(),
            raw: None,
            start,
            end,
        }
    }

    /// The exact source text this token was scanned from.
    pub fn source_text(&self) -> &str {
        self.raw.as_deref().unwrap_or(&self.value)
    }

    /// Display form for overlay renderers.
    ///
    /// Whitespace renders as non-breaking spaces (one per character, so
    /// column widths are preserved) to keep rendered whitespace
    /// distinguishable from blank output. Everything else renders as its
    /// source text.
    pub fn rendered(&self) -> Cow<'_, str> {
        if self.kind == TokenKind::Whitespace {
            Cow::Owned("\u{a0}".repeat(self.value.chars().count()))
        } else {
            Cow::Borrowed(self.source_text())
        }
    }

    /// Whether `offset` falls inside this token's `[start, end)` span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Reconstruct the original source from a token list.
pub fn source_text(tokens: &[Token]) -> String {
    tokens.iter().map(Token::source_text).collect()
}
