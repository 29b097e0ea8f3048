/// Literal value carried by [`Expr::Literal`].
///
/// Numbers are `f64`; a number token with a malformed shape (`1.2.3`)
/// still parses, producing `NaN` - shape validation belongs to the
/// annotation pass, not the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(String),
    Boolean(bool),
}

/// An identifier with its source span.
///
/// Used both as a standalone expression and as the callee of
/// [`Expr::Call`], which is always a plain identifier in this language.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Nodes are immutable, tree-shaped, and own their children. Every node
/// carries the half-open `[start, end)` span of the source text it was
/// derived from; parenthesized groups contribute no node of their own, so
/// the expression inside `(1 + 2)` keeps the span of `1 + 2`.
///
/// The whole tree is rebuilt from scratch on every parse call.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Number, string, or boolean literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// "hello"
    /// true
    /// ```
    Literal {
        value: LiteralValue,
        start: usize,
        end: usize,
    },

    /// Symbol reference
    ///
    /// # Example
    /// ```text
    /// tax_rate
    /// ```
    Identifier(Ident),

    /// Function call with comma-separated arguments
    ///
    /// # Examples
    /// ```text
    /// sum(1, 2, 3)
    /// any(a, all(b, c))
    /// ```
    Call {
        callee: Ident,
        arguments: Vec<Expr>,
        start: usize,
        end: usize,
    },

    /// Binary operation
    ///
    /// The operator is kept as scanned text; a merged operator run such as
    /// `+-` passes through unchanged for the consumer to interpret.
    ///
    /// # Example
    /// ```text
    /// 1 + 23
    /// ```
    Binary {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
        start: usize,
        end: usize,
    },

    /// Array literal
    ///
    /// # Example
    /// ```text
    /// [123, 345]
    /// ```
    Array {
        elements: Vec<Expr>,
        start: usize,
        end: usize,
    },
}

impl Expr {
    /// Start offset of the source text this node spans.
    pub fn start(&self) -> usize {
        match self {
            Expr::Literal { start, .. }
            | Expr::Call { start, .. }
            | Expr::Binary { start, .. }
            | Expr::Array { start, .. } => *start,
            Expr::Identifier(ident) => ident.start,
        }
    }

    /// End offset (exclusive) of the source text this node spans.
    pub fn end(&self) -> usize {
        match self {
            Expr::Literal { end, .. }
            | Expr::Call { end, .. }
            | Expr::Binary { end, .. }
            | Expr::Array { end, .. } => *end,
            Expr::Identifier(ident) => ident.end,
        }
    }
}
