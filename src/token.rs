use std::fmt;

/// Source location of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: usize,
    /// 1-based column of `start`, counted in characters.
    pub column: usize,
}

impl Span {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of spaces, tabs and newlines.
    Whitespace,
    /// `// ...` up to the end of the line.
    CommentLine,
    /// Any piece of a `/* ... */` comment.
    CommentBlock,
    /// Number with a fraction or an exponent.
    FloatLiteral,
    /// Number without fraction or exponent.
    IntegerLiteral,
    /// Single-quoted table reference (`'Sales'`).
    ClassName,
    /// Bracketed column or measure reference (`[Amount]`).
    Attribute,
    /// Double-quoted string.
    StringLiteral,
    /// Backslash escape or doubled delimiter inside a quoted context.
    StringEscape,
    /// Built-in function name directly followed by `(`.
    FunctionName,
    /// The `VAR` keyword.
    KeywordDeclaration,
    /// Reserved query keyword (`EVALUATE`, `RETURN`, ...).
    Keyword,
    /// Name declared by `VAR`.
    VariableName,
    /// Any other identifier, including measure names.
    Name,
    /// Malformed span.
    Error,
    /// Word operator (`IN`).
    OperatorWord,
    /// Symbolic operator.
    Operator,
    /// Punctuation.
    Punctuation,
    /// `@param` query parameter.
    VariableInstance,
}

impl TokenKind {
    /// Hierarchical style name a highlighter maps to a display style.
    #[must_use]
    pub const fn style_name(self) -> &'static str {
        match self {
            Self::Whitespace => "Text.Whitespace",
            Self::CommentLine => "Comment.Single",
            Self::CommentBlock => "Comment.Multiline",
            Self::FloatLiteral => "Literal.Number.Float",
            Self::IntegerLiteral => "Literal.Number.Integer",
            Self::ClassName => "Name.Class",
            Self::Attribute => "Name.Attribute",
            Self::StringLiteral => "Literal.String.Double",
            Self::StringEscape => "Literal.String.Escape",
            Self::FunctionName => "Name.Function",
            Self::KeywordDeclaration => "Keyword.Declaration",
            Self::Keyword => "Keyword",
            Self::VariableName => "Name.Variable",
            Self::Name => "Name",
            Self::Error => "Error",
            Self::OperatorWord => "Operator.Word",
            Self::Operator => "Operator",
            Self::Punctuation => "Punctuation",
            Self::VariableInstance => "Name.Variable.Instance",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style_name())
    }
}

/// A single token: its kind, the source text it covers, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}
