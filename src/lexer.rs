use std::fmt;

use crate::rules::rules_for;
use crate::state::{LexState, StateStack, Transition};
use crate::token::{Span, Token, TokenKind};

/// Classifies a problem reported by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// `VAR` declares a name that is not a plain ASCII identifier.
    InvalidVariableName(String),
    /// Character that no rule of the active state accepts.
    UnexpectedCharacter(char),
    /// Input ended inside a quote, bracket, comment or declaration.
    Unterminated(LexState),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVariableName(name) => {
                write!(f, "invalid variable name: {name}")
            }
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch:?}")
            }
            Self::Unterminated(state) => {
                write!(f, "unterminated {state}")
            }
        }
    }
}

/// Error produced by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize DAX source, merging adjacent tokens of the same kind.
///
/// Never fails: malformed spans come back as [`TokenKind::Error`] and
/// the concatenated token texts always equal `input`.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).coalesced().collect()
}

/// Tokenize DAX source, rejecting it on the first malformed span or when
/// it ends inside an open context.
///
/// # Errors
///
/// Returns `LexError` for invalid `VAR` names, characters no rule accepts,
/// and unterminated quotes, brackets, comments or declarations.
pub fn validate(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut raw = Vec::new();
    while let Some(token) = lexer.next() {
        if token.kind != TokenKind::Error {
            raw.push(token);
            continue;
        }
        let kind = if lexer.last_was_forced() {
            LexErrorKind::UnexpectedCharacter(token.text.chars().next().unwrap_or_default())
        } else {
            LexErrorKind::InvalidVariableName(token.text.to_string())
        };
        return Err(LexError {
            kind,
            span: token.span,
        });
    }
    if let Some(&span) = lexer.opened.last() {
        return Err(LexError {
            kind: LexErrorKind::Unterminated(lexer.state()),
            span,
        });
    }
    Ok(Coalesced::new(input, raw.into_iter()).collect())
}

/// Lazy scanner over one source text, yielding one token per rule match.
///
/// The stream is not restartable: drain it or drop it.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    stack: StateStack,
    // Span of the token that opened each state above Root.
    opened: Vec<Span>,
    forced: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            stack: StateStack::new(),
            opened: Vec::new(),
            forced: false,
        }
    }

    /// The state on top of the stack.
    #[must_use]
    pub fn state(&self) -> LexState {
        self.stack.top()
    }

    /// Number of open contexts above `Root`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// Whether the last token came from forced progress rather than a rule.
    #[must_use]
    pub const fn last_was_forced(&self) -> bool {
        self.forced
    }

    /// Merge adjacent tokens of equal kind.
    #[must_use]
    pub fn coalesced(self) -> Coalesced<'a, Self> {
        let input = self.input;
        Coalesced::new(input, self)
    }

    fn span_for(&self, len: usize) -> Span {
        Span {
            start: self.pos,
            end: self.pos + len,
            line: self.line,
            column: self.column,
        }
    }

    fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    fn track(&mut self, transition: Transition, span: Span) {
        match transition {
            Transition::None => {}
            Transition::Push(_) => self.opened.push(span),
            Transition::Pop => {
                self.opened.pop();
            }
            Transition::Replace(_) => {
                self.opened.pop();
                self.opened.push(span);
            }
        }
        self.stack.apply(transition);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        let rest = input.get(self.pos..).filter(|rest| !rest.is_empty())?;
        let state = self.stack.top();

        let matched = rules_for(state).iter().find_map(|rule| {
            rule.apply(input, self.pos)
                .map(|(len, kind)| (len, kind, rule.transition))
        });
        self.forced = matched.is_none();
        let (len, kind, transition) = matched.unwrap_or_else(|| {
            // No rule matches: consume one character so scanning continues.
            let len = rest.chars().next().map_or(1, char::len_utf8);
            (len, TokenKind::Error, Transition::None)
        });

        let span = self.span_for(len);
        let text = &input[span.start..span.end];
        if self.forced {
            log::debug!(
                "no {state:?} rule matches {text:?} at line {}, column {}",
                span.line,
                span.column
            );
        } else if kind == TokenKind::Error {
            log::debug!(
                "malformed variable name {text:?} at line {}, column {}",
                span.line,
                span.column
            );
        }

        self.advance(text);
        self.track(transition, span);
        Some(Token { kind, text, span })
    }
}

/// Token stream with adjacent same-kind tokens merged into one.
#[derive(Debug, Clone)]
pub struct Coalesced<'a, I> {
    input: &'a str,
    tokens: I,
    pending: Option<Token<'a>>,
}

impl<'a, I> Coalesced<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    /// Merge `tokens`, which must be slices of `input` in source order.
    #[must_use]
    pub const fn new(input: &'a str, tokens: I) -> Self {
        Self {
            input,
            tokens,
            pending: None,
        }
    }
}

impl<'a, I> Iterator for Coalesced<'a, I>
where
    I: Iterator<Item = Token<'a>>,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        let mut current = self.pending.take().or_else(|| self.tokens.next())?;
        for token in self.tokens.by_ref() {
            if token.kind == current.kind && token.span.start == current.span.end {
                current.span.end = token.span.end;
                current.text = &input[current.span.start..current.span.end];
            } else {
                self.pending = Some(token);
                break;
            }
        }
        Some(current)
    }
}
