//! Per-state rule tables.
//!
//! Rules are tried top to bottom; the first one that matches at the cursor
//! wins. The order is the priority.

use crate::classify::{classify_function, classify_identifier};
use crate::matcher::Matcher;
use crate::state::{LexState, Transition};
use crate::token::{TokenKind, TokenKind as K};
use LexState::{
    Assignment, BracketedAttribute, DoubleQuotedString, MultilineComment, SingleQuotedString,
};
use Matcher::{
    DeclaredName, EscapedChar, ExponentFloat, FractionFloat, FunctionCall, Identifier, Integer,
    LineComment, Literal, MalformedName, MeasureName, OneOf, Operator, RunExcept,
    VariableInstance, Whitespace, Word,
};

/// How a matched span is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Always this kind.
    Kind(TokenKind),
    /// `Keyword` for reserved words, otherwise `Name`.
    Keyword,
    /// `FunctionName` for built-ins. Any other word leaves the rule
    /// unmatched so a later rule lexes it.
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub matcher: Matcher,
    pub emit: Emit,
    pub transition: Transition,
}

impl Rule {
    const fn new(matcher: Matcher, kind: TokenKind) -> Self {
        Self {
            matcher,
            emit: Emit::Kind(kind),
            transition: Transition::None,
        }
    }

    const fn classify(matcher: Matcher, emit: Emit) -> Self {
        Self {
            matcher,
            emit,
            transition: Transition::None,
        }
    }

    const fn push(self, state: LexState) -> Self {
        Self {
            transition: Transition::Push(state),
            ..self
        }
    }

    const fn pop(self) -> Self {
        Self {
            transition: Transition::Pop,
            ..self
        }
    }

    /// Length and kind of this rule's match at `pos`, if any.
    #[must_use]
    pub fn apply(&self, input: &str, pos: usize) -> Option<(usize, TokenKind)> {
        let len = self.matcher.match_at(input, pos)?;
        let text = &input[pos..pos + len];
        let kind = match self.emit {
            Emit::Kind(kind) => kind,
            Emit::Keyword => classify_identifier(text),
            Emit::Function => classify_function(text)?,
        };
        Some((len, kind))
    }
}

pub static ROOT: [Rule; 17] = [
    Rule::new(Whitespace, K::Whitespace),
    Rule::new(LineComment, K::CommentLine),
    Rule::new(Literal("/*"), K::CommentBlock).push(MultilineComment),
    Rule::new(ExponentFloat, K::FloatLiteral),
    Rule::new(FractionFloat, K::FloatLiteral),
    Rule::new(Integer, K::IntegerLiteral),
    Rule::new(Literal("'"), K::ClassName).push(SingleQuotedString),
    Rule::new(Literal("["), K::Attribute).push(BracketedAttribute),
    Rule::new(Literal("\""), K::StringLiteral).push(DoubleQuotedString),
    Rule::classify(FunctionCall, Emit::Function),
    Rule::new(Word("VAR"), K::KeywordDeclaration).push(Assignment),
    // Measure names are very relaxed: `Total Sales (EUR) := ...`
    Rule::new(MeasureName, K::Name),
    Rule::classify(Identifier, Emit::Keyword),
    Rule::new(Word("IN"), K::OperatorWord),
    Rule::new(Operator, K::Operator),
    Rule::new(OneOf(";:(){}[],."), K::Punctuation),
    Rule::new(VariableInstance, K::VariableInstance),
];

pub static MULTILINE_COMMENT: [Rule; 4] = [
    Rule::new(Literal("/*"), K::CommentBlock).push(MultilineComment),
    Rule::new(Literal("*/"), K::CommentBlock).pop(),
    Rule::new(RunExcept("/*"), K::CommentBlock),
    Rule::new(OneOf("/*"), K::CommentBlock),
];

pub static ASSIGNMENT: [Rule; 4] = [
    Rule::new(Whitespace, K::Whitespace),
    Rule::new(Word("VAR"), K::KeywordDeclaration),
    Rule::new(DeclaredName, K::VariableName).pop(),
    Rule::new(MalformedName, K::Error).pop(),
];

pub static SINGLE_QUOTED_STRING: [Rule; 4] = [
    Rule::new(EscapedChar, K::StringEscape),
    Rule::new(Literal("''"), K::StringEscape),
    Rule::new(Literal("'"), K::ClassName).pop(),
    Rule::new(RunExcept("\\'"), K::ClassName),
];

pub static BRACKETED_ATTRIBUTE: [Rule; 4] = [
    Rule::new(EscapedChar, K::StringEscape),
    Rule::new(Literal("]]"), K::StringEscape),
    Rule::new(Literal("]"), K::Attribute).pop(),
    Rule::new(RunExcept("\\]"), K::Attribute),
];

pub static DOUBLE_QUOTED_STRING: [Rule; 4] = [
    Rule::new(EscapedChar, K::StringEscape),
    Rule::new(Literal("\"\""), K::StringEscape),
    Rule::new(Literal("\""), K::StringLiteral).pop(),
    Rule::new(RunExcept("\\\""), K::StringLiteral),
];

/// The rule table consulted while `state` is on top of the stack.
#[must_use]
pub fn rules_for(state: LexState) -> &'static [Rule] {
    match state {
        LexState::Root => &ROOT,
        MultilineComment => &MULTILINE_COMMENT,
        Assignment => &ASSIGNMENT,
        SingleQuotedString => &SINGLE_QUOTED_STRING,
        BracketedAttribute => &BRACKETED_ATTRIBUTE,
        DoubleQuotedString => &DOUBLE_QUOTED_STRING,
    }
}
