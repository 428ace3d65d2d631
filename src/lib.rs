//! Lexer for DAX (Data Analysis Expressions) formulas and queries.
//!
//! Turns source text into classified tokens for syntax highlighting or a
//! downstream parser. Lexing never fails: every byte of the input lands in
//! exactly one token, and spans no rule accepts come back as
//! [`TokenKind::Error`].
//!
//! # Quick start
//!
//! ```
//! use dax_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("Metric:=SUM('Table'[Column])");
//! let kinds: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
//! assert_eq!(kinds[0], (TokenKind::Name, "Metric"));
//! assert_eq!(kinds[2], (TokenKind::FunctionName, "SUM"));
//! assert_eq!(kinds[4], (TokenKind::ClassName, "'Table'"));
//! ```
//!
//! The raw stream yields one token per rule match and exposes the state
//! stack as it goes:
//!
//! ```
//! use dax_lexer::{LexState, Lexer};
//!
//! let mut lexer = Lexer::new("[Amount");
//! lexer.next();
//! assert_eq!(lexer.state(), LexState::BracketedAttribute);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod info;
pub mod lexer;
pub mod matcher;
pub mod rules;
pub mod state;
pub mod token;

pub use info::{DAX, LexerInfo};
pub use lexer::{Coalesced, LexError, LexErrorKind, Lexer, tokenize, validate};
pub use state::{LexState, Transition};
pub use token::{Span, Token, TokenKind};
