#![allow(dead_code)]

use dax_lexer::{Lexer, TokenKind, tokenize};

/// Assert the coalesced token stream of `input` equals `expected`.
pub fn assert_tokens(input: &str, expected: &[(TokenKind, &str)]) {
    let actual: Vec<_> = tokenize(input).iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        actual, expected,
        "token mismatch for input:\n--- input ---\n{input}"
    );
}

/// Assert both streams cover `input` exactly, in order, without gaps.
pub fn assert_coverage(input: &str) {
    let mut offset = 0;
    for token in Lexer::new(input) {
        assert_eq!(token.span.start, offset, "gap or overlap in {input:?}");
        assert!(token.span.end > token.span.start, "empty token in {input:?}");
        assert_eq!(&input[token.span.start..token.span.end], token.text);
        offset = token.span.end;
    }
    assert_eq!(offset, input.len(), "input not fully covered: {input:?}");

    let joined: String = tokenize(input).iter().map(|t| t.text).collect();
    assert_eq!(joined, input);
}

/// Kinds of the coalesced stream, whitespace dropped.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .iter()
        .map(|t| t.kind)
        .filter(|k| *k != TokenKind::Whitespace)
        .collect()
}
