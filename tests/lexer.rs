//! Lexer edge cases.

mod common;

use common::{assert_coverage, assert_tokens, kinds};
use dax_lexer::{LexState, Lexer, TokenKind, tokenize};

// -----------------------------------------------------------
// Basic lexer behaviour.
// -----------------------------------------------------------

#[test]
fn lex_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(Lexer::new("").next().is_none());
}

#[test]
fn lex_only_whitespace() {
    assert_tokens(" \t\r\n\n  ", &[(TokenKind::Whitespace, " \t\r\n\n  ")]);
}

#[test]
fn lex_keywords_ignore_case() {
    for word in ["return", "Return", "RETURN"] {
        assert_eq!(kinds(word), [TokenKind::Keyword], "{word}");
    }
    for word in ["revenue", "Revenue", "REVENUE"] {
        assert_eq!(kinds(word), [TokenKind::Name], "{word}");
    }
}

#[test]
fn lex_query_keywords() {
    let input = "DEFINE\nEVALUATE x\nORDER BY y ASC, z DESC\nSTART AT 1";
    let keywords: Vec<_> = tokenize(input)
        .into_iter()
        .filter(|t| t.kind == TokenKind::Keyword)
        .map(|t| t.text)
        .collect();
    assert_eq!(
        keywords,
        ["DEFINE", "EVALUATE", "ORDER", "BY", "ASC", "DESC", "START", "AT"]
    );
}

// -----------------------------------------------------------
// Functions.
// -----------------------------------------------------------

#[test]
fn lex_function_needs_paren() {
    assert_eq!(
        kinds("SUM(1,2)"),
        [
            TokenKind::FunctionName,
            TokenKind::Punctuation,
            TokenKind::IntegerLiteral,
            TokenKind::Punctuation,
            TokenKind::IntegerLiteral,
            TokenKind::Punctuation,
        ]
    );
    assert_eq!(kinds("SUM"), [TokenKind::Name]);
    assert_eq!(kinds("x + SUM"), [TokenKind::Name, TokenKind::Operator, TokenKind::Name]);
}

#[test]
fn lex_function_with_space_before_paren() {
    let tokens = tokenize("x + calculate (1)");
    assert_eq!(tokens[4].kind, TokenKind::FunctionName);
    assert_eq!(tokens[4].text, "calculate");
}

#[test]
fn lex_dotted_function() {
    let tokens = tokenize("x + ISO.CEILING(4.2, 1)");
    assert_eq!(tokens[4].kind, TokenKind::FunctionName);
    assert_eq!(tokens[4].text, "ISO.CEILING");
}

#[test]
fn lex_unknown_call_is_still_lexed() {
    let tokens = tokenize("x + MyFunc(1)");
    assert_eq!(tokens[4].kind, TokenKind::Name);
    assert_eq!(tokens[4].text, "MyFunc");
    assert_coverage("x + MyFunc(1)");
}

// -----------------------------------------------------------
// Identifiers and operators.
// -----------------------------------------------------------

#[test]
fn lex_var_needs_word_boundary() {
    assert_eq!(kinds("x + VARIANCE"), [TokenKind::Name, TokenKind::Operator, TokenKind::Name]);
}

#[test]
fn lex_in_is_an_identifier() {
    assert_eq!(
        kinds("x IN {1}"),
        [
            TokenKind::Name,
            TokenKind::Name,
            TokenKind::Punctuation,
            TokenKind::IntegerLiteral,
            TokenKind::Punctuation,
        ]
    );
}

#[test]
fn lex_operators() {
    // Leading space keeps the line-start measure rule out of the way.
    let input = " a || b && c == d <= e >= f <> g ^ h & i";
    let ops: Vec<_> = tokenize(input)
        .into_iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.text)
        .collect();
    assert_eq!(ops, ["||", "&&", "==", "<=", ">=", "<>", "^", "&"]);
}

#[test]
fn lex_negative_numbers() {
    assert_eq!(
        kinds("x * -3"),
        [TokenKind::Name, TokenKind::Operator, TokenKind::IntegerLiteral]
    );
    assert_eq!(tokenize("-1.5")[0].kind, TokenKind::FloatLiteral);
}

#[test]
fn lex_parameter() {
    let tokens = tokenize("x > @minAmount");
    assert_eq!(tokens[4].kind, TokenKind::VariableInstance);
    assert_eq!(tokens[4].text, "@minAmount");
}

#[test]
fn lex_measure_with_spaces() {
    assert_tokens(
        "Total Sales := 1",
        &[
            (TokenKind::Name, "Total Sales"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Operator, ":="),
            (TokenKind::Whitespace, " "),
            (TokenKind::IntegerLiteral, "1"),
        ],
    );
}

#[test]
fn lex_measure_name_only_at_line_start() {
    let tokens = tokenize("x\nTotal Sales = 1");
    assert_eq!(tokens[2].text, "Total Sales");
    let tokens = tokenize("  Total Sales = 1");
    assert_eq!(tokens[1].text, "Total");
}

// -----------------------------------------------------------
// Quoted contexts.
// -----------------------------------------------------------

#[test]
fn lex_doubled_delimiters_are_escapes() {
    assert_tokens(
        "[a]]b]",
        &[
            (TokenKind::Attribute, "[a"),
            (TokenKind::StringEscape, "]]"),
            (TokenKind::Attribute, "b]"),
        ],
    );
    assert_tokens(
        "\"say \"\"hi\"\"\"",
        &[
            (TokenKind::StringLiteral, "\"say "),
            (TokenKind::StringEscape, "\"\""),
            (TokenKind::StringLiteral, "hi"),
            (TokenKind::StringEscape, "\"\""),
            (TokenKind::StringLiteral, "\""),
        ],
    );
}

#[test]
fn lex_backslash_escapes() {
    assert_tokens(
        r"'a\'b'",
        &[
            (TokenKind::ClassName, "'a"),
            (TokenKind::StringEscape, r"\'"),
            (TokenKind::ClassName, "b'"),
        ],
    );
}

#[test]
fn lex_quoted_names_keep_keywords_inside() {
    assert_tokens(
        "'RETURN SUM('",
        &[(TokenKind::ClassName, "'RETURN SUM('")],
    );
}

// -----------------------------------------------------------
// State stack discipline.
// -----------------------------------------------------------

#[test]
fn lex_nested_comments_pop_one_level_each() {
    let mut lexer = Lexer::new("/* a /* b */ c */ d");
    let mut depths = Vec::new();
    while lexer.next().is_some() {
        depths.push(lexer.depth());
    }
    assert_eq!(lexer.state(), LexState::Root);
    assert_eq!(depths.iter().max(), Some(&2));
    assert_eq!(
        kinds("/* a /* b */ c */ d"),
        [TokenKind::CommentBlock, TokenKind::Name]
    );
}

#[test]
fn lex_every_context_returns_to_root() {
    for input in ["'t'", "[c]", "\"s\"", "/* c */", "VAR x = 1"] {
        let mut lexer = Lexer::new(input);
        lexer.by_ref().for_each(drop);
        assert_eq!(lexer.state(), LexState::Root, "{input}");
        assert_eq!(lexer.depth(), 0, "{input}");
    }
}

#[test]
fn lex_unterminated_contexts_end_cleanly() {
    for (input, state) in [
        ("'Sales", LexState::SingleQuotedString),
        ("[Amount", LexState::BracketedAttribute),
        ("\"text", LexState::DoubleQuotedString),
        ("/* open", LexState::MultilineComment),
    ] {
        let mut lexer = Lexer::new(input);
        lexer.by_ref().for_each(drop);
        assert_eq!(lexer.state(), state, "{input}");
        assert_coverage(input);
    }
}

// -----------------------------------------------------------
// Forced progress.
// -----------------------------------------------------------

#[test]
fn lex_unknown_character_is_an_error() {
    assert_tokens(
        "a ~ b",
        &[
            (TokenKind::Name, "a"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Error, "~"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Name, "b"),
        ],
    );
}

#[test]
fn lex_stray_backslash_in_string() {
    let input = "\"a\\\nb\"";
    let raw: Vec<_> = Lexer::new(input).map(|t| (t.kind, t.text)).collect();
    assert!(raw.contains(&(TokenKind::Error, "\\")));
    assert_coverage(input);
}

#[test]
fn lex_non_ascii_outside_quotes() {
    assert_coverage("Umsatz = [Menge] × 2 € ünd");
    let tokens = tokenize("×");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Error);
}

#[test]
fn lex_full_query() {
    let input = "\
DEFINE
    MEASURE 'Sales'[Margin %] =
        VAR Revenue = SUM ( Sales[Amount] )
        VAR Cost = SUMX ( Sales, Sales[Qty] * Sales[Unit Cost] )
        RETURN DIVIDE ( Revenue - Cost, Revenue )
EVALUATE
    SUMMARIZECOLUMNS ( 'Date'[Year], \"Margin\", [Margin %] ) // per year
ORDER BY 'Date'[Year] DESC
";
    assert_coverage(input);
    let tokens = tokenize(input);
    let functions: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::FunctionName)
        .map(|t| t.text)
        .collect();
    assert_eq!(functions, ["SUM", "SUMX", "DIVIDE", "SUMMARIZECOLUMNS"]);
    let variables: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::VariableName)
        .map(|t| t.text)
        .collect();
    assert_eq!(variables, ["Revenue", "Cost"]);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Error));
    assert!(
        tokens
            .iter()
            .any(|t| t.kind == TokenKind::CommentLine && t.text == "// per year")
    );
}
