// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

/// Scan `input` into `(kind, text)` pairs, dropping the end marker.
fn lex(input: &str) -> Vec<(TokenKind, &str)> {
    let tokens = Lexer::tokenize(input).unwrap();
    tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Stop)
        .map(|t| (t.kind, t.span().slice(input)))
        .collect()
}

fn single(input: &str) -> TokenKind {
    let tokens = lex(input);
    assert_eq!(tokens.len(), 1, "expected one token for {input:?}, got {tokens:?}");
    assert_eq!(tokens[0].1, input);
    tokens[0].0
}

// =============================================================================
// Single Tokens
// =============================================================================

#[yare::parameterized(
    spaces        = { "  \t ", TokenKind::Whitespace },
    continuation  = { " \\\n ", TokenKind::Whitespace },
    vertical_tab  = { "\x0b\r", TokenKind::Whitespace },
    param_name    = { "$HOME", TokenKind::UnbracedParameter },
    param_status  = { "$?", TokenKind::UnbracedParameter },
    param_digit   = { "$1", TokenKind::UnbracedParameter },
    param_under   = { "$_x1", TokenKind::UnbracedParameter },
    arithmetic    = { "$((", TokenKind::StartArithmetic },
    substitution  = { "$(", TokenKind::StartSubstitution },
    expansion     = { "${", TokenKind::StartExpansion },
    semicolon     = { ";", TokenKind::StatementEnd },
    newline       = { "\n", TokenKind::StatementEnd },
    and           = { "&&", TokenKind::And },
    or            = { "||", TokenKind::Or },
    pipe          = { "|", TokenKind::Pipe },
    background    = { "&", TokenKind::Background },
    append        = { ">>", TokenKind::AppendRedirect },
    write         = { ">", TokenKind::WriteRedirect },
    read          = { "<", TokenKind::ReadRedirect },
    lbrace        = { "{", TokenKind::LeftBrace },
    rbrace        = { "}", TokenKind::RightBrace },
    lparen        = { "(", TokenKind::LeftParen },
    rparen        = { ")", TokenKind::RightParen },
    dquote        = { "\"", TokenKind::DoubleQuote },
    tick          = { "`", TokenKind::Backtick },
    star          = { "*", TokenKind::GlobStar },
    one           = { "?", TokenKind::GlobOne },
    charset       = { "[a-z]", TokenKind::GlobCharset },
    charset_empty = { "[]", TokenKind::GlobCharset },
    qstring       = { "'a b'", TokenKind::SingleQuoted },
    qstring_esc   = { "'it\\'s'", TokenKind::SingleQuoted },
    assignment    = { "FOO=", TokenKind::AssignmentLhs },
    assign_digits = { "1x=", TokenKind::AssignmentLhs },
    raw           = { "hello", TokenKind::Raw },
    raw_equals    = { "=x", TokenKind::Raw },
    raw_escaped   = { "a\\ b", TokenKind::Raw },
    raw_unicode   = { "héllo", TokenKind::Raw },
)]
fn scans_single_token(input: &str, expected: TokenKind) {
    assert_eq!(single(input), expected);
}

#[test]
fn empty_input_is_just_stop() {
    let tokens = Lexer::tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Stop);
    assert_eq!(tokens[0].len, 0);
}

#[test]
fn stop_repeats_at_end() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Raw);
    assert_eq!(lexer.advance().unwrap().kind, TokenKind::Stop);
    let again = lexer.advance().unwrap();
    assert_eq!(again.kind, TokenKind::Stop);
    assert_eq!(again.start, 1);
}

// =============================================================================
// Precedence and Quirks
// =============================================================================

#[test]
fn multi_digit_parameter_takes_one_digit() {
    assert_eq!(
        lex("$12"),
        vec![(TokenKind::UnbracedParameter, "$1"), (TokenKind::Raw, "2")]
    );
}

#[test]
fn digit_parameter_then_text() {
    assert_eq!(
        lex("$1a"),
        vec![(TokenKind::UnbracedParameter, "$1"), (TokenKind::Raw, "a")]
    );
}

#[test]
fn arithmetic_wins_over_substitution() {
    assert_eq!(lex("$((")[0].0, TokenKind::StartArithmetic);
    assert_eq!(lex("$( (")[0].0, TokenKind::StartSubstitution);
}

#[test]
fn append_wins_over_write() {
    assert_eq!(
        lex(">>>"),
        vec![
            (TokenKind::AppendRedirect, ">>"),
            (TokenKind::WriteRedirect, ">")
        ]
    );
}

#[test]
fn and_wins_over_background() {
    assert_eq!(
        lex("&&&"),
        vec![(TokenKind::And, "&&"), (TokenKind::Background, "&")]
    );
}

#[test]
fn assignment_requires_equals() {
    assert_eq!(
        lex("FOO=bar"),
        vec![(TokenKind::AssignmentLhs, "FOO="), (TokenKind::Raw, "bar")]
    );
    assert_eq!(lex("FOO bar")[0], (TokenKind::Raw, "FOO"));
}

#[test]
fn raw_stops_at_delimiters() {
    assert_eq!(
        lex("a$b"),
        vec![(TokenKind::Raw, "a"), (TokenKind::UnbracedParameter, "$b")]
    );
    assert_eq!(
        lex("x*.rs"),
        vec![
            (TokenKind::Raw, "x"),
            (TokenKind::GlobStar, "*"),
            (TokenKind::Raw, ".rs")
        ]
    );
}

#[test]
fn backslash_keeps_delimiter_in_raw() {
    assert_eq!(lex("a\\;b"), vec![(TokenKind::Raw, "a\\;b")]);
    assert_eq!(lex("\\$x"), vec![(TokenKind::Raw, "\\$x")]);
}

#[test]
fn trailing_backslash_is_plain_text() {
    assert_eq!(lex("a\\"), vec![(TokenKind::Raw, "a\\")]);
}

#[test]
fn whitespace_swallows_line_continuations() {
    assert_eq!(
        lex("a \\\n\tb"),
        vec![
            (TokenKind::Raw, "a"),
            (TokenKind::Whitespace, " \\\n\t"),
            (TokenKind::Raw, "b")
        ]
    );
}

#[test]
fn qstring_backslash_before_end_does_not_escape_end() {
    let err = Lexer::tokenize("'abc\\").unwrap_err();
    assert!(matches!(err, LexerError::UnterminatedSingleQuote { .. }));
}

#[test]
fn text_reads_token_source() {
    let mut lexer = Lexer::new("echo 'x y'");
    lexer.advance().unwrap();
    lexer.advance().unwrap();
    let token = lexer.advance().unwrap();
    assert_eq!(lexer.text(token), "'x y'");
    assert_eq!(lexer.input(), "echo 'x y'");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unterminated_single_quote() {
    let err = Lexer::tokenize("echo 'abc").unwrap_err();
    match err {
        LexerError::UnterminatedSingleQuote { span, origin } => {
            assert_eq!(span, Span::new(5, 9));
            assert_eq!(origin.function, "match_single_quoted");
        }
        other => panic!("expected unterminated quote, got {other:?}"),
    }
}

#[test]
fn unclosed_charset() {
    let err = Lexer::tokenize("echo [abc").unwrap_err();
    assert!(matches!(
        err,
        LexerError::UnclosedCharset { span, .. } if span.start == 5
    ));
}

#[yare::parameterized(
    lone_dollar  = { "echo $", 5 },
    dollar_space = { "$ x", 0 },
    close_square = { "a]", 1 },
)]
fn no_matcher_applies(input: &str, position: usize) {
    let err = Lexer::tokenize(input).unwrap_err();
    assert!(
        matches!(err, LexerError::NoMatch { position: p, .. } if p == position),
        "got {err:?}"
    );
}

#[test]
fn failed_advance_keeps_cursor() {
    let mut lexer = Lexer::new("a $");
    lexer.advance().unwrap();
    let before = lexer.advance().unwrap();
    assert!(lexer.advance().is_err());
    assert_eq!(lexer.token(), before);
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #[test]
    fn tokens_tile_the_input(input in "[ -~\t\n]{0,80}") {
        if let Ok(tokens) = Lexer::tokenize(&input) {
            let mut expected_start = 0;
            for token in &tokens {
                prop_assert_eq!(token.start, expected_start);
                expected_start = token.end();
            }
            let last = tokens.last().unwrap();
            prop_assert_eq!(last.kind, TokenKind::Stop);
            prop_assert_eq!(last.start, input.len());
            prop_assert!(tokens[..tokens.len() - 1].iter().all(|t| t.len > 0));
        }
    }

    #[test]
    fn tokenize_never_panics(input in "\\PC{0,60}") {
        let _ = Lexer::tokenize(&input);
    }
}
