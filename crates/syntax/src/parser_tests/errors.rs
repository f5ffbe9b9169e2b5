// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error tests: every failure aborts the whole parse.

use super::helpers::parse_err;
use crate::error::{ErrorKind, LexerError};
use crate::parse_error::ParseError;
use crate::parser::{Parser, ParserConfig};
use crate::span::Span;
use crate::token::TokenKind;

// =============================================================================
// Pipelines and Redirections
// =============================================================================

#[test]
fn leading_pipe() {
    let err = parse_err("| a");
    assert!(
        matches!(err, ParseError::UnexpectedPipe { span, .. } if span == Span::new(0, 1)),
        "{err:?}"
    );
}

#[test]
fn leading_pipe_after_separator() {
    let err = parse_err("a; | b");
    assert!(matches!(err, ParseError::UnexpectedPipe { span, .. } if span.start == 3));
}

#[test]
fn double_pipe_is_logical_or() {
    // `||` scans as one token, which no production accepts.
    let err = parse_err("a || b");
    assert!(matches!(
        err,
        ParseError::TrailingToken { found: TokenKind::Or, .. }
    ));
}

#[test]
fn pipe_at_end_of_input() {
    let err = parse_err("a |");
    assert!(matches!(err, ParseError::UnexpectedEof { span, .. } if span == Span::empty(3)));
}

#[test]
fn pipe_followed_by_pipe() {
    let err = parse_err("a | | b");
    assert!(matches!(err, ParseError::UnexpectedPipe { span, .. } if span.start == 4));
}

#[yare::parameterized(
    separator  = { "a | ; b", TokenKind::StatementEnd },
    newline    = { "a |\nb", TokenKind::StatementEnd },
    background = { "a | &", TokenKind::Background },
    close      = { "echo $(a |)", TokenKind::RightParen },
)]
fn pipe_without_command(input: &str, found: TokenKind) {
    let err = parse_err(input);
    assert!(
        matches!(err, ParseError::MissingCommand { found: f, .. } if f == found),
        "{err:?}"
    );
}

#[yare::parameterized(
    write_at_end   = { "cmd >", TokenKind::WriteRedirect, TokenKind::Stop },
    append_at_end  = { "cmd >> ", TokenKind::AppendRedirect, TokenKind::Stop },
    read_then_semi = { "cmd < ; x", TokenKind::ReadRedirect, TokenKind::StatementEnd },
    write_then_op  = { "cmd > | x", TokenKind::WriteRedirect, TokenKind::Pipe },
)]
fn redirect_without_target(input: &str, operator: TokenKind, found: TokenKind) {
    let err = parse_err(input);
    assert!(
        matches!(
            err,
            ParseError::MissingRedirectTarget { operator: o, found: f, .. }
                if o == operator && f == found
        ),
        "{err:?}"
    );
}

// =============================================================================
// Expansions and Quotes
// =============================================================================

#[test]
fn empty_parameter_expansion() {
    let err = parse_err("echo ${}");
    match err {
        ParseError::BadParameter { span, origin } => {
            assert_eq!(span, Span::new(5, 8));
            assert_eq!(origin.function, "braced_parameter");
        }
        other => panic!("expected bad parameter, got {other:?}"),
    }
}

#[test]
fn unclosed_parameter_expansion() {
    let err = parse_err("echo ${abc");
    assert!(matches!(err, ParseError::UnclosedExpansion { span, .. } if span == Span::new(5, 10)));
}

#[yare::parameterized(
    dollar        = { "echo $(ls", TokenKind::RightParen, TokenKind::Stop },
    backtick      = { "echo `ls", TokenKind::Backtick, TokenKind::Stop },
    double_quote  = { "echo \"abc", TokenKind::DoubleQuote, TokenKind::Stop },
    quote_then_op = { "echo \"a | b\"", TokenKind::DoubleQuote, TokenKind::Pipe },
    wrong_closer  = { "echo `ls)", TokenKind::Backtick, TokenKind::RightParen },
)]
fn missing_closer(input: &str, expected: TokenKind, found: TokenKind) {
    let err = parse_err(input);
    match err {
        ParseError::UnexpectedToken {
            expected: e,
            found: f,
            origin,
            ..
        } => {
            assert_eq!((e, f), (expected, found));
            assert_eq!(origin.function, "expect");
        }
        other => panic!("expected unexpected-token error, got {other:?}"),
    }
}

#[test]
fn unterminated_single_quote() {
    let err = parse_err("echo 'abc");
    assert!(matches!(
        err,
        ParseError::Lexer(LexerError::UnterminatedSingleQuote { .. })
    ));
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn unterminated_charset() {
    let err = parse_err("echo [abc");
    assert!(matches!(
        err,
        ParseError::Lexer(LexerError::UnclosedCharset { .. })
    ));
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn apostrophe_inside_double_quotes_starts_single_quote() {
    // Quotes are scanned without context, so the `'` opens a single-quoted
    // string that never closes.
    let err = parse_err("echo \"don't\"");
    assert!(matches!(
        err,
        ParseError::Lexer(LexerError::UnterminatedSingleQuote { .. })
    ));
}

#[test]
fn lone_dollar_has_no_token() {
    let err = parse_err("echo $");
    assert!(matches!(
        err,
        ParseError::Lexer(LexerError::NoMatch { position: 5, .. })
    ));
}

// =============================================================================
// Trailing Tokens
// =============================================================================

#[yare::parameterized(
    close_paren  = { "echo )", TokenKind::RightParen, 5 },
    open_paren   = { "echo (x)", TokenKind::LeftParen, 5 },
    brace        = { "{ echo; }", TokenKind::LeftBrace, 0 },
    and          = { "a && b", TokenKind::And, 2 },
    after_bg     = { "a & b", TokenKind::Raw, 4 },
    arithmetic   = { "echo $((1 + 2))", TokenKind::StartArithmetic, 5 },
    lone_bg      = { "&", TokenKind::Background, 0 },
)]
fn trailing_token(input: &str, found: TokenKind, start: usize) {
    let err = parse_err(input);
    assert!(
        matches!(
            err,
            ParseError::TrailingToken { found: f, span, .. } if f == found && span.start == start
        ),
        "{err:?}"
    );
}

#[test]
fn stray_token_is_reported_by_name() {
    let err = parse_err("echo )");
    assert_eq!(err.to_string(), "unexpected token: right-paren");
}

// =============================================================================
// Nesting Limit
// =============================================================================

fn nested(depth: usize) -> String {
    format!("echo {}x{}", "$(echo ".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_within_limit() {
    let config = ParserConfig {
        max_substitution_depth: 3,
    };
    assert!(Parser::parse_with_config(&nested(3), &config).is_ok());
}

#[test]
fn nesting_past_limit() {
    let config = ParserConfig {
        max_substitution_depth: 3,
    };
    let err = Parser::parse_with_config(&nested(4), &config).unwrap_err();
    match err {
        ParseError::NestingTooDeep { limit, span, .. } => {
            assert_eq!(limit, 3);
            // The fourth `$(`.
            assert_eq!(span, Span::new(26, 28));
        }
        other => panic!("expected nesting error, got {other:?}"),
    }
}

#[test]
fn zero_limit_rejects_any_substitution() {
    let config = ParserConfig {
        max_substitution_depth: 0,
    };
    let err = Parser::parse_with_config("echo `date`", &config).unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { limit: 0, .. }));
}

#[test]
fn default_limit_fits_default_thread_stack() {
    // Same stack size spawned threads get unless RUST_MIN_STACK says otherwise.
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| {
            let limit = ParserConfig::default().max_substitution_depth;
            let ok = Parser::parse(&nested(limit)).is_ok();
            let err = Parser::parse(&nested(limit + 1)).unwrap_err();
            (ok, err)
        })
        .unwrap();
    let (ok, err) = handle.join().unwrap();
    assert!(ok);
    assert!(matches!(err, ParseError::NestingTooDeep { limit: 32, .. }));
}

// =============================================================================
// Propagation and Reporting
// =============================================================================

#[test]
fn nested_error_keeps_raise_site() {
    let err = parse_err("echo $(echo `echo ${}`)");
    assert!(matches!(err, ParseError::BadParameter { .. }));
    assert_eq!(err.origin().function, "braced_parameter");
    assert!(err.origin().file.ends_with("words.rs"));
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn report_names_function_and_message() {
    let err = parse_err("| a");
    let report = err.report();
    assert!(report.starts_with("Parse error! In pipeline_stage at "), "{report}");
    assert!(report.ends_with(". unexpected pipe"), "{report}");
}

#[test]
fn lexer_errors_report_as_lex_errors() {
    let report = parse_err("echo 'abc").report();
    assert!(report.starts_with("Lex error! In match_single_quoted at "), "{report}");
}

#[test]
fn diagnostic_points_at_offending_token() {
    let input = "echo ok\necho )";
    let err = parse_err(input);
    let diagnostic = err.diagnostic(input).unwrap();
    assert!(diagnostic.contains("line 2, column 6"), "{diagnostic}");
    assert!(diagnostic.contains("echo )"), "{diagnostic}");
}

// =============================================================================
// Corruption
// =============================================================================

#[test]
fn token_shorter_than_delimiters_is_corruption() {
    let mut parser = Parser::new("ab", ParserConfig::default()).unwrap();
    let err = parser
        .expect_into_string(TokenKind::Raw, 2, 1, &[])
        .unwrap_err();
    assert!(matches!(err, ParseError::Corruption { .. }));
    assert_eq!(err.kind(), ErrorKind::Corruption);
    assert_eq!(err.span(), None);
    assert_eq!(err.origin().function, "expect_into_string");
    assert!(err.report().starts_with("Parse error! In expect_into_string at "));
}
