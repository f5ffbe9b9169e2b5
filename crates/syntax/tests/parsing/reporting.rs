// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error classification and user-facing reports.

use super::parse_err;
use ush_syntax::{ErrorKind, LexerError, ParseError, Span, TokenKind};

#[yare::parameterized(
    unterminated_quote = { "echo 'abc" },
    unclosed_charset   = { "echo [abc" },
    empty_parameter    = { "echo ${}" },
    unclosed_parameter = { "echo ${x" },
    leading_pipe       = { "| a" },
    trailing_pipe      = { "a |" },
    missing_paren      = { "echo $(a" },
    missing_tick       = { "echo `a" },
    missing_quote      = { "echo \"a" },
    stray_paren        = { "a )" },
    missing_target     = { "a >" },
)]
fn bad_input_is_a_syntax_error(input: &str) {
    let err = parse_err(input);
    assert_eq!(err.kind(), ErrorKind::Syntax, "{err:?}");
    let span = err.span().expect("syntax errors carry a span");
    assert!(span.end <= input.len(), "{span:?} outside {input:?}");
    assert!(!err.origin().function.is_empty());
    assert!(err.origin().line > 0);
}

#[test]
fn report_format() {
    let err = parse_err("echo $(ls");
    let origin = err.origin();
    assert_eq!(
        err.report(),
        format!(
            "Parse error! In {} at {}:{}. expected token of type right-paren, got end-of-input",
            origin.function, origin.file, origin.line
        )
    );
}

#[test]
fn lex_report_format() {
    let err = parse_err("ls [a-");
    assert!(matches!(err, ParseError::Lexer(LexerError::UnclosedCharset { .. })));
    let report = err.report();
    assert!(report.starts_with("Lex error! In match_glob_charset at "), "{report}");
    assert!(report.ends_with("unclosed charset starting at position 3"), "{report}");
}

#[test]
fn lexer_error_converts_into_parse_error() {
    let lex = ush_syntax::Lexer::tokenize("'open").unwrap_err();
    let err: ParseError = lex.clone().into();
    assert_eq!(err, ParseError::Lexer(lex.clone()));
    assert_eq!(err.to_string(), lex.to_string());
    assert_eq!(err.span(), Some(Span::new(0, 5)));
}

#[test]
fn diagnostic_renders_caret_under_token() {
    let input = "echo ok;\n  | wc";
    let err = parse_err(input);
    assert!(matches!(err, ParseError::UnexpectedPipe { .. }));
    let diagnostic = err.diagnostic(input).unwrap();
    assert_eq!(
        diagnostic,
        "error: unexpected pipe\n  --> line 2, column 3\n   |\n  2 |   | wc\n   |   ^"
    );
}

#[test]
fn unexpected_token_names_both_kinds() {
    let err = parse_err("echo \"a ; b\"");
    match &err {
        ParseError::UnexpectedToken {
            expected, found, ..
        } => {
            assert_eq!(*expected, TokenKind::DoubleQuote);
            assert_eq!(*found, TokenKind::StatementEnd);
        }
        other => panic!("expected unexpected token, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "expected token of type double-quote, got statement-end"
    );
}
