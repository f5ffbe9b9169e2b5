// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The token name table and scanner/parser agreement.

use super::parse;
use ush_syntax::{Lexer, TokenKind};

#[test]
fn names_are_unique_and_round_trip() {
    let mut seen = std::collections::HashSet::new();
    for kind in TokenKind::ALL {
        assert!(seen.insert(kind.name()), "duplicate name {}", kind.name());
        assert_eq!(TokenKind::from_name(kind.name()), Some(kind));
        assert_eq!(kind.to_string(), kind.name());
    }
    assert_eq!(TokenKind::from_name("no-such-kind"), None);
}

#[test]
fn table_order_is_scanner_precedence() {
    assert_eq!(TokenKind::ALL.first(), Some(&TokenKind::Stop));
    assert_eq!(TokenKind::ALL.last(), Some(&TokenKind::Raw));
    let position = |kind| TokenKind::ALL.iter().position(|k| *k == kind).unwrap();
    assert!(position(TokenKind::StartArithmetic) < position(TokenKind::StartSubstitution));
    assert!(position(TokenKind::AppendRedirect) < position(TokenKind::WriteRedirect));
    assert!(position(TokenKind::AssignmentLhs) < position(TokenKind::Raw));
}

#[test]
fn tokenize_lists_every_token() {
    let input = "A=1 echo \"$x\" | wc>out";
    let kinds: Vec<_> = Lexer::tokenize(input)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::AssignmentLhs,
            TokenKind::Raw,
            TokenKind::Whitespace,
            TokenKind::Raw,
            TokenKind::Whitespace,
            TokenKind::DoubleQuote,
            TokenKind::UnbracedParameter,
            TokenKind::DoubleQuote,
            TokenKind::Whitespace,
            TokenKind::Pipe,
            TokenKind::Whitespace,
            TokenKind::Raw,
            TokenKind::WriteRedirect,
            TokenKind::Raw,
            TokenKind::Stop,
        ]
    );
}

#[test]
fn parsed_arguments_start_on_scanned_tokens() {
    let input = "cp -r 'my dir' \"$HOME\"/backup > log";
    let ast = parse(input);
    let starts: Vec<_> = Lexer::tokenize(input)
        .unwrap()
        .iter()
        .map(|t| t.start)
        .collect();
    let cmd = &ast.statements[0].pipeline.commands[0];
    for argument in cmd.arguments.iter().chain(cmd.output_file.iter()) {
        assert!(starts.contains(&argument.span.start), "{argument:?}");
    }
}
