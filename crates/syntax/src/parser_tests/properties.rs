// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based parser tests.

use crate::ast::{Argument, AstVisitor, StatementList};
use crate::lexer::Lexer;
use crate::parser::{Parser, ParserConfig};
use crate::token::TokenKind;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Fragments that combine into inputs which often, but not always, parse.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "echo", "ls", "-l", " ", "  ", "\t", "a", "b1", "$x", "${y}", "$?", "'q r'", "\"s $t\"",
        "*", "?", "[ab]", "|", " | ", ";", "\n", " & ", ">", "> f", ">>", "<", "A=", "B=1 ",
        "$(", ")", "`", "\\ ", "\"", "'", "}", "$((",
    ])
}

fn input() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..16).prop_map(|parts| parts.concat())
}

struct ArgumentSpans(Vec<Argument>);

impl AstVisitor for ArgumentSpans {
    fn visit_argument(&mut self, argument: &Argument) {
        self.0.push(argument.clone());
        self.walk_argument(argument);
    }
}

fn argument_spans(ast: &StatementList) -> Vec<Argument> {
    let mut collector = ArgumentSpans(Vec::new());
    collector.visit_statement_list(ast);
    collector.0
}

#[test]
fn consumed_tokens_cover_full_line() {
    let input = "A=1 echo \"$x\" $(ls | wc) > f &";
    let mut parser = Parser::new(input, ParserConfig::default()).unwrap();
    parser.parse_all().unwrap();
    let mut tokens = Lexer::tokenize(input).unwrap();
    tokens.pop();
    assert_eq!(parser.consumed, tokens);
    let end = parser.consumed.last().map(|t| t.end());
    assert_eq!(end, Some(input.len()));
}

proptest! {
    #[test]
    fn parse_never_panics(input in "\\PC{0,60}") {
        let _ = Parser::parse(&input);
    }

    #[test]
    fn parse_never_panics_on_shell_fragments(input in input()) {
        let _ = Parser::parse(&input);
    }

    #[test]
    fn parse_is_deterministic(input in input()) {
        prop_assert_eq!(Parser::parse(&input), Parser::parse(&input));
    }

    /// Every argument the parser builds starts and ends on a boundary the
    /// scanner alone produces for the same input.
    #[test]
    fn argument_spans_align_with_tokens(input in input()) {
        if let Ok(ast) = Parser::parse(&input) {
            let tokens = Lexer::tokenize(&input).unwrap();
            let boundaries: BTreeSet<usize> = tokens
                .iter()
                .flat_map(|t| [t.start, t.end()])
                .collect();
            for argument in argument_spans(&ast) {
                prop_assert!(!argument.parts.is_empty());
                prop_assert!(boundaries.contains(&argument.span.start), "{:?}", argument);
                prop_assert!(boundaries.contains(&argument.span.end), "{:?}", argument);
                prop_assert!(argument.span.start < argument.span.end);
            }
        }
    }

    /// The parser consumes exactly the tokens the scanner produces on its
    /// own, in order, with the same offsets and lengths.
    #[test]
    fn consumed_tokens_match_scanner(input in input()) {
        if let Ok(mut parser) = Parser::new(&input, ParserConfig::default()) {
            if parser.parse_all().is_ok() {
                let mut tokens = Lexer::tokenize(&input).unwrap();
                prop_assert_eq!(tokens.pop().map(|t| t.kind), Some(TokenKind::Stop));
                prop_assert_eq!(&parser.consumed, &tokens);
            }
        }
    }

    /// Parsed inputs always scan cleanly, and scanning failures always fail
    /// the parse.
    #[test]
    fn scan_failure_implies_parse_failure(input in input()) {
        if Lexer::tokenize(&input).is_err() {
            prop_assert!(Parser::parse(&input).is_err());
        }
    }

    #[test]
    fn literal_parts_are_never_empty(input in input()) {
        if let Ok(ast) = Parser::parse(&input) {
            for argument in argument_spans(&ast) {
                for part in &argument.parts {
                    if let Some(text) = part.as_literal() {
                        prop_assert!(!text.is_empty());
                    }
                }
            }
        }
    }
}
