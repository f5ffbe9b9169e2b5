// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser tests for commands, redirections, pipelines and statements.

use super::helpers::{literal, only_command, parse, words};
use crate::span::Span;

// =============================================================================
// Simple Commands
// =============================================================================

#[yare::parameterized(
    single       = { "ls", &["ls"] },
    args         = { "ls -la /tmp", &["ls", "-la", "/tmp"] },
    extra_spaces = { "  ls \t -la  ", &["ls", "-la"] },
    continuation = { "ls \\\n -la", &["ls", "-la"] },
    unicode      = { "echo héllo wörld", &["echo", "héllo", "wörld"] },
)]
fn simple_command_words(input: &str, expected: &[&str]) {
    let ast = parse(input);
    assert_eq!(words(only_command(&ast)), expected);
}

#[test]
fn command_name_is_first_argument() {
    let ast = parse("grep -r x");
    let cmd = only_command(&ast);
    assert_eq!(cmd.name().map(literal).as_deref(), Some("grep"));
}

#[test]
fn command_span_excludes_surrounding_whitespace() {
    let ast = parse("  echo hi  ");
    let cmd = only_command(&ast);
    assert_eq!(cmd.span, Span::new(2, 9));
    assert_eq!(cmd.arguments[0].span, Span::new(2, 6));
    assert_eq!(cmd.arguments[1].span, Span::new(7, 9));
    assert_eq!(ast.span, Span::new(2, 9));
}

// =============================================================================
// Redirections
// =============================================================================

#[test]
fn redirections_interleave_with_arguments() {
    let ast = parse("cmd < in > out arg2");
    let cmd = only_command(&ast);
    assert_eq!(cmd.input_file.as_ref().map(literal).as_deref(), Some("in"));
    assert_eq!(cmd.output_file.as_ref().map(literal).as_deref(), Some("out"));
    assert_eq!(cmd.append_file, None);
    assert_eq!(words(cmd), vec!["cmd", "arg2"]);
}

#[yare::parameterized(
    leading   = { "> out cmd arg" },
    trailing  = { "cmd arg > out" },
    middle    = { "cmd > out arg" },
    no_spaces = { "cmd>out arg" },
)]
fn redirection_position_does_not_matter(input: &str) {
    let ast = parse(input);
    let cmd = only_command(&ast);
    assert_eq!(cmd.output_file.as_ref().map(literal).as_deref(), Some("out"));
    assert_eq!(words(cmd), vec!["cmd", "arg"]);
}

#[test]
fn append_redirection() {
    let ast = parse("echo x >> log");
    let cmd = only_command(&ast);
    assert_eq!(cmd.append_file.as_ref().map(literal).as_deref(), Some("log"));
    assert_eq!(cmd.output_file, None);
}

#[test]
fn repeated_redirection_keeps_last_target() {
    let ast = parse("cmd > a > b");
    let cmd = only_command(&ast);
    assert_eq!(cmd.output_file.as_ref().map(literal).as_deref(), Some("b"));
}

#[test]
fn redirection_only_command() {
    let ast = parse("< in");
    let cmd = only_command(&ast);
    assert!(cmd.arguments.is_empty());
    assert!(cmd.input_file.is_some());
}

#[test]
fn redirection_target_may_be_quoted() {
    let ast = parse("cmd > \"my file\"");
    let cmd = only_command(&ast);
    let target = cmd.output_file.as_ref().unwrap();
    assert_eq!(literal(target), "my file");
    assert_eq!(target.span, Span::new(6, 15));
}

// =============================================================================
// Pipelines
// =============================================================================

#[test]
fn pipeline_keeps_source_order() {
    let ast = parse("a | b | c");
    assert_eq!(ast.statements.len(), 1);
    let pipeline = &ast.statements[0].pipeline;
    assert_eq!(pipeline.len(), 3);
    let names: Vec<_> = pipeline
        .commands
        .iter()
        .map(|c| literal(&c.arguments[0]))
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(pipeline.span, Span::new(0, 9));
}

#[test]
fn pipeline_without_spaces() {
    let ast = parse("cat f|wc -l");
    let pipeline = &ast.statements[0].pipeline;
    assert_eq!(pipeline.len(), 2);
    assert_eq!(words(&pipeline.commands[1]), vec!["wc", "-l"]);
}

#[test]
fn pipeline_stages_carry_their_redirections() {
    let ast = parse("sort < in | uniq > out");
    let pipeline = &ast.statements[0].pipeline;
    assert!(pipeline.commands[0].input_file.is_some());
    assert!(pipeline.commands[1].output_file.is_some());
}

// =============================================================================
// Statements
// =============================================================================

#[yare::parameterized(
    background    = { "sleep 1 &", true },
    foreground    = { "sleep 1", false },
    no_space      = { "sleep 1&", true },
    trailing_ws   = { "sleep 1 &  ", true },
)]
fn background_flag(input: &str, expected: bool) {
    let ast = parse(input);
    assert_eq!(ast.statements.len(), 1);
    assert_eq!(ast.statements[0].background, expected);
}

#[test]
fn background_applies_to_whole_pipeline() {
    let ast = parse("a | b &");
    let statement = &ast.statements[0];
    assert!(statement.background);
    assert_eq!(statement.pipeline.len(), 2);
    assert_eq!(statement.span, Span::new(0, 7));
    assert_eq!(statement.pipeline.span, Span::new(0, 5));
}

#[yare::parameterized(
    semicolons      = { "a; b; c", 3 },
    newlines        = { "a\nb\nc", 3 },
    mixed           = { "a;\nb", 2 },
    trailing        = { "a;", 1 },
    background_semi = { "a &; b", 2 },
    empty           = { "", 0 },
    only_spaces     = { "   ", 0 },
    only_separators = { ";;\n;", 0 },
    skips_empty     = { "a;;b", 2 },
)]
fn statement_count(input: &str, expected: usize) {
    assert_eq!(parse(input).statements.len(), expected);
}

#[test]
fn statements_keep_source_order() {
    let ast = parse("first; second\nthird");
    let names: Vec<_> = ast
        .statements
        .iter()
        .map(|s| literal(&s.pipeline.commands[0].arguments[0]))
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    assert_eq!(ast.span, Span::new(0, 19));
}

#[test]
fn empty_input_has_empty_span() {
    let ast = parse("");
    assert!(ast.is_empty());
    assert_eq!(ast.span, Span::empty(0));
}
