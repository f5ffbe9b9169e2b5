// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser tests for parameters, substitutions and globs.

use super::helpers::{argument_parts, lit, only_command, param, parse, words};
use crate::ast::{ArgumentPart, Glob, StatementList};

fn substitution_body(part: &ArgumentPart) -> &StatementList {
    match part {
        ArgumentPart::Substitution(body) => body,
        other => panic!("expected substitution, got {other:?}"),
    }
}

// =============================================================================
// Parameters
// =============================================================================

#[yare::parameterized(
    name        = { "echo $HOME", "HOME" },
    status      = { "echo $?", "?" },
    digit       = { "echo $1", "1" },
    underscore  = { "echo $_a1", "_a1" },
    braced      = { "echo ${USER}", "USER" },
    braced_text = { "echo ${a b}", "a b" },
    braced_ops  = { "echo ${x|y}", "x|y" },
)]
fn parameter_name(input: &str, expected: &str) {
    assert_eq!(argument_parts(input, 1), vec![param(expected)]);
}

#[test]
fn digit_parameter_takes_one_digit() {
    assert_eq!(argument_parts("echo $1a", 1), vec![param("1"), lit("a")]);
    assert_eq!(argument_parts("echo $12", 1), vec![param("1"), lit("2")]);
}

#[test]
fn braced_parameter_between_text() {
    assert_eq!(
        argument_parts("echo pre${X}post", 1),
        vec![lit("pre"), param("X"), lit("post")]
    );
}

#[test]
fn adjacent_parameters_form_one_argument() {
    let ast = parse("echo $a$b");
    let cmd = only_command(&ast);
    assert_eq!(cmd.arguments.len(), 2);
    assert_eq!(cmd.arguments[1].parts, vec![param("a"), param("b")]);
}

// =============================================================================
// Substitutions
// =============================================================================

#[yare::parameterized(
    dollar   = { "echo $(date)" },
    backtick = { "echo `date`" },
    padded   = { "echo $( date )" },
)]
fn substitution_holds_statement_list(input: &str) {
    let parts = argument_parts(input, 1);
    assert_eq!(parts.len(), 1);
    let body = substitution_body(&parts[0]);
    assert_eq!(words(only_command(body)), vec!["date"]);
}

#[test]
fn substitution_with_several_statements() {
    let parts = argument_parts("echo $(cd /tmp; ls | wc -l)", 1);
    let body = substitution_body(&parts[0]);
    assert_eq!(body.statements.len(), 2);
    assert_eq!(body.statements[1].pipeline.len(), 2);
}

#[test]
fn nested_dollar_substitutions() {
    let parts = argument_parts("echo $(echo $(date))", 1);
    let outer = substitution_body(&parts[0]);
    let inner_parts = &only_command(outer).arguments[1].parts;
    let inner = substitution_body(&inner_parts[0]);
    assert_eq!(words(only_command(inner)), vec!["date"]);
}

#[test]
fn dollar_substitution_inside_backticks() {
    let parts = argument_parts("echo `echo $(date)`", 1);
    let outer = substitution_body(&parts[0]);
    assert!(matches!(
        only_command(outer).arguments[1].parts[0],
        ArgumentPart::Substitution(_)
    ));
}

#[test]
fn backticks_do_not_nest() {
    // The second backtick closes the first substitution; the last pair is a
    // second, empty substitution.
    let parts = argument_parts("echo `a `b``", 1);
    assert_eq!(parts.len(), 3);
    assert_eq!(words(only_command(substitution_body(&parts[0]))), vec!["a"]);
    assert_eq!(parts[1], lit("b"));
    assert!(substitution_body(&parts[2]).is_empty());
}

#[test]
fn substitution_inside_double_quotes() {
    let parts = argument_parts("echo \"x$(date)y\"", 1);
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], lit("x"));
    assert!(matches!(parts[1], ArgumentPart::Substitution(_)));
    assert_eq!(parts[2], lit("y"));
}

#[test]
fn empty_substitution_has_no_statements() {
    let parts = argument_parts("echo $()", 1);
    assert!(substitution_body(&parts[0]).is_empty());
}

#[test]
fn substitution_as_command_name() {
    let ast = parse("$(which ls) -l");
    let cmd = only_command(&ast);
    assert!(matches!(cmd.arguments[0].parts[0], ArgumentPart::Substitution(_)));
    assert_eq!(cmd.arguments.len(), 2);
}

// =============================================================================
// Globs
// =============================================================================

#[test]
fn star_glob() {
    assert_eq!(
        argument_parts("ls *.rs", 1),
        vec![ArgumentPart::Glob(Glob::Star), lit(".rs")]
    );
}

#[test]
fn one_glob() {
    assert_eq!(
        argument_parts("ls a?c", 1),
        vec![lit("a"), ArgumentPart::Glob(Glob::One), lit("c")]
    );
}

#[yare::parameterized(
    letters = { "ls [abc]", "abc" },
    range   = { "ls [a-z]", "a-z" },
    empty   = { "ls []", "" },
    negated = { "ls [!x]", "!x" },
)]
fn charset_glob(input: &str, expected: &str) {
    assert_eq!(
        argument_parts(input, 1),
        vec![ArgumentPart::Glob(Glob::Charset(expected.to_string()))]
    );
}

#[test]
fn globs_combine_with_text() {
    assert_eq!(
        argument_parts("ls src/*/[ab]?.rs", 1),
        vec![
            lit("src/"),
            ArgumentPart::Glob(Glob::Star),
            lit("/"),
            ArgumentPart::Glob(Glob::Charset("ab".to_string())),
            ArgumentPart::Glob(Glob::One),
            lit(".rs"),
        ]
    );
}
