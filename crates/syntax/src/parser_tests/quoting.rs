// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser tests for quoting modes and escape handling.
//!
//! Three escape tables apply depending on where text appears:
//!
//! - unquoted: `\<newline>` is removed, `\\` is `\`, any other `\` is dropped
//! - `'...'`: `\'` is `'`, `\\` is `\`
//! - `"..."`: `\"`, `\$`, `\\` unescape and `\<newline>` is removed

use super::helpers::{argument_parts, lit, literal, only_command, param, parse, words};

#[yare::parameterized(
    single_quotes        = { "echo 'a b'", "a b" },
    escaped_quote_joined = { "echo 'it'\\''s'", "it's" },
    escaped_in_single    = { "echo 'it\\'s'", "it's" },
    backslash_in_single  = { "echo 'a\\\\b'", "a\\b" },
    dollar_in_single     = { "echo '$HOME'", "$HOME" },
    double_quotes        = { "echo \"a b\"", "a b" },
    double_escapes       = { "echo \"a\\$b\\\"c\"", "a$b\"c" },
    double_backslash     = { "echo \"a\\\\b\"", "a\\b" },
    double_other_escape  = { "echo \"a\\nb\"", "a\\nb" },
    double_continuation  = { "echo \"a\\\nb\"", "ab" },
    single_in_double     = { "echo \"x'y'z\"", "x'y'z" },
    operators_in_double  = { "echo \"a * ? [x] && || & b\"", "a * ? [x] && || & b" },
    unquoted_space       = { "echo a\\ b", "a b" },
    unquoted_backslash   = { "echo a\\\\b", "a\\b" },
    unquoted_escape      = { "echo \\$x", "$x" },
    unquoted_continued   = { "echo ab\\\ncd", "abcd" },
    mixed_adjacent       = { "echo \"a\"b'c'", "abc" },
    doubled_quotes       = { "echo \"a\"\"\"", "a" },
    assignment_in_quotes = { "echo \"A=1\"", "A=1" },
)]
fn quoted_argument(input: &str, expected: &str) {
    let ast = parse(input);
    let cmd = only_command(&ast);
    assert_eq!(cmd.arguments.len(), 2, "{cmd:?}");
    assert_eq!(literal(&cmd.arguments[1]), expected);
}

#[test]
fn adjacent_single_quotes_concatenate() {
    // Two quoted strings back to back form one argument; no quote survives
    // between them.
    let ast = parse("'it''s'");
    let cmd = only_command(&ast);
    assert_eq!(words(cmd), vec!["its"]);
}

#[test]
fn adjacent_text_tokens_merge_into_one_literal() {
    assert_eq!(argument_parts("echo a'b'c", 1), vec![lit("abc")]);
}

#[test]
fn quote_boundary_splits_literals() {
    assert_eq!(
        argument_parts("echo a\"b\"c", 1),
        vec![lit("a"), lit("b"), lit("c")]
    );
}

#[test]
fn parameters_expand_inside_double_quotes() {
    assert_eq!(
        argument_parts("echo \"$HOME/x\"", 1),
        vec![param("HOME"), lit("/x")]
    );
}

#[test]
fn parameters_are_text_inside_single_quotes() {
    assert_eq!(argument_parts("echo '$HOME'", 1), vec![lit("$HOME")]);
}

#[test]
fn globs_are_text_inside_double_quotes() {
    assert_eq!(argument_parts("echo \"*.rs\"", 1), vec![lit("*.rs")]);
}

#[test]
fn empty_double_quotes_yield_no_argument() {
    let ast = parse("echo \"\"");
    assert_eq!(words(only_command(&ast)), vec!["echo"]);
}

#[test]
fn quoted_pipe_is_not_a_pipeline() {
    let ast = parse("echo 'a | b'");
    assert_eq!(ast.statements[0].pipeline.len(), 1);
    assert_eq!(words(only_command(&ast)), vec!["echo", "a | b"]);
}

#[test]
fn whitespace_inside_quotes_does_not_split() {
    let ast = parse("printf \"%s  %s\" 'a\tb'");
    assert_eq!(
        words(only_command(&ast)),
        vec!["printf", "%s  %s", "a\tb"]
    );
}
