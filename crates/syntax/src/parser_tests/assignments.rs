// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser tests for `NAME=value` assignments.
//!
//! Assignments are only recognized before the first argument:
//!
//! - `VAR=value cmd` → `assignments: [VAR=value], arguments: [cmd]`
//! - `cmd VAR=value` → `assignments: [], arguments: [cmd, VAR=value]`
//! - `VAR=value` (alone) → a command with only an assignment

use super::helpers::{lit, only_command, param, parse, words};
use crate::span::Span;

// =============================================================================
// Standalone Assignment
// =============================================================================

#[test]
fn standalone_assignment() {
    let ast = parse("VAR=value");
    let cmd = only_command(&ast);
    assert_eq!(cmd.assignments.len(), 1);
    assert_eq!(cmd.assignments[0].name, "VAR");
    let value = cmd.assignments[0].value.as_ref().unwrap();
    assert_eq!(value.parts, vec![lit("value")]);
    assert!(cmd.arguments.is_empty());
}

#[test]
fn standalone_empty_assignment() {
    // Nothing after `=` means no value at all, not an empty one.
    let ast = parse("VAR=");
    let cmd = only_command(&ast);
    assert_eq!(cmd.assignments[0].name, "VAR");
    assert_eq!(cmd.assignments[0].value, None);
    assert!(cmd.arguments.is_empty());
}

// =============================================================================
// Assignment with Command
// =============================================================================

#[test]
fn assignment_with_command() {
    let ast = parse("VAR=value cmd");
    let cmd = only_command(&ast);
    assert_eq!(cmd.assignments.len(), 1);
    assert_eq!(cmd.assignments[0].name, "VAR");
    assert_eq!(words(cmd), vec!["cmd"]);
}

#[test]
fn multiple_assignments_with_command() {
    let ast = parse("A=1 B=2 C=3 cmd");
    let cmd = only_command(&ast);
    let names: Vec<_> = cmd.assignments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(words(cmd), vec!["cmd"]);
}

#[test]
fn empty_assignment_before_command() {
    let ast = parse("VAR= cmd arg");
    let cmd = only_command(&ast);
    assert_eq!(cmd.assignments[0].value, None);
    assert_eq!(words(cmd), vec!["cmd", "arg"]);
}

#[test]
fn assignment_after_command_is_argument() {
    let ast = parse("cmd VAR=value");
    let cmd = only_command(&ast);
    assert!(cmd.assignments.is_empty());
    assert_eq!(cmd.arguments[1].parts, vec![lit("VAR=value")]);
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn quoted_value_keeps_whitespace() {
    let ast = parse("FOO=\"a b\" cmd");
    let cmd = only_command(&ast);
    let value = cmd.assignments[0].value.as_ref().unwrap();
    assert_eq!(value.parts, vec![lit("a b")]);
    assert_eq!(words(cmd), vec!["cmd"]);
}

#[test]
fn value_with_parameter() {
    let ast = parse("PATH=$HOME/bin:$PATH");
    let cmd = only_command(&ast);
    let value = cmd.assignments[0].value.as_ref().unwrap();
    assert_eq!(
        value.parts,
        vec![param("HOME"), lit("/bin:"), param("PATH")]
    );
}

#[test]
fn equals_in_value_is_text() {
    let ast = parse("X=1=2");
    let cmd = only_command(&ast);
    assert_eq!(cmd.assignments[0].name, "X");
    let value = cmd.assignments[0].value.as_ref().unwrap();
    assert_eq!(value.parts, vec![lit("1=2")]);
}

#[test]
fn digit_names_are_accepted() {
    let ast = parse("1x=y");
    assert_eq!(only_command(&ast).assignments[0].name, "1x");
}

#[test]
fn assignment_span_covers_name_and_value() {
    let ast = parse("FOO=bar cmd");
    let cmd = only_command(&ast);
    assert_eq!(cmd.assignments[0].span, Span::new(0, 7));
    assert_eq!(cmd.assignments[0].value.as_ref().unwrap().span, Span::new(4, 7));
    assert_eq!(cmd.span, Span::new(0, 11));
}
