// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for parser tests.

use crate::ast::{Argument, ArgumentPart, Command, StatementList};
use crate::parse_error::ParseError;
use crate::parser::Parser;

pub(super) fn parse(input: &str) -> StatementList {
    match Parser::parse(input) {
        Ok(ast) => ast,
        Err(e) => panic!("failed to parse {input:?}: {}", e.report()),
    }
}

pub(super) fn parse_err(input: &str) -> ParseError {
    match Parser::parse(input) {
        Ok(ast) => panic!("expected {input:?} to fail, got {ast:?}"),
        Err(e) => e,
    }
}

/// The single command of a single-statement input.
pub(super) fn only_command(ast: &StatementList) -> &Command {
    assert_eq!(ast.statements.len(), 1, "expected one statement: {ast:?}");
    let pipeline = &ast.statements[0].pipeline;
    assert_eq!(pipeline.len(), 1, "expected one command: {pipeline:?}");
    &pipeline.commands[0]
}

/// Literal text of every argument; panics on a non-literal argument.
pub(super) fn words(command: &Command) -> Vec<String> {
    command.arguments.iter().map(literal).collect()
}

pub(super) fn literal(argument: &Argument) -> String {
    match argument.literal_text() {
        Some(text) => text,
        None => panic!("argument is not literal: {argument:?}"),
    }
}

/// Parts of the `index`th argument of the only command of `input`.
pub(super) fn argument_parts(input: &str, index: usize) -> Vec<ArgumentPart> {
    let ast = parse(input);
    only_command(&ast).arguments[index].parts.clone()
}

pub(super) fn lit(text: &str) -> ArgumentPart {
    ArgumentPart::Literal(text.to_string())
}

pub(super) fn param(name: &str) -> ArgumentPart {
    ArgumentPart::Parameter(name.to_string())
}
