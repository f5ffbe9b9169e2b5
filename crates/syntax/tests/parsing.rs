// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Integration tests for the public parsing surface.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use ush_syntax::{parse_input, Command, ParseError, StatementList};

#[path = "parsing/logging.rs"]
mod logging;
#[path = "parsing/reporting.rs"]
mod reporting;
#[path = "parsing/serialization.rs"]
mod serialization;
#[path = "parsing/tokens.rs"]
mod tokens;
#[path = "parsing/walkthrough.rs"]
mod walkthrough;

// ---------------------------------------------------------------------------
// Shared test helpers
// ---------------------------------------------------------------------------

fn parse(input: &str) -> StatementList {
    parse_input(input).unwrap_or_else(|e| panic!("{}", e.report()))
}

fn parse_err(input: &str) -> ParseError {
    match parse_input(input) {
        Ok(ast) => panic!("expected {input:?} to fail, got {ast:?}"),
        Err(e) => e,
    }
}

fn first_command(ast: &StatementList) -> &Command {
    &ast.statements[0].pipeline.commands[0]
}
