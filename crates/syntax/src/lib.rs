// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Scanner and parser for a small POSIX-like command language.
//!
//! One line of input becomes an owned syntax tree that an executor can walk.
//!
//! # Quick Start
//!
//! ```
//! use ush_syntax::parse_input;
//!
//! let ast = parse_input("ls *.rs | wc -l > count &")?;
//! assert_eq!(ast.count_commands(), 2);
//! assert!(ast.statements[0].background);
//! # Ok::<(), ush_syntax::ParseError>(())
//! ```
//!
//! # Features
//!
//! - **Quoting**: `'...'`, `"..."` and backslash escapes, each with its own
//!   escape table
//! - **Parameters**: `$name`, `$1`, `$?`, `${name}`
//! - **Command substitution**: `$(cmd)` and `` `cmd` ``
//! - **Globs**: `*`, `?`, `[...]`, kept unexpanded for the executor
//! - **Redirections**: `<`, `>`, `>>`
//! - **Statements**: pipelines with `|`, `&` for background, `;` or newline
//!   between statements
//!
//! # Errors
//!
//! Every failure is a [`ParseError`] carrying the [`Origin`] that detected it
//! and, for bad input, the [`Span`] at fault. [`ParseError::report`] renders
//! the one-line interactive message and [`ParseError::diagnostic`] a snippet
//! with line, column and carets.
//!
//! # AST Traversal
//!
//! Implement [`AstVisitor`] for custom traversal, or use the utility methods
//! on [`StatementList`]:
//!
//! - [`StatementList::count_commands`] - Count all commands
//! - [`StatementList::collect_parameters`] - Collect parameter references
//! - [`StatementList::has_substitutions`] - Check for command substitutions
//! - [`StatementList::max_substitution_depth`] - Deepest substitution nesting
//!
//! [`validate`] reports constructs an executor may want to refuse.

mod ast;
mod error;
mod lexer;
mod parse_error;
mod parser;
pub mod span;
mod token;
mod validator;

pub use error::{ErrorKind, LexerError, Origin};
pub use span::{diagnostic_context, locate_span, Span};

// AST types
pub use ast::{
    Argument, ArgumentPart, Assignment, AstVisitor, Command, Glob, Pipeline, Statement,
    StatementList,
};

// Lexer
pub use lexer::Lexer;

// Parser
pub use parse_error::ParseError;
pub use parser::{parse_input, Parser, ParserConfig};

// Tokens
pub use token::{Token, TokenKind};

// Validator
pub use validator::{validate, validate_with_config, ValidationError, ValidatorConfig};
