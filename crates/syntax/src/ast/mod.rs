// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax tree produced by the parser.
//!
//! Every node owns its children outright (`Box`/`Vec`/`Option` fields, no
//! shared references), so the tree is a tree by construction. Releasing it
//! is an ordinary drop of the root: each node is dropped exactly once and a
//! node cannot be reachable from two parents. Trying to make a node its own
//! descendant is rejected by the borrow checker:
//!
//! ```compile_fail
//! use ush_syntax::{Argument, ArgumentPart, Command, Pipeline, Span, Statement, StatementList};
//!
//! let mut arg = Argument::new(vec![], Span::default());
//! let command = Command::new(vec![], vec![arg], None, None, None, Span::default());
//! let pipeline = Pipeline::new(vec![command], Span::default());
//! let body = StatementList::new(
//!     vec![Statement::new(pipeline, false, Span::default())],
//!     Span::default(),
//! );
//! // `arg` now lives inside `body`, so it cannot also own `body`.
//! arg.parts.push(ArgumentPart::Substitution(Box::new(body)));
//! ```
//!
//! ```text
//! StatementList
//! └── Statement[] (background flag)
//!     └── Pipeline
//!         └── Command[]
//!             ├── assignments: Assignment[]  (name, value: Argument?)
//!             ├── arguments: Argument[]
//!             └── input_file / output_file / append_file: Argument?
//!
//! Argument
//! └── ArgumentPart[]  Literal | Parameter | Glob | Substitution(StatementList)
//! ```

mod utils;
mod visitor;

pub use visitor::AstVisitor;

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// A wildcard fragment, matched against filenames by the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glob {
    /// `*`
    Star,
    /// `?`
    One,
    /// `[...]`, holding the text between the brackets.
    Charset(String),
}

/// One fragment of an argument. Fragments are concatenated to form the
/// argument's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentPart {
    /// Text with quoting and escapes already resolved. Never empty.
    Literal(String),
    /// `$name`, `$1`, `$?` or `${name}`, holding the name.
    Parameter(String),
    Glob(Glob),
    /// `` `...` `` or `$(...)`.
    Substitution(Box<StatementList>),
}

impl ArgumentPart {
    /// A literal part, or `None` for empty text.
    pub fn literal(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        (!text.is_empty()).then_some(ArgumentPart::Literal(text))
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            ArgumentPart::Literal(text) => Some(text),
            _ => None,
        }
    }
}

/// A single word of a command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Never empty when produced by the parser.
    pub parts: Vec<ArgumentPart>,
    pub span: Span,
}

impl Argument {
    pub fn new(parts: Vec<ArgumentPart>, span: Span) -> Self {
        Self { parts, span }
    }

    /// Concatenated text when every part is a literal, else `None`.
    ///
    /// ```
    /// use ush_syntax::parse_input;
    ///
    /// let ast = parse_input("echo 'it'\\''s' $x")?;
    /// let args = &ast.statements[0].pipeline.commands[0].arguments;
    /// assert_eq!(args[1].literal_text().as_deref(), Some("it's"));
    /// assert_eq!(args[2].literal_text(), None);
    /// # Ok::<(), ush_syntax::ParseError>(())
    /// ```
    pub fn literal_text(&self) -> Option<String> {
        self.parts.iter().map(ArgumentPart::as_literal).collect()
    }
}

/// `NAME=value` preceding a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Variable name, without the `=`.
    pub name: String,
    /// `None` for `NAME=` with nothing after it.
    pub value: Option<Argument>,
    pub span: Span,
}

impl Assignment {
    pub fn new(name: impl Into<String>, value: Option<Argument>, span: Span) -> Self {
        Self {
            name: name.into(),
            value,
            span,
        }
    }
}

/// A simple command: assignments, arguments and redirections.
///
/// At least one of the fields is populated when produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub assignments: Vec<Assignment>,
    /// Command name followed by its arguments.
    pub arguments: Vec<Argument>,
    /// `< file`
    pub input_file: Option<Argument>,
    /// `> file`
    pub output_file: Option<Argument>,
    /// `>> file`
    pub append_file: Option<Argument>,
    pub span: Span,
}

impl Command {
    pub fn new(
        assignments: Vec<Assignment>,
        arguments: Vec<Argument>,
        input_file: Option<Argument>,
        output_file: Option<Argument>,
        append_file: Option<Argument>,
        span: Span,
    ) -> Self {
        Self {
            assignments,
            arguments,
            input_file,
            output_file,
            append_file,
            span,
        }
    }

    /// True when nothing at all was parsed for this command.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
            && self.arguments.is_empty()
            && self.input_file.is_none()
            && self.output_file.is_none()
            && self.append_file.is_none()
    }

    /// The first argument, i.e. the program to run.
    pub fn name(&self) -> Option<&Argument> {
        self.arguments.first()
    }
}

/// Commands chained with `|`, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Never empty when produced by the parser.
    pub commands: Vec<Command>,
    pub span: Span,
}

impl Pipeline {
    pub fn new(commands: Vec<Command>, span: Span) -> Self {
        Self { commands, span }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A pipeline, optionally run in the background with a trailing `&`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub pipeline: Pipeline,
    pub background: bool,
    pub span: Span,
}

impl Statement {
    pub fn new(pipeline: Pipeline, background: bool, span: Span) -> Self {
        Self {
            pipeline,
            background,
            span,
        }
    }
}

/// Statements separated by `;` or newlines. The root of every parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementList {
    pub statements: Vec<Statement>,
    pub span: Span,
}

impl StatementList {
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
