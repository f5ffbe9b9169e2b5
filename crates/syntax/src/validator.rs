// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Semantic checks on a parsed statement list.
//!
//! Parsing accepts everything the grammar allows. The validator reports
//! constructs an executor may want to refuse, collecting every problem
//! instead of stopping at the first.

use crate::ast::{Argument, ArgumentPart, AstVisitor, Command, Glob, Statement, StatementList};
use crate::span::{diagnostic_context, Span};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for validation strictness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Maximum allowed substitution nesting (0 = unlimited).
    pub max_substitution_depth: usize,
    /// Whether commands made only of assignments are allowed.
    pub allow_standalone_assignments: bool,
    /// Whether `&` is allowed.
    pub allow_background: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_substitution_depth: 0,
            allow_standalone_assignments: true,
            allow_background: true,
        }
    }
}

/// A semantic problem found in a syntactically valid tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("substitutions nested {depth} deep, more than the allowed {max}")]
    ExcessiveNesting { depth: usize, max: usize, span: Span },

    #[error("assignment to {name} without a command")]
    StandaloneAssignment {
        name: String,
        /// Rendered value, if any, e.g. `$HOME/bin`.
        value: Option<String>,
        span: Span,
    },

    #[error("background execution is not allowed")]
    BackgroundStatement { span: Span },

    #[error("output redirected with both > and >>")]
    ConflictingRedirects { span: Span },

    #[error("empty command substitution")]
    EmptySubstitution { span: Span },
}

impl ValidationError {
    pub fn span(&self) -> Span {
        match self {
            ValidationError::ExcessiveNesting { span, .. }
            | ValidationError::StandaloneAssignment { span, .. }
            | ValidationError::BackgroundStatement { span }
            | ValidationError::ConflictingRedirects { span }
            | ValidationError::EmptySubstitution { span } => *span,
        }
    }

    /// Rich diagnostic with line/column info.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

/// Validate a parsed statement list with the default configuration.
///
/// Returns `Ok(())` if the tree is valid, or `Err(errors)` with every
/// validation error found.
///
/// ```
/// use ush_syntax::{parse_input, validate, ValidationError};
///
/// assert!(validate(&parse_input("echo hello")?).is_ok());
///
/// let errors = validate(&parse_input("echo $() > a >> b")?).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert!(matches!(errors[0], ValidationError::ConflictingRedirects { .. }));
/// assert!(matches!(errors[1], ValidationError::EmptySubstitution { .. }));
/// # Ok::<(), ush_syntax::ParseError>(())
/// ```
pub fn validate(ast: &StatementList) -> Result<(), Vec<ValidationError>> {
    validate_with_config(ast, ValidatorConfig::default())
}

/// Validate with custom configuration.
///
/// ```
/// use ush_syntax::{parse_input, validate_with_config, ValidatorConfig};
///
/// let config = ValidatorConfig {
///     allow_background: false,
///     ..Default::default()
/// };
/// let ast = parse_input("sleep 10 &")?;
/// assert!(validate_with_config(&ast, config).is_err());
/// # Ok::<(), ush_syntax::ParseError>(())
/// ```
pub fn validate_with_config(
    ast: &StatementList,
    config: ValidatorConfig,
) -> Result<(), Vec<ValidationError>> {
    Validator::new(config).validate(ast)
}

struct Validator {
    config: ValidatorConfig,
    errors: Vec<ValidationError>,
    current_depth: usize,
    /// Span of the argument being walked, for errors inside it.
    argument_span: Span,
}

impl Validator {
    fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            errors: Vec::new(),
            current_depth: 0,
            argument_span: Span::default(),
        }
    }

    fn validate(mut self, ast: &StatementList) -> Result<(), Vec<ValidationError>> {
        self.visit_statement_list(ast);
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn report(&mut self, error: ValidationError) {
        tracing::debug!(error = %error, span = ?error.span(), "validation error");
        self.errors.push(error);
    }

    /// Render an argument for messages: text as is, `$name`, globs and
    /// `$(...)` for substitutions.
    fn render(argument: &Argument) -> String {
        argument
            .parts
            .iter()
            .map(|part| match part {
                ArgumentPart::Literal(text) => text.clone(),
                ArgumentPart::Parameter(name) => format!("${name}"),
                ArgumentPart::Glob(Glob::Star) => "*".to_string(),
                ArgumentPart::Glob(Glob::One) => "?".to_string(),
                ArgumentPart::Glob(Glob::Charset(set)) => format!("[{set}]"),
                ArgumentPart::Substitution(_) => "$(...)".to_string(),
            })
            .collect()
    }
}

impl AstVisitor for Validator {
    fn visit_statement(&mut self, statement: &Statement) {
        if statement.background && !self.config.allow_background {
            self.report(ValidationError::BackgroundStatement {
                span: statement.span,
            });
        }
        self.walk_statement(statement);
    }

    fn visit_command(&mut self, command: &Command) {
        if command.output_file.is_some() && command.append_file.is_some() {
            self.report(ValidationError::ConflictingRedirects { span: command.span });
        }

        if command.arguments.is_empty() && !self.config.allow_standalone_assignments {
            if let Some(first) = command.assignments.first() {
                self.report(ValidationError::StandaloneAssignment {
                    name: first.name.clone(),
                    value: first.value.as_ref().map(Self::render),
                    span: command.span,
                });
            }
        }
        self.walk_command(command);
    }

    fn visit_argument(&mut self, argument: &Argument) {
        let outer = std::mem::replace(&mut self.argument_span, argument.span);
        self.walk_argument(argument);
        self.argument_span = outer;
    }

    fn visit_substitution(&mut self, body: &StatementList) {
        self.current_depth += 1;
        let max = self.config.max_substitution_depth;
        if max > 0 && self.current_depth > max {
            self.report(ValidationError::ExcessiveNesting {
                depth: self.current_depth,
                max,
                span: self.argument_span,
            });
        }
        if body.is_empty() {
            self.report(ValidationError::EmptySubstitution {
                span: self.argument_span,
            });
        }
        self.visit_statement_list(body);
        self.current_depth -= 1;
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
