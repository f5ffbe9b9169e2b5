// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser that turns scanner tokens into a syntax tree.
//!
//! Grammar, in the order productions are tried:
//!
//! ```text
//! statement_list := (statement? (';' | '\n'))* statement?
//! statement      := pipeline '&'?
//! pipeline       := command ('|' command)*
//! command        := assignment* (redirect | argument)*
//! redirect       := ('<' | '>' | '>>') argument
//! assignment     := NAME '=' argument?
//! argument       := part+              (adjacent, no whitespace between)
//! part           := $name | ${...} | `...` | $(...) | glob | text
//! ```
//!
//! Optional productions return `Ok(None)` when they do not match here, which
//! is distinct from a parse failure. Every failure is final: errors are
//! propagated to the caller and no partial tree is returned.

mod words;

use crate::ast::{Assignment, Command, Pipeline, Statement, StatementList};
use crate::error::origin;
use crate::lexer::Lexer;
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Parser limits.
///
/// ```
/// use ush_syntax::{Parser, ParserConfig, ParseError};
///
/// let config = ParserConfig { max_substitution_depth: 1 };
/// assert!(Parser::parse_with_config("echo $(date)", &config).is_ok());
///
/// let err = Parser::parse_with_config("echo $(echo $(date))", &config).unwrap_err();
/// assert!(matches!(err, ParseError::NestingTooDeep { limit: 1, .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest allowed nesting of `` `...` `` and `$(...)`.
    ///
    /// Each level recurses through the whole statement grammar. The default
    /// fits a 2 MiB thread stack in an unoptimized build.
    pub max_substitution_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_substitution_depth: 32,
        }
    }
}

/// Shell parser over one input string.
///
/// # Examples
///
/// ```
/// use ush_syntax::Parser;
///
/// let ast = Parser::parse("cat file | grep x > out &")?;
/// let statement = &ast.statements[0];
/// assert!(statement.background);
/// assert_eq!(statement.pipeline.len(), 2);
/// assert!(statement.pipeline.commands[1].output_file.is_some());
/// # Ok::<(), ush_syntax::ParseError>(())
/// ```
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    config: ParserConfig,
    /// Inside a backtick substitution, where another backtick closes rather
    /// than opens.
    in_ticks: bool,
    /// Current substitution nesting.
    depth: usize,
    /// End of the last consumed token that was not whitespace.
    last_end: usize,
    #[cfg(test)]
    consumed: Vec<Token>,
}

/// Parse `input` with the default [`ParserConfig`].
///
/// ```
/// use ush_syntax::parse_input;
///
/// let ast = parse_input("FOO=1 make -j4; echo done")?;
/// assert_eq!(ast.statements.len(), 2);
/// assert_eq!(ast.statements[0].pipeline.commands[0].assignments[0].name, "FOO");
/// # Ok::<(), ush_syntax::ParseError>(())
/// ```
pub fn parse_input(input: &str) -> Result<StatementList, ParseError> {
    Parser::parse(input)
}

impl<'a> Parser<'a> {
    /// Parse `input` into a statement list.
    ///
    /// The whole input must be consumed; a leftover token such as a stray
    /// `)` is a [`ParseError::TrailingToken`].
    pub fn parse(input: &'a str) -> Result<StatementList, ParseError> {
        Self::parse_with_config(input, &ParserConfig::default())
    }

    pub fn parse_with_config(
        input: &'a str,
        config: &ParserConfig,
    ) -> Result<StatementList, ParseError> {
        tracing::debug!(len = input.len(), "parsing input");
        let result = Parser::new(input, *config).and_then(|mut parser| parser.parse_all());
        match &result {
            Ok(list) => tracing::debug!(statements = list.statements.len(), "parsed input"),
            Err(e) => tracing::debug!(error = %e, origin = %e.origin(), "parse failed"),
        }
        result
    }

    /// Create a parser with the first token already scanned.
    fn new(input: &'a str, config: ParserConfig) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        lexer.advance()?;
        Ok(Self {
            lexer,
            config,
            in_ticks: false,
            depth: 0,
            last_end: 0,
            #[cfg(test)]
            consumed: Vec::new(),
        })
    }

    fn parse_all(&mut self) -> Result<StatementList, ParseError> {
        let list = self.statement_list()?;
        let token = self.lexer.token();
        if token.kind != TokenKind::Stop {
            return Err(ParseError::TrailingToken {
                found: token.kind,
                span: token.span(),
                origin: origin!(),
            });
        }
        Ok(list)
    }

    // -------------------------------------------------------------------------
    // Token primitives
    // -------------------------------------------------------------------------

    /// Kind of the current token.
    #[inline]
    pub(super) fn peek(&self) -> TokenKind {
        self.lexer.token().kind
    }

    /// Consume the current token and scan the next one.
    pub(super) fn bump(&mut self) -> Result<Token, ParseError> {
        let token = self.lexer.token();
        if token.kind != TokenKind::Whitespace {
            self.last_end = token.end();
        }
        #[cfg(test)]
        self.consumed.push(token);
        self.lexer.advance()?;
        Ok(token)
    }

    /// Consume the current token if it is of `kind`.
    pub(super) fn accept(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.peek() != kind {
            return Ok(false);
        }
        self.bump()?;
        Ok(true)
    }

    /// Consume the current token, which must be of `kind`.
    pub(super) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.lexer.token();
        if token.kind != kind {
            return Err(ParseError::UnexpectedToken {
                expected: kind,
                found: token.kind,
                span: token.span(),
                origin: origin!(),
            });
        }
        self.bump()
    }

    pub(super) fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while self.accept(TokenKind::Whitespace)? {}
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Statements separated by `;` or newlines. Empty statements are skipped.
    ///
    /// Stops without consuming at the end of input or at any token that
    /// cannot continue the list (a closing `)` or backtick, for instance).
    pub(super) fn statement_list(&mut self) -> Result<StatementList, ParseError> {
        let start = self.lexer.token().start;
        let mut statements = Vec::new();
        loop {
            self.skip_whitespace()?;
            if self.peek() == TokenKind::Stop {
                break;
            }
            if let Some(statement) = self.statement()? {
                statements.push(statement);
            }
            self.skip_whitespace()?;
            if !self.accept(TokenKind::StatementEnd)? {
                break;
            }
        }
        let span = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::empty(start),
        };
        Ok(StatementList::new(statements, span))
    }

    fn statement(&mut self) -> Result<Option<Statement>, ParseError> {
        let Some(pipeline) = self.pipeline()? else {
            return Ok(None);
        };
        self.skip_whitespace()?;
        let background = self.accept(TokenKind::Background)?;
        let span = Span::new(pipeline.span.start, self.last_end);
        self.skip_whitespace()?;
        Ok(Some(Statement::new(pipeline, background, span)))
    }

    fn pipeline(&mut self) -> Result<Option<Pipeline>, ParseError> {
        let Some(first) = self.pipeline_stage()? else {
            return Ok(None);
        };
        let start = first.span.start;
        let mut commands = vec![first];
        while self.accept(TokenKind::Pipe)? {
            match self.pipeline_stage()? {
                Some(command) => commands.push(command),
                None => {
                    let token = self.lexer.token();
                    return Err(ParseError::MissingCommand {
                        found: token.kind,
                        span: token.span(),
                        origin: origin!(),
                    });
                }
            }
        }
        Ok(Some(Pipeline::new(commands, Span::new(start, self.last_end))))
    }

    /// One command of a pipeline, with the whitespace around it.
    fn pipeline_stage(&mut self) -> Result<Option<Command>, ParseError> {
        self.skip_whitespace()?;
        let token = self.lexer.token();
        match token.kind {
            TokenKind::Stop => {
                return Err(ParseError::UnexpectedEof {
                    span: token.span(),
                    origin: origin!(),
                })
            }
            TokenKind::Pipe => {
                return Err(ParseError::UnexpectedPipe {
                    span: token.span(),
                    origin: origin!(),
                })
            }
            _ => {}
        }
        let command = self.command()?;
        self.skip_whitespace()?;
        Ok(command)
    }

    /// Assignments, then arguments and redirections in any order.
    ///
    /// Arguments interleaved with redirections accumulate into one list. A
    /// repeated redirection of the same kind replaces the earlier target.
    fn command(&mut self) -> Result<Option<Command>, ParseError> {
        self.skip_whitespace()?;
        let start = self.lexer.token().start;
        let assignments = self.assignment_list()?;
        let mut arguments = Vec::new();
        let mut input_file = None;
        let mut output_file = None;
        let mut append_file = None;

        loop {
            self.skip_whitespace()?;
            let operator = self.peek();
            let slot = match operator {
                TokenKind::ReadRedirect => &mut input_file,
                TokenKind::WriteRedirect => &mut output_file,
                TokenKind::AppendRedirect => &mut append_file,
                _ => {
                    if self.argument_list(&mut arguments)? {
                        continue;
                    }
                    break;
                }
            };
            self.bump()?;
            self.skip_whitespace()?;
            match self.argument()? {
                Some(target) => *slot = Some(target),
                None => {
                    let token = self.lexer.token();
                    return Err(ParseError::MissingRedirectTarget {
                        operator,
                        found: token.kind,
                        span: token.span(),
                        origin: origin!(),
                    });
                }
            }
        }

        let command = Command::new(
            assignments,
            arguments,
            input_file,
            output_file,
            append_file,
            Span::new(start, self.last_end.max(start)),
        );
        Ok((!command.is_empty()).then_some(command))
    }

    /// Leading `NAME=value` words.
    fn assignment_list(&mut self) -> Result<Vec<Assignment>, ParseError> {
        let mut assignments = Vec::new();
        loop {
            self.skip_whitespace()?;
            if self.peek() != TokenKind::AssignmentLhs {
                return Ok(assignments);
            }
            assignments.push(self.assignment()?);
        }
    }

    fn assignment(&mut self) -> Result<Assignment, ParseError> {
        let start = self.lexer.token().start;
        let name = self.expect_into_string(TokenKind::AssignmentLhs, 0, 1, &[])?;
        let value = self.argument()?;
        Ok(Assignment::new(name, value, Span::new(start, self.last_end)))
    }

    // -------------------------------------------------------------------------
    // Substitution
    // -------------------------------------------------------------------------

    /// Enter one level of substitution nesting, failing past the limit.
    fn enter_substitution(&mut self, opener: Token) -> Result<(), ParseError> {
        if self.depth >= self.config.max_substitution_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_substitution_depth,
                span: opener.span(),
                origin: origin!(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave_substitution(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
