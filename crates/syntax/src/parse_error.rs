// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types.

use crate::error::{ErrorKind, LexerError, Origin};
use crate::span::{diagnostic_context, Span};
use crate::token::TokenKind;
use thiserror::Error;

/// Parser errors.
///
/// Every variant records the [`Origin`] where it was detected. Errors are
/// propagated unchanged with `?`, so the kind, origin and message seen by
/// the caller are those of the raise site.
///
/// # Examples
///
/// ```
/// use ush_syntax::{parse_input, ErrorKind, ParseError};
///
/// let err = parse_input("echo ${}").unwrap_err();
/// assert!(matches!(err, ParseError::BadParameter { .. }));
/// assert_eq!(err.kind(), ErrorKind::Syntax);
///
/// let err = parse_input("| echo").unwrap_err();
/// assert!(matches!(err, ParseError::UnexpectedPipe { .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The scanner rejected the input.
    ///
    /// ```
    /// use ush_syntax::{parse_input, LexerError, ParseError};
    ///
    /// let err = parse_input("echo 'unterminated").unwrap_err();
    /// assert!(matches!(err, ParseError::Lexer(LexerError::UnterminatedSingleQuote { .. })));
    /// ```
    #[error(transparent)]
    Lexer(#[from] LexerError),

    /// A specific token was required but another was found.
    #[error("expected token of type {expected}, got {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
        origin: Origin,
    },

    /// Input ended where a command was required (e.g. after `|`).
    #[error("unexpected end of input")]
    UnexpectedEof { span: Span, origin: Origin },

    /// A pipe with no command before it.
    #[error("unexpected pipe")]
    UnexpectedPipe { span: Span, origin: Origin },

    /// A pipe followed by something that is not a command.
    #[error("expected a command after pipe, got {found}")]
    MissingCommand {
        found: TokenKind,
        span: Span,
        origin: Origin,
    },

    /// A redirection operator with no file after it.
    #[error("expected a file after {operator}, got {found}")]
    MissingRedirectTarget {
        operator: TokenKind,
        found: TokenKind,
        span: Span,
        origin: Origin,
    },

    /// `${}`
    #[error("bad parameter: ${{}}")]
    BadParameter { span: Span, origin: Origin },

    /// `${name` with no closing brace.
    #[error("missing }} to parameter expansion")]
    UnclosedExpansion { span: Span, origin: Origin },

    /// A complete statement list was followed by a token that cannot start
    /// or continue one (e.g. a stray `)`).
    #[error("unexpected token: {found}")]
    TrailingToken {
        found: TokenKind,
        span: Span,
        origin: Origin,
    },

    /// Substitutions nested beyond the configured limit.
    #[error("substitutions nested deeper than {limit}")]
    NestingTooDeep {
        limit: usize,
        span: Span,
        origin: Origin,
    },

    /// An internal invariant was violated. Indicates a parser bug.
    #[error("corrupted syntax tree: {message}")]
    Corruption { message: String, origin: Origin },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Corruption { .. } => ErrorKind::Corruption,
            _ => ErrorKind::Syntax,
        }
    }

    /// Where the error was detected.
    pub fn origin(&self) -> Origin {
        match self {
            ParseError::Lexer(e) => e.origin(),
            ParseError::UnexpectedToken { origin, .. }
            | ParseError::UnexpectedEof { origin, .. }
            | ParseError::UnexpectedPipe { origin, .. }
            | ParseError::MissingCommand { origin, .. }
            | ParseError::MissingRedirectTarget { origin, .. }
            | ParseError::BadParameter { origin, .. }
            | ParseError::UnclosedExpansion { origin, .. }
            | ParseError::TrailingToken { origin, .. }
            | ParseError::NestingTooDeep { origin, .. }
            | ParseError::Corruption { origin, .. } => *origin,
        }
    }

    /// Source location of the offending input, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lexer(e) => Some(e.span()),
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. }
            | ParseError::UnexpectedPipe { span, .. }
            | ParseError::MissingCommand { span, .. }
            | ParseError::MissingRedirectTarget { span, .. }
            | ParseError::BadParameter { span, .. }
            | ParseError::UnclosedExpansion { span, .. }
            | ParseError::TrailingToken { span, .. }
            | ParseError::NestingTooDeep { span, .. } => Some(*span),
            ParseError::Corruption { .. } => None,
        }
    }

    /// One-line report for interactive use.
    ///
    /// ```
    /// use ush_syntax::parse_input;
    ///
    /// let err = parse_input("echo $(ls").unwrap_err();
    /// let report = err.report();
    /// assert!(report.starts_with("Parse error! In expect at "));
    /// assert!(report.ends_with(". expected token of type right-paren, got end-of-input"));
    /// ```
    pub fn report(&self) -> String {
        let stage = match self {
            ParseError::Lexer(_) => "Lex",
            _ => "Parse",
        };
        let origin = self.origin();
        format!(
            "{stage} error! In {} at {}:{}. {self}",
            origin.function, origin.file, origin.line
        )
    }

    /// Rich diagnostic with line/column info, or `None` if no span.
    pub fn diagnostic(&self, input: &str) -> Option<String> {
        Some(diagnostic_context(input, self.span()?, &self.to_string()))
    }
}
