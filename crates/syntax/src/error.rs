// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error classification, raise-site origins and scanner errors.

use crate::span::Span;
use std::fmt;
use thiserror::Error;

/// Broad class of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input.
    Syntax,
    /// An internal invariant of the scanner, parser or tree was violated.
    /// Indicates a bug, never bad input.
    Corruption,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => f.write_str("syntax"),
            ErrorKind::Corruption => f.write_str("corruption"),
        }
    }
}

/// Where in this crate an error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl Origin {
    /// Build an origin from the type path of a marker fn nested in the
    /// raising function. Used by [`origin!`].
    pub(crate) fn from_type_path(file: &'static str, line: u32, path: &'static str) -> Self {
        let mut path = path.strip_suffix("::here").unwrap_or(path);
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        let function = path.rsplit("::").next().unwrap_or(path);
        Self {
            file,
            line,
            function,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.function, self.file, self.line)
    }
}

/// Capture the [`Origin`] of the enclosing function at the call site.
macro_rules! origin {
    () => {{
        fn here() {}
        fn type_path<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        $crate::error::Origin::from_type_path(file!(), line!(), type_path(here))
    }};
}
pub(crate) use origin;

/// Scanner errors: input the matchers recognise but cannot close, or input
/// no matcher accepts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// `[` with no matching `]` before the end of input.
    #[error("unclosed charset starting at position {}", span.start)]
    UnclosedCharset { span: Span, origin: Origin },

    /// `'` with no matching `'` before the end of input.
    #[error("not enough closing single-quotes for quote at position {}", span.start)]
    UnterminatedSingleQuote { span: Span, origin: Origin },

    /// No matcher accepts the input at `position` (e.g. a lone `$` or `]`).
    #[error("no token matches input at position {position}")]
    NoMatch { position: usize, origin: Origin },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnclosedCharset { span, .. }
            | LexerError::UnterminatedSingleQuote { span, .. } => *span,
            LexerError::NoMatch { position, .. } => Span::new(*position, *position + 1),
        }
    }

    pub fn origin(&self) -> Origin {
        match self {
            LexerError::UnclosedCharset { origin, .. }
            | LexerError::UnterminatedSingleQuote { origin, .. }
            | LexerError::NoMatch { origin, .. } => *origin,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
