// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token kinds and positioned tokens produced by the scanner.

use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a scanned token.
///
/// The declaration order mirrors the scanner's matcher order, which is also
/// its precedence: the first matcher that accepts the input wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// End of input (zero length).
    Stop,
    /// Spaces, tabs, CR, VT and backslash-newline continuations.
    Whitespace,
    /// `$name`, `$?` or `$` plus a single digit.
    UnbracedParameter,
    /// `$((`
    StartArithmetic,
    /// `$(`
    StartSubstitution,
    /// `${`
    StartExpansion,
    /// `;` or newline.
    StatementEnd,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `|`
    Pipe,
    /// `&`
    Background,
    /// `>>`
    AppendRedirect,
    /// `>`
    WriteRedirect,
    /// `<`
    ReadRedirect,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    /// `"`
    DoubleQuote,
    /// `` ` ``
    Backtick,
    /// `*`
    GlobStar,
    /// `?`
    GlobOne,
    /// `[...]`
    GlobCharset,
    /// `'...'`, quotes included.
    SingleQuoted,
    /// `NAME=`, equals sign included.
    AssignmentLhs,
    /// Any run of text no other matcher claims.
    Raw,
}

impl TokenKind {
    /// Every kind, in scanner precedence order.
    pub const ALL: [TokenKind; 26] = [
        TokenKind::Stop,
        TokenKind::Whitespace,
        TokenKind::UnbracedParameter,
        TokenKind::StartArithmetic,
        TokenKind::StartSubstitution,
        TokenKind::StartExpansion,
        TokenKind::StatementEnd,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Pipe,
        TokenKind::Background,
        TokenKind::AppendRedirect,
        TokenKind::WriteRedirect,
        TokenKind::ReadRedirect,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::DoubleQuote,
        TokenKind::Backtick,
        TokenKind::GlobStar,
        TokenKind::GlobOne,
        TokenKind::GlobCharset,
        TokenKind::SingleQuoted,
        TokenKind::AssignmentLhs,
        TokenKind::Raw,
    ];

    /// Stable diagnostic name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Stop => "end-of-input",
            TokenKind::Whitespace => "whitespace",
            TokenKind::UnbracedParameter => "unbraced-parameter",
            TokenKind::StartArithmetic => "start-of-arithmetic",
            TokenKind::StartSubstitution => "start-of-substitution",
            TokenKind::StartExpansion => "start-of-expansion",
            TokenKind::StatementEnd => "statement-end",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Pipe => "pipe",
            TokenKind::Background => "background",
            TokenKind::AppendRedirect => "append-redirect",
            TokenKind::WriteRedirect => "write-redirect",
            TokenKind::ReadRedirect => "read-redirect",
            TokenKind::LeftBrace => "left-brace",
            TokenKind::RightBrace => "right-brace",
            TokenKind::LeftParen => "left-paren",
            TokenKind::RightParen => "right-paren",
            TokenKind::DoubleQuote => "double-quote",
            TokenKind::Backtick => "backtick",
            TokenKind::GlobStar => "glob-star",
            TokenKind::GlobOne => "glob-one",
            TokenKind::GlobCharset => "glob-charset",
            TokenKind::SingleQuoted => "single-quoted",
            TokenKind::AssignmentLhs => "assignment-lhs",
            TokenKind::Raw => "raw",
        }
    }

    /// Inverse of [`TokenKind::name`].
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of the input: `kind` at `start`, `len` bytes long.
///
/// Tokens are not retained by the parser; it copies what it needs into the
/// tree as soon as a token is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub len: usize,
}

impl Token {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end())
    }
}

/// Whether `byte` may appear in a parameter or assignment name.
#[inline]
pub(crate) fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
