// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pull-based token scanner.
//!
//! The scanner keeps a single cursor token. [`Lexer::advance`] looks for the
//! next token starting exactly where the cursor ends by trying an ordered
//! table of rules; the first rule that accepts wins. Order is
//! precedence, not longest match: `$((` is tried before `$(`, and
//! `NAME=` is tried before the raw-text catch-all.
//!
//! The end of the input slice acts as the terminator; scans see it as a
//! missing byte.

use crate::error::{origin, LexerError};
use crate::token::{is_name_byte, Token, TokenKind};
use crate::Span;

/// How one token kind is recognised.
enum Rule {
    /// Exactly these bytes.
    Literal(&'static [u8]),
    /// A scan returning the accepted length, `None` when it does not apply,
    /// or an error for input it recognises but cannot close.
    Scan(fn(&[u8], usize) -> Result<Option<usize>, LexerError>),
}

const RULES: &[(TokenKind, Rule)] = &[
    (TokenKind::Stop, Rule::Scan(match_stop)),
    (TokenKind::Whitespace, Rule::Scan(match_whitespace)),
    (TokenKind::UnbracedParameter, Rule::Scan(match_unbraced_parameter)),
    (TokenKind::StartArithmetic, Rule::Literal(b"$((")),
    (TokenKind::StartSubstitution, Rule::Literal(b"$(")),
    (TokenKind::StartExpansion, Rule::Literal(b"${")),
    (TokenKind::StatementEnd, Rule::Scan(match_statement_end)),
    (TokenKind::And, Rule::Literal(b"&&")),
    (TokenKind::Or, Rule::Literal(b"||")),
    (TokenKind::Pipe, Rule::Literal(b"|")),
    (TokenKind::Background, Rule::Literal(b"&")),
    (TokenKind::AppendRedirect, Rule::Literal(b">>")),
    (TokenKind::WriteRedirect, Rule::Literal(b">")),
    (TokenKind::ReadRedirect, Rule::Literal(b"<")),
    (TokenKind::LeftBrace, Rule::Literal(b"{")),
    (TokenKind::RightBrace, Rule::Literal(b"}")),
    (TokenKind::LeftParen, Rule::Literal(b"(")),
    (TokenKind::RightParen, Rule::Literal(b")")),
    (TokenKind::DoubleQuote, Rule::Literal(b"\"")),
    (TokenKind::Backtick, Rule::Literal(b"`")),
    (TokenKind::GlobStar, Rule::Literal(b"*")),
    (TokenKind::GlobOne, Rule::Literal(b"?")),
    (TokenKind::GlobCharset, Rule::Scan(match_glob_charset)),
    (TokenKind::SingleQuoted, Rule::Scan(match_single_quoted)),
    (TokenKind::AssignmentLhs, Rule::Scan(match_assignment_lhs)),
    (TokenKind::Raw, Rule::Scan(match_raw)),
];

impl Rule {
    fn apply(&self, input: &[u8], pos: usize) -> Result<Option<usize>, LexerError> {
        match self {
            Rule::Literal(literal) => Ok(input
                .get(pos..)
                .filter(|rest| rest.starts_with(literal))
                .map(|_| literal.len())),
            Rule::Scan(scan) => scan(input, pos),
        }
    }
}

#[inline]
fn byte(input: &[u8], pos: usize) -> Option<u8> {
    input.get(pos).copied()
}

fn match_stop(input: &[u8], pos: usize) -> Result<Option<usize>, LexerError> {
    Ok((pos >= input.len()).then_some(0))
}

fn match_whitespace(input: &[u8], pos: usize) -> Result<Option<usize>, LexerError> {
    let mut len = 0;
    loop {
        match byte(input, pos + len) {
            Some(b' ' | b'\t' | b'\r' | b'\x0b') => len += 1,
            Some(b'\\') if byte(input, pos + len + 1) == Some(b'\n') => len += 2,
            _ => return Ok((len > 0).then_some(len)),
        }
    }
}

/// `$?`, `$` plus one digit, or `$` plus a name.
///
/// Only one digit is taken, so `$12` is parameter `1` followed by text `2`.
fn match_unbraced_parameter(input: &[u8], pos: usize) -> Result<Option<usize>, LexerError> {
    if byte(input, pos) != Some(b'$') {
        return Ok(None);
    }
    match byte(input, pos + 1) {
        Some(b'?') => return Ok(Some(2)),
        Some(b) if b.is_ascii_digit() => return Ok(Some(2)),
        _ => {}
    }
    let mut len = 1;
    while byte(input, pos + len).is_some_and(is_name_byte) {
        len += 1;
    }
    Ok((len >= 2).then_some(len))
}

fn match_statement_end(input: &[u8], pos: usize) -> Result<Option<usize>, LexerError> {
    Ok(matches!(byte(input, pos), Some(b';' | b'\n')).then_some(1))
}

fn match_glob_charset(input: &[u8], pos: usize) -> Result<Option<usize>, LexerError> {
    if byte(input, pos) != Some(b'[') {
        return Ok(None);
    }
    let mut len = 1;
    loop {
        match byte(input, pos + len) {
            Some(b']') => return Ok(Some(len + 1)),
            Some(_) => len += 1,
            None => {
                return Err(LexerError::UnclosedCharset {
                    span: Span::new(pos, pos + len),
                    origin: origin!(),
                })
            }
        }
    }
}

/// A backslash takes the following byte with it, so `\'` does not close
/// the string. A backslash right before the end is plain text.
fn match_single_quoted(input: &[u8], pos: usize) -> Result<Option<usize>, LexerError> {
    if byte(input, pos) != Some(b'\'') {
        return Ok(None);
    }
    let mut len = 1;
    loop {
        match byte(input, pos + len) {
            Some(b'\'') => return Ok(Some(len + 1)),
            Some(b'\\') if byte(input, pos + len + 1).is_some() => len += 2,
            Some(_) => len += 1,
            None => {
                return Err(LexerError::UnterminatedSingleQuote {
                    span: Span::new(pos, pos + len),
                    origin: origin!(),
                })
            }
        }
    }
}

fn match_assignment_lhs(input: &[u8], pos: usize) -> Result<Option<usize>, LexerError> {
    let mut len = 0;
    while byte(input, pos + len).is_some_and(is_name_byte) {
        len += 1;
    }
    Ok((len > 0 && byte(input, pos + len) == Some(b'=')).then_some(len + 1))
}

/// Bytes that end a raw-text run.
fn is_raw_delimiter(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'\t'
            | b'\r'
            | b'\x0b'
            | b'\n'
            | b';'
            | b'$'
            | b'{'
            | b'}'
            | b'['
            | b']'
            | b'*'
            | b'?'
            | b'('
            | b')'
            | b'"'
            | b'`'
            | b'\''
            | b'&'
            | b'|'
            | b'<'
            | b'>'
    )
}

fn match_raw(input: &[u8], pos: usize) -> Result<Option<usize>, LexerError> {
    let mut len = 0;
    loop {
        match byte(input, pos + len) {
            None => break,
            Some(b) if is_raw_delimiter(b) => break,
            Some(b'\\') if byte(input, pos + len + 1).is_some() => len += 2,
            Some(_) => len += 1,
        }
    }
    Ok((len > 0).then_some(len))
}

/// Token scanner over one input string.
///
/// # Examples
///
/// ```
/// use ush_syntax::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("ls -l");
/// assert_eq!(lexer.advance()?.kind, TokenKind::Raw);
/// assert_eq!(lexer.advance()?.kind, TokenKind::Whitespace);
/// let token = lexer.advance()?;
/// assert_eq!(lexer.text(token), "-l");
/// assert_eq!(lexer.advance()?.kind, TokenKind::Stop);
/// # Ok::<(), ush_syntax::LexerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    token: Token,
}

impl<'a> Lexer<'a> {
    /// Create a scanner positioned before the first token.
    ///
    /// The cursor is a zero-length placeholder until the first
    /// [`advance`](Lexer::advance).
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            token: Token {
                kind: TokenKind::Stop,
                start: 0,
                len: 0,
            },
        }
    }

    /// Scan every token of `input`, ending with the [`TokenKind::Stop`] marker.
    pub fn tokenize(input: &'a str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.advance()?;
            tokens.push(token);
            if token.kind == TokenKind::Stop {
                return Ok(tokens);
            }
        }
    }

    /// Move the cursor to the token starting where the current one ends.
    ///
    /// On error the cursor is left where it was. Advancing from the end
    /// marker yields the end marker again.
    pub fn advance(&mut self) -> Result<Token, LexerError> {
        let bytes = self.input.as_bytes();
        let start = self.token.end();

        for (kind, rule) in RULES {
            if let Some(len) = rule.apply(bytes, start)? {
                self.token = Token {
                    kind: *kind,
                    start,
                    len,
                };
                tracing::trace!(kind = %kind, start, len, "token");
                return Ok(self.token);
            }
        }

        Err(LexerError::NoMatch {
            position: start,
            origin: origin!(),
        })
    }

    /// The current token.
    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    /// The input being scanned.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Source text of `token`.
    #[inline]
    pub fn text(&self, token: Token) -> &'a str {
        token.span().slice(self.input)
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
