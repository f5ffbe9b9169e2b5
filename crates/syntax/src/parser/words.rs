// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word parsing: argument parts, quoting modes and escape tables.

use super::Parser;
use crate::ast::{Argument, ArgumentPart, Glob, StatementList};
use crate::error::origin;
use crate::parse_error::ParseError;
use crate::span::Span;
use crate::token::TokenKind;

/// Ordered `(escape, replacement)` pairs. At each position the first pair
/// whose escape matches is applied; otherwise one character is copied.
type Escapes = &'static [(&'static str, &'static str)];

/// Contents of `'...'` outside double quotes.
const SINGLE_QUOTED: Escapes = &[("\\'", "'"), ("\\\\", "\\")];

/// Text inside `"..."`, including `'...'` tokens found there.
const DOUBLE_QUOTED: Escapes = &[("\\\"", "\""), ("\\$", "$"), ("\\\n", ""), ("\\\\", "\\")];

/// Unquoted text. A lone backslash is dropped, keeping what it escaped.
const UNQUOTED: Escapes = &[("\\\n", ""), ("\\\\", "\\"), ("\\", "")];

fn unescape(text: &str, escapes: Escapes) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        let replaced = escapes
            .iter()
            .find_map(|(from, to)| rest.strip_prefix(from).map(|tail| (*to, tail)));
        match replaced {
            Some((to, tail)) => {
                out.push_str(to);
                rest = tail;
            }
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
    }
    out
}

impl Parser<'_> {
    /// Consume a token of `kind` and return its text with `skip_left` and
    /// `skip_right` bytes of delimiters removed and `escapes` applied.
    pub(super) fn expect_into_string(
        &mut self,
        kind: TokenKind,
        skip_left: usize,
        skip_right: usize,
        escapes: Escapes,
    ) -> Result<String, ParseError> {
        let token = self.lexer.token();
        let text = self.lexer.text(token);
        let inner = token
            .len
            .checked_sub(skip_right)
            .filter(|end| *end >= skip_left)
            .and_then(|end| text.get(skip_left..end));
        // Only reachable if a scan rule accepted a token shorter than its own
        // delimiters.
        let Some(inner) = inner else {
            return Err(ParseError::Corruption {
                message: format!(
                    "{} token {text:?} is shorter than its {skip_left}+{skip_right} delimiter bytes",
                    token.kind
                ),
                origin: origin!(),
            });
        };
        self.expect(kind)?;
        Ok(unescape(inner, escapes))
    }

    /// Whitespace-separated arguments, appended to `arguments`. Returns
    /// whether anything was added.
    pub(super) fn argument_list(
        &mut self,
        arguments: &mut Vec<Argument>,
    ) -> Result<bool, ParseError> {
        let before = arguments.len();
        while let Some(argument) = self.argument()? {
            arguments.push(argument);
            if !self.accept(TokenKind::Whitespace)? {
                break;
            }
            self.skip_whitespace()?;
        }
        Ok(arguments.len() > before)
    }

    /// One word, or `None` if no part could be parsed here.
    pub(super) fn argument(&mut self) -> Result<Option<Argument>, ParseError> {
        let start = self.lexer.token().start;
        let parts = self.argument_part_list()?;
        if parts.is_empty() {
            return Ok(None);
        }
        Ok(Some(Argument::new(parts, Span::new(start, self.last_end))))
    }

    /// Adjacent parts, toggling double-quote mode at each `"`.
    fn argument_part_list(&mut self) -> Result<Vec<ArgumentPart>, ParseError> {
        let mut parts = Vec::new();
        let mut in_qq = false;
        loop {
            while self.accept(TokenKind::DoubleQuote)? {
                in_qq = !in_qq;
            }
            match self.argument_part(in_qq)? {
                Some(part) => parts.push(part),
                None => {
                    if in_qq {
                        self.expect(TokenKind::DoubleQuote)?;
                    }
                    return Ok(parts);
                }
            }
        }
    }

    fn argument_part(&mut self, in_qq: bool) -> Result<Option<ArgumentPart>, ParseError> {
        let part = match self.peek() {
            TokenKind::UnbracedParameter => {
                let name = self.expect_into_string(TokenKind::UnbracedParameter, 1, 0, &[])?;
                ArgumentPart::Parameter(name)
            }
            TokenKind::StartExpansion => self.braced_parameter()?,
            TokenKind::Backtick if !self.in_ticks => self.backtick_substitution()?,
            TokenKind::StartSubstitution => self.dollar_substitution()?,
            TokenKind::GlobStar if !in_qq => {
                self.bump()?;
                ArgumentPart::Glob(Glob::Star)
            }
            TokenKind::GlobOne if !in_qq => {
                self.bump()?;
                ArgumentPart::Glob(Glob::One)
            }
            TokenKind::GlobCharset if !in_qq => {
                let set = self.expect_into_string(TokenKind::GlobCharset, 1, 1, &[])?;
                ArgumentPart::Glob(Glob::Charset(set))
            }
            _ => return self.text(in_qq),
        };
        Ok(Some(part))
    }

    /// Run of plain text tokens merged into one literal.
    ///
    /// Inside double quotes, operators and whitespace are ordinary text and
    /// single quotes are not special.
    fn text(&mut self, in_qq: bool) -> Result<Option<ArgumentPart>, ParseError> {
        let mut text = String::new();
        loop {
            let kind = self.peek();
            let piece = match kind {
                TokenKind::SingleQuoted if in_qq => {
                    self.expect_into_string(kind, 0, 0, DOUBLE_QUOTED)?
                }
                TokenKind::SingleQuoted => self.expect_into_string(kind, 1, 1, SINGLE_QUOTED)?,
                TokenKind::AssignmentLhs | TokenKind::Raw => {
                    let escapes = if in_qq { DOUBLE_QUOTED } else { UNQUOTED };
                    self.expect_into_string(kind, 0, 0, escapes)?
                }
                TokenKind::GlobStar
                | TokenKind::GlobOne
                | TokenKind::GlobCharset
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Background
                | TokenKind::Whitespace
                    if in_qq =>
                {
                    self.expect_into_string(kind, 0, 0, &[])?
                }
                _ => break,
            };
            text.push_str(&piece);
        }
        Ok(ArgumentPart::literal(text))
    }

    /// `${name}`; everything up to the closing brace is the name.
    fn braced_parameter(&mut self) -> Result<ArgumentPart, ParseError> {
        let open = self.expect(TokenKind::StartExpansion)?;
        let first = self.lexer.token();
        if first.kind == TokenKind::RightBrace {
            return Err(ParseError::BadParameter {
                span: open.span().merge(first.span()),
                origin: origin!(),
            });
        }
        let mut name = String::new();
        loop {
            let token = self.lexer.token();
            match token.kind {
                TokenKind::RightBrace => {
                    self.bump()?;
                    return Ok(ArgumentPart::Parameter(name));
                }
                TokenKind::Stop => {
                    return Err(ParseError::UnclosedExpansion {
                        span: Span::new(open.start, token.start),
                        origin: origin!(),
                    })
                }
                _ => {
                    name.push_str(self.lexer.text(token));
                    self.bump()?;
                }
            }
        }
    }

    /// `` `...` ``. A backtick inside closes the substitution, so
    /// backticks do not nest.
    fn backtick_substitution(&mut self) -> Result<ArgumentPart, ParseError> {
        let open = self.expect(TokenKind::Backtick)?;
        self.enter_substitution(open)?;
        let in_ticks = std::mem::replace(&mut self.in_ticks, true);
        let body = self.statement_list();
        self.in_ticks = in_ticks;
        self.leave_substitution();
        let body = body?;
        self.expect(TokenKind::Backtick)?;
        Ok(substitution(body))
    }

    /// `$(...)`
    fn dollar_substitution(&mut self) -> Result<ArgumentPart, ParseError> {
        let open = self.expect(TokenKind::StartSubstitution)?;
        self.enter_substitution(open)?;
        let body = self.statement_list();
        self.leave_substitution();
        let body = body?;
        self.expect(TokenKind::RightParen)?;
        Ok(substitution(body))
    }
}

fn substitution(body: StatementList) -> ArgumentPart {
    ArgumentPart::Substitution(Box::new(body))
}
