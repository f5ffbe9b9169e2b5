// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-offset source locations and diagnostic rendering.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` in the parsed input.
///
/// Offsets always fall on ASCII delimiters or the ends of the input, so
/// slicing with a span produced by the scanner never splits a UTF-8
/// character.
///
/// # Examples
///
/// ```
/// use ush_syntax::Span;
///
/// let span = Span::new(5, 10);
/// assert_eq!(span.slice("echo hello"), "hello");
/// assert_eq!(span.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// A zero-width span at `pos`.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The spanned text, or `""` when the span does not fit `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Find the line holding `span.start`.
///
/// Returns `(line, column, line_text)`: the line is 1-indexed, the column is
/// a 0-indexed character count from the line start, and `line_text` has no
/// trailing newline. Spans past the end of `source` clamp to its last line.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let offset = span.start.min(source.len());
    let before = source.get(..offset).unwrap_or(source);

    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_num = before.matches('\n').count() + 1;
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let col = before[line_start..].chars().count();
    (line_num, col, &source[line_start..line_end])
}

/// Render `message` with a gutter, the offending line and carets under the span.
///
/// ```text
/// error: expected token of type right-paren, got end-of-input
///   --> line 1, column 11
///    |
///  1 | echo $(ls
///    |           ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    let carets = span.len().max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(carets)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
