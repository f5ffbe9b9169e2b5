// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn slice_returns_spanned_text() {
    assert_eq!(Span::new(0, 4).slice("echo hi"), "echo");
    assert_eq!(Span::empty(3).slice("echo hi"), "");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(4, 40).slice("echo"), "");
}

#[test]
fn merge_covers_both() {
    let merged = Span::new(4, 6).merge(Span::new(1, 5));
    assert_eq!(merged, Span::new(1, 6));
    assert_eq!(merged.len(), 5);
}

#[test]
fn locate_first_line() {
    let (line, col, text) = locate_span("echo a | b", Span::new(7, 8));
    assert_eq!((line, col, text), (1, 7, "echo a | b"));
}

#[test]
fn locate_later_line() {
    let source = "echo a\necho b\ncat x";
    let (line, col, text) = locate_span(source, Span::new(18, 19));
    assert_eq!(line, 3);
    assert_eq!(col, 4);
    assert_eq!(text, "cat x");
}

#[test]
fn locate_counts_characters_not_bytes() {
    let (_, col, _) = locate_span("echo é x", Span::new(8, 9));
    assert_eq!(col, 7);
}

#[test]
fn locate_clamps_past_end() {
    let (line, col, text) = locate_span("ab\ncd", Span::empty(99));
    assert_eq!((line, col, text), (2, 2, "cd"));
}

#[test]
fn diagnostic_points_at_span() {
    let diag = diagnostic_context("echo $(ls", Span::empty(9), "unexpected end of input");
    assert!(diag.starts_with("error: unexpected end of input"));
    assert!(diag.contains("line 1, column 10"));
    assert!(diag.contains("  1 | echo $(ls"));
    assert!(diag.ends_with("|          ^"));
}
