// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn word(text: &str) -> Argument {
    Argument::new(vec![ArgumentPart::Literal(text.to_string())], Span::default())
}

fn echo_hi() -> StatementList {
    let command = Command::new(
        vec![],
        vec![word("echo"), word("hi")],
        None,
        None,
        None,
        Span::new(0, 7),
    );
    let pipeline = Pipeline::new(vec![command], Span::new(0, 7));
    StatementList::new(
        vec![Statement::new(pipeline, false, Span::new(0, 7))],
        Span::new(0, 7),
    )
}

#[test]
fn empty_literal_is_no_part() {
    assert_eq!(ArgumentPart::literal(""), None);
    assert_eq!(
        ArgumentPart::literal("x"),
        Some(ArgumentPart::Literal("x".to_string()))
    );
}

#[test]
fn as_literal_only_matches_literals() {
    assert_eq!(ArgumentPart::Literal("a".into()).as_literal(), Some("a"));
    assert_eq!(ArgumentPart::Parameter("a".into()).as_literal(), None);
    assert_eq!(ArgumentPart::Glob(Glob::Star).as_literal(), None);
}

#[test]
fn literal_text_concatenates_parts() {
    let argument = Argument::new(
        vec![
            ArgumentPart::Literal("a".into()),
            ArgumentPart::Literal("b".into()),
        ],
        Span::default(),
    );
    assert_eq!(argument.literal_text().as_deref(), Some("ab"));
}

#[test]
fn literal_text_rejects_globs() {
    let argument = Argument::new(
        vec![
            ArgumentPart::Literal("a".into()),
            ArgumentPart::Glob(Glob::Star),
        ],
        Span::default(),
    );
    assert_eq!(argument.literal_text(), None);
}

#[test]
fn empty_command() {
    let command = Command::new(vec![], vec![], None, None, None, Span::default());
    assert!(command.is_empty());
    assert_eq!(command.name(), None);

    let redirect_only = Command::new(vec![], vec![], Some(word("f")), None, None, Span::default());
    assert!(!redirect_only.is_empty());

    let assignment_only = Command::new(
        vec![Assignment::new("A", None, Span::default())],
        vec![],
        None,
        None,
        None,
        Span::default(),
    );
    assert!(!assignment_only.is_empty());
}

#[test]
fn command_name_is_first_argument() {
    let list = echo_hi();
    let command = &list.statements[0].pipeline.commands[0];
    assert_eq!(command.name(), Some(&word("echo")));
}

#[test]
fn pipeline_len() {
    let list = echo_hi();
    assert_eq!(list.statements[0].pipeline.len(), 1);
    assert!(!list.statements[0].pipeline.is_empty());
    assert!(Pipeline::new(vec![], Span::default()).is_empty());
}

#[test]
fn default_statement_list_is_empty() {
    assert!(StatementList::default().is_empty());
    assert!(!echo_hi().is_empty());
}

#[test]
fn dropping_a_nested_tree() {
    let mut list = echo_hi();
    for _ in 0..64 {
        let substitution = ArgumentPart::Substitution(Box::new(list));
        let argument = Argument::new(vec![substitution], Span::default());
        let command = Command::new(vec![], vec![argument], None, None, None, Span::default());
        let pipeline = Pipeline::new(vec![command], Span::default());
        list = StatementList::new(
            vec![Statement::new(pipeline, false, Span::default())],
            Span::default(),
        );
    }
    assert_eq!(list.max_substitution_depth(), 64);
    drop(list);
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn argument_parts_serialize_as_tagged_variants() {
    let parts = vec![
        ArgumentPart::Literal("a".into()),
        ArgumentPart::Parameter("HOME".into()),
        ArgumentPart::Glob(Glob::Charset("ab".into())),
        ArgumentPart::Glob(Glob::One),
    ];
    let json = serde_json::to_value(&parts).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "literal": "a" },
            { "parameter": "HOME" },
            { "glob": { "charset": "ab" } },
            { "glob": "one" },
        ])
    );
}

#[test]
fn tree_survives_json() {
    let list = echo_hi();
    let json = serde_json::to_string(&list).unwrap();
    let back: StatementList = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
}

#[test]
fn command_json_shape() {
    let list = echo_hi();
    let json = serde_json::to_value(&list.statements[0].pipeline.commands[0]).unwrap();
    assert_eq!(json["arguments"][1]["parts"][0]["literal"], "hi");
    assert_eq!(json["input_file"], serde_json::Value::Null);
    assert_eq!(json["span"]["end"], 7);
}
