// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trees and configs through serde.

use super::parse;
use ush_syntax::{Lexer, ParserConfig, StatementList, Token, TokenKind, ValidatorConfig};

#[test]
fn parsed_tree_round_trips_through_json() {
    let ast = parse("A=1 ls -l *.rs | grep \"$pat\" > out; sleep 1 &");
    let json = serde_json::to_string(&ast).unwrap();
    let back: StatementList = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ast);
}

#[test]
fn statement_json_shape() {
    let ast = parse("sleep 1 &");
    let json = serde_json::to_value(&ast).unwrap();
    let statement = &json["statements"][0];
    assert_eq!(statement["background"], true);
    assert_eq!(statement["span"], serde_json::json!({ "start": 0, "end": 9 }));
    assert_eq!(
        statement["pipeline"]["commands"][0]["arguments"][0]["parts"],
        serde_json::json!([{ "literal": "sleep" }])
    );
}

#[test]
fn tokens_serialize_with_snake_case_kinds() {
    let tokens = Lexer::tokenize("a|b").unwrap();
    let json = serde_json::to_value(&tokens[1]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "pipe", "start": 1, "len": 1 })
    );
    let back: Token = serde_json::from_value(json).unwrap();
    assert_eq!(back.kind, TokenKind::Pipe);
}

#[test]
fn parser_config_defaults_missing_fields() {
    let config: ParserConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ParserConfig::default());
    assert_eq!(config.max_substitution_depth, 32);

    let config: ParserConfig =
        serde_json::from_str(r#"{"max_substitution_depth": 4}"#).unwrap();
    assert_eq!(config.max_substitution_depth, 4);
}

#[test]
fn validator_config_defaults_missing_fields() {
    let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ValidatorConfig::default());
    assert!(config.allow_background);
    assert!(config.allow_standalone_assignments);
    assert_eq!(config.max_substitution_depth, 0);
}
