// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-tree checks on realistic command lines.

use super::{first_command, parse};
use ush_syntax::{validate, ArgumentPart, Glob, StatementList};

#[test]
fn build_line() {
    let ast = parse("CC=clang RUSTFLAGS=\"-C opt-level=3\" cargo build --release 2> /dev/null");
    let cmd = first_command(&ast);
    let names: Vec<_> = cmd.assignments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["CC", "RUSTFLAGS"]);
    let flags = cmd.assignments[1].value.as_ref().unwrap();
    assert_eq!(flags.literal_text().as_deref(), Some("-C opt-level=3"));

    // `2>` is not a descriptor redirect here: `2` is an argument.
    let args: Vec<_> = cmd
        .arguments
        .iter()
        .map(|a| a.literal_text().unwrap())
        .collect();
    assert_eq!(args, vec!["cargo", "build", "--release", "2"]);
    assert_eq!(
        cmd.output_file.as_ref().unwrap().literal_text().as_deref(),
        Some("/dev/null")
    );
}

#[test]
fn find_and_count() {
    let ast = parse("ls src/*.rs | grep -v _tests | wc -l > count.txt &\necho $(cat count.txt) files");
    assert_eq!(ast.statements.len(), 2);

    let first = &ast.statements[0];
    assert!(first.background);
    assert_eq!(first.pipeline.len(), 3);
    assert_eq!(
        first.pipeline.commands[0].arguments[1].parts,
        vec![
            ArgumentPart::Literal("src/".into()),
            ArgumentPart::Glob(Glob::Star),
            ArgumentPart::Literal(".rs".into()),
        ]
    );
    assert!(first.pipeline.commands[2].output_file.is_some());

    let second = &ast.statements[1];
    assert!(!second.background);
    assert!(ast.has_substitutions());
    assert_eq!(ast.count_commands(), 5);
    assert_eq!(validate(&ast), Ok(()));
}

#[test]
fn multi_line_script() {
    let script = "\
cd /tmp
for_each=$(ls)
echo \"found: $for_each\" >> log
";
    let ast = parse(script);
    assert_eq!(ast.statements.len(), 3);
    assert_eq!(ast.collect_parameters(), vec!["for_each"]);
    assert_eq!(ast.max_substitution_depth(), 1);
}

#[test]
fn statement_list_parse_matches_parse_input() {
    let input = "a | b; c &";
    assert_eq!(StatementList::parse(input).unwrap(), parse(input));
}

#[test]
fn spans_slice_back_to_source() {
    let input = "echo  'a b'  \"$x\"y  ;  cat <in";
    let ast = parse(input);
    let echo = first_command(&ast);
    let slices: Vec<_> = echo.arguments.iter().map(|a| a.span.slice(input)).collect();
    assert_eq!(slices, vec!["echo", "'a b'", "\"$x\"y"]);
    assert_eq!(ast.statements[0].span.slice(input), "echo  'a b'  \"$x\"y");

    let cat = &ast.statements[1].pipeline.commands[0];
    assert_eq!(cat.span.slice(input), "cat <in");
    assert_eq!(cat.input_file.as_ref().unwrap().span.slice(input), "in");
}
