// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visitor pattern for traversing the AST.

use super::{
    Argument, ArgumentPart, Assignment, Command, Glob, Pipeline, Statement, StatementList,
};

/// Visitor trait for traversing the AST.
///
/// Every `visit_*` method defaults to its `walk_*` counterpart, which
/// descends into the node's children in source order. Override a `visit_*`
/// method to act on a node; call the matching `walk_*` from it to keep
/// descending, or skip the call to prune that subtree.
///
/// Command substitutions are walked like any other subtree, so a visitor
/// sees the statements nested in `$(...)` and backticks.
///
/// # Example
///
/// ```
/// use ush_syntax::{parse_input, AstVisitor, Command};
///
/// struct ProgramNames(Vec<String>);
///
/// impl AstVisitor for ProgramNames {
///     fn visit_command(&mut self, command: &Command) {
///         if let Some(name) = command.name().and_then(|arg| arg.literal_text()) {
///             self.0.push(name);
///         }
///         self.walk_command(command);
///     }
/// }
///
/// let ast = parse_input("echo $(cat file | grep x)")?;
/// let mut names = ProgramNames(Vec::new());
/// names.visit_statement_list(&ast);
/// assert_eq!(names.0, vec!["echo", "cat", "grep"]);
/// # Ok::<(), ush_syntax::ParseError>(())
/// ```
pub trait AstVisitor {
    fn visit_statement_list(&mut self, list: &StatementList) {
        self.walk_statement_list(list);
    }

    fn visit_statement(&mut self, statement: &Statement) {
        self.walk_statement(statement);
    }

    fn visit_pipeline(&mut self, pipeline: &Pipeline) {
        self.walk_pipeline(pipeline);
    }

    fn visit_command(&mut self, command: &Command) {
        self.walk_command(command);
    }

    fn visit_assignment(&mut self, assignment: &Assignment) {
        self.walk_assignment(assignment);
    }

    fn visit_argument(&mut self, argument: &Argument) {
        self.walk_argument(argument);
    }

    fn visit_argument_part(&mut self, part: &ArgumentPart) {
        self.walk_argument_part(part);
    }

    /// Globs are leaves; there is nothing to walk.
    fn visit_glob(&mut self, _glob: &Glob) {}

    /// Entered for the body of every `$(...)` or backtick substitution,
    /// before the body itself is visited.
    fn visit_substitution(&mut self, body: &StatementList) {
        self.visit_statement_list(body);
    }

    fn walk_statement_list(&mut self, list: &StatementList) {
        for statement in &list.statements {
            self.visit_statement(statement);
        }
    }

    fn walk_statement(&mut self, statement: &Statement) {
        self.visit_pipeline(&statement.pipeline);
    }

    fn walk_pipeline(&mut self, pipeline: &Pipeline) {
        for command in &pipeline.commands {
            self.visit_command(command);
        }
    }

    /// Assignments first, then arguments, then `<`, `>`, `>>` targets.
    fn walk_command(&mut self, command: &Command) {
        for assignment in &command.assignments {
            self.visit_assignment(assignment);
        }
        for argument in &command.arguments {
            self.visit_argument(argument);
        }
        let redirects = [
            &command.input_file,
            &command.output_file,
            &command.append_file,
        ];
        for target in redirects.into_iter().flatten() {
            self.visit_argument(target);
        }
    }

    fn walk_assignment(&mut self, assignment: &Assignment) {
        if let Some(value) = &assignment.value {
            self.visit_argument(value);
        }
    }

    fn walk_argument(&mut self, argument: &Argument) {
        for part in &argument.parts {
            self.visit_argument_part(part);
        }
    }

    fn walk_argument_part(&mut self, part: &ArgumentPart) {
        match part {
            ArgumentPart::Glob(glob) => self.visit_glob(glob),
            ArgumentPart::Substitution(body) => self.visit_substitution(body),
            ArgumentPart::Literal(_) | ArgumentPart::Parameter(_) => {}
        }
    }
}
