// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Utility methods for querying and analyzing AST nodes.

use super::{ArgumentPart, AstVisitor, Command, StatementList};
use crate::parse_error::ParseError;

impl StatementList {
    /// Parse input string into a statement list.
    ///
    /// This is a convenience wrapper around [`Parser::parse`].
    ///
    /// [`Parser::parse`]: crate::Parser::parse
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        crate::parser::Parser::parse(input)
    }

    /// Count every command in the tree, including pipeline stages and
    /// commands inside substitutions.
    ///
    /// ```
    /// use ush_syntax::StatementList;
    ///
    /// let ast = StatementList::parse("cat f | wc -l; echo `date`")?;
    /// assert_eq!(ast.count_commands(), 4);
    /// # Ok::<(), ush_syntax::ParseError>(())
    /// ```
    pub fn count_commands(&self) -> usize {
        struct Counter(usize);
        impl AstVisitor for Counter {
            fn visit_command(&mut self, command: &Command) {
                self.0 += 1;
                self.walk_command(command);
            }
        }
        let mut counter = Counter(0);
        counter.visit_statement_list(self);
        counter.0
    }

    /// Collect the names of all referenced parameters, de-duplicated, in
    /// order of first appearance.
    ///
    /// ```
    /// use ush_syntax::StatementList;
    ///
    /// let ast = StatementList::parse("echo $HOME ${USER} $HOME $(echo $1)")?;
    /// assert_eq!(ast.collect_parameters(), vec!["HOME", "USER", "1"]);
    /// # Ok::<(), ush_syntax::ParseError>(())
    /// ```
    pub fn collect_parameters(&self) -> Vec<String> {
        struct Collector(Vec<String>);
        impl AstVisitor for Collector {
            fn visit_argument_part(&mut self, part: &ArgumentPart) {
                if let ArgumentPart::Parameter(name) = part {
                    if !self.0.contains(name) {
                        self.0.push(name.clone());
                    }
                }
                self.walk_argument_part(part);
            }
        }
        let mut collector = Collector(Vec::new());
        collector.visit_statement_list(self);
        collector.0
    }

    /// Whether any `$(...)` or backtick substitution appears anywhere.
    pub fn has_substitutions(&self) -> bool {
        self.max_substitution_depth() > 0
    }

    /// Deepest nesting of substitutions; 0 when there are none.
    ///
    /// ```
    /// use ush_syntax::StatementList;
    ///
    /// assert_eq!(StatementList::parse("echo hi")?.max_substitution_depth(), 0);
    /// assert_eq!(StatementList::parse("echo $(a $(b) `c`)")?.max_substitution_depth(), 2);
    /// # Ok::<(), ush_syntax::ParseError>(())
    /// ```
    pub fn max_substitution_depth(&self) -> usize {
        struct DepthTracker {
            current: usize,
            max: usize,
        }
        impl AstVisitor for DepthTracker {
            fn visit_substitution(&mut self, body: &StatementList) {
                self.current += 1;
                self.max = self.max.max(self.current);
                self.visit_statement_list(body);
                self.current -= 1;
            }
        }
        let mut tracker = DepthTracker { current: 0, max: 0 };
        tracker.visit_statement_list(self);
        tracker.max
    }
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
