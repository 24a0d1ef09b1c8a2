//! Object names colliding with reserved words

use std::collections::HashSet;

use crate::lint::keywords::ansi_reserved_words;
use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::{Identifier, Routine, Sequence, Synonym, Table, View};

/// Flags object and column names that appear in the dialect's reserved
/// word set.
///
/// Matching is case-sensitive against the supplied set; the provider knows
/// whether its dialect folds identifiers. Applies to tables, views,
/// sequences, synonyms and routines, and to table and view column names.
pub struct ReservedKeywordName {
    severity: Severity,
    keywords: HashSet<String>,
}

impl ReservedKeywordName {
    pub const NAME: &'static str = "reserved-keyword-name";

    /// A rule over a dialect-supplied reserved word set.
    pub fn new(severity: Severity, keywords: HashSet<String>) -> Self {
        Self { severity, keywords }
    }

    /// A rule over the bundled ANSI reserved word list.
    pub fn ansi(severity: Severity) -> Self {
        Self::new(severity, ansi_reserved_words())
    }

    fn is_reserved(&self, name: &str) -> bool {
        self.keywords.contains(name)
    }

    fn message(&self, object: &Identifier, text: String) -> LintMessage {
        LintMessage::new(self.severity, Self::NAME, object.clone(), text)
    }
}

impl Rule for ReservedKeywordName {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check_tables<'a>(&'a self, tables: &'a [Table]) -> MessageIter<'a> {
        Box::new(tables.iter().flat_map(move |table| {
            let object = self.is_reserved(&table.name.name).then(|| {
                self.message(
                    &table.name,
                    format!("table name {} is a reserved word", table.name.name),
                )
            });
            let columns = table
                .columns
                .iter()
                .filter(move |column| self.is_reserved(&column.name))
                .map(move |column| {
                    self.message(
                        &table.name,
                        format!("column name {} is a reserved word", column.name),
                    )
                });
            object.into_iter().chain(columns)
        }))
    }

    fn check_views<'a>(&'a self, views: &'a [View]) -> MessageIter<'a> {
        Box::new(views.iter().flat_map(move |view| {
            let object = self.is_reserved(&view.name.name).then(|| {
                self.message(
                    &view.name,
                    format!("view name {} is a reserved word", view.name.name),
                )
            });
            let columns = view
                .columns
                .iter()
                .filter(move |column| self.is_reserved(&column.name))
                .map(move |column| {
                    self.message(
                        &view.name,
                        format!("column name {} is a reserved word", column.name),
                    )
                });
            object.into_iter().chain(columns)
        }))
    }

    fn check_sequences<'a>(&'a self, sequences: &'a [Sequence]) -> MessageIter<'a> {
        Box::new(
            sequences
                .iter()
                .filter(move |sequence| self.is_reserved(&sequence.name.name))
                .map(move |sequence| {
                    self.message(
                        &sequence.name,
                        format!("sequence name {} is a reserved word", sequence.name.name),
                    )
                }),
        )
    }

    fn check_synonyms<'a>(&'a self, synonyms: &'a [Synonym]) -> MessageIter<'a> {
        Box::new(
            synonyms
                .iter()
                .filter(move |synonym| self.is_reserved(&synonym.name.name))
                .map(move |synonym| {
                    self.message(
                        &synonym.name,
                        format!("synonym name {} is a reserved word", synonym.name.name),
                    )
                }),
        )
    }

    fn check_routines<'a>(&'a self, routines: &'a [Routine]) -> MessageIter<'a> {
        Box::new(
            routines
                .iter()
                .filter(move |routine| self.is_reserved(&routine.name.name))
                .map(move |routine| {
                    self.message(
                        &routine.name,
                        format!("routine name {} is a reserved word", routine.name.name),
                    )
                }),
        )
    }
}
