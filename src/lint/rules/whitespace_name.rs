//! Names with leading or trailing whitespace

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::{Identifier, Routine, Sequence, Synonym, Table, View};

/// Flags object and column names that differ from their trimmed form.
///
/// Such names are legal in quoted identifiers but invisible in most tools.
/// Applies to tables, views, sequences, synonyms and routines, and to table
/// and view column names; the name is compared verbatim.
pub struct WhitespaceName {
    severity: Severity,
}

impl WhitespaceName {
    pub const NAME: &'static str = "whitespace-name";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }

    fn has_edge_whitespace(name: &str) -> bool {
        name.trim() != name
    }

    fn message(&self, object: &Identifier, text: String) -> LintMessage {
        LintMessage::new(self.severity, Self::NAME, object.clone(), text)
    }
}

impl Rule for WhitespaceName {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check_tables<'a>(&'a self, tables: &'a [Table]) -> MessageIter<'a> {
        Box::new(tables.iter().flat_map(move |table| {
            let object = Self::has_edge_whitespace(&table.name.name).then(|| {
                self.message(
                    &table.name,
                    format!(
                        "table name {:?} has leading or trailing whitespace",
                        table.name.name
                    ),
                )
            });
            let columns = table
                .columns
                .iter()
                .filter(|column| Self::has_edge_whitespace(&column.name))
                .map(move |column| {
                    self.message(
                        &table.name,
                        format!(
                            "column name {:?} has leading or trailing whitespace",
                            column.name
                        ),
                    )
                });
            object.into_iter().chain(columns)
        }))
    }

    fn check_views<'a>(&'a self, views: &'a [View]) -> MessageIter<'a> {
        Box::new(views.iter().flat_map(move |view| {
            let object = Self::has_edge_whitespace(&view.name.name).then(|| {
                self.message(
                    &view.name,
                    format!(
                        "view name {:?} has leading or trailing whitespace",
                        view.name.name
                    ),
                )
            });
            let columns = view
                .columns
                .iter()
                .filter(|column| Self::has_edge_whitespace(&column.name))
                .map(move |column| {
                    self.message(
                        &view.name,
                        format!(
                            "column name {:?} has leading or trailing whitespace",
                            column.name
                        ),
                    )
                });
            object.into_iter().chain(columns)
        }))
    }

    fn check_sequences<'a>(&'a self, sequences: &'a [Sequence]) -> MessageIter<'a> {
        Box::new(
            sequences
                .iter()
                .filter(|sequence| Self::has_edge_whitespace(&sequence.name.name))
                .map(move |sequence| {
                    self.message(
                        &sequence.name,
                        format!(
                            "sequence name {:?} has leading or trailing whitespace",
                            sequence.name.name
                        ),
                    )
                }),
        )
    }

    fn check_synonyms<'a>(&'a self, synonyms: &'a [Synonym]) -> MessageIter<'a> {
        Box::new(
            synonyms
                .iter()
                .filter(|synonym| Self::has_edge_whitespace(&synonym.name.name))
                .map(move |synonym| {
                    self.message(
                        &synonym.name,
                        format!(
                            "synonym name {:?} has leading or trailing whitespace",
                            synonym.name.name
                        ),
                    )
                }),
        )
    }

    fn check_routines<'a>(&'a self, routines: &'a [Routine]) -> MessageIter<'a> {
        Box::new(
            routines
                .iter()
                .filter(|routine| Self::has_edge_whitespace(&routine.name.name))
                .map(move |routine| {
                    self.message(
                        &routine.name,
                        format!(
                            "routine name {:?} has leading or trailing whitespace",
                            routine.name.name
                        ),
                    )
                }),
        )
    }
}
