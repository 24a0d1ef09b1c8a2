//! Foreign keys without a supporting index

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags foreign keys whose child table has no index starting with the
/// foreign key's columns.
///
/// An index qualifies only when its leading key columns equal the foreign
/// key's columns in declared order; a column-order mismatch disqualifies it
/// and included (non-key) columns never participate in the match.
pub struct ForeignKeyIndex {
    severity: Severity,
}

impl ForeignKeyIndex {
    pub const NAME: &'static str = "foreign-key-index";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }

    fn is_covered(table: &Table, foreign_columns: &[String]) -> bool {
        if foreign_columns.is_empty() {
            return true;
        }
        table.indexes.iter().any(|index| {
            index.columns.len() >= foreign_columns.len()
                && index
                    .columns
                    .iter()
                    .zip(foreign_columns)
                    .all(|(index_column, foreign_column)| {
                        index_column.key_name().eq_ignore_ascii_case(foreign_column)
                    })
        })
    }
}

impl Rule for ForeignKeyIndex {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check_tables<'a>(&'a self, tables: &'a [Table]) -> MessageIter<'a> {
        Box::new(tables.iter().flat_map(move |table| {
            table
                .parent_keys
                .iter()
                .filter(|relation| !Self::is_covered(table, &relation.child_key.columns))
                .map(move |relation| {
                    LintMessage::new(
                        self.severity,
                        Self::NAME,
                        table.name.clone(),
                        format!(
                            "foreign key {} ({}) has no supporting index",
                            relation.child_key.display_name(),
                            relation.child_key.columns.join(", ")
                        ),
                    )
                })
        }))
    }
}
