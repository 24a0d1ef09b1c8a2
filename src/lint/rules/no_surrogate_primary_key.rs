//! Composite primary keys

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags primary keys spanning more than one column.
///
/// A single-column primary key never triggers this rule, whatever its type;
/// tables without a primary key are a different finding entirely.
pub struct NoSurrogatePrimaryKey {
    severity: Severity,
}

impl NoSurrogatePrimaryKey {
    pub const NAME: &'static str = "no-surrogate-primary-key";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Rule for NoSurrogatePrimaryKey {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check_tables<'a>(&'a self, tables: &'a [Table]) -> MessageIter<'a> {
        Box::new(
            tables
                .iter()
                .filter_map(|table| {
                    table
                        .primary_key
                        .as_ref()
                        .filter(|key| key.columns.len() > 1)
                        .map(|key| (table, key))
                })
                .map(move |(table, key)| {
                    LintMessage::new(
                        self.severity,
                        Self::NAME,
                        table.name.clone(),
                        format!(
                            "primary key {} spans {} columns",
                            key.display_name(),
                            key.columns.len()
                        ),
                    )
                }),
        )
    }
}
