//! Tables with no relationships

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags tables that neither reference another table nor are referenced by
/// one.
///
/// Genuine standalone tables exist (settings, logs), so this usually runs
/// at an advisory severity.
pub struct OrphanedTable {
    severity: Severity,
}

impl OrphanedTable {
    pub const NAME: &'static str = "orphaned-table";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Rule for OrphanedTable {
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
                .filter(|table| table.parent_keys.is_empty() && table.child_keys.is_empty())
                .map(move |table| {
                    LintMessage::new(
                        self.severity,
                        Self::NAME,
                        table.name.clone(),
                        "table has no relationships to other tables",
                    )
                }),
        )
    }
}
