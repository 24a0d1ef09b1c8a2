//! Tables without any index or key

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags tables with zero indexes, no primary key and no unique keys.
///
/// Every read against such a table is a full scan.
pub struct NoIndexesPresentOnTable {
    severity: Severity,
}

impl NoIndexesPresentOnTable {
    pub const NAME: &'static str = "no-indexes";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Rule for NoIndexesPresentOnTable {
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
                .filter(|table| {
                    table.indexes.is_empty()
                        && table.primary_key.is_none()
                        && table.unique_keys.is_empty()
                })
                .map(move |table| {
                    LintMessage::new(
                        self.severity,
                        Self::NAME,
                        table.name.clone(),
                        "table has no indexes and no keys",
                    )
                }),
        )
    }
}
