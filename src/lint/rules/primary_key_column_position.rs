//! Primary key column position

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags single-column primary keys whose column is not the table's first
/// declared column.
///
/// Multi-column primary keys are never flagged; there is no single obvious
/// position for them.
pub struct PrimaryKeyColumnNotFirstColumn {
    severity: Severity,
}

impl PrimaryKeyColumnNotFirstColumn {
    pub const NAME: &'static str = "primary-key-column-not-first";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }

    fn out_of_position(table: &Table) -> Option<&str> {
        let key = table.primary_key.as_ref()?;
        let [key_column] = key.columns.as_slice() else {
            return None;
        };
        let first = table.columns.first()?;
        if first.name.eq_ignore_ascii_case(key_column) {
            None
        } else {
            Some(key_column)
        }
    }
}

impl Rule for PrimaryKeyColumnNotFirstColumn {
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
                    Self::out_of_position(table).map(|key_column| (table, key_column))
                })
                .map(move |(table, key_column)| {
                    LintMessage::new(
                        self.severity,
                        Self::NAME,
                        table.name.clone(),
                        format!(
                            "primary key column {key_column} is not the table's first column"
                        ),
                    )
                }),
        )
    }
}
