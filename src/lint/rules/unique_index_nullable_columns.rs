//! Unique indexes over nullable columns

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags unique indexes with at least one nullable key column, one message
/// per index.
///
/// Engines disagree on how many nulls a unique index admits, so uniqueness
/// over a nullable column rarely enforces what the author intended. Key
/// columns that do not resolve to a physical column (raw expressions) carry
/// no nullability and are skipped.
pub struct UniqueIndexWithNullableColumns {
    severity: Severity,
}

impl UniqueIndexWithNullableColumns {
    pub const NAME: &'static str = "unique-index-nullable-columns";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Rule for UniqueIndexWithNullableColumns {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check_tables<'a>(&'a self, tables: &'a [Table]) -> MessageIter<'a> {
        Box::new(tables.iter().flat_map(move |table| {
            table
                .indexes
                .iter()
                .filter(|index| index.is_unique)
                .filter_map(move |index| {
                    let nullable: Vec<&str> = index
                        .columns
                        .iter()
                        .filter_map(|index_column| table.index_column(index_column))
                        .filter(|column| column.is_nullable)
                        .map(|column| column.name.as_str())
                        .collect();
                    if nullable.is_empty() {
                        return None;
                    }
                    Some(LintMessage::new(
                        self.severity,
                        Self::NAME,
                        table.name.clone(),
                        format!(
                            "unique index {} covers nullable columns: {}",
                            index.display_name(),
                            nullable.join(", ")
                        ),
                    ))
                })
        }))
    }
}
