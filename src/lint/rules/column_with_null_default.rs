//! Columns defaulting to the literal null

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags columns whose default-value expression is the literal `null`.
///
/// A null default is a no-op on every engine; the expression is compared
/// textually, ASCII case-insensitively, without interpreting the dialect.
pub struct ColumnWithNullDefaultValue {
    severity: Severity,
}

impl ColumnWithNullDefaultValue {
    pub const NAME: &'static str = "column-with-null-default";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Rule for ColumnWithNullDefaultValue {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check_tables<'a>(&'a self, tables: &'a [Table]) -> MessageIter<'a> {
        Box::new(tables.iter().flat_map(move |table| {
            table
                .columns
                .iter()
                .filter(|column| {
                    column
                        .default_value
                        .as_deref()
                        .is_some_and(|default| default.eq_ignore_ascii_case("null"))
                })
                .map(move |column| {
                    LintMessage::new(
                        self.severity,
                        Self::NAME,
                        table.name.clone(),
                        format!("column {} defaults to the literal null", column.name),
                    )
                })
        }))
    }
}
