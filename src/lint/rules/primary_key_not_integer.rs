//! Non-integer primary keys

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::{Table, TypeClass};

/// Flags primary keys that are not a single integer column.
///
/// A single-column key is flagged when its column classifies as anything
/// other than integer; a composite key is flagged unconditionally, whatever
/// the member types.
pub struct PrimaryKeyNotInteger {
    severity: Severity,
}

impl PrimaryKeyNotInteger {
    pub const NAME: &'static str = "primary-key-not-integer";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }

    fn finding(table: &Table) -> Option<String> {
        let key = table.primary_key.as_ref()?;
        match key.columns.as_slice() {
            [] => None,
            [key_column] => {
                let column = table.column(key_column)?;
                if column.class == TypeClass::Integer {
                    None
                } else {
                    Some(format!(
                        "primary key column {} is not an integer type",
                        column.name
                    ))
                }
            }
            _ => Some("composite primary key is not a single integer column".to_string()),
        }
    }
}

impl Rule for PrimaryKeyNotInteger {
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
                .filter_map(|table| Self::finding(table).map(|text| (table, text)))
                .map(move |(table, text)| {
                    LintMessage::new(self.severity, Self::NAME, table.name.clone(), text)
                }),
        )
    }
}
