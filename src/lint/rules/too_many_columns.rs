//! Overly wide tables

use crate::error::SchemaVetError;
use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags tables whose column count exceeds a configurable limit.
pub struct TooManyColumns {
    severity: Severity,
    limit: usize,
}

impl TooManyColumns {
    pub const NAME: &'static str = "too-many-columns";

    /// Limit applied when the caller does not choose one.
    pub const DEFAULT_LIMIT: usize = 30;

    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// A rule with a caller-chosen limit. Fails for a zero limit.
    pub fn with_limit(severity: Severity, limit: usize) -> Result<Self, SchemaVetError> {
        if limit == 0 {
            return Err(SchemaVetError::InvalidColumnLimit { limit });
        }
        Ok(Self { severity, limit })
    }
}

impl Rule for TooManyColumns {
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
                .filter(move |table| table.columns.len() > self.limit)
                .map(move |table| {
                    LintMessage::new(
                        self.severity,
                        Self::NAME,
                        table.name.clone(),
                        format!(
                            "table has {} columns (limit {})",
                            table.columns.len(),
                            self.limit
                        ),
                    )
                }),
        )
    }
}
