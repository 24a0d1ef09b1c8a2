//! Tables without any candidate key

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags tables that have neither a primary key nor a unique key.
///
/// Such tables cannot be addressed row-by-row and usually indicate a
/// missing constraint rather than a deliberate design.
pub struct CandidateKeyMissing {
    severity: Severity,
}

impl CandidateKeyMissing {
    pub const NAME: &'static str = "candidate-key-missing";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Rule for CandidateKeyMissing {
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
                .filter(|table| !table.has_candidate_key())
                .map(move |table| {
                    LintMessage::new(
                        self.severity,
                        Self::NAME,
                        table.name.clone(),
                        "table has no primary key and no unique key",
                    )
                }),
        )
    }
}
