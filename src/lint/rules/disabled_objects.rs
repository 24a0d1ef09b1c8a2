//! Disabled constraints, indexes and triggers

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::Table;

/// Flags every disabled key, foreign key, index, check constraint and
/// trigger, one message per object.
///
/// A disabled object is dead weight at best; at worst it gives readers the
/// impression a constraint is enforced when it is not.
pub struct DisabledObjects {
    severity: Severity,
}

impl DisabledObjects {
    pub const NAME: &'static str = "disabled-objects";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Rule for DisabledObjects {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check_tables<'a>(&'a self, tables: &'a [Table]) -> MessageIter<'a> {
        Box::new(tables.iter().flat_map(move |table| {
            let disabled = move |text: String| {
                LintMessage::new(self.severity, Self::NAME, table.name.clone(), text)
            };

            let primary = table
                .primary_key
                .iter()
                .filter(|key| !key.is_enabled)
                .map(move |key| disabled(format!("primary key {} is disabled", key.display_name())));
            let unique = table
                .unique_keys
                .iter()
                .filter(|key| !key.is_enabled)
                .map(move |key| disabled(format!("unique key {} is disabled", key.display_name())));
            let foreign = table
                .parent_keys
                .iter()
                .filter(|relation| !relation.child_key.is_enabled)
                .map(move |relation| {
                    disabled(format!(
                        "foreign key {} is disabled",
                        relation.child_key.display_name()
                    ))
                });
            let indexes = table
                .indexes
                .iter()
                .filter(|index| !index.is_enabled)
                .map(move |index| disabled(format!("index {} is disabled", index.display_name())));
            let checks = table
                .checks
                .iter()
                .filter(|check| !check.is_enabled)
                .map(move |check| {
                    disabled(format!(
                        "check constraint {} is disabled",
                        check.display_name()
                    ))
                });
            let triggers = table
                .triggers
                .iter()
                .filter(|trigger| !trigger.is_enabled)
                .map(move |trigger| disabled(format!("trigger {} is disabled", trigger.name)));

            primary
                .chain(unique)
                .chain(foreign)
                .chain(indexes)
                .chain(checks)
                .chain(triggers)
        }))
    }
}
