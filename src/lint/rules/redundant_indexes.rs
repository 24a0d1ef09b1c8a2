//! Duplicate and overlapping indexes

use crate::lint::message::{LintMessage, Severity};
use crate::lint::rule::{MessageIter, Rule};
use crate::model::{Index, Table};
use crate::util::name_set;

/// Flags index pairs where one index is a duplicate or an ordered
/// key-column prefix of the other.
///
/// Key columns compare positionally, including sort direction; a pair with
/// the same columns in a different order, or a direction mismatch inside
/// the shared prefix, is not redundant. Included columns compare as sets
/// and the pair stays redundant only when one included set contains the
/// other. One message per redundant pair, in declaration order.
pub struct RedundantIndexes {
    severity: Severity,
}

impl RedundantIndexes {
    pub const NAME: &'static str = "redundant-indexes";

    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }

    fn keys_form_prefix(first: &Index, second: &Index) -> bool {
        let (shorter, longer) = if first.columns.len() <= second.columns.len() {
            (first, second)
        } else {
            (second, first)
        };
        longer
            .columns
            .iter()
            .zip(&shorter.columns)
            .all(|(long_column, short_column)| {
                long_column
                    .key_name()
                    .eq_ignore_ascii_case(short_column.key_name())
                    && long_column.effective_direction() == short_column.effective_direction()
            })
    }

    fn includes_overlap(first: &Index, second: &Index) -> bool {
        let first_set = name_set(&first.include_columns);
        let second_set = name_set(&second.include_columns);
        first_set.is_subset(&second_set) || second_set.is_subset(&first_set)
    }

    fn redundant(first: &Index, second: &Index) -> bool {
        Self::keys_form_prefix(first, second) && Self::includes_overlap(first, second)
    }
}

impl Rule for RedundantIndexes {
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
                .enumerate()
                .flat_map(move |(position, index)| {
                    table.indexes[position + 1..]
                        .iter()
                        .filter(move |other| Self::redundant(index, other))
                        .map(move |other| {
                            LintMessage::new(
                                self.severity,
                                Self::NAME,
                                table.name.clone(),
                                format!(
                                    "index {} is redundant with index {}",
                                    index.display_name(),
                                    other.display_name()
                                ),
                            )
                        })
                })
        }))
    }
}
