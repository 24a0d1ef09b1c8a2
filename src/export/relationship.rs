//! Relationship cardinality classification

use std::collections::HashSet;

use crate::model::{RelationalKey, Table};
use crate::util::name_set;

/// Cardinality of a foreign key relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// The child key covers a candidate key or unique index of the parent
    /// table: each parent row matches at most one child row.
    OneToOne,
    OneToMany,
}

impl Cardinality {
    /// Notation marker used in relationship lines.
    pub fn marker(self) -> &'static str {
        match self {
            Cardinality::OneToOne => "-",
            Cardinality::OneToMany => ">",
        }
    }

    /// Classify a relationship against its resolved parent table.
    ///
    /// The child key's column set is compared, order-insensitively and ASCII
    /// case-insensitively, against the parent table's primary key columns,
    /// each unique key's columns and each unique index's key columns (index
    /// columns named by their resolved physical column, else by their raw
    /// expression). Any match is one-to-one. An unresolvable parent table is
    /// a data state and classifies as one-to-many.
    pub fn classify(relation: &RelationalKey, parent: Option<&Table>) -> Cardinality {
        let Some(parent) = parent else {
            return Cardinality::OneToMany;
        };
        let child_set = name_set(&relation.child_key.columns);
        if child_set.is_empty() {
            return Cardinality::OneToMany;
        }

        let primary = parent.primary_key.iter().map(|key| name_set(&key.columns));
        let unique_keys = parent.unique_keys.iter().map(|key| name_set(&key.columns));
        let unique_indexes = parent
            .indexes
            .iter()
            .filter(|index| index.is_unique)
            .map(|index| {
                index
                    .columns
                    .iter()
                    .map(|index_column| index_column.key_name().to_ascii_lowercase())
                    .collect::<HashSet<String>>()
            });

        if primary
            .chain(unique_keys)
            .chain(unique_indexes)
            .any(|key_set| key_set == child_set)
        {
            Cardinality::OneToOne
        } else {
            Cardinality::OneToMany
        }
    }
}
