//! Provider snapshot container

use super::elements::{Routine, Sequence, Synonym, Table, View};

/// A full schema snapshot as supplied by a provider.
///
/// Iteration order is the provider's: tables, columns and index key columns
/// arrive in declaration order and are kept that way.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatabaseSchema {
    pub tables: Vec<Table>,
    pub views: Vec<View>,
    pub sequences: Vec<Sequence>,
    pub synonyms: Vec<Synonym>,
    pub routines: Vec<Routine>,
}

impl DatabaseSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(mut self, tables: Vec<Table>) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_views(mut self, views: Vec<View>) -> Self {
        self.views = views;
        self
    }

    pub fn with_sequences(mut self, sequences: Vec<Sequence>) -> Self {
        self.sequences = sequences;
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<Synonym>) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn with_routines(mut self, routines: Vec<Routine>) -> Self {
        self.routines = routines;
        self
    }

    /// True when the snapshot holds no objects of any kind.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
            && self.views.is_empty()
            && self.sequences.is_empty()
            && self.synonyms.is_empty()
            && self.routines.is_empty()
    }
}
