//! Rule catalog

mod candidate_key_missing;
mod column_with_null_default;
mod disabled_objects;
mod foreign_key_index;
mod no_indexes;
mod no_surrogate_primary_key;
mod orphaned_table;
mod primary_key_column_position;
mod primary_key_not_integer;
mod redundant_indexes;
mod reserved_keyword_name;
mod too_many_columns;
mod unique_index_nullable_columns;
mod whitespace_name;

pub use candidate_key_missing::CandidateKeyMissing;
pub use column_with_null_default::ColumnWithNullDefaultValue;
pub use disabled_objects::DisabledObjects;
pub use foreign_key_index::ForeignKeyIndex;
pub use no_indexes::NoIndexesPresentOnTable;
pub use no_surrogate_primary_key::NoSurrogatePrimaryKey;
pub use orphaned_table::OrphanedTable;
pub use primary_key_column_position::PrimaryKeyColumnNotFirstColumn;
pub use primary_key_not_integer::PrimaryKeyNotInteger;
pub use redundant_indexes::RedundantIndexes;
pub use reserved_keyword_name::ReservedKeywordName;
pub use too_many_columns::TooManyColumns;
pub use unique_index_nullable_columns::UniqueIndexWithNullableColumns;
pub use whitespace_name::WhitespaceName;

use crate::lint::message::Severity;
use crate::lint::rule::Rule;

/// The full rule catalog with default severities.
///
/// Structural findings default to `Warning`; the advisory position and
/// relationship rules default to `Info`. The keyword rule runs over the
/// bundled ANSI word set; callers with a dialect list construct
/// [`ReservedKeywordName`] themselves.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(CandidateKeyMissing::new(Severity::Warning)),
        Box::new(ColumnWithNullDefaultValue::new(Severity::Warning)),
        Box::new(DisabledObjects::new(Severity::Warning)),
        Box::new(ForeignKeyIndex::new(Severity::Warning)),
        Box::new(NoIndexesPresentOnTable::new(Severity::Warning)),
        Box::new(NoSurrogatePrimaryKey::new(Severity::Info)),
        Box::new(OrphanedTable::new(Severity::Info)),
        Box::new(PrimaryKeyColumnNotFirstColumn::new(Severity::Info)),
        Box::new(PrimaryKeyNotInteger::new(Severity::Warning)),
        Box::new(RedundantIndexes::new(Severity::Warning)),
        Box::new(ReservedKeywordName::ansi(Severity::Warning)),
        Box::new(TooManyColumns::new(Severity::Warning)),
        Box::new(UniqueIndexWithNullableColumns::new(Severity::Warning)),
        Box::new(WhitespaceName::new(Severity::Warning)),
    ]
}
