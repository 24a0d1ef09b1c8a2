//! schema-vet: quality rules and DBML-style export for database schemas
//!
//! A schema provider supplies an immutable [`model::DatabaseSchema`]
//! snapshot; this library evaluates a catalog of schema quality rules over
//! it and renders tables into a compact text notation. It never connects to
//! a database and never mutates the snapshot.

pub mod error;
pub mod export;
pub mod lint;
pub mod model;

mod util;

pub use error::SchemaVetError;

/// Run the default rule catalog over a schema snapshot.
pub fn vet(schema: &model::DatabaseSchema) -> Vec<lint::LintMessage> {
    lint::Linter::new().check(schema)
}
