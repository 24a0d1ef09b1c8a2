//! Schema object model

mod database_schema;
mod elements;
mod identifier;

pub use database_schema::DatabaseSchema;
pub use elements::*;
pub use identifier::Identifier;
