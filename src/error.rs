//! Error types for schema-vet

use thiserror::Error;

/// Errors that can occur while configuring schema checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaVetError {
    #[error("Unrecognized severity: {value}")]
    InvalidSeverity { value: String },

    #[error("Column count limit must be at least 1, got {limit}")]
    InvalidColumnLimit { limit: usize },
}
