//! Qualified object names

use std::fmt;

use serde::Serialize;

/// A qualified object name with up to four ordered parts.
///
/// Only the local name is mandatory. Providers fill in the schema, database
/// and server parts when the source system qualifies them; this crate never
/// re-qualifies a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub server: Option<String>,
    pub database: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

impl Identifier {
    /// An identifier carrying only a local name.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            server: None,
            database: None,
            schema: None,
            name: name.into(),
        }
    }

    /// A schema-qualified identifier.
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            server: None,
            database: None,
            schema: Some(schema.into()),
            name: name.into(),
        }
    }

    /// Add the database part.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Add the server part.
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// The qualified form: present parts joined with `.`, most general first.
    pub fn full_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4);
        if let Some(server) = &self.server {
            parts.push(server);
        }
        if let Some(database) = &self.database {
            parts.push(database);
        }
        if let Some(schema) = &self.schema {
            parts.push(schema);
        }
        parts.push(&self.name);
        parts.join(".")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
