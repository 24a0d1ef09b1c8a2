//! Diagnostic message types

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SchemaVetError;
use crate::model::Identifier;

/// Diagnostic severity, ordered least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SchemaVetError;

    /// Accepts `info`, `warn`, `warning` and `error`, ASCII
    /// case-insensitively. Anything else fails with
    /// [`SchemaVetError::InvalidSeverity`].
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(SchemaVetError::InvalidSeverity {
                value: value.to_string(),
            }),
        }
    }
}

/// A single diagnostic produced by a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintMessage {
    pub severity: Severity,
    /// Stable rule identifier, e.g. `redundant-indexes`.
    pub rule: &'static str,
    /// The object the finding is about.
    pub object: Identifier,
    pub text: String,
}

impl LintMessage {
    pub fn new(
        severity: Severity,
        rule: &'static str,
        object: Identifier,
        text: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            rule,
            object,
            text: text.into(),
        }
    }
}

impl fmt::Display for LintMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity, self.rule, self.object, self.text
        )
    }
}

/// Aggregated diagnostics with severity tallies.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LintReport {
    pub messages: Vec<LintMessage>,
}

impl LintReport {
    pub fn new(messages: Vec<LintMessage>) -> Self {
        Self { messages }
    }

    fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|message| message.severity == severity)
            .count()
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages at or above a severity cutoff.
    pub fn at_or_above(&self, severity: Severity) -> impl Iterator<Item = &LintMessage> {
        self.messages
            .iter()
            .filter(move |message| message.severity >= severity)
    }
}
