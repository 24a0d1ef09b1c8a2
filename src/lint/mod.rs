//! Schema quality rules

pub mod keywords;
pub mod message;
pub mod rule;
pub mod rules;
mod runner;

pub use message::{LintMessage, LintReport, Severity};
pub use rule::{MessageIter, Rule};
pub use rules::default_rules;
pub use runner::Linter;
