//! Rule contract

use crate::lint::message::{LintMessage, Severity};
use crate::model::{Routine, Sequence, Synonym, Table, View};

/// Lazy diagnostic sequence returned by rule entry points.
///
/// The sequence is finite and single-pass; a caller may stop after the
/// first message without the rule evaluating the remaining objects.
pub type MessageIter<'a> = Box<dyn Iterator<Item = LintMessage> + 'a>;

/// A single schema quality check.
///
/// Entry points are keyed by object kind; a rule implements the kinds it
/// inspects and inherits empty sequences for the rest. Rules never fail for
/// data states (empty collections, missing keys, zero columns) — absence of
/// a condition yields no message. Within one object's evaluation, message
/// order follows the declaration order of the inspected elements.
pub trait Rule: Send + Sync {
    /// Stable identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Severity attached to every message this instance produces.
    fn severity(&self) -> Severity;

    fn check_tables<'a>(&'a self, _tables: &'a [Table]) -> MessageIter<'a> {
        Box::new(std::iter::empty())
    }

    fn check_views<'a>(&'a self, _views: &'a [View]) -> MessageIter<'a> {
        Box::new(std::iter::empty())
    }

    fn check_sequences<'a>(&'a self, _sequences: &'a [Sequence]) -> MessageIter<'a> {
        Box::new(std::iter::empty())
    }

    fn check_synonyms<'a>(&'a self, _synonyms: &'a [Synonym]) -> MessageIter<'a> {
        Box::new(std::iter::empty())
    }

    fn check_routines<'a>(&'a self, _routines: &'a [Routine]) -> MessageIter<'a> {
        Box::new(std::iter::empty())
    }
}
