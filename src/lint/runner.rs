//! Rule evaluation orchestration

use rayon::prelude::*;
use tracing::debug;

use crate::lint::message::{LintMessage, LintReport};
use crate::lint::rule::Rule;
use crate::lint::rules::default_rules;
use crate::model::DatabaseSchema;

/// Minimum number of tables to benefit from parallel rule evaluation.
/// Below this threshold, sequential evaluation is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 64;

/// Runs a fixed list of rules over a schema snapshot.
///
/// Rules are pure functions of the immutable snapshot, so they evaluate in
/// parallel for larger schemas. Message order across rules is unspecified
/// on the parallel path; order within one rule's evaluation stays
/// deterministic.
pub struct Linter {
    rules: Vec<Box<dyn Rule>>,
}

impl Linter {
    /// A linter over the full default rule catalog.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// A linter over a caller-chosen rule list.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Evaluate every rule against the snapshot and collect the diagnostics.
    ///
    /// Callers needing to short-circuit after the first message use a rule's
    /// lazy entry points directly instead.
    pub fn check(&self, schema: &DatabaseSchema) -> Vec<LintMessage> {
        let messages: Vec<LintMessage> = if schema.tables.len() >= PARALLEL_THRESHOLD {
            // Evaluate rules in parallel using rayon for larger schemas
            self.rules
                .par_iter()
                .flat_map_iter(|rule| Self::evaluate(rule.as_ref(), schema))
                .collect()
        } else {
            // Sequential evaluation for small schemas (avoids rayon overhead)
            self.rules
                .iter()
                .flat_map(|rule| Self::evaluate(rule.as_ref(), schema))
                .collect()
        };

        debug!(
            rules = self.rules.len(),
            tables = schema.tables.len(),
            messages = messages.len(),
            "schema check complete"
        );
        messages
    }

    /// Evaluate the snapshot and wrap the diagnostics with severity tallies.
    pub fn report(&self, schema: &DatabaseSchema) -> LintReport {
        LintReport::new(self.check(schema))
    }

    /// Chain one rule's entry points across every object kind.
    fn evaluate<'a>(
        rule: &'a dyn Rule,
        schema: &'a DatabaseSchema,
    ) -> impl Iterator<Item = LintMessage> + 'a {
        rule.check_tables(&schema.tables)
            .chain(rule.check_views(&schema.views))
            .chain(rule.check_sequences(&schema.sequences))
            .chain(rule.check_synonyms(&schema.synonyms))
            .chain(rule.check_routines(&schema.routines))
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
