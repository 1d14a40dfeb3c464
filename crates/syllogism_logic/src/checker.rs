//! Rule checker
//!
//! The checker holds an ordered list of rules, applies every one of them to a
//! syllogism and collects a per-rule [`RuleOutcome`]. A rule whose predicate
//! fails is recorded as [`RuleOutcome::Errored`]; the remaining rules still run.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::interpretation::Interpretation;
use crate::rule::{Rule, RuleOutcome, RuleSet};
use crate::standard::StandardRules;
use crate::syllogism::Syllogism;

/// Applies a collection of named rules to syllogisms.
#[derive(Debug, Clone)]
pub struct RuleChecker {
    rules: RuleSet,
    stats: Arc<RwLock<CheckerStats>>,
}

impl RuleChecker {
    /// Creates a checker with no rules.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::new("default"))
    }

    /// Creates a checker over `rules`.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            stats: Arc::new(RwLock::new(CheckerStats::default())),
        }
    }

    /// Creates a checker loaded with the five standard rules.
    pub fn standard() -> Self {
        Self::with_rules(StandardRules::all())
    }

    /// Appends a rule. Duplicate ids are not rejected; in results the later
    /// rule's outcome replaces the earlier one.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.add(rule);
    }

    /// Appends an ad hoc rule under `name`.
    pub fn add<F>(&mut self, name: impl Into<String>, check: F)
    where
        F: Fn(&Syllogism, Interpretation) -> bool + Send + Sync + 'static,
    {
        self.add_rule(Rule::new(name, check));
    }

    /// Appends every rule of `rules`.
    pub fn add_rules(&mut self, rules: RuleSet) {
        self.rules.extend(rules);
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn stats(&self) -> CheckerStats {
        self.stats
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_stats(&self) {
        *self.stats.write().unwrap_or_else(PoisonError::into_inner) = CheckerStats::default();
    }

    /// Evaluates every rule against `syllogism` under `interpretation`.
    ///
    /// A rule that returns an error or panics is recorded as
    /// [`RuleOutcome::Errored`] and the remaining rules still run.
    pub fn evaluate(&self, syllogism: &Syllogism, interpretation: Interpretation) -> RuleResults {
        let mut tally = CheckerStats {
            evaluations: 1,
            ..CheckerStats::default()
        };

        let mut results = RuleResults::new();
        for rule in self.rules.iter() {
            tally.rules_evaluated += 1;
            trace!(
                "Evaluating rule {} on {} ({})",
                rule.id,
                syllogism.canonical_name(),
                interpretation
            );

            let outcome = run_isolated(rule, syllogism, interpretation);
            match &outcome {
                RuleOutcome::Satisfied => {}
                RuleOutcome::Violated => tally.violations += 1,
                RuleOutcome::Errored(reason) => {
                    debug!(
                        "Rule {} errored on {}: {}",
                        rule.id,
                        syllogism.canonical_name(),
                        reason
                    );
                    tally.errors += 1;
                }
            }
            results.insert(rule.id.clone(), outcome);
        }

        // Rules run without the lock held so a rule may read the stats.
        self.stats
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(&tally);

        results
    }

    /// Returns `true` if every rule is satisfied.
    pub fn is_valid(&self, syllogism: &Syllogism, interpretation: Interpretation) -> bool {
        self.evaluate(syllogism, interpretation).all_satisfied()
    }
}

impl Default for RuleChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks `syllogism` against the five standard rules.
pub fn is_valid_syllogism(syllogism: &Syllogism, interpretation: Interpretation) -> bool {
    RuleChecker::standard().is_valid(syllogism, interpretation)
}

/// Registers the standard rules on `checker` (or on a fresh checker) and
/// evaluates `syllogism`.
pub fn apply_standard_rules(
    syllogism: &Syllogism,
    interpretation: Interpretation,
    checker: Option<RuleChecker>,
) -> RuleResults {
    let mut checker = checker.unwrap_or_default();
    checker.add_rules(StandardRules::all());
    checker.evaluate(syllogism, interpretation)
}

/// Runs one rule, turning an error or a panic into [`RuleOutcome::Errored`].
fn run_isolated(
    rule: &Rule,
    syllogism: &Syllogism,
    interpretation: Interpretation,
) -> RuleOutcome {
    match panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(syllogism, interpretation))) {
        Ok(result) => RuleOutcome::from(result),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            RuleOutcome::Errored(format!("rule panicked: {}", message))
        }
    }
}

/// Outcomes keyed by rule id, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleResults {
    outcomes: IndexMap<String, RuleOutcome>,
}

impl RuleResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an outcome. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, rule_id: impl Into<String>, outcome: RuleOutcome) {
        self.outcomes.insert(rule_id.into(), outcome);
    }

    pub fn get(&self, rule_id: &str) -> Option<&RuleOutcome> {
        self.outcomes.get(rule_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleOutcome)> {
        self.outcomes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// `true` when every recorded outcome is [`RuleOutcome::Satisfied`].
    ///
    /// An empty result is vacuously satisfied.
    pub fn all_satisfied(&self) -> bool {
        self.outcomes.values().all(RuleOutcome::is_satisfied)
    }

    /// IDs of the rules that were violated.
    pub fn violations(&self) -> Vec<&str> {
        self.ids_where(RuleOutcome::is_violated)
    }

    /// IDs of the rules whose predicate failed.
    pub fn errors(&self) -> Vec<&str> {
        self.ids_where(RuleOutcome::is_errored)
    }

    fn ids_where(&self, pred: impl Fn(&RuleOutcome) -> bool) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| pred(*outcome))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Renders one `id: outcome` line per rule.
    pub fn to_text(&self) -> String {
        self.iter()
            .map(|(id, outcome)| {
                let mark = if outcome.is_satisfied() { '✓' } else { '✗' };
                format!("  {} {}: {}", mark, id, outcome)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Counters collected by a [`RuleChecker`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerStats {
    /// The number of `evaluate` calls.
    pub evaluations: usize,
    /// The number of individual rule invocations.
    pub rules_evaluated: usize,
    /// The number of violated outcomes.
    pub violations: usize,
    /// The number of errored outcomes.
    pub errors: usize,
}

impl CheckerStats {
    fn merge(&mut self, other: &CheckerStats) {
        self.evaluations += other.evaluations;
        self.rules_evaluated += other.rules_evaluated;
        self.violations += other.violations;
        self.errors += other.errors;
    }
}
