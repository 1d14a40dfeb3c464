//! Rule definitions for the syllogism engine
//!
//! A rule is a named predicate over a [`Syllogism`] and the interpretation it
//! is being judged under. Rules are grouped into [`RuleSet`]s and evaluated by
//! the [`RuleChecker`](crate::checker::RuleChecker).

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interpretation::Interpretation;
use crate::syllogism::Syllogism;

/// The predicate type stored inside a [`Rule`].
pub type RuleFn = Arc<dyn Fn(&Syllogism, Interpretation) -> Result<bool> + Send + Sync>;

/// A named validity condition.
#[derive(Clone)]
pub struct Rule {
    /// Stable identifier, used as the key in evaluation results.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of what this rule enforces.
    pub description: String,
    /// The kind of rule.
    pub kind: RuleKind,
    check: RuleFn,
}

impl Rule {
    /// Creates a custom rule from an infallible predicate.
    pub fn new<F>(id: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Syllogism, Interpretation) -> bool + Send + Sync + 'static,
    {
        RuleBuilder::new(id).check(check).build()
    }

    /// Creates a distribution rule (constrains which terms are distributed).
    pub fn distribution(id: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(id).kind(RuleKind::Distribution)
    }

    /// Creates a quality rule (constrains affirmative/negative propositions).
    pub fn quality(id: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(id).kind(RuleKind::Quality)
    }

    /// Creates a quantity rule (constrains universal/particular propositions).
    pub fn quantity(id: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(id).kind(RuleKind::Quantity)
    }

    /// Creates a custom rule.
    pub fn custom(id: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(id).kind(RuleKind::Custom)
    }

    /// Runs the predicate.
    pub fn evaluate(&self, syllogism: &Syllogism, interpretation: Interpretation) -> Result<bool> {
        (self.check)(syllogism, interpretation)
    }

    /// Returns the rule's ID prefixed by its kind (e.g. "dist:middle_term_distributed").
    pub fn qualified_id(&self) -> String {
        format!("{}:{}", self.kind.prefix(), self.id)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A builder for creating `Rule`s using a fluent API.
#[derive(Clone)]
pub struct RuleBuilder {
    id: String,
    name: String,
    description: String,
    kind: RuleKind,
    check: Option<RuleFn>,
}

impl RuleBuilder {
    /// Starts a builder for a rule with the given id.
    ///
    /// The kind defaults to [`RuleKind::Custom`] and the name to the id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            description: String::new(),
            kind: RuleKind::Custom,
            check: None,
        }
    }

    /// Sets the rule kind.
    pub fn kind(mut self, kind: RuleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the human-readable name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description shown in explanations.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Sets an infallible predicate.
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&Syllogism, Interpretation) -> bool + Send + Sync + 'static,
    {
        self.check = Some(Arc::new(move |s: &Syllogism, i: Interpretation| Ok(check(s, i))));
        self
    }

    /// Sets a predicate that may fail.
    pub fn try_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&Syllogism, Interpretation) -> Result<bool> + Send + Sync + 'static,
    {
        self.check = Some(Arc::new(check));
        self
    }

    /// Builds the rule. The name defaults to the id; a rule built without a
    /// predicate errors on every evaluation.
    pub fn build(self) -> Rule {
        let name = if self.name.is_empty() {
            self.id.clone()
        } else {
            self.name
        };
        let check = match self.check {
            Some(check) => check,
            None => {
                let id = self.id.clone();
                let missing: RuleFn = Arc::new(move |_: &Syllogism, _: Interpretation| {
                    Err(Error::rule(id.as_str(), "no predicate defined"))
                });
                missing
            }
        };
        Rule {
            id: self.id,
            name,
            description: self.description,
            kind: self.kind,
            check,
        }
    }
}

/// The category of a `Rule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Constrains how terms are distributed across premises and conclusion.
    Distribution,
    /// Constrains affirmative and negative propositions.
    Quality,
    /// Constrains universal and particular propositions.
    Quantity,
    /// Anything registered ad hoc.
    Custom,
}

impl RuleKind {
    /// Returns a short string prefix for the rule kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            RuleKind::Distribution => "dist",
            RuleKind::Quality => "qual",
            RuleKind::Quantity => "quant",
            RuleKind::Custom => "custom",
        }
    }

    /// Returns a human-readable description of the rule kind.
    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::Distribution => "Constrains term distribution",
            RuleKind::Quality => "Constrains negative premises and conclusions",
            RuleKind::Quantity => "Constrains universal premises and particular conclusions",
            RuleKind::Custom => "User-defined rule",
        }
    }
}

/// The outcome of evaluating one rule against one syllogism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// The predicate held.
    Satisfied,
    /// The predicate returned `false`.
    Violated,
    /// The predicate failed; carries the failure message.
    Errored(String),
}

impl RuleOutcome {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, RuleOutcome::Satisfied)
    }

    pub fn is_violated(&self) -> bool {
        matches!(self, RuleOutcome::Violated)
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, RuleOutcome::Errored(_))
    }

    /// The boolean verdict, or `None` for an errored rule.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RuleOutcome::Satisfied => Some(true),
            RuleOutcome::Violated => Some(false),
            RuleOutcome::Errored(_) => None,
        }
    }
}

/// Converts a predicate result into an outcome.
///
/// For [`Error::RuleEvaluation`] only the reason is kept: outcomes are always
/// stored under the id of the rule that produced them. Every other error keeps
/// its full message.
impl From<Result<bool>> for RuleOutcome {
    fn from(result: Result<bool>) -> Self {
        match result {
            Ok(true) => RuleOutcome::Satisfied,
            Ok(false) => RuleOutcome::Violated,
            Err(Error::RuleEvaluation { reason, .. }) => RuleOutcome::Errored(reason),
            Err(e) => RuleOutcome::Errored(e.to_string()),
        }
    }
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleOutcome::Satisfied => f.write_str("satisfied"),
            RuleOutcome::Violated => f.write_str("violated"),
            RuleOutcome::Errored(reason) => write!(f, "error: {}", reason),
        }
    }
}

/// A named, ordered collection of rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: String,
    pub description: String,
    pub rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a new empty rule set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            rules: Vec::new(),
        }
    }

    /// Append a rule, keeping insertion order
    pub fn add(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append every rule of `other`
    pub fn extend(&mut self, other: RuleSet) {
        self.rules.extend(other.rules);
    }

    /// Get rules by kind
    pub fn by_kind(&self, kind: RuleKind) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.kind == kind).collect()
    }

    /// Find a rule by ID
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllogism::{PropositionType, TermPosition};

    fn barbara() -> Syllogism {
        Syllogism::new(
            PropositionType::A,
            PropositionType::A,
            PropositionType::A,
            TermPosition::Subject,
            TermPosition::Predicate,
        )
    }

    #[test]
    fn test_rule_builder() {
        let rule = Rule::quality("affirmative_conclusion")
            .name("Affirmative Conclusion")
            .description("The conclusion must be affirmative")
            .check(|s, _| s.conclusion_type().is_affirmative())
            .build();

        assert_eq!(rule.id, "affirmative_conclusion");
        assert_eq!(rule.kind, RuleKind::Quality);
        assert_eq!(rule.qualified_id(), "qual:affirmative_conclusion");
        assert!(rule.evaluate(&barbara(), Interpretation::Boolean).unwrap());
    }

    #[test]
    fn test_name_defaults_to_id() {
        let rule = Rule::new("first_figure", |s, _| s.figure().number() == 1);
        assert_eq!(rule.name, "first_figure");
        assert_eq!(rule.kind, RuleKind::Custom);
    }

    #[test]
    fn test_missing_predicate_errors() {
        let rule = Rule::custom("empty").build();
        let err = rule.evaluate(&barbara(), Interpretation::Boolean).unwrap_err();
        assert!(err.to_string().contains("no predicate defined"));
    }

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(RuleOutcome::from(Ok(true)), RuleOutcome::Satisfied);
        assert_eq!(RuleOutcome::from(Ok(false)), RuleOutcome::Violated);
        assert_eq!(
            RuleOutcome::from(Err(Error::rule("r", "boom"))),
            RuleOutcome::Errored("boom".to_string())
        );
        assert_eq!(
            RuleOutcome::from(Err(Error::Config("bad lookup".into()))),
            RuleOutcome::Errored(Error::Config("bad lookup".into()).to_string())
        );
        assert_eq!(RuleOutcome::Errored("x".into()).as_bool(), None);
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&RuleOutcome::Errored("boom".into())).unwrap();
        assert_eq!(json, r#"{"status":"errored","reason":"boom"}"#);
        let json = serde_json::to_string(&RuleOutcome::Satisfied).unwrap();
        assert_eq!(json, r#"{"status":"satisfied"}"#);
    }

    #[test]
    fn test_ruleset() {
        let mut ruleset = RuleSet::new("test");
        ruleset.add(Rule::distribution("r1").check(|_, _| true).build());
        ruleset.add(Rule::quality("r2").check(|_, _| true).build());
        ruleset.add(Rule::quality("r3").check(|_, _| false).build());

        assert_eq!(ruleset.len(), 3);
        assert_eq!(ruleset.by_kind(RuleKind::Quality).len(), 2);
        assert!(ruleset.get("r1").is_some());
        assert!(ruleset.get("missing").is_none());

        let ids: Vec<_> = ruleset.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
    }

    #[test]
    fn test_rule_kind() {
        assert_eq!(RuleKind::Distribution.prefix(), "dist");
        assert_eq!(RuleKind::Quantity.prefix(), "quant");
        assert!(!RuleKind::Custom.description().is_empty());
    }
}
