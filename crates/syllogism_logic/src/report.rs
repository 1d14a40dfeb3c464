//! Human- and machine-readable reports over enumeration results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::checker::{RuleChecker, RuleResults};
use crate::enumerate::{valid_syllogisms, TOTAL_SYLLOGISMS};
use crate::error::{Error, Result};
use crate::interpretation::Interpretation;
use crate::syllogism::Syllogism;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text with rendered diagrams.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

/// A valid syllogism as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Canonical mood-figure name, e.g. `AAA-1`.
    pub name: String,
    pub syllogism: Syllogism,
}

impl From<Syllogism> for ReportEntry {
    fn from(syllogism: Syllogism) -> Self {
        Self {
            name: syllogism.canonical_name(),
            syllogism,
        }
    }
}

/// Every valid syllogism under one interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidityReport {
    /// Interpretation the syllogisms were judged under.
    pub interpretation: Interpretation,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Size of the enumerated space.
    pub total: usize,
    /// Valid syllogisms in enumeration order.
    pub valid: Vec<ReportEntry>,
}

impl ValidityReport {
    /// Enumerates all syllogisms and keeps those `checker` accepts.
    pub fn generate(checker: &RuleChecker, interpretation: Interpretation) -> Self {
        let valid = valid_syllogisms(checker, interpretation)
            .into_iter()
            .map(ReportEntry::from)
            .collect();
        Self {
            interpretation,
            generated_at: Utc::now(),
            total: TOTAL_SYLLOGISMS,
            valid,
        }
    }

    /// The canonical names of the valid syllogisms.
    pub fn names(&self) -> Vec<&str> {
        self.valid.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{}: {} of {} syllogisms are valid\n",
            self.interpretation.display_name(),
            self.valid.len(),
            self.total
        );
        for (i, entry) in self.valid.iter().enumerate() {
            out.push_str(&format!("\n=== Valid syllogism {} ===\n{}\n", i + 1, entry.syllogism));
        }
        out
    }
}

/// How many Aristotelian-only forms the text comparison draws out in full.
pub const COMPARISON_SAMPLES: usize = 3;

/// Valid sets under both interpretations and how they differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationComparison {
    /// Names valid under the Aristotelian interpretation.
    pub aristotelian: Vec<String>,
    /// Names valid under the Boolean interpretation.
    pub boolean: Vec<String>,
    /// Valid only when universals carry existential import.
    pub only_aristotelian: Vec<String>,
    /// Valid only without existential import. Empty for the standard rules.
    pub only_boolean: Vec<String>,
}

impl InterpretationComparison {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{}: {} valid\n",
            Interpretation::Aristotelian.display_name(),
            self.aristotelian.len()
        ));
        out.push_str(&format!(
            "{}: {} valid\n",
            Interpretation::Boolean.display_name(),
            self.boolean.len()
        ));

        out.push_str(&format!(
            "\nValid only under the Aristotelian interpretation: {}\n",
            self.only_aristotelian.len()
        ));
        for name in &self.only_aristotelian {
            out.push_str(&format!("  {}\n", name));
        }

        out.push_str(&format!(
            "\nValid only under the Boolean interpretation: {}\n",
            self.only_boolean.len()
        ));
        for name in &self.only_boolean {
            out.push_str(&format!("  {}\n", name));
        }

        if !self.only_aristotelian.is_empty() {
            out.push_str("\n=== Examples ===\n");
            out.push_str(
                "Valid under the Aristotelian interpretation, invalid under the Boolean one:\n",
            );
            let samples = self
                .only_aristotelian
                .iter()
                .filter_map(|name| Syllogism::from_name(name).ok())
                .take(COMPARISON_SAMPLES);
            for (i, syllogism) in samples.enumerate() {
                out.push_str(&format!(
                    "\nExample {}: {}\nReason: universal premises are read as asserting \
                     existence, so a particular conclusion follows\n",
                    i + 1,
                    syllogism
                ));
            }
        }
        out
    }
}

/// Computes the valid sets under both interpretations with `checker`.
pub fn compare_interpretations(checker: &RuleChecker) -> InterpretationComparison {
    let names = |interpretation| -> Vec<String> {
        valid_syllogisms(checker, interpretation)
            .iter()
            .map(Syllogism::canonical_name)
            .collect()
    };
    let aristotelian = names(Interpretation::Aristotelian);
    let boolean = names(Interpretation::Boolean);

    let only_aristotelian = aristotelian
        .iter()
        .filter(|n| !boolean.contains(n))
        .cloned()
        .collect();
    let only_boolean = boolean
        .iter()
        .filter(|n| !aristotelian.contains(n))
        .cloned()
        .collect();

    InterpretationComparison {
        aristotelian,
        boolean,
        only_aristotelian,
        only_boolean,
    }
}

/// Per-rule outcomes for a single syllogism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    /// Canonical name of the explained syllogism.
    pub name: String,
    pub interpretation: Interpretation,
    /// `true` when every rule was satisfied.
    pub valid: bool,
    /// Outcome of each rule in evaluation order.
    pub results: RuleResults,
}

impl Explanation {
    pub fn new(checker: &RuleChecker, syllogism: &Syllogism, interpretation: Interpretation) -> Self {
        let results = checker.evaluate(syllogism, interpretation);
        Self {
            name: syllogism.canonical_name(),
            interpretation,
            valid: results.all_satisfied(),
            results,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `syllogism` is passed back in for the rendered diagram.
    pub fn to_text(&self, syllogism: &Syllogism) -> String {
        format!(
            "{}\n\nUnder the {}:\n{}\nOverall: {}",
            syllogism,
            self.interpretation.display_name(),
            self.results.to_text(),
            if self.valid { "valid" } else { "invalid" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_differences() {
        let cmp = compare_interpretations(&RuleChecker::standard());
        assert_eq!(cmp.aristotelian.len(), 24);
        assert_eq!(cmp.boolean.len(), 15);
        assert!(cmp.only_boolean.is_empty());
        assert_eq!(
            cmp.only_aristotelian,
            ["AAI-3", "AAI-1", "AAI-4", "AEO-4", "AEO-2", "EAO-3", "EAO-1", "EAO-4", "EAO-2"]
        );
    }

    #[test]
    fn test_comparison_text_draws_samples() {
        let text = compare_interpretations(&RuleChecker::standard()).to_text();
        assert!(text.contains("Valid only under the Aristotelian interpretation: 9"));
        assert!(text.contains("=== Examples ==="));
        assert!(text.contains("Example 1: AAI-3\nM A P\nM A S\n-----\nS I P"));
        assert!(text.contains("Example 3: AAI-4"));
        assert!(!text.contains("Example 4"));
        assert_eq!(text.matches("Reason: ").count(), COMPARISON_SAMPLES);
    }

    #[test]
    fn test_validity_report_json() {
        let report = ValidityReport::generate(&RuleChecker::standard(), Interpretation::Boolean);
        assert_eq!(report.total, 256);
        assert!(report.names().contains(&"AAA-1"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["interpretation"], "boolean");
        assert_eq!(json["valid"].as_array().unwrap().len(), 15);
        assert_eq!(json["valid"][0]["syllogism"]["major_type"], "A");
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_validity_report_text() {
        let report =
            ValidityReport::generate(&RuleChecker::standard(), Interpretation::Aristotelian);
        let text = report.to_text();
        assert!(text.starts_with("Aristotelian interpretation: 24 of 256 syllogisms are valid"));
        assert!(text.contains("=== Valid syllogism 24 ==="));
    }

    #[test]
    fn test_explanation() {
        let aai = Syllogism::from_name("AAI-1").unwrap();
        let checker = RuleChecker::standard();

        let boolean = Explanation::new(&checker, &aai, Interpretation::Boolean);
        assert!(!boolean.valid);
        assert_eq!(boolean.results.violations(), ["existential_import"]);
        assert!(boolean.to_text(&aai).ends_with("Overall: invalid"));

        let aristotelian = Explanation::new(&checker, &aai, Interpretation::Aristotelian);
        assert!(aristotelian.valid);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
