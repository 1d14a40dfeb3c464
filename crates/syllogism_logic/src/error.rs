//! Error types for the syllogism validation engine.

use thiserror::Error;

/// A specialized `Result` type for syllogism engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Defines the errors that can occur while configuring or running the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value outside the two recognised interpretations was supplied.
    #[error("Invalid interpretation: {0}")]
    InvalidInterpretation(String),

    /// A rule predicate failed while being evaluated.
    #[error("Rule '{rule}' failed: {reason}")]
    RuleEvaluation { rule: String, reason: String },

    /// A string could not be parsed as a canonical mood-figure name.
    #[error("Invalid syllogism name: {0}")]
    InvalidSyllogismName(String),

    /// A configuration value could not be understood.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error occurred during report serialization.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Shorthand for building a [`Error::RuleEvaluation`] from inside a predicate.
    pub fn rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::RuleEvaluation {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let errors = vec![
            (
                Error::InvalidInterpretation("modal".into()),
                "Invalid interpretation: modal",
            ),
            (
                Error::rule("broken", "division by zero"),
                "Rule 'broken' failed: division by zero",
            ),
            (
                Error::InvalidSyllogismName("AAA-5".into()),
                "Invalid syllogism name: AAA-5",
            ),
            (
                Error::Config("bad format".into()),
                "Configuration error: bad format",
            ),
        ];

        for (error, expected) in errors {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("not json");
        let error: Error = parsed.unwrap_err().into();
        assert!(matches!(error, Error::Serialization(_)));
    }
}
