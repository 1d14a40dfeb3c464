//! Configuration for the command-line front end.
//!
//! Values come from defaults, then from the environment, then from command
//! line flags (applied by the binary).

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interpretation::Interpretation;
use crate::report::OutputFormat;

/// Environment variable selecting the default interpretation.
pub const ENV_INTERPRETATION: &str = "SYLLOGISM_INTERPRETATION";
/// Environment variable selecting the output format.
pub const ENV_FORMAT: &str = "SYLLOGISM_FORMAT";

/// Settings for the command-line front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Interpretation used when a command does not name one.
    pub interpretation: Interpretation,
    /// Output format for reports.
    pub format: OutputFormat,
}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// Unset variables keep their defaults. A set but unrecognised value is an
    /// error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(ENV_INTERPRETATION) {
            config.interpretation = value.parse()?;
        }
        if let Some(value) = lookup(ENV_FORMAT) {
            config.format = value.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::Error;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.interpretation, Interpretation::Boolean);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_INTERPRETATION, "aristotelian"),
            (ENV_FORMAT, "json"),
        ]))
        .unwrap();
        assert_eq!(config.interpretation, Interpretation::Aristotelian);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_interpretation_is_rejected() {
        let err = Config::from_lookup(lookup(&[(ENV_INTERPRETATION, "modal")])).unwrap_err();
        assert!(matches!(err, Error::InvalidInterpretation(_)));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let err = Config::from_lookup(lookup(&[(ENV_FORMAT, "xml")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
