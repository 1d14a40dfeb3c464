//! Semantic interpretations and the process-wide interpretation selector.
//!
//! The rule engine itself always receives the interpretation as an explicit
//! argument. The [`InterpretationContext`] exists for the outermost call
//! boundary (the command line, or a host application) that wants a single
//! "current" setting to fall back on.

use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::checker::is_valid_syllogism;
use crate::error::{Error, Result};
use crate::syllogism::Syllogism;

/// The semantic regime under which universal propositions are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpretation {
    /// Universal propositions carry existential import.
    Aristotelian,
    /// Universal propositions make no existence claim. This is the default.
    #[default]
    Boolean,
}

impl Interpretation {
    /// Both interpretations, Aristotelian first.
    pub const ALL: [Interpretation; 2] = [Interpretation::Aristotelian, Interpretation::Boolean];

    /// The lowercase identifier accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Interpretation::Aristotelian => "aristotelian",
            Interpretation::Boolean => "boolean",
        }
    }

    /// A human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Interpretation::Aristotelian => "Aristotelian interpretation",
            Interpretation::Boolean => "Boolean interpretation",
        }
    }

    /// Returns `true` for [`Interpretation::Aristotelian`].
    pub fn is_aristotelian(self) -> bool {
        self == Interpretation::Aristotelian
    }

    /// Returns `true` for [`Interpretation::Boolean`].
    pub fn is_boolean(self) -> bool {
        self == Interpretation::Boolean
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpretation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aristotelian" => Ok(Interpretation::Aristotelian),
            "boolean" => Ok(Interpretation::Boolean),
            _ => Err(Error::InvalidInterpretation(s.to_string())),
        }
    }
}

/// A mutable holder for the "current" interpretation.
///
/// Reads happen at evaluation time, so a change affects every evaluation that
/// starts after it.
#[derive(Debug)]
pub struct InterpretationContext {
    current: RwLock<Interpretation>,
}

impl InterpretationContext {
    /// Creates a context holding the default interpretation (Boolean).
    pub const fn new() -> Self {
        Self::with(Interpretation::Boolean)
    }

    /// Creates a context holding `interpretation`.
    pub const fn with(interpretation: Interpretation) -> Self {
        Self {
            current: RwLock::new(interpretation),
        }
    }

    /// Returns the current interpretation.
    pub fn get(&self) -> Interpretation {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the current interpretation.
    pub fn set(&self, interpretation: Interpretation) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if *current != interpretation {
            debug!("Interpretation changed: {} -> {}", *current, interpretation);
        }
        *current = interpretation;
    }

    /// Replaces the current interpretation from its textual name.
    ///
    /// Unrecognised names fail with [`Error::InvalidInterpretation`] and leave
    /// the current value untouched.
    pub fn set_named(&self, name: &str) -> Result<()> {
        let interpretation = name.parse()?;
        self.set(interpretation);
        Ok(())
    }

    /// Returns `true` if the current interpretation is Aristotelian.
    pub fn is_aristotelian(&self) -> bool {
        self.get().is_aristotelian()
    }

    /// Returns `true` if the current interpretation is Boolean.
    pub fn is_boolean(&self) -> bool {
        self.get().is_boolean()
    }
}

impl Default for InterpretationContext {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: InterpretationContext = InterpretationContext::new();

/// Sets the process-wide interpretation.
pub fn set_interpretation(interpretation: Interpretation) {
    GLOBAL.set(interpretation);
}

/// Sets the process-wide interpretation from its textual name.
pub fn set_interpretation_named(name: &str) -> Result<()> {
    GLOBAL.set_named(name)
}

/// Returns the process-wide interpretation.
pub fn current_interpretation() -> Interpretation {
    GLOBAL.get()
}

/// Returns `true` if the process-wide interpretation is Aristotelian.
pub fn is_aristotelian() -> bool {
    GLOBAL.is_aristotelian()
}

/// Returns `true` if the process-wide interpretation is Boolean.
pub fn is_boolean() -> bool {
    GLOBAL.is_boolean()
}

/// Checks `syllogism` against the standard rules under the process-wide interpretation.
pub fn is_valid_with_current(syllogism: &Syllogism) -> bool {
    is_valid_syllogism(syllogism, current_interpretation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_boolean() {
        assert_eq!(Interpretation::default(), Interpretation::Boolean);
        let ctx = InterpretationContext::new();
        assert!(ctx.is_boolean());
        assert!(!ctx.is_aristotelian());
    }

    #[test]
    fn test_switching() {
        let ctx = InterpretationContext::new();

        ctx.set(Interpretation::Aristotelian);
        assert!(ctx.is_aristotelian());
        assert!(!ctx.is_boolean());

        ctx.set(Interpretation::Boolean);
        assert!(ctx.is_boolean());
    }

    #[test]
    fn test_set_named() {
        let ctx = InterpretationContext::new();
        ctx.set_named("Aristotelian").unwrap();
        assert_eq!(ctx.get(), Interpretation::Aristotelian);
        ctx.set_named(" boolean ").unwrap();
        assert_eq!(ctx.get(), Interpretation::Boolean);
    }

    #[test]
    fn test_invalid_name_leaves_value_unchanged() {
        let ctx = InterpretationContext::with(Interpretation::Aristotelian);

        let err = ctx.set_named("invalid").unwrap_err();
        assert_eq!(err, Error::InvalidInterpretation("invalid".to_string()));
        assert_eq!(ctx.get(), Interpretation::Aristotelian);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            Interpretation::Aristotelian.display_name(),
            "Aristotelian interpretation"
        );
        assert_eq!(Interpretation::Boolean.to_string(), "boolean");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Interpretation::Aristotelian).unwrap();
        assert_eq!(json, "\"aristotelian\"");
        let back: Interpretation = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(back, Interpretation::Boolean);
    }
}
