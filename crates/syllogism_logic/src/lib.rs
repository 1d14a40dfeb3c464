//! Syllogism Logic - Categorical Syllogism Validation Engine
//!
//! This crate decides the validity of categorical syllogisms under two
//! readings of universal propositions: the Aristotelian one, where "All S are
//! P" presupposes that some S exist, and the Boolean one, where it does not.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Syllogism Validation Engine                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                   Syllogism Model                     │   │
//! │  │  Proposition Types │ Middle Positions │ Figure        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                   Standard Rules                      │   │
//! │  │  Distribution │ Quality │ Quantity (interpretation)   │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                   Rule Checker                        │   │
//! │  │  Per-rule Outcomes │ Fault Isolation │ Verdict        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use syllogism_logic::{Interpretation, RuleChecker, Syllogism};
//!
//! let checker = RuleChecker::standard();
//! let aai = Syllogism::from_name("AAI-1").unwrap();
//!
//! assert!(checker.is_valid(&aai, Interpretation::Aristotelian));
//! assert!(!checker.is_valid(&aai, Interpretation::Boolean));
//! ```

pub mod checker;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod interpretation;
pub mod report;
pub mod rule;
pub mod standard;
pub mod syllogism;

// Re-exports
pub use checker::{
    apply_standard_rules, is_valid_syllogism, CheckerStats, RuleChecker, RuleResults,
};
pub use config::Config;
pub use enumerate::{all_syllogisms, valid_syllogisms, TOTAL_SYLLOGISMS};
pub use error::{Error, Result};
pub use interpretation::{Interpretation, InterpretationContext};
pub use report::{
    compare_interpretations, Explanation, InterpretationComparison, OutputFormat, ValidityReport,
};
pub use rule::{Rule, RuleBuilder, RuleKind, RuleOutcome, RuleSet};
pub use standard::{is_distributed, StandardRules};
pub use syllogism::{Figure, PropositionType, Syllogism, TermPosition};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
