//! Enumeration of every structurally possible syllogism.

use log::debug;

use crate::checker::RuleChecker;
use crate::interpretation::Interpretation;
use crate::syllogism::{PropositionType, Syllogism, TermPosition};

/// 4 major types × 4 minor types × 4 conclusion types × 2 × 2 middle positions.
pub const TOTAL_SYLLOGISMS: usize = 256;

/// Yields all 256 syllogisms.
///
/// The order is fixed: major type, then minor type, then conclusion type
/// (each A, E, I, O), then the major and minor middle positions (subject
/// before predicate).
pub fn all_syllogisms() -> impl Iterator<Item = Syllogism> {
    PropositionType::ALL.into_iter().flat_map(|major| {
        PropositionType::ALL.into_iter().flat_map(move |minor| {
            PropositionType::ALL.into_iter().flat_map(move |conclusion| {
                TermPosition::ALL.into_iter().flat_map(move |major_pos| {
                    TermPosition::ALL.into_iter().map(move |minor_pos| {
                        Syllogism::new(major, minor, conclusion, major_pos, minor_pos)
                    })
                })
            })
        })
    })
}

/// The syllogisms `checker` accepts under `interpretation`, in enumeration order.
pub fn valid_syllogisms(checker: &RuleChecker, interpretation: Interpretation) -> Vec<Syllogism> {
    let valid: Vec<_> = all_syllogisms()
        .filter(|s| checker.is_valid(s, interpretation))
        .collect();
    debug!(
        "{} of {} syllogisms valid under the {}",
        valid.len(),
        TOTAL_SYLLOGISMS,
        interpretation.display_name()
    );
    valid
}
