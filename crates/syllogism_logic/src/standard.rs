//! The five classical rules of the categorical syllogism
//!
//! Every rule is a total function of the syllogism and the interpretation.
//! Three of them are built from a single notion, term distribution:
//!
//! | role      | A | E | I | O |
//! |-----------|---|---|---|---|
//! | subject   | ✓ | ✓ |   |   |
//! | predicate |   | ✓ |   | ✓ |
//!
//! Only [`negative_premise_negative_conclusion`] and [`existential_import`]
//! look at the interpretation.

use crate::interpretation::Interpretation;
use crate::rule::{Rule, RuleSet};
use crate::syllogism::{PropositionType, Syllogism, TermPosition};

/// Rule ID: the middle term is distributed at least once.
pub const MIDDLE_TERM_DISTRIBUTED: &str = "middle_term_distributed";
/// Rule ID: no term is distributed in the conclusion unless it is distributed in its premise.
pub const NO_ILLICIT_DISTRIBUTION: &str = "no_illicit_distribution";
/// Rule ID: at most one premise is negative.
pub const NO_TWO_NEGATIVE_PREMISES: &str = "no_two_negative_premises";
/// Rule ID: a negative premise goes with a negative conclusion.
pub const NEGATIVE_PREMISE_NEGATIVE_CONCLUSION: &str = "negative_premise_negative_conclusion";
/// Rule ID: existential import.
pub const EXISTENTIAL_IMPORT: &str = "existential_import";

/// Whether a term occupying `role` in a proposition of type `ty` is distributed.
pub fn is_distributed(role: TermPosition, ty: PropositionType) -> bool {
    match role {
        TermPosition::Subject => ty.is_universal(),
        TermPosition::Predicate => ty.is_negative(),
    }
}

/// Rule 1: the middle term must be distributed in at least one premise.
pub fn middle_term_distributed(syl: &Syllogism) -> bool {
    is_distributed(syl.major_middle_position(), syl.major_type())
        || is_distributed(syl.minor_middle_position(), syl.minor_type())
}

/// Rule 2: a term distributed in the conclusion must be distributed in its premise.
///
/// `P` is the predicate of the conclusion, so it is distributed there when the
/// conclusion is negative. `S` is the subject, distributed when the
/// conclusion is universal. In each premise the end term takes whichever role
/// the middle term does not.
pub fn no_illicit_distribution(syl: &Syllogism) -> bool {
    let conclusion = syl.conclusion_type();

    let p_in_premise = is_distributed(syl.major_middle_position().opposite(), syl.major_type());
    let p_in_conclusion = is_distributed(TermPosition::Predicate, conclusion);

    let s_in_premise = is_distributed(syl.minor_middle_position().opposite(), syl.minor_type());
    let s_in_conclusion = is_distributed(TermPosition::Subject, conclusion);

    (!p_in_conclusion || p_in_premise) && (!s_in_conclusion || s_in_premise)
}

/// Rule 3: nothing follows from two negative premises.
pub fn no_two_negative_premises(syl: &Syllogism) -> bool {
    !(syl.major_type().is_negative() && syl.minor_type().is_negative())
}

/// Rule 4: negative premises and negative conclusions go together.
///
/// Under the Boolean reading this is one-directional: a negative premise
/// demands a negative conclusion, while affirmative premises leave the
/// conclusion unconstrained here. Under the Aristotelian reading it is a
/// biconditional.
pub fn negative_premise_negative_conclusion(
    syl: &Syllogism,
    interpretation: Interpretation,
) -> bool {
    let has_negative_premise = syl.major_type().is_negative() || syl.minor_type().is_negative();
    let negative_conclusion = syl.conclusion_type().is_negative();

    match interpretation {
        Interpretation::Boolean => !has_negative_premise || negative_conclusion,
        Interpretation::Aristotelian => has_negative_premise == negative_conclusion,
    }
}

/// Rule 5: a particular conclusion cannot follow from two universal premises
/// unless the universals carry existential import.
pub fn existential_import(syl: &Syllogism, interpretation: Interpretation) -> bool {
    match interpretation {
        Interpretation::Aristotelian => true,
        Interpretation::Boolean => {
            !(syl.major_type().is_universal()
                && syl.minor_type().is_universal()
                && syl.conclusion_type().is_particular())
        }
    }
}

/// Pre-built rule sets over the five classical rules.
pub struct StandardRules;

impl StandardRules {
    /// All five rules, in classical order. This is the set validity is judged by.
    pub fn all() -> RuleSet {
        let mut ruleset = RuleSet::new("standard");
        ruleset.description = "The five classical rules of the categorical syllogism.".to_string();

        ruleset.extend(Self::distribution_rules());
        ruleset.extend(Self::quality_rules());
        ruleset.extend(Self::quantity_rules());

        ruleset
    }

    /// Rules 1 and 2.
    pub fn distribution_rules() -> RuleSet {
        let mut ruleset = RuleSet::new("distribution");
        ruleset.description = "Rules about where terms are distributed.".to_string();

        ruleset.add(
            Rule::distribution(MIDDLE_TERM_DISTRIBUTED)
                .name("Middle term distributed at least once")
                .description(
                    "Universal propositions distribute their subject, negative propositions \
                     their predicate; the middle term must be distributed in some premise.",
                )
                .check(|s, _| middle_term_distributed(s))
                .build(),
        );

        ruleset.add(
            Rule::distribution(NO_ILLICIT_DISTRIBUTION)
                .name("No illicit distribution")
                .description(
                    "A term undistributed in its premise may not be distributed in the conclusion.",
                )
                .check(|s, _| no_illicit_distribution(s))
                .build(),
        );

        ruleset
    }

    /// Rules 3 and 4.
    pub fn quality_rules() -> RuleSet {
        let mut ruleset = RuleSet::new("quality");
        ruleset.description = "Rules about negative propositions.".to_string();

        ruleset.add(
            Rule::quality(NO_TWO_NEGATIVE_PREMISES)
                .name("No two negative premises")
                .description("No conclusion follows from two negative premises.")
                .check(|s, _| no_two_negative_premises(s))
                .build(),
        );

        ruleset.add(
            Rule::quality(NEGATIVE_PREMISE_NEGATIVE_CONCLUSION)
                .name("Negative premise requires negative conclusion")
                .description(
                    "A negative premise requires a negative conclusion; under the Aristotelian \
                     reading affirmative premises also require an affirmative conclusion.",
                )
                .check(negative_premise_negative_conclusion)
                .build(),
        );

        ruleset
    }

    /// Rule 5.
    pub fn quantity_rules() -> RuleSet {
        let mut ruleset = RuleSet::new("quantity");
        ruleset.description = "Rules about universal and particular propositions.".to_string();

        ruleset.add(
            Rule::quantity(EXISTENTIAL_IMPORT)
                .name("Existential import")
                .description(
                    "Under the Boolean reading two universal premises cannot yield a \
                     particular conclusion.",
                )
                .check(existential_import)
                .build(),
        );

        ruleset
    }
}

#[cfg(test)]
mod tests {
    use super::PropositionType::*;
    use super::TermPosition::*;
    use super::*;
    use crate::enumerate::all_syllogisms;

    fn syl(
        major: PropositionType,
        minor: PropositionType,
        conclusion: PropositionType,
        major_pos: TermPosition,
        minor_pos: TermPosition,
    ) -> Syllogism {
        Syllogism::new(major, minor, conclusion, major_pos, minor_pos)
    }

    #[test]
    fn test_distribution_table() {
        let expected = [
            (Subject, A, true),
            (Subject, E, true),
            (Subject, I, false),
            (Subject, O, false),
            (Predicate, A, false),
            (Predicate, E, true),
            (Predicate, I, false),
            (Predicate, O, true),
        ];
        for (role, ty, distributed) in expected {
            assert_eq!(is_distributed(role, ty), distributed, "{:?} of {}", role, ty);
        }
    }

    #[test]
    fn test_middle_term() {
        assert!(middle_term_distributed(&syl(A, A, A, Subject, Predicate)));
        assert!(!middle_term_distributed(&syl(I, I, I, Subject, Predicate)));
        // AAA-2: M is the predicate of two affirmatives
        assert!(!middle_term_distributed(&syl(A, A, A, Predicate, Predicate)));
    }

    #[test]
    fn test_illicit_distribution() {
        assert!(no_illicit_distribution(&syl(A, A, A, Subject, Predicate)));
        // AAE-1: P undistributed in "M A P" but distributed in "S E P"
        assert!(!no_illicit_distribution(&syl(A, A, E, Subject, Predicate)));
        // AAA-3: S undistributed in "M A S" but distributed in "S A P"
        assert!(!no_illicit_distribution(&syl(A, A, A, Subject, Subject)));
    }

    #[test]
    fn test_two_negative_premises() {
        assert!(!no_two_negative_premises(&syl(E, E, E, Subject, Predicate)));
        assert!(!no_two_negative_premises(&syl(O, E, O, Subject, Predicate)));
        assert!(no_two_negative_premises(&syl(A, E, E, Subject, Predicate)));
    }

    #[test]
    fn test_negative_premise_rule() {
        let aaa = syl(A, A, A, Subject, Predicate);
        let aee = syl(A, E, E, Subject, Predicate);
        let aea = syl(A, E, A, Subject, Predicate);
        let aae = syl(A, A, E, Subject, Predicate);

        for interp in Interpretation::ALL {
            assert!(negative_premise_negative_conclusion(&aaa, interp));
            assert!(negative_premise_negative_conclusion(&aee, interp));
            assert!(!negative_premise_negative_conclusion(&aea, interp));
        }

        // Affirmative premises with a negative conclusion: only the
        // Aristotelian reading rejects it.
        assert!(negative_premise_negative_conclusion(&aae, Interpretation::Boolean));
        assert!(!negative_premise_negative_conclusion(&aae, Interpretation::Aristotelian));
    }

    #[test]
    fn test_existential_import() {
        let aai = syl(A, A, I, Subject, Predicate);
        assert!(existential_import(&aai, Interpretation::Aristotelian));
        assert!(!existential_import(&aai, Interpretation::Boolean));

        let aii = syl(A, I, I, Subject, Predicate);
        assert!(existential_import(&aii, Interpretation::Boolean));
    }

    #[test]
    fn test_rules_one_to_three_ignore_interpretation() {
        let rules = StandardRules::all();
        for s in all_syllogisms() {
            for id in [
                MIDDLE_TERM_DISTRIBUTED,
                NO_ILLICIT_DISTRIBUTION,
                NO_TWO_NEGATIVE_PREMISES,
            ] {
                let rule = rules.get(id).unwrap();
                assert_eq!(
                    rule.evaluate(&s, Interpretation::Aristotelian).unwrap(),
                    rule.evaluate(&s, Interpretation::Boolean).unwrap(),
                    "{} on {}",
                    id,
                    s.canonical_name()
                );
            }
        }
    }

    #[test]
    fn test_standard_order() {
        let ids: Vec<_> = StandardRules::all().iter().map(|r| r.id.clone()).collect();
        assert_eq!(
            ids,
            [
                MIDDLE_TERM_DISTRIBUTED,
                NO_ILLICIT_DISTRIBUTION,
                NO_TWO_NEGATIVE_PREMISES,
                NEGATIVE_PREMISE_NEGATIVE_CONCLUSION,
                EXISTENTIAL_IMPORT,
            ]
        );
    }

    #[test]
    fn test_grouped_sets() {
        assert_eq!(StandardRules::distribution_rules().len(), 2);
        assert_eq!(StandardRules::quality_rules().len(), 2);
        assert_eq!(StandardRules::quantity_rules().len(), 1);
    }
}
