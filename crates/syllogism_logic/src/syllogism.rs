//! The structural model of a categorical syllogism.
//!
//! A syllogism is fully described by its mood (the proposition types of the
//! major premise, minor premise and conclusion) and by where the middle term
//! `M` sits inside each premise. The figure is derived from the latter.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the four standard categorical proposition types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropositionType {
    /// Universal affirmative: "All S are P".
    A,
    /// Universal negative: "No S are P".
    E,
    /// Particular affirmative: "Some S are P".
    I,
    /// Particular negative: "Some S are not P".
    O,
}

impl PropositionType {
    /// All proposition types in A, E, I, O order.
    pub const ALL: [PropositionType; 4] = [
        PropositionType::A,
        PropositionType::E,
        PropositionType::I,
        PropositionType::O,
    ];

    /// Returns `true` for A and E.
    pub fn is_universal(self) -> bool {
        matches!(self, PropositionType::A | PropositionType::E)
    }

    /// Returns `true` for I and O.
    pub fn is_particular(self) -> bool {
        !self.is_universal()
    }

    /// Returns `true` for E and O.
    pub fn is_negative(self) -> bool {
        matches!(self, PropositionType::E | PropositionType::O)
    }

    /// Returns `true` for A and I.
    pub fn is_affirmative(self) -> bool {
        !self.is_negative()
    }

    /// The single-letter code of this type.
    pub fn code(self) -> char {
        match self {
            PropositionType::A => 'A',
            PropositionType::E => 'E',
            PropositionType::I => 'I',
            PropositionType::O => 'O',
        }
    }
}

impl fmt::Display for PropositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<char> for PropositionType {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(PropositionType::A),
            'E' => Ok(PropositionType::E),
            'I' => Ok(PropositionType::I),
            'O' => Ok(PropositionType::O),
            other => Err(Error::InvalidSyllogismName(format!(
                "unknown proposition type '{}'",
                other
            ))),
        }
    }
}

impl FromStr for PropositionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PropositionType::try_from(c),
            _ => Err(Error::InvalidSyllogismName(format!(
                "expected a single proposition letter, got '{}'",
                s
            ))),
        }
    }
}

/// Where a term sits within a premise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermPosition {
    /// The term is the subject of the proposition (index 0).
    Subject,
    /// The term is the predicate of the proposition (index 1).
    Predicate,
}

impl TermPosition {
    /// Subject first, then predicate.
    pub const ALL: [TermPosition; 2] = [TermPosition::Subject, TermPosition::Predicate];

    /// The numeric encoding: 0 for subject, 1 for predicate.
    pub fn index(self) -> u8 {
        match self {
            TermPosition::Subject => 0,
            TermPosition::Predicate => 1,
        }
    }

    /// Decodes a numeric position, returning `None` for anything but 0 or 1.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(TermPosition::Subject),
            1 => Some(TermPosition::Predicate),
            _ => None,
        }
    }

    /// The other position in the same proposition.
    pub fn opposite(self) -> Self {
        match self {
            TermPosition::Subject => TermPosition::Predicate,
            TermPosition::Predicate => TermPosition::Subject,
        }
    }
}

/// The four schemas for placing the middle term across both premises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Figure {
    /// M-P, S-M
    First,
    /// P-M, S-M
    Second,
    /// M-P, M-S
    Third,
    /// P-M, M-S
    Fourth,
}

impl Figure {
    /// All figures in numeric order.
    pub const ALL: [Figure; 4] = [Figure::First, Figure::Second, Figure::Third, Figure::Fourth];

    /// Derives the figure from the middle term's position in each premise.
    pub fn from_positions(major_middle: TermPosition, minor_middle: TermPosition) -> Self {
        match (major_middle, minor_middle) {
            (TermPosition::Subject, TermPosition::Predicate) => Figure::First,
            (TermPosition::Predicate, TermPosition::Predicate) => Figure::Second,
            (TermPosition::Subject, TermPosition::Subject) => Figure::Third,
            (TermPosition::Predicate, TermPosition::Subject) => Figure::Fourth,
        }
    }

    /// The middle term positions `(major, minor)` that produce this figure.
    pub fn middle_positions(self) -> (TermPosition, TermPosition) {
        match self {
            Figure::First => (TermPosition::Subject, TermPosition::Predicate),
            Figure::Second => (TermPosition::Predicate, TermPosition::Predicate),
            Figure::Third => (TermPosition::Subject, TermPosition::Subject),
            Figure::Fourth => (TermPosition::Predicate, TermPosition::Subject),
        }
    }

    /// The figure number, 1 through 4.
    pub fn number(self) -> u8 {
        match self {
            Figure::First => 1,
            Figure::Second => 2,
            Figure::Third => 3,
            Figure::Fourth => 4,
        }
    }

    /// Looks a figure up by number.
    pub fn from_number(number: u8) -> Option<Self> {
        Figure::ALL.into_iter().find(|f| f.number() == number)
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A categorical syllogism in structural form.
///
/// The major premise relates the middle term `M` to the predicate term `P`,
/// the minor premise relates `M` to the subject term `S`, and the conclusion
/// relates `S` to `P`. Values are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllogism {
    major_type: PropositionType,
    minor_type: PropositionType,
    conclusion_type: PropositionType,
    major_middle_position: TermPosition,
    minor_middle_position: TermPosition,
}

impl Syllogism {
    /// Creates a syllogism from its mood and middle term positions.
    pub fn new(
        major_type: PropositionType,
        minor_type: PropositionType,
        conclusion_type: PropositionType,
        major_middle_position: TermPosition,
        minor_middle_position: TermPosition,
    ) -> Self {
        Self {
            major_type,
            minor_type,
            conclusion_type,
            major_middle_position,
            minor_middle_position,
        }
    }

    /// Creates a syllogism from its mood and figure.
    pub fn with_figure(
        major_type: PropositionType,
        minor_type: PropositionType,
        conclusion_type: PropositionType,
        figure: Figure,
    ) -> Self {
        let (major, minor) = figure.middle_positions();
        Self::new(major_type, minor_type, conclusion_type, major, minor)
    }

    /// Parses a canonical mood-figure name such as `"EAE-1"`.
    ///
    /// Letters are case-insensitive and surrounding whitespace is ignored.
    pub fn from_name(name: &str) -> Result<Self> {
        static NAME_RE: OnceLock<Regex> = OnceLock::new();
        let re = NAME_RE.get_or_init(|| {
            Regex::new(r"(?i)^([AEIO])([AEIO])([AEIO])-([1-4])$").expect("static regex is valid")
        });

        let caps = re
            .captures(name.trim())
            .ok_or_else(|| Error::InvalidSyllogismName(name.to_string()))?;

        let letter = |i: usize| -> Result<PropositionType> { caps[i].parse() };
        let figure = caps[4]
            .parse::<u8>()
            .ok()
            .and_then(Figure::from_number)
            .ok_or_else(|| Error::InvalidSyllogismName(name.to_string()))?;

        Ok(Self::with_figure(letter(1)?, letter(2)?, letter(3)?, figure))
    }

    /// The type of the premise containing `P` and `M`.
    pub fn major_type(&self) -> PropositionType {
        self.major_type
    }

    /// The type of the premise containing `S` and `M`.
    pub fn minor_type(&self) -> PropositionType {
        self.minor_type
    }

    /// The type of the `S`-`P` conclusion.
    pub fn conclusion_type(&self) -> PropositionType {
        self.conclusion_type
    }

    /// Where `M` sits in the major premise.
    pub fn major_middle_position(&self) -> TermPosition {
        self.major_middle_position
    }

    /// Where `M` sits in the minor premise.
    pub fn minor_middle_position(&self) -> TermPosition {
        self.minor_middle_position
    }

    /// The figure derived from the two middle term positions.
    pub fn figure(&self) -> Figure {
        Figure::from_positions(self.major_middle_position, self.minor_middle_position)
    }

    /// The three-letter mood, e.g. `"AAI"`.
    pub fn mood(&self) -> String {
        [self.major_type, self.minor_type, self.conclusion_type]
            .iter()
            .map(|t| t.code())
            .collect()
    }

    /// The canonical mood-figure identifier, e.g. `"AAA-1"`.
    pub fn canonical_name(&self) -> String {
        format!("{}-{}", self.mood(), self.figure())
    }

    /// Renders the argument as premise, premise, separator, conclusion.
    pub fn render(&self) -> String {
        let major = match self.major_middle_position {
            TermPosition::Subject => format!("M {} P", self.major_type),
            TermPosition::Predicate => format!("P {} M", self.major_type),
        };
        let minor = match self.minor_middle_position {
            TermPosition::Subject => format!("M {} S", self.minor_type),
            TermPosition::Predicate => format!("S {} M", self.minor_type),
        };
        format!("{}\n{}\n-----\nS {} P", major, minor, self.conclusion_type)
    }
}

impl fmt::Display for Syllogism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.canonical_name(), self.render())
    }
}

impl FromStr for Syllogism {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Syllogism::from_name(s)
    }
}
