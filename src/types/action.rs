use std::fmt;

use super::outcome::Outcome;

/// The effect a rule has on a candidate when it fires.
///
/// Variant order is the precedence order. The derived `Ord` compares the
/// variant first and the stored magnitude second, so when several rules fire
/// the evaluator simply takes the maximum:
///
/// `GenericDiscard < Downrank(_) < Boost(_) < SpecificDiscard`
///
/// Downrank magnitudes are stored negated, which makes the least negative
/// (weakest) downrank the maximum among downranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// `$discard` with no pattern, scope or field flag.
    GenericDiscard,
    /// `$downrank[=n]`, stored as `-n`.
    Downrank(i64),
    /// `$boost[=n]`.
    Boost(i64),
    /// `$discard` constrained by a pattern, a site or a field flag.
    SpecificDiscard,
}

impl Action {
    /// The signed score adjustment, or `None` for discards.
    #[must_use]
    pub fn score(self) -> Option<i64> {
        match self {
            Action::Boost(m) | Action::Downrank(m) => Some(m),
            Action::GenericDiscard | Action::SpecificDiscard => None,
        }
    }

    /// Whether this action removes the candidate, generic or specific.
    #[must_use]
    pub fn is_discard(self) -> bool {
        matches!(self, Action::GenericDiscard | Action::SpecificDiscard)
    }

    /// Map this action to the outcome it produces when it wins.
    pub fn outcome(self) -> Outcome {
        match self.score() {
            Some(m) => Outcome::Score(m),
            None => Outcome::Discard,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::GenericDiscard => write!(f, "generic discard"),
            Action::Downrank(m) => write!(f, "downrank({m})"),
            Action::Boost(m) => write!(f, "boost({m})"),
            Action::SpecificDiscard => write!(f, "specific discard"),
        }
    }
}
