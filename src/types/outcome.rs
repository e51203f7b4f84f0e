use std::fmt;

use super::action::Action;

/// Result of evaluating a [`RuleSet`](super::RuleSet) against one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Outcome {
    /// No rule with an action fired.
    #[default]
    NoOpinion,
    /// A discard rule won; the document should be dropped.
    Discard,
    /// A boost or downrank won with this signed adjustment.
    Score(i64),
}

impl Outcome {
    #[must_use]
    pub fn score(self) -> Option<i64> {
        match self {
            Outcome::Score(m) => Some(m),
            Outcome::NoOpinion | Outcome::Discard => None,
        }
    }

    #[must_use]
    pub fn is_discard(self) -> bool {
        self == Outcome::Discard
    }

    #[must_use]
    pub fn is_no_opinion(self) -> bool {
        self == Outcome::NoOpinion
    }
}

impl From<Action> for Outcome {
    fn from(action: Action) -> Self {
        action.outcome()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoOpinion => write!(f, "no opinion"),
            Outcome::Discard => write!(f, "discard"),
            Outcome::Score(m) => write!(f, "score {m}"),
        }
    }
}
