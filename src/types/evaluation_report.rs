use std::fmt;
use std::time::Duration;

use super::outcome::Outcome;

/// Detailed evaluation report returned by
/// [`RuleSet::evaluate_detailed()`](super::ruleset::RuleSet::evaluate_detailed).
///
/// Contains the outcome, the lines of every rule that fired with an action,
/// the line of the winning rule, and the wall-clock duration of the evaluation.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    outcome: Outcome,
    fired: Vec<usize>,
    winner: Option<usize>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(
        outcome: Outcome,
        fired: Vec<usize>,
        winner: Option<usize>,
        duration: Duration,
    ) -> Self {
        Self {
            outcome,
            fired,
            winner,
            duration,
        }
    }

    /// The outcome, same as [`RuleSet::evaluate()`](super::ruleset::RuleSet::evaluate).
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Source lines of rules that fired with an action, in rule set order.
    #[must_use]
    pub fn fired(&self) -> &[usize] {
        &self.fired
    }

    /// Source line of the rule whose action won. Among equal actions the
    /// earliest line is reported.
    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "outcome: {}", self.outcome)?;
        if let Some(line) = self.winner {
            write!(f, " (line {line})")?;
        }
        let fired: Vec<String> = self.fired.iter().map(usize::to_string).collect();
        write!(f, ", fired: [{}]", fired.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
