use std::fmt;
use std::time::Duration;

use super::fallback::FallbackKind;

/// Detailed evaluation report returned by
/// [`RuleTable::evaluate_detailed()`](super::RuleTable::evaluate_detailed).
///
/// Contains the outcome, the index of the deciding rule (if any), how many
/// conditions were tested before the decision, and the wall-clock duration.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport<R, E> {
    outcome: Result<R, E>,
    matched: Option<usize>,
    tested: usize,
    fallback: FallbackKind,
    duration: Duration,
}

impl<R, E> EvaluationReport<R, E> {
    pub(crate) fn new(
        outcome: Result<R, E>,
        matched: Option<usize>,
        tested: usize,
        fallback: FallbackKind,
        duration: Duration,
    ) -> Self {
        Self {
            outcome,
            matched,
            tested,
            fallback,
            duration,
        }
    }

    /// The outcome, same as [`RuleTable::evaluate()`](super::RuleTable::evaluate).
    pub fn outcome(&self) -> Result<&R, &E> {
        self.outcome.as_ref()
    }

    pub fn into_outcome(self) -> Result<R, E> {
        self.outcome
    }

    /// Index of the rule that decided, or `None` when the fallback did.
    #[must_use]
    pub fn matched(&self) -> Option<usize> {
        self.matched
    }

    /// Number of conditions tested. Equals the rule count on fallback.
    #[must_use]
    pub fn tested(&self) -> usize {
        self.tested
    }

    /// The fallback kind of the evaluated table, or `None` if a rule decided.
    #[must_use]
    pub fn fallback_used(&self) -> Option<FallbackKind> {
        match self.matched {
            Some(_) => None,
            None => Some(self.fallback),
        }
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<R, E> fmt::Display for EvaluationReport<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.matched {
            Some(index) => write!(f, "decided by: rule {index}")?,
            None => write!(f, "decided by: {} fallback", self.fallback)?,
        }
        write!(f, ", tested: {}", self.tested)?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
