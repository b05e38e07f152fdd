use std::fmt;

use thiserror::Error;

/// Ready-made error for tables finalized with
/// [`finalize_with_failure()`](crate::RuleTableBuilder::finalize_with_failure).
///
/// Any error type works there; this one just covers the common
/// "no rule matched this input" case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("unknown case: {input}")]
    NoMatch { input: String },
}

impl DecisionError {
    /// Build a [`DecisionError::NoMatch`] embedding the `Debug` rendering of `input`.
    pub fn no_match<T: fmt::Debug + ?Sized>(input: &T) -> Self {
        Self::NoMatch {
            input: format!("{input:?}"),
        }
    }
}
