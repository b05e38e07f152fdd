use std::time::Instant;

use crate::types::{EvaluationReport, Fallback, Rule};

/// Linear scan in insertion order; stops at the first true condition.
pub(crate) fn first_match<'a, T: ?Sized, R>(
    rules: &'a [Rule<T, R>],
    input: &T,
) -> Option<(usize, &'a Rule<T, R>)> {
    rules.iter().enumerate().find(|(_, rule)| rule.matches(input))
}

pub(crate) fn evaluate<T: ?Sized, R: Clone, E>(
    rules: &[Rule<T, R>],
    fallback: &Fallback<T, R, E>,
    input: &T,
) -> Result<R, E> {
    if let Some((_, rule)) = first_match(rules, input) {
        return Ok(rule.result().clone());
    }

    log::trace!(
        "no rule matched among {}; using {} fallback",
        rules.len(),
        fallback.kind()
    );
    fallback.resolve(input)
}

pub(crate) fn evaluate_detailed<T: ?Sized, R: Clone, E>(
    rules: &[Rule<T, R>],
    fallback: &Fallback<T, R, E>,
    input: &T,
) -> EvaluationReport<R, E> {
    let start = Instant::now();

    let matched = first_match(rules, input);
    let (outcome, index, tested) = match matched {
        Some((index, rule)) => (Ok(rule.result().clone()), Some(index), index + 1),
        None => (fallback.resolve(input), None, rules.len()),
    };

    EvaluationReport::new(outcome, index, tested, fallback.kind(), start.elapsed())
}
