use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use super::evaluation_report::EvaluationReport;
use super::fallback::{Fallback, FallbackKind};
use super::rule::{Condition, Rule};

/// Builder for constructing a [`RuleTable`].
///
/// Rules are kept in the order they are added; that order is their priority.
/// Finalizing copies the rules into the table, so the builder can keep
/// growing without affecting tables already produced from it.
///
/// # Example
///
/// ```
/// use decisions::RuleTableBuilder;
///
/// let sign = RuleTableBuilder::new()
///     .rule(|x: &i64| *x < 0, "negative")
///     .rule(|x: &i64| *x == 0, "zero")
///     .finalize_with_default("positive");
///
/// assert_eq!(sign.apply(&-3), "negative");
/// assert_eq!(sign.apply(&0), "zero");
/// assert_eq!(sign.apply(&8), "positive");
/// ```
pub struct RuleTableBuilder<T: ?Sized, R> {
    rules: Vec<Rule<T, R>>,
}

/// Intermediate handle returned by [`RuleTableBuilder::when()`].
#[must_use = "a condition without `.then()` adds no rule"]
pub struct When<T: ?Sized, R> {
    builder: RuleTableBuilder<T, R>,
    condition: Condition<T>,
}

/// Intermediate handle returned by [`RuleTableBuilder::reply()`].
#[must_use = "a reply without `.when()` adds no rule"]
pub struct Reply<T: ?Sized, R> {
    builder: RuleTableBuilder<T, R>,
    result: R,
}

impl<T: ?Sized, R> RuleTableBuilder<T, R> {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Seed a builder from an ordered sequence of rules.
    ///
    /// Equivalent to calling [`push()`](Self::push) for each rule in turn.
    #[must_use]
    pub fn from_rules(rules: impl IntoIterator<Item = Rule<T, R>>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Append a rule with the lowest priority so far.
    ///
    /// Overlapping or duplicate conditions are allowed; the earlier rule wins.
    #[must_use]
    pub fn rule(
        self,
        condition: impl Fn(&T) -> bool + Send + Sync + 'static,
        result: R,
    ) -> Self {
        self.push(Rule::new(condition, result))
    }

    /// Append an already built rule.
    #[must_use]
    pub fn push(mut self, rule: Rule<T, R>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Start a rule from its condition; `.then(result)` completes it.
    pub fn when(self, condition: impl Fn(&T) -> bool + Send + Sync + 'static) -> When<T, R> {
        When {
            builder: self,
            condition: Arc::new(condition),
        }
    }

    /// Start a rule from its result; `.when(condition)` completes it.
    pub fn reply(self, result: R) -> Reply<T, R> {
        Reply {
            builder: self,
            result,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rules collected so far, in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule<T, R>] {
        &self.rules
    }
}

impl<T: ?Sized, R: Clone> RuleTableBuilder<T, R> {
    /// Finalize with a fixed value returned when no rule matches.
    pub fn finalize_with_default(&self, value: R) -> RuleTable<T, R>
    where
        R: Send + Sync + 'static,
    {
        self.finalize(Fallback::constant(value))
    }

    /// Finalize with a value computed from the unmatched input.
    pub fn finalize_with_computed_default(
        &self,
        fallback: impl Fn(&T) -> R + Send + Sync + 'static,
    ) -> RuleTable<T, R> {
        self.finalize(Fallback::computed(fallback))
    }

    /// Finalize so that an unmatched input is an error built by `new_error`.
    ///
    /// See [`DecisionError::no_match`](crate::DecisionError::no_match) for a
    /// ready-made factory.
    pub fn finalize_with_failure<E>(
        &self,
        new_error: impl Fn(&T) -> E + Send + Sync + 'static,
    ) -> RuleTable<T, R, E> {
        self.finalize(Fallback::failure(new_error))
    }

    fn finalize<E>(&self, fallback: Fallback<T, R, E>) -> RuleTable<T, R, E> {
        log::trace!(
            "finalizing rule table with {} rules and {} fallback",
            self.rules.len(),
            fallback.kind()
        );
        RuleTable {
            rules: self.rules.iter().cloned().collect(),
            fallback,
        }
    }
}

impl<T: ?Sized, R> When<T, R> {
    #[must_use]
    pub fn then(self, result: R) -> RuleTableBuilder<T, R> {
        self.builder.push(Rule::from_condition(self.condition, result))
    }
}

impl<T: ?Sized, R> Reply<T, R> {
    #[must_use]
    pub fn when(
        self,
        condition: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> RuleTableBuilder<T, R> {
        self.builder.rule(condition, self.result)
    }
}

impl<T: ?Sized, R> Default for RuleTableBuilder<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, R: Clone> Clone for RuleTableBuilder<T, R> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T: ?Sized, R> From<Vec<Rule<T, R>>> for RuleTableBuilder<T, R> {
    fn from(rules: Vec<Rule<T, R>>) -> Self {
        Self { rules }
    }
}

impl<T: ?Sized, R> FromIterator<Rule<T, R>> for RuleTableBuilder<T, R> {
    fn from_iter<I: IntoIterator<Item = Rule<T, R>>>(iter: I) -> Self {
        Self::from_rules(iter)
    }
}

impl<T: ?Sized, R> Extend<Rule<T, R>> for RuleTableBuilder<T, R> {
    fn extend<I: IntoIterator<Item = Rule<T, R>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<T: ?Sized, R: fmt::Debug> fmt::Debug for RuleTableBuilder<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTableBuilder")
            .field("rules", &self.rules)
            .finish()
    }
}

/// A finalized, immutable decision function.
///
/// Owns its own copy of the rules plus the fallback bound at finalization.
/// Thread-safe whenever `R` is, and designed to live behind `Arc`.
///
/// Tables finalized with a constant or computed default use `E = Infallible`
/// and can be called through [`apply()`](Self::apply).
pub struct RuleTable<T: ?Sized, R, E = Infallible> {
    rules: Box<[Rule<T, R>]>,
    fallback: Fallback<T, R, E>,
}

impl<T: ?Sized, R: Clone, E> RuleTable<T, R, E> {
    /// Return the result of the first rule whose condition holds for `input`,
    /// or the fallback's outcome when none does.
    ///
    /// # Errors
    ///
    /// Returns the error built by the failure factory when the table was
    /// finalized with [`RuleTableBuilder::finalize_with_failure()`] and no
    /// rule matches. Other tables never return `Err`.
    pub fn evaluate(&self, input: &T) -> Result<R, E> {
        crate::evaluate::evaluate(&self.rules, &self.fallback, input)
    }

    /// Evaluate with diagnostics: which rule matched, how many conditions
    /// were tested, and how long it took.
    pub fn evaluate_detailed(&self, input: &T) -> EvaluationReport<R, E> {
        crate::evaluate::evaluate_detailed(&self.rules, &self.fallback, input)
    }

    /// Consume the table and return it as a plain function value.
    pub fn into_fn(self) -> impl Fn(&T) -> Result<R, E> {
        move |input: &T| self.evaluate(input)
    }

    /// Select a function by `input` and apply it to the same `input`.
    ///
    /// Useful for tables whose results are themselves functions of the input,
    /// e.g. formatters chosen by category.
    ///
    /// # Errors
    ///
    /// Propagates the failure fallback's error, like [`evaluate()`](Self::evaluate).
    pub fn dispatch<U>(&self, input: &T) -> Result<U, E>
    where
        R: Fn(&T) -> U,
    {
        let selected = self.evaluate(input)?;
        Ok(selected(input))
    }
}

impl<T: ?Sized, R: Clone> RuleTable<T, R> {
    /// Evaluate a table whose fallback cannot fail.
    #[must_use]
    pub fn apply(&self, input: &T) -> R {
        match self.evaluate(input) {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }
}

impl<T: ?Sized, R, E> RuleTable<T, R, E> {
    /// Index of the rule that would decide `input`, or `None` if the fallback would.
    #[must_use]
    pub fn matching_rule(&self, input: &T) -> Option<usize> {
        crate::evaluate::first_match(&self.rules, input).map(|(index, _)| index)
    }

    /// The frozen rules, in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule<T, R>] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn fallback_kind(&self) -> FallbackKind {
        self.fallback.kind()
    }
}

impl<T: ?Sized, R, E> fmt::Display for RuleTable<T, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleTable({} rules, fallback: {})",
            self.rules.len(),
            self.fallback.kind(),
        )
    }
}

impl<T: ?Sized, R: fmt::Debug, E> fmt::Debug for RuleTable<T, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTable")
            .field("rules", &self.rules)
            .field("fallback", &self.fallback.kind())
            .finish()
    }
}
