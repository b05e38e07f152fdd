use std::fmt;
use std::sync::Arc;

/// Shared predicate over the dispatch input.
pub(crate) type Condition<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A condition paired with the result it selects.
///
/// Rules are usually added through [`RuleTableBuilder`](super::RuleTableBuilder),
/// but can also be built up front and handed over as a sequence with
/// [`RuleTableBuilder::from_rules()`](super::RuleTableBuilder::from_rules).
/// The result is bound when the rule is created, never computed lazily.
pub struct Rule<T: ?Sized, R> {
    condition: Condition<T>,
    result: R,
}

impl<T: ?Sized, R> Rule<T, R> {
    pub fn new(condition: impl Fn(&T) -> bool + Send + Sync + 'static, result: R) -> Self {
        Self {
            condition: Arc::new(condition),
            result,
        }
    }

    pub(crate) fn from_condition(condition: Condition<T>, result: R) -> Self {
        Self { condition, result }
    }

    /// Test the condition against `input`.
    #[must_use]
    pub fn matches(&self, input: &T) -> bool {
        (self.condition)(input)
    }

    #[must_use]
    pub fn result(&self) -> &R {
        &self.result
    }
}

// Cloning shares the condition and clones only the result.
impl<T: ?Sized, R: Clone> Clone for Rule<T, R> {
    fn clone(&self) -> Self {
        Self {
            condition: Arc::clone(&self.condition),
            result: self.result.clone(),
        }
    }
}

impl<T: ?Sized, R: fmt::Debug> fmt::Debug for Rule<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("condition", &"<fn>")
            .field("result", &self.result)
            .finish()
    }
}
