use std::fmt;
use std::sync::Arc;

/// Which terminal operation bound the fallback of a [`RuleTable`](super::RuleTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackKind {
    /// A fixed value, returned for every unmatched input.
    Constant,
    /// A value computed from the unmatched input.
    Computed,
    /// An error built from the unmatched input.
    Failure,
}

impl fmt::Display for FallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constant => "constant",
            Self::Computed => "computed",
            Self::Failure => "failure",
        };
        f.write_str(name)
    }
}

/// The terminal strategy of a table.
///
/// All three kinds are stored as the same `&T -> Result<R, E>` function; they
/// differ only in whether the outcome is `Ok` or `Err`.
pub(crate) struct Fallback<T: ?Sized, R, E> {
    kind: FallbackKind,
    resolve: Arc<dyn Fn(&T) -> Result<R, E> + Send + Sync>,
}

impl<T: ?Sized, R, E> Fallback<T, R, E> {
    pub(crate) fn constant(value: R) -> Self
    where
        R: Clone + Send + Sync + 'static,
    {
        Self {
            kind: FallbackKind::Constant,
            resolve: Arc::new(move |_: &T| Ok(value.clone())),
        }
    }

    pub(crate) fn computed(f: impl Fn(&T) -> R + Send + Sync + 'static) -> Self {
        Self {
            kind: FallbackKind::Computed,
            resolve: Arc::new(move |input: &T| Ok(f(input))),
        }
    }

    pub(crate) fn failure(new_error: impl Fn(&T) -> E + Send + Sync + 'static) -> Self {
        Self {
            kind: FallbackKind::Failure,
            resolve: Arc::new(move |input: &T| Err(new_error(input))),
        }
    }

    pub(crate) fn kind(&self) -> FallbackKind {
        self.kind
    }

    pub(crate) fn resolve(&self, input: &T) -> Result<R, E> {
        (self.resolve)(input)
    }
}
