//! The check-function contract.
//! A check function is an opaque predicate over one value type: given a
//! value, it either accepts or returns a descriptive failure. Checks are
//! immutable once constructed and freely cloneable; combinators close over
//! their constituent checks without sharing any mutable state.

use std::sync::Arc;
use thiserror::Error;

/// Outcome of applying a check function to a value.
pub type CheckResult = Result<(), CheckFailure>;

/// A typed validation predicate.
///
/// The `Arc` makes check functions cheap to clone into combinators while
/// keeping them shareable across threads once the registry is built.
pub type CheckFn<T> = Arc<dyn Fn(&T) -> CheckResult + Send + Sync>;

/// A descriptive validation failure produced by a check function.
///
/// # Examples
///
/// ```
/// use valex::CheckFailure;
///
/// let failure = CheckFailure::new("the value (5) must be greater than 6");
/// assert_eq!(failure.to_string(), "the value (5) must be greater than 6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CheckFailure {
    message: String,
}

impl CheckFailure {
    /// Construct a failure carrying the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Access the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
