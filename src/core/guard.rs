//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that determine whether a declared
//! transition rule applies. They encapsulate pre-conditions as pure
//! functions, maintaining the "pure core" philosophy.

use super::state::State;
use std::sync::Arc;

/// Pure predicate evaluated against the state a transition leaves from.
///
/// Guards are attached to [`TransitionRule`](super::TransitionRule)s; a
/// rule with a guard only permits its edge when the guard passes. The
/// predicate must be pure (deterministic, no side effects).
///
/// # Example
///
/// ```rust
/// use mainspring::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum WorkState {
///     Idle,
///     Busy,
/// }
///
/// impl State for WorkState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Busy => "Busy",
///         }
///     }
/// }
///
/// let only_from_idle = Guard::new(|s: &WorkState| matches!(s, WorkState::Idle));
///
/// assert!(only_from_idle.check(&WorkState::Idle));
/// assert!(!only_from_idle.check(&WorkState::Busy));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows transition from this state.
    ///
    /// This is a pure function that evaluates the predicate without
    /// any side effects.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Draft,
        InReview,
        Published,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "Draft",
                Self::InReview => "InReview",
                Self::Published => "Published",
            }
        }
    }

    #[test]
    fn guard_allows_matching_states() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::Draft));

        assert!(guard.check(&TestState::Draft));
        assert!(!guard.check(&TestState::InReview));
    }

    #[test]
    fn guard_is_deterministic() {
        let state = TestState::InReview;
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::InReview));

        let result1 = guard.check(&state);
        let result2 = guard.check(&state);

        assert_eq!(result1, result2);
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard =
            Guard::new(|s: &TestState| matches!(s, TestState::Draft | TestState::InReview));

        assert!(guard.check(&TestState::Draft));
        assert!(guard.check(&TestState::InReview));
        assert!(!guard.check(&TestState::Published));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::Published));
        let cloned = guard.clone();

        assert_eq!(
            guard.check(&TestState::Published),
            cloned.check(&TestState::Published)
        );
        assert_eq!(guard.check(&TestState::Draft), cloned.check(&TestState::Draft));
    }
}
