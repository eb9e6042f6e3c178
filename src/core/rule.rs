//! Declared transition rules for optional edge validation.
//!
//! By default a machine lets any state request any other declared state.
//! Declaring rules switches the machine to an explicit edge table: every
//! requested transition must match a rule, or the run aborts.

use super::guard::Guard;
use super::state::State;

/// A declared edge from one state to another, with an optional guard.
///
/// The guard, if present, is evaluated against the state the transition
/// leaves from.
///
/// # Example
///
/// ```rust
/// use mainspring::core::{State, TransitionRule};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DocState {
///     Draft,
///     Published,
/// }
///
/// impl State for DocState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Published => "Published",
///         }
///     }
/// }
///
/// let rule = TransitionRule::new(DocState::Draft, DocState::Published);
///
/// assert!(rule.permits(&DocState::Draft, &DocState::Published));
/// assert!(!rule.permits(&DocState::Published, &DocState::Draft));
/// ```
pub struct TransitionRule<S: State> {
    from: S,
    to: S,
    guard: Option<Guard<S>>,
}

impl<S: State> TransitionRule<S> {
    /// Declare an unconditional edge from `from` to `to`.
    pub fn new(from: S, to: S) -> Self {
        Self {
            from,
            to,
            guard: None,
        }
    }

    /// Attach a guard predicate to this edge.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Attach a pre-built guard to this edge.
    pub fn guarded(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// The state this edge leaves from.
    pub fn source(&self) -> &S {
        &self.from
    }

    /// The state this edge arrives at.
    pub fn target(&self) -> &S {
        &self.to
    }

    /// Check whether this rule permits the transition `from -> to` (pure).
    pub fn permits(&self, from: &S, to: &S) -> bool {
        if self.from != *from || self.to != *to {
            return false;
        }

        // Guard is evaluated against the source state
        self.guard.as_ref().is_none_or(|g| g.check(from))
    }
}

impl<S: State> Clone for TransitionRule<S> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
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
    fn rule_permits_its_own_edge() {
        let rule = TransitionRule::new(TestState::Draft, TestState::InReview);

        assert!(rule.permits(&TestState::Draft, &TestState::InReview));
    }

    #[test]
    fn rule_rejects_other_edges() {
        let rule = TransitionRule::new(TestState::Draft, TestState::InReview);

        assert!(!rule.permits(&TestState::InReview, &TestState::Draft));
        assert!(!rule.permits(&TestState::Draft, &TestState::Published));
        assert!(!rule.permits(&TestState::InReview, &TestState::Published));
    }

    #[test]
    fn guard_blocks_edge_when_it_fails() {
        let rule = TransitionRule::new(TestState::Draft, TestState::Published)
            .when(|_s: &TestState| false);

        assert!(!rule.permits(&TestState::Draft, &TestState::Published));
    }

    #[test]
    fn guard_admits_edge_when_it_passes() {
        let rule = TransitionRule::new(TestState::Draft, TestState::Published)
            .when(|s: &TestState| matches!(s, TestState::Draft));

        assert!(rule.permits(&TestState::Draft, &TestState::Published));
    }

    #[test]
    fn prebuilt_guard_is_honored() {
        let guard = Guard::new(|s: &TestState| matches!(s, TestState::InReview));
        let rule = TransitionRule::new(TestState::InReview, TestState::Published).guarded(guard);

        assert!(rule.permits(&TestState::InReview, &TestState::Published));
    }

    #[test]
    fn accessors_expose_endpoints() {
        let rule = TransitionRule::new(TestState::Draft, TestState::InReview);

        assert_eq!(rule.source(), &TestState::Draft);
        assert_eq!(rule.target(), &TestState::InReview);
    }

    #[test]
    fn cloned_rule_permits_the_same_edges() {
        let rule = TransitionRule::new(TestState::Draft, TestState::InReview)
            .when(|s: &TestState| matches!(s, TestState::Draft));
        let cloned = rule.clone();

        assert!(cloned.permits(&TestState::Draft, &TestState::InReview));
        assert!(!cloned.permits(&TestState::InReview, &TestState::Published));
    }
}
