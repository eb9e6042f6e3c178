//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine. The set
/// of states a machine uses is closed: it is declared once, at
/// construction, and never grows afterward.
///
/// Whether a state is terminal is *machine* configuration, not a property
/// of the state type: the same enum can drive one machine that stops at
/// `Stopped` and another that cycles forever.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for trace recording
/// - `PartialEq`: States must be comparable for handler lookup
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable so run
///   traces can be exported
///
/// # Example
///
/// ```rust
/// use mainspring::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lifecycle {
///     Stopped,
///     Running,
///     Paused,
/// }
///
/// impl State for Lifecycle {
///     fn name(&self) -> &str {
///         match self {
///             Self::Stopped => "Stopped",
///             Self::Running => "Running",
///             Self::Paused => "Paused",
///         }
///     }
/// }
///
/// assert_eq!(Lifecycle::Running.name(), "Running");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Stopped,
        Running,
        Paused,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Stopped => "Stopped",
                Self::Running => "Running",
                Self::Paused => "Paused",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Stopped.name(), "Stopped");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Paused.name(), "Paused");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Paused;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_cloneable() {
        let state = TestState::Running;
        let cloned = state.clone();
        assert_eq!(state, cloned);
    }

    #[test]
    fn state_is_comparable() {
        let state1 = TestState::Running;
        let state2 = TestState::Running;
        let state3 = TestState::Stopped;

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }
}
