//! Runtime errors raised by the run loop.

use crate::runner::handler::HandlerError;
use thiserror::Error;

/// Errors that abort `run()`.
///
/// All variants are fatal: nothing is retried internally, and the
/// current state is never mutated by a failed step. The embedding host
/// decides how to report a propagated error.
#[derive(Debug, Error)]
pub enum MachineError {
    /// A handler requested a state outside the declared set.
    #[error("requested transition from '{from}' to undeclared state '{requested}'")]
    InvalidState { from: String, requested: String },

    /// No handler registered for the current state. Construction-time
    /// validation makes this unreachable; kept as an internal-invariant
    /// guard.
    #[error("no handler registered for state '{state}'")]
    MissingHandler { state: String },

    /// The declared rule table has no edge permitting this transition.
    #[error("transition from '{from}' to '{to}' is not permitted by any declared rule")]
    TransitionDenied { from: String, to: String },

    /// A handler returned an error.
    #[error("handler for state '{state}' failed")]
    HandlerFailed {
        state: String,
        #[source]
        source: HandlerError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn errors_name_the_states_involved() {
        let err = MachineError::InvalidState {
            from: "Running".to_string(),
            requested: "Exploded".to_string(),
        };
        assert!(err.to_string().contains("Running"));
        assert!(err.to_string().contains("Exploded"));

        let err = MachineError::TransitionDenied {
            from: "Draft".to_string(),
            to: "Published".to_string(),
        };
        assert!(err.to_string().contains("Draft"));
        assert!(err.to_string().contains("Published"));
    }

    #[test]
    fn handler_failure_carries_its_source() {
        let err = MachineError::HandlerFailed {
            state: "Running".to_string(),
            source: HandlerError::new("disk full"),
        };

        let source = err.source().expect("source should be attached");
        assert_eq!(source.to_string(), "disk full");
    }
}
