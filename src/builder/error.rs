//! Configuration errors raised when building a machine.

use thiserror::Error;

/// Errors that can occur when building a state machine.
///
/// All of these are construction-time failures: the machine is never
/// created, and the caller must fix the configuration and rebuild.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No states declared. Call .states(..) before .build()")]
    NoStates,

    #[error("State '{state}' declared more than once")]
    DuplicateState { state: String },

    #[error("No handlers registered. Bind at least one with .on(state, handler)")]
    NoHandlers,

    #[error("State '{state}' has no handler. Every declared state needs one")]
    MissingHandler { state: String },

    #[error("State '{state}' has more than one handler bound")]
    DuplicateHandler { state: String },

    #[error("State '{state}' is not part of the declared state set")]
    UndeclaredState { state: String },

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
