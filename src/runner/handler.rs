//! Per-state handler capability.
//!
//! A handler is the action bound to a state, executed each time that
//! state is visited. Handlers are injected at construction; the machine
//! never registers anything globally.

use crate::core::State;
use crate::runner::context::Context;
use thiserror::Error;

/// Typed failure a handler raises to abort the run.
///
/// Handler errors are never retried; they surface from `run()` as
/// [`MachineError::HandlerFailed`](crate::runner::MachineError).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Create a handler error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Type alias for what a handler invocation returns.
pub type HandlerResult = Result<(), HandlerError>;

/// The capability bound to a state, invoked exactly once per visit.
///
/// Implemented automatically for any `FnMut(&mut Context<S>) -> HandlerResult`
/// closure; implement it by hand when the handler carries its own struct
/// state.
///
/// Handlers may have arbitrary external side effects (I/O); those are
/// outside the machine's contract. A handler signals the next state via
/// [`Context::request_transition`] and failure by returning an error,
/// which aborts the run.
///
/// # Example
///
/// ```rust
/// use mainspring::core::State;
/// use mainspring::runner::{Context, Handler, HandlerResult};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step {
///     First,
///     Second,
/// }
///
/// impl State for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::First => "First",
///             Self::Second => "Second",
///         }
///     }
/// }
///
/// struct CountingHandler {
///     visits: usize,
/// }
///
/// impl Handler<Step> for CountingHandler {
///     fn handle(&mut self, ctx: &mut Context<Step>) -> HandlerResult {
///         self.visits += 1;
///         ctx.request_transition(Step::Second);
///         Ok(())
///     }
/// }
/// ```
pub trait Handler<S: State> {
    /// Run this state's action for one visit.
    fn handle(&mut self, ctx: &mut Context<S>) -> HandlerResult;
}

impl<S, F> Handler<S> for F
where
    S: State,
    F: FnMut(&mut Context<S>) -> HandlerResult,
{
    fn handle(&mut self, ctx: &mut Context<S>) -> HandlerResult {
        self(ctx)
    }
}
