//! Mutation capability lent to handlers.

use crate::core::State;

/// The machine's mutation capability, passed to a handler for exactly the
/// duration of its invocation.
///
/// A handler reads the state it is running for via [`current`](Self::current)
/// and declares the next state via
/// [`request_transition`](Self::request_transition). The machine collects
/// the request after the handler returns and validates it against the
/// declared state set before any state changes; during the invocation
/// `current()` still reflects the state whose handler is running, never
/// the requested target.
#[derive(Debug)]
pub struct Context<S: State> {
    current: S,
    requested: Option<S>,
}

impl<S: State> Context<S> {
    pub(crate) fn new(current: S) -> Self {
        Self {
            current,
            requested: None,
        }
    }

    /// The state whose handler is currently running.
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Request that the machine move to `target` after this handler
    /// returns.
    ///
    /// If called more than once in a single invocation, the last request
    /// wins. Requesting a state outside the machine's declared set aborts
    /// the run with
    /// [`MachineError::InvalidState`](crate::runner::MachineError) before
    /// the current state is mutated. Not calling this at all means the
    /// machine stays in the current state.
    pub fn request_transition(&mut self, target: S) {
        self.requested = Some(target);
    }

    /// The transition requested so far in this invocation, if any.
    pub fn requested(&self) -> Option<&S> {
        self.requested.as_ref()
    }

    pub(crate) fn into_request(self) -> Option<S> {
        self.requested
    }
}
