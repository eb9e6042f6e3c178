//! State machine that executes injected handlers synchronously.

use crate::builder::MachineBuilder;
use crate::core::{RunTrace, State, TransitionRule, Visit};
use crate::runner::context::Context;
use crate::runner::error::MachineError;
use crate::runner::handler::Handler;

/// Result of executing a single step.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome<S: State> {
    /// The handler requested a new state and the machine moved to it
    Transitioned(S),

    /// The handler requested nothing; the machine stays where it is
    Stayed(S),

    /// A terminal state's handler completed; the run is over
    Finished(S),
}

/// A synchronous finite state machine over a closed state set.
///
/// Owns the current state, the state-to-handler mapping (total over the
/// declared set by construction), the terminal set, an optional rule
/// table, and the trace of every visit. Obtained from
/// [`MachineBuilder`], which performs all configuration validation.
pub struct StateMachine<S: State + 'static> {
    current: S,
    declared: Vec<S>,
    handlers: Vec<(S, Box<dyn Handler<S>>)>,
    terminal: Vec<S>,
    rules: Vec<TransitionRule<S>>,
    trace: RunTrace<S>,
}

impl<S: State + 'static> StateMachine<S> {
    /// Start configuring a machine.
    pub fn builder() -> MachineBuilder<S> {
        MachineBuilder::new()
    }

    pub(crate) fn from_parts(
        declared: Vec<S>,
        handlers: Vec<(S, Box<dyn Handler<S>>)>,
        initial: S,
        terminal: Vec<S>,
        rules: Vec<TransitionRule<S>>,
    ) -> Self {
        Self {
            current: initial,
            declared,
            handlers,
            terminal,
            rules,
            trace: RunTrace::new(),
        }
    }

    /// Get current state (pure).
    ///
    /// Valid at any time. While a handler is running the machine is
    /// mutably borrowed, so the handler reads the same value through
    /// [`Context::current`] instead.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if the machine currently sits in a terminal state (pure).
    pub fn is_terminal(&self) -> bool {
        self.terminal.contains(&self.current)
    }

    /// The closed state set declared at construction (pure).
    pub fn declared_states(&self) -> &[S] {
        &self.declared
    }

    /// The terminal states declared at construction (pure).
    pub fn terminal_states(&self) -> &[S] {
        &self.terminal
    }

    /// Get the visit trace (pure).
    pub fn trace(&self) -> &RunTrace<S> {
        &self.trace
    }

    /// Execute one iteration of the loop: invoke the current state's
    /// handler once, then settle what happens next.
    ///
    /// An undeclared transition request fails with
    /// [`MachineError::InvalidState`] before any state mutation - even
    /// when the handler swallowed the request's result, and even in a
    /// terminal state. A terminal state otherwise finishes the run after
    /// its handler completes; any transition it requested is not
    /// consulted.
    pub fn step(&mut self) -> Result<StepOutcome<S>, MachineError> {
        let state = self.current.clone();

        let Some((_, handler)) = self.handlers.iter_mut().find(|(s, _)| *s == state) else {
            return Err(MachineError::MissingHandler {
                state: state.name().to_string(),
            });
        };

        self.trace = self.trace.record(Visit::new(state.clone()));

        let mut ctx = Context::new(state.clone());
        handler
            .handle(&mut ctx)
            .map_err(|source| MachineError::HandlerFailed {
                state: state.name().to_string(),
                source,
            })?;
        let requested = ctx.into_request();

        if let Some(target) = requested.as_ref() {
            if !self.declared.contains(target) {
                return Err(MachineError::InvalidState {
                    from: state.name().to_string(),
                    requested: target.name().to_string(),
                });
            }
        }

        if self.terminal.contains(&state) {
            return Ok(StepOutcome::Finished(state));
        }

        match requested {
            Some(target) => {
                if !self.rules.is_empty()
                    && !self.rules.iter().any(|rule| rule.permits(&state, &target))
                {
                    return Err(MachineError::TransitionDenied {
                        from: state.name().to_string(),
                        to: target.name().to_string(),
                    });
                }

                self.current = target.clone();
                Ok(StepOutcome::Transitioned(target))
            }
            None => Ok(StepOutcome::Stayed(state)),
        }
    }

    /// Execute the main loop until a terminal state's handler completes.
    ///
    /// Each visited state's handler is invoked exactly once per visit, in
    /// visit order. The terminal state's handler still runs before the
    /// loop exits. Errors abort the loop immediately and leave the
    /// current state wherever the last successful step put it.
    ///
    /// A non-terminal handler that never requests a transition makes this
    /// loop revisit the same state forever. That is the contract for a
    /// self-loop, not a bug; drive such machines with [`step`](Self::step)
    /// if you need an upper bound.
    pub fn run(&mut self) -> Result<(), MachineError> {
        loop {
            if let StepOutcome::Finished(_) = self.step()? {
                return Ok(());
            }
        }
    }
}
