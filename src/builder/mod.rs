//! Builder API for ergonomic state machine construction.
//!
//! This module provides the fluent builder, the configuration error
//! taxonomy, the `state_enum!` macro, and the stock handlers client code
//! keeps re-writing.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::ConfigError;
pub use machine::MachineBuilder;

use crate::core::State;
use crate::runner::{Context, Handler, HandlerResult};

/// Handler that requests `target` on every visit.
///
/// # Example
///
/// ```rust
/// use mainspring::builder::{noop, transition_to, MachineBuilder};
/// use mainspring::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let mut machine = MachineBuilder::new()
///     .states(MyState::VARIANTS.iter().cloned())
///     .on(MyState::Start, transition_to(MyState::End))
///     .on(MyState::End, noop())
///     .initial(MyState::Start)
///     .terminal(MyState::End)
///     .build()
///     .unwrap();
///
/// machine.run().unwrap();
/// assert_eq!(machine.current_state(), &MyState::End);
/// ```
pub fn transition_to<S: State + 'static>(target: S) -> impl Handler<S> {
    move |ctx: &mut Context<S>| -> HandlerResult {
        ctx.request_transition(target.clone());
        Ok(())
    }
}

/// Handler that does nothing and requests nothing.
///
/// Handy for terminal states, and for non-terminal states that are
/// driven one [`step`](crate::runner::StateMachine::step) at a time.
/// Binding it to a non-terminal state and calling
/// [`run`](crate::runner::StateMachine::run) produces a deliberate
/// infinite self-loop.
pub fn noop<S: State + 'static>() -> impl Handler<S> {
    |_ctx: &mut Context<S>| -> HandlerResult { Ok(()) }
}
