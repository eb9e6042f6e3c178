//! Mainspring: a synchronous, handler-driven finite state machine runner
//!
//! Mainspring keeps a "pure core, imperative shell" split. The core state
//! machine types are pure values with no side effects; the run loop that
//! invokes handlers (which may do arbitrary I/O) is isolated in the runner.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Handler**: The capability bound to a state, invoked once per visit
//! - **Transition request**: A handler's declaration of the next state
//! - **Trace**: Immutable record of every visit the run loop makes
//!
//! # Example
//!
//! ```rust
//! use mainspring::builder::{noop, MachineBuilder};
//! use mainspring::runner::{Context, HandlerResult};
//! use mainspring::state_enum;
//!
//! state_enum! {
//!     enum Lifecycle {
//!         Stopped,
//!         Running,
//!         Paused,
//!     }
//! }
//!
//! let mut machine = MachineBuilder::new()
//!     .states(Lifecycle::VARIANTS.iter().cloned())
//!     .on(Lifecycle::Running, |ctx: &mut Context<Lifecycle>| -> HandlerResult {
//!         ctx.request_transition(Lifecycle::Paused);
//!         Ok(())
//!     })
//!     .on(Lifecycle::Paused, |ctx: &mut Context<Lifecycle>| -> HandlerResult {
//!         ctx.request_transition(Lifecycle::Stopped);
//!         Ok(())
//!     })
//!     .on(Lifecycle::Stopped, noop())
//!     .initial(Lifecycle::Running)
//!     .terminal(Lifecycle::Stopped)
//!     .build()
//!     .unwrap();
//!
//! machine.run().unwrap();
//!
//! assert_eq!(machine.current_state(), &Lifecycle::Stopped);
//! assert_eq!(machine.trace().len(), 3);
//! ```

pub mod builder;
pub mod core;
pub mod runner;

// Re-export commonly used types
pub use crate::builder::{noop, transition_to, ConfigError, MachineBuilder};
pub use crate::core::{Guard, RunTrace, State, TransitionRule, Visit};
pub use crate::runner::{
    Context, Handler, HandlerError, HandlerResult, MachineError, StateMachine, StepOutcome,
};
