//! The imperative shell: the synchronous run loop around the pure core.
//!
//! This module owns everything that mutates: the machine itself, the
//! context capability handlers mutate it through, and the runtime error
//! taxonomy.
//!
//! # Execution model
//!
//! Single-threaded and fully synchronous. `run()` executes on the calling
//! thread only; handlers run to completion before the loop proceeds, with
//! no preemption, suspension points, or concurrent handler execution. The
//! [`Context`] capability is lent to a handler by `&mut` for exactly the
//! duration of its invocation, so requesting a transition from outside the
//! synchronous call stack is unrepresentable rather than merely forbidden.
//! No locking is provided because none is needed under this contract.

mod context;
mod error;
mod handler;
mod machine;

pub use context::Context;
pub use error::MachineError;
pub use handler::{Handler, HandlerError, HandlerResult};
pub use machine::{StateMachine, StepOutcome};
