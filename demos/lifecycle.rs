//! Stop/Run/Pause Lifecycle
//!
//! The classic injected-handler walkthrough: three states, each with a
//! console-printing handler, looping until the terminal state is reached.
//!
//! Key concepts:
//! - One handler per state, injected at construction
//! - Handlers request the next state through the context capability
//! - The terminal state's handler still runs once before the loop exits
//!
//! Run with: cargo run --example lifecycle

use mainspring::builder::MachineBuilder;
use mainspring::core::State;
use mainspring::runner::{Context, HandlerResult};
use mainspring::state_enum;
use std::error::Error;

state_enum! {
    enum Lifecycle {
        Stopped,
        Running,
        Paused,
    }
}

fn drive() -> Result<(), Box<dyn Error>> {
    let mut machine = MachineBuilder::new()
        .states(Lifecycle::VARIANTS.iter().cloned())
        .on(Lifecycle::Running, |ctx: &mut Context<Lifecycle>| -> HandlerResult {
            println!("In {} state", ctx.current().name());
            println!("Pause event");
            ctx.request_transition(Lifecycle::Paused);
            Ok(())
        })
        .on(Lifecycle::Paused, |ctx: &mut Context<Lifecycle>| -> HandlerResult {
            println!("In {} state", ctx.current().name());
            println!("Stop event");
            ctx.request_transition(Lifecycle::Stopped);
            Ok(())
        })
        .on(Lifecycle::Stopped, |ctx: &mut Context<Lifecycle>| -> HandlerResult {
            println!("In {} state", ctx.current().name());
            println!("Clean up in Stopped state before we exit");
            Ok(())
        })
        .initial(Lifecycle::Running)
        .terminal(Lifecycle::Stopped)
        .build()?;

    machine.run()?;

    let path: Vec<&str> = machine.trace().path().iter().map(|s| s.name()).collect();
    println!("\nVisited: {}", path.join(" -> "));

    Ok(())
}

fn main() {
    println!("=== Lifecycle State Machine ===\n");

    if let Err(err) = drive() {
        eprintln!("Unexpected: {err}");
        std::process::exit(1);
    }

    println!("\n=== Example Complete ===");
}
