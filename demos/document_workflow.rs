//! Document Workflow State Machine
//!
//! This example demonstrates the optional transition rule table.
//!
//! Key concepts:
//! - Declaring rules switches the machine to an explicit edge table
//! - A request for an unlisted edge aborts the run with TransitionDenied
//! - Guards attach pure predicates to individual edges
//!
//! Run with: cargo run --example document_workflow

use mainspring::builder::{noop, transition_to, MachineBuilder};
use mainspring::core::{State, TransitionRule};
use mainspring::state_enum;
use std::error::Error;

state_enum! {
    enum DocState {
        Draft,
        InReview,
        Published,
    }
}

fn main() {
    println!("=== Document Workflow ===\n");

    if let Err(err) = demo_denied_shortcut() {
        eprintln!("Unexpected: {err}");
        std::process::exit(1);
    }
    if let Err(err) = demo_full_review() {
        eprintln!("Unexpected: {err}");
        std::process::exit(1);
    }

    println!("\n=== Example Complete ===");
}

/// A draft that tries to publish itself without review is rejected by
/// the rule table.
fn demo_denied_shortcut() -> Result<(), Box<dyn Error>> {
    let mut machine = MachineBuilder::new()
        .states(DocState::VARIANTS.iter().cloned())
        .on(DocState::Draft, transition_to(DocState::Published))
        .on(DocState::InReview, noop())
        .on(DocState::Published, noop())
        .initial(DocState::Draft)
        .terminal(DocState::Published)
        .allow(DocState::Draft, DocState::InReview)
        .allow(DocState::InReview, DocState::Published)
        .build()?;

    println!("Attempting Draft -> Published directly:");
    match machine.run() {
        Ok(()) => println!("  unexpectedly allowed"),
        Err(err) => println!("  denied as configured: {err}"),
    }
    println!("  still in: {}\n", machine.current_state().name());

    Ok(())
}

/// The same workflow routed through review, with a guarded publish edge.
fn demo_full_review() -> Result<(), Box<dyn Error>> {
    let review_approved = true;

    let mut machine = MachineBuilder::new()
        .states(DocState::VARIANTS.iter().cloned())
        .on(DocState::Draft, transition_to(DocState::InReview))
        .on(DocState::InReview, transition_to(DocState::Published))
        .on(DocState::Published, noop())
        .initial(DocState::Draft)
        .terminal(DocState::Published)
        .rule(TransitionRule::new(DocState::Draft, DocState::InReview))
        .rule(
            TransitionRule::new(DocState::InReview, DocState::Published)
                .when(move |_s: &DocState| review_approved),
        )
        .build()?;

    println!("Routing the document through review:");
    machine.run()?;

    let path: Vec<&str> = machine.trace().path().iter().map(|s| s.name()).collect();
    println!("  visited: {}", path.join(" -> "));
    println!("  finished in: {}", machine.current_state().name());

    Ok(())
}
