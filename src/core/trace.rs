//! Run trace: the record of every handler visit.
//!
//! Provides immutable tracking of the states a machine visits over time,
//! following functional programming principles. A visit is recorded each
//! time a state's handler is invoked, so a handler that stays in its own
//! state still shows up once per invocation.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single visit to a state.
///
/// Visits are immutable values naming the state whose handler ran and
/// when the run loop entered it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Visit<S: State> {
    /// The state whose handler was invoked
    pub state: S,
    /// When the run loop entered the state
    pub entered_at: DateTime<Utc>,
}

impl<S: State> Visit<S> {
    /// Create a visit record stamped with the current time.
    pub fn new(state: S) -> Self {
        Self {
            state,
            entered_at: Utc::now(),
        }
    }
}

/// Ordered trace of the visits a run has made.
///
/// The trace is immutable - the `record` method returns a new trace
/// with the visit added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use mainspring::core::{RunTrace, State, Visit};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase {
///     One,
///     Two,
/// }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "One",
///             Self::Two => "Two",
///         }
///     }
/// }
///
/// let trace = RunTrace::new();
/// let trace = trace.record(Visit::new(Phase::One));
/// let trace = trace.record(Visit::new(Phase::Two));
///
/// let path = trace.path();
/// assert_eq!(path, vec![&Phase::One, &Phase::Two]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RunTrace<S: State> {
    visits: Vec<Visit<S>>,
}

impl<S: State> Default for RunTrace<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> RunTrace<S> {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self { visits: Vec::new() }
    }

    /// Record a visit, returning a new trace.
    ///
    /// This is a pure function - it does not mutate the existing trace
    /// but returns a new one with the visit added.
    pub fn record(&self, visit: Visit<S>) -> Self {
        let mut visits = self.visits.clone();
        visits.push(visit);
        Self { visits }
    }

    /// Get the sequence of visited states, in visit order.
    ///
    /// This is exactly the order in which handlers were invoked.
    pub fn path(&self) -> Vec<&S> {
        self.visits.iter().map(|v| &v.state).collect()
    }

    /// Get all recorded visits.
    pub fn visits(&self) -> &[Visit<S>] {
        &self.visits
    }

    /// The most recent visit, if any.
    pub fn last(&self) -> Option<&Visit<S>> {
        self.visits.last()
    }

    /// Number of recorded visits.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Whether nothing has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Calculate total duration from first to last visit.
    ///
    /// Returns `None` if there are no visits. Otherwise returns the
    /// duration between the first and last visit timestamps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.visits.first(), self.visits.last()) {
            let duration = last.entered_at.signed_duration_since(first.entered_at);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
