//! Builder for constructing state machines.

use crate::builder::error::ConfigError;
use crate::core::{State, TransitionRule};
use crate::runner::{Handler, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// Declares the closed state set, binds one handler per state, and sets
/// the initial state, terminal set, and (optionally) the transition rule
/// table. [`build`](Self::build) validates the whole configuration and is
/// the only way to obtain a [`StateMachine`]; every hole it reports is a
/// [`ConfigError`], so nothing is left to fail at run time except the
/// machine's own runtime contract.
pub struct MachineBuilder<S: State + 'static> {
    states: Vec<S>,
    handlers: Vec<(S, Box<dyn Handler<S>>)>,
    initial: Option<S>,
    terminal: Vec<S>,
    rules: Vec<TransitionRule<S>>,
}

impl<S: State + 'static> MachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            handlers: Vec::new(),
            initial: None,
            terminal: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Declare the closed state set (required).
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.states.extend(states);
        self
    }

    /// Declare a single state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Bind a handler to a declared state.
    ///
    /// Every declared state needs exactly one handler; closures and
    /// anything else implementing [`Handler`] are accepted.
    pub fn on<H>(mut self, state: S, handler: H) -> Self
    where
        H: Handler<S> + 'static,
    {
        self.handlers.push((state, Box::new(handler)));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark a state as terminal.
    ///
    /// A machine with no terminal states never finishes `run()`; that
    /// can be intentional for step-driven machines.
    pub fn terminal(mut self, state: S) -> Self {
        self.terminal.push(state);
        self
    }

    /// Mark several states as terminal.
    pub fn terminals<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.terminal.extend(states);
        self
    }

    /// Add a transition rule.
    ///
    /// Declaring any rule switches the machine from free-form
    /// transitions to an explicit edge table.
    pub fn rule(mut self, rule: TransitionRule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Shorthand for adding an unconditional edge rule.
    pub fn allow(self, from: S, to: S) -> Self {
        self.rule(TransitionRule::new(from, to))
    }

    /// Build the state machine.
    ///
    /// Returns a [`ConfigError`] if the configuration is incomplete or
    /// names a state outside the declared set.
    pub fn build(self) -> Result<StateMachine<S>, ConfigError> {
        if self.states.is_empty() {
            return Err(ConfigError::NoStates);
        }

        for (i, state) in self.states.iter().enumerate() {
            if self.states[..i].contains(state) {
                return Err(ConfigError::DuplicateState {
                    state: state.name().to_string(),
                });
            }
        }

        if self.handlers.is_empty() {
            return Err(ConfigError::NoHandlers);
        }

        for (i, (state, _)) in self.handlers.iter().enumerate() {
            if !self.states.contains(state) {
                return Err(ConfigError::UndeclaredState {
                    state: state.name().to_string(),
                });
            }
            if self.handlers[..i].iter().any(|(bound, _)| bound == state) {
                return Err(ConfigError::DuplicateHandler {
                    state: state.name().to_string(),
                });
            }
        }

        for state in &self.states {
            if !self.handlers.iter().any(|(bound, _)| bound == state) {
                return Err(ConfigError::MissingHandler {
                    state: state.name().to_string(),
                });
            }
        }

        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        if !self.states.contains(&initial) {
            return Err(ConfigError::UndeclaredState {
                state: initial.name().to_string(),
            });
        }

        for state in &self.terminal {
            if !self.states.contains(state) {
                return Err(ConfigError::UndeclaredState {
                    state: state.name().to_string(),
                });
            }
        }

        for rule in &self.rules {
            for endpoint in [rule.source(), rule.target()] {
                if !self.states.contains(endpoint) {
                    return Err(ConfigError::UndeclaredState {
                        state: endpoint.name().to_string(),
                    });
                }
            }
        }

        Ok(StateMachine::from_parts(
            self.states,
            self.handlers,
            initial,
            self.terminal,
            self.rules,
        ))
    }
}

impl<S: State + 'static> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::noop;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Stopped,
        Running,
        Paused,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Stopped => "Stopped",
                Self::Running => "Running",
                Self::Paused => "Paused",
            }
        }
    }

    #[test]
    fn builder_requires_states() {
        let result = MachineBuilder::<TestState>::new().build();

        assert_eq!(result.err(), Some(ConfigError::NoStates));
    }

    #[test]
    fn builder_rejects_duplicate_states() {
        let result = MachineBuilder::new()
            .states(vec![TestState::Running, TestState::Running])
            .on(TestState::Running, noop())
            .initial(TestState::Running)
            .build();

        assert_eq!(
            result.err(),
            Some(ConfigError::DuplicateState {
                state: "Running".to_string()
            })
        );
    }

    #[test]
    fn builder_requires_handlers() {
        let result = MachineBuilder::new()
            .states(vec![TestState::Running, TestState::Stopped])
            .initial(TestState::Running)
            .build();

        assert_eq!(result.err(), Some(ConfigError::NoHandlers));
    }

    #[test]
    fn builder_requires_a_handler_per_state() {
        let result = MachineBuilder::new()
            .states(vec![TestState::Running, TestState::Stopped])
            .on(TestState::Running, noop())
            .initial(TestState::Running)
            .build();

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingHandler {
                state: "Stopped".to_string()
            })
        );
    }

    #[test]
    fn builder_rejects_two_handlers_for_one_state() {
        let result = MachineBuilder::new()
            .states(vec![TestState::Running])
            .on(TestState::Running, noop())
            .on(TestState::Running, noop())
            .initial(TestState::Running)
            .build();

        assert_eq!(
            result.err(),
            Some(ConfigError::DuplicateHandler {
                state: "Running".to_string()
            })
        );
    }

    #[test]
    fn builder_rejects_handler_for_undeclared_state() {
        let result = MachineBuilder::new()
            .states(vec![TestState::Running])
            .on(TestState::Running, noop())
            .on(TestState::Paused, noop())
            .initial(TestState::Running)
            .build();

        assert_eq!(
            result.err(),
            Some(ConfigError::UndeclaredState {
                state: "Paused".to_string()
            })
        );
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = MachineBuilder::new()
            .states(vec![TestState::Running])
            .on(TestState::Running, noop())
            .build();

        assert_eq!(result.err(), Some(ConfigError::MissingInitialState));
    }

    #[test]
    fn builder_rejects_undeclared_initial_state() {
        let result = MachineBuilder::new()
            .states(vec![TestState::Running])
            .on(TestState::Running, noop())
            .initial(TestState::Stopped)
            .build();

        assert_eq!(
            result.err(),
            Some(ConfigError::UndeclaredState {
                state: "Stopped".to_string()
            })
        );
    }

    #[test]
    fn builder_rejects_undeclared_terminal_state() {
        let result = MachineBuilder::new()
            .states(vec![TestState::Running])
            .on(TestState::Running, noop())
            .initial(TestState::Running)
            .terminal(TestState::Stopped)
            .build();

        assert_eq!(
            result.err(),
            Some(ConfigError::UndeclaredState {
                state: "Stopped".to_string()
            })
        );
    }

    #[test]
    fn builder_rejects_rules_with_undeclared_endpoints() {
        let result = MachineBuilder::new()
            .states(vec![TestState::Running])
            .on(TestState::Running, noop())
            .initial(TestState::Running)
            .allow(TestState::Running, TestState::Paused)
            .build();

        assert_eq!(
            result.err(),
            Some(ConfigError::UndeclaredState {
                state: "Paused".to_string()
            })
        );
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .states(vec![TestState::Stopped, TestState::Running, TestState::Paused])
            .on(TestState::Stopped, noop())
            .on(TestState::Running, noop())
            .on(TestState::Paused, noop())
            .initial(TestState::Running)
            .terminal(TestState::Stopped)
            .build();

        assert!(machine.is_ok());
        let machine = machine.unwrap();
        assert_eq!(machine.current_state(), &TestState::Running);
        assert_eq!(machine.declared_states().len(), 3);
        assert_eq!(machine.terminal_states(), &[TestState::Stopped]);
        assert!(!machine.is_terminal());
    }

    #[test]
    fn states_accumulate_across_calls() {
        let machine = MachineBuilder::new()
            .state(TestState::Running)
            .state(TestState::Stopped)
            .on(TestState::Running, noop())
            .on(TestState::Stopped, noop())
            .initial(TestState::Running)
            .terminals(vec![TestState::Stopped])
            .build();

        assert!(machine.is_ok());
    }
}
