//! DFA well-formedness checks.
//!
//! Checks run in a fixed order and stop at the first violation:
//! state count, start state, accept states, then each transition group in
//! declaration order (row length, output range, symbol uniqueness).

use std::collections::HashMap;

use automaton_core::State;
use automaton_table::MAX_STATES;

use super::error::ValidationError;
use crate::description::{IntermediateAutomaton, TransitionGroup};

/// A description that passed validation.
///
/// Only `validate` constructs it, which lets `compile` stay infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAutomaton {
    pub(crate) state_count: usize,
    pub(crate) start_state: State,
    pub(crate) accept_states: Vec<State>,
    pub(crate) transitions: Vec<TransitionGroup>,
}

impl ValidatedAutomaton {
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn start_state(&self) -> State {
        self.start_state
    }

    pub fn accept_states(&self) -> &[State] {
        &self.accept_states
    }

    pub fn transitions(&self) -> &[TransitionGroup] {
        &self.transitions
    }
}

/// Validate an intermediate automaton, taking ownership for compilation.
pub fn validate(automaton: IntermediateAutomaton) -> Result<ValidatedAutomaton, ValidationError> {
    let (state_count, start_state) = automaton.check()?;
    Ok(ValidatedAutomaton {
        state_count,
        start_state,
        accept_states: automaton.accept_states,
        transitions: automaton.transitions,
    })
}

impl IntermediateAutomaton {
    /// Check the description without consuming it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check().map(|_| ())
    }

    /// Returns the validated state count and start state.
    fn check(&self) -> Result<(usize, State), ValidationError> {
        let states = self.check_state_count()?;
        let start = self.check_start_state(states)?;
        self.check_accept_states(states)?;

        // symbol -> 1-indexed group that declared it first
        let mut declared: HashMap<char, usize> = HashMap::new();
        for (index, group) in self.transitions.iter().enumerate() {
            check_group(group, index + 1, states, &mut declared)?;
        }

        Ok((states, start))
    }

    fn check_state_count(&self) -> Result<usize, ValidationError> {
        let found = self.state_count.ok_or(ValidationError::MissingStateCount)?;
        match usize::try_from(found) {
            Ok(states) if (1..=MAX_STATES).contains(&states) => Ok(states),
            _ => Err(ValidationError::InvalidStateCount {
                found,
                max: MAX_STATES,
            }),
        }
    }

    fn check_start_state(&self, states: usize) -> Result<State, ValidationError> {
        match self.start_state {
            Some(start) if start.is_within(states) => Ok(start),
            found => Err(ValidationError::InvalidStartState { found, states }),
        }
    }

    fn check_accept_states(&self, states: usize) -> Result<(), ValidationError> {
        match self.accept_states.iter().find(|s| !s.is_within(states)) {
            Some(&found) => Err(ValidationError::InvalidAcceptState { found, states }),
            None => Ok(()),
        }
    }
}

fn check_group(
    group: &TransitionGroup,
    number: usize,
    states: usize,
    declared: &mut HashMap<char, usize>,
) -> Result<(), ValidationError> {
    if group.outputs.len() != states {
        return Err(ValidationError::IncompleteTransition {
            group: number,
            found: group.outputs.len(),
            states,
        });
    }

    if let Some(&found) = group.outputs.iter().find(|s| !s.is_within(states)) {
        return Err(ValidationError::InvalidOutputState {
            group: number,
            found,
            states,
        });
    }

    // A repeat inside the same group counts too ("aa").
    for &symbol in &group.symbols {
        if let Some(&first) = declared.get(&symbol) {
            return Err(ValidationError::NonDeterministicSymbol {
                symbol,
                first,
                group: number,
            });
        }
        declared.insert(symbol, number);
    }

    Ok(())
}
