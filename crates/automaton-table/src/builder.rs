//! Assembly of compiled tables.

use indexmap::IndexMap;

use automaton_core::State;

use crate::table::{CompiledAutomaton, StateIndex};

/// Builder for `CompiledAutomaton`.
///
/// Callers must hand it well-formed data (states within `[1, state_count]`,
/// complete rows, one row per symbol). Violations are programming errors and
/// panic; the compiler only feeds it validated descriptions.
#[derive(Debug)]
pub struct TableBuilder {
    state_count: usize,
    start: StateIndex,
    accepting: Vec<StateIndex>,
    transitions: IndexMap<char, Box<[StateIndex]>>,
}

impl TableBuilder {
    /// Start a table with `state_count` states and the given start state.
    pub fn new(state_count: usize, start: State) -> Self {
        Self::ensure_state_count(state_count);
        Self::ensure_state(start, state_count);
        Self {
            state_count,
            start: start.to_index() as StateIndex,
            accepting: Vec::new(),
            transitions: IndexMap::new(),
        }
    }

    /// Mark `state` as accepting. Repeats are idempotent.
    pub fn accept_state(&mut self, state: State) -> &mut Self {
        Self::ensure_state(state, self.state_count);
        self.accepting.push(state.to_index() as StateIndex);
        self
    }

    /// Record the transition row for `symbol`.
    pub fn add_transition(&mut self, symbol: char, successors: &[State]) -> &mut Self {
        self.ensure_row(symbol, successors);
        let row = successors
            .iter()
            .map(|state| state.to_index() as StateIndex)
            .collect();
        self.transitions.insert(symbol, row);
        self
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn has_symbol(&self, symbol: char) -> bool {
        self.transitions.contains_key(&symbol)
    }

    pub fn build(mut self) -> CompiledAutomaton {
        self.accepting.sort_unstable();
        self.accepting.dedup();
        CompiledAutomaton {
            state_count: self.state_count,
            start: self.start,
            accepting: self.accepting.into_boxed_slice(),
            transitions: self.transitions,
        }
    }
}
