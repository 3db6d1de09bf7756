//! Intermediate automaton definitions.

use automaton_core::State;

/// An automaton exactly as its description declares it.
///
/// Missing scalar fields stay `None` so validation can report them precisely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntermediateAutomaton {
    /// Declared number of states (`states`).
    pub state_count: Option<i64>,
    /// Declared start state (`initial`).
    pub start_state: Option<State>,
    /// Declared accept states (`finalstates`), in declaration order.
    pub accept_states: Vec<State>,
    /// Declared transition groups (`transitions`), in declaration order.
    pub transitions: Vec<TransitionGroup>,
}

/// One `transitions` entry.
///
/// Every symbol moves source state `i` to `outputs[i - 1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionGroup {
    /// One symbol per character of the declared `input`.
    pub symbols: Vec<char>,
    pub outputs: Vec<State>,
}

impl TransitionGroup {
    /// Group from an input string and raw output numbers.
    pub fn new(input: &str, outputs: impl IntoIterator<Item = i64>) -> Self {
        Self {
            symbols: input.chars().collect(),
            outputs: outputs.into_iter().map(State::new).collect(),
        }
    }
}
