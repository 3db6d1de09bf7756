//! Compiled automaton tables.

use std::iter::FusedIterator;

use indexmap::IndexMap;

use automaton_core::State;

/// 0-based state index used by the run-time tables.
pub type StateIndex = u32;

/// Largest state count a table can hold.
pub const MAX_STATES: usize = StateIndex::MAX as usize;

/// A deterministic finite automaton ready for recognition.
///
/// Each symbol of the alphabet owns one row with exactly `state_count`
/// entries; entry `i` is the successor of state `i + 1`. Symbols without a
/// row have no transition. Accept states are a sorted index list sized by
/// the declaration, not by `state_count`. Immutable once built, so a shared reference can be used from any number of
/// threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledAutomaton {
    pub(crate) state_count: usize,
    pub(crate) start: StateIndex,
    /// Sorted, deduplicated 0-based accept indices.
    pub(crate) accepting: Box<[StateIndex]>,
    /// Rows in declaration order.
    pub(crate) transitions: IndexMap<char, Box<[StateIndex]>>,
}

impl CompiledAutomaton {
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn start_state(&self) -> State {
        State::from_index(self.start as usize)
    }

    #[inline]
    pub fn start_index(&self) -> StateIndex {
        self.start
    }

    /// Whether `state` is an accept state. Out-of-range states never are.
    pub fn is_accepting(&self, state: State) -> bool {
        state.is_within(self.state_count)
            && self.is_accepting_index(state.to_index() as StateIndex)
    }

    #[inline]
    pub fn is_accepting_index(&self, index: StateIndex) -> bool {
        self.accepting.binary_search(&index).is_ok()
    }

    /// Accept states in ascending order, without duplicates.
    pub fn accept_states(&self) -> impl ExactSizeIterator<Item = State> + '_ {
        self.accepting
            .iter()
            .map(|&index| State::from_index(index as usize))
    }

    /// Symbols with a transition row, in declaration order.
    pub fn alphabet(&self) -> impl ExactSizeIterator<Item = char> + '_ {
        self.transitions.keys().copied()
    }

    pub fn alphabet_len(&self) -> usize {
        self.transitions.len()
    }

    /// Raw 0-based row for `symbol`.
    #[inline]
    pub fn row(&self, symbol: char) -> Option<&[StateIndex]> {
        self.transitions.get(&symbol).map(|row| &**row)
    }

    /// Successors of every state on `symbol`, 1-indexed.
    pub fn successors(&self, symbol: char) -> Option<Successors<'_>> {
        self.row(symbol).map(|row| Successors(row.iter()))
    }

    /// Single transition step. `None` when `symbol` has no row.
    #[inline]
    pub fn step(&self, from: StateIndex, symbol: char) -> Option<StateIndex> {
        self.row(symbol).map(|row| row[from as usize])
    }
}

/// Iterator over a transition row as 1-indexed states.
#[derive(Clone, Debug)]
pub struct Successors<'a>(std::slice::Iter<'a, StateIndex>);

impl Iterator for Successors<'_> {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        self.0.next().map(|&index| State::from_index(index as usize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Successors<'_> {}

impl FusedIterator for Successors<'_> {}
