//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use automaton_core::State;

use crate::builder::TableBuilder;
use crate::table::MAX_STATES;

impl TableBuilder {
    pub(crate) fn ensure_state_count(state_count: usize) {
        assert!(
            (1..=MAX_STATES).contains(&state_count),
            "TableBuilder: state count {state_count} outside [1-{MAX_STATES}] \
             (descriptions must be validated before compilation)"
        );
    }

    pub(crate) fn ensure_state(state: State, state_count: usize) {
        assert!(
            state.is_within(state_count),
            "TableBuilder: state {state} outside [1-{state_count}] \
             (descriptions must be validated before compilation)"
        );
    }

    pub(crate) fn ensure_row(&self, symbol: char, successors: &[State]) {
        assert!(
            !self.has_symbol(symbol),
            "TableBuilder: symbol {symbol:?} already has a transition row"
        );
        assert_eq!(
            successors.len(),
            self.state_count(),
            "TableBuilder: row for {symbol:?} must have one entry per state"
        );
        for &state in successors {
            Self::ensure_state(state, self.state_count());
        }
    }
}
