//! Test helpers shared by the compiler's unit tests.

use automaton_core::State;

use crate::{IntermediateAutomaton, TransitionGroup};

/// Description of C++-style integer literals: optional sign, then digits.
pub const INTEGER_YAML: &str = include_str!("../testdata/integer.yaml");

/// Description of integers whose last digit is odd.
pub const ODD_DIGIT_YAML: &str = include_str!("../testdata/odd_digit.yaml");

/// Build an intermediate automaton with every scalar field present.
pub fn automaton(
    states: i64,
    start: i64,
    accept: &[i64],
    groups: &[(&str, &[i64])],
) -> IntermediateAutomaton {
    IntermediateAutomaton {
        state_count: Some(states),
        start_state: Some(State::new(start)),
        accept_states: accept.iter().copied().map(State::new).collect(),
        transitions: groups
            .iter()
            .map(|(input, outputs)| TransitionGroup::new(input, outputs.iter().copied()))
            .collect(),
    }
}

/// Assert that a description fails validation and return the rendered error.
#[track_caller]
pub fn expect_invalid(automaton: &IntermediateAutomaton) -> String {
    match automaton.validate() {
        Ok(()) => panic!("expected validation to fail for {automaton:?}"),
        Err(e) => e.to_string(),
    }
}
