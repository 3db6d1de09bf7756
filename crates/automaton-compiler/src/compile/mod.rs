//! Lowering of validated descriptions into run-time tables.
//!
//! Each expanded symbol of a transition group gets its own row, a verbatim
//! copy of the group's outputs. Validation already guarantees complete,
//! in-range, unique rows, so lowering cannot fail.

use automaton_table::{CompiledAutomaton, TableBuilder};

use crate::analyze::ValidatedAutomaton;


/// Compile a validated description into a `CompiledAutomaton`.
pub fn compile(automaton: ValidatedAutomaton) -> CompiledAutomaton {
    let mut builder = TableBuilder::new(automaton.state_count, automaton.start_state);

    for &state in &automaton.accept_states {
        builder.accept_state(state);
    }

    for group in &automaton.transitions {
        for &symbol in &group.symbols {
            builder.add_transition(symbol, &group.outputs);
        }
    }

    builder.build()
}
