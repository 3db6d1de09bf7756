//! Table-driven membership test.

use automaton_core::State;
use automaton_table::CompiledAutomaton;

use super::outcome::Outcome;
use super::trace::{NoopTracer, Tracer};

/// Recognizer bound to one compiled automaton.
///
/// Holds only a shared reference, so it is `Copy` and any number of
/// recognizers may run concurrently over the same automaton.
#[derive(Clone, Copy, Debug)]
pub struct Recognizer<'a> {
    automaton: &'a CompiledAutomaton,
}

impl<'a> Recognizer<'a> {
    pub fn new(automaton: &'a CompiledAutomaton) -> Self {
        Self { automaton }
    }

    /// Whether `word` belongs to the automaton's language.
    pub fn recognize(&self, word: &str) -> bool {
        self.execute(word).is_accepted()
    }

    /// Run the automaton over `word`.
    ///
    /// Uses `NoopTracer`, which is optimized away.
    pub fn execute(&self, word: &str) -> Outcome {
        self.execute_with(word, &mut NoopTracer)
    }

    /// Run the automaton over `word`, reporting every step to `tracer`.
    pub fn execute_with<T: Tracer>(&self, word: &str, tracer: &mut T) -> Outcome {
        let automaton = self.automaton;
        let mut current = automaton.start_index();
        tracer.trace_start(State::from_index(current as usize));

        for (position, symbol) in word.chars().enumerate() {
            let Some(row) = automaton.row(symbol) else {
                let state = State::from_index(current as usize);
                tracer.trace_unknown_symbol(position, symbol, state);
                return Outcome::UnknownSymbol {
                    position,
                    symbol,
                    state,
                };
            };

            let next = row[current as usize];
            tracer.trace_step(
                position,
                symbol,
                State::from_index(current as usize),
                State::from_index(next as usize),
            );
            current = next;
        }

        let state = State::from_index(current as usize);
        let accepted = automaton.is_accepting_index(current);
        tracer.trace_finish(state, accepted);

        if accepted {
            Outcome::Accepted(state)
        } else {
            Outcome::Rejected(state)
        }
    }
}

/// Whether `word` belongs to the language of `automaton`.
pub fn recognize(automaton: &CompiledAutomaton, word: &str) -> bool {
    Recognizer::new(automaton).recognize(word)
}
