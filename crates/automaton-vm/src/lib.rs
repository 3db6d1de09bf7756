//! Recognizer for compiled automata.
//!
//! This crate walks a `CompiledAutomaton`'s transition tables over an input
//! word and reports whether the word belongs to the automaton's language.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    NoopTracer, Outcome, PrintTracer, PrintTracerBuilder, Recognizer, Tracer, Verbosity, recognize,
};
