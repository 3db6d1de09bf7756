//! Recognition engine.
//!
//! The recognizer is a straight fold over the input: one table lookup per
//! symbol, no allocation, no mutation of the automaton. Tracing is generic so
//! the default `NoopTracer` compiles away.

mod outcome;
mod recognizer;
mod trace;

#[cfg(test)]
mod engine_tests;

pub use outcome::Outcome;
pub use recognizer::{Recognizer, recognize};
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};
