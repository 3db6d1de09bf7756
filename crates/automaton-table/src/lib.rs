//! Run-time representation of compiled automata.
//!
//! This crate contains:
//! - `CompiledAutomaton`: dense per-symbol transition rows plus an accept set
//! - `TableBuilder`: the only way to assemble a `CompiledAutomaton`
//! - `dump`: human-readable table listing for debugging

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod builder;
pub mod dump;
mod invariants;
mod table;

#[cfg(test)]
mod dump_tests;

pub use builder::TableBuilder;
pub use dump::dump;
pub use table::{CompiledAutomaton, MAX_STATES, StateIndex, Successors};
