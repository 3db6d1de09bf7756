//! Automaton compiler: description parser, validator and table compiler.
//!
//! This crate provides the encoding pipeline for automaton descriptions:
//! - `description` - YAML deserialization into an `IntermediateAutomaton`
//! - `analyze` - well-formedness checks producing a `ValidatedAutomaton`
//! - `compile` - lowering into `automaton_table::CompiledAutomaton`
//!
//! `encode_automaton` runs all three stages and tags failures with the stage
//! that produced them.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod compile;
pub mod description;
mod encode;

#[cfg(test)]
pub mod test_utils;

pub use analyze::{ValidatedAutomaton, ValidationError, ValidationErrorKind, validate};
pub use automaton_table::CompiledAutomaton;
pub use compile::compile;
pub use description::{
    DescriptionError, IntermediateAutomaton, TransitionGroup, parse_description,
};
pub use encode::encode_automaton;

/// Errors that can occur while encoding a description.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The description is not well-formed YAML for an automaton.
    #[error("unmarshal automaton: {0}")]
    Unmarshal(#[from] DescriptionError),

    /// The description parsed but does not describe a valid DFA.
    #[error("encode automaton: validate automaton: {0}")]
    Encode(#[from] ValidationError),
}

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, Error>;
