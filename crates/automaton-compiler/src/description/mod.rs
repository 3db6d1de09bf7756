//! Automaton descriptions as declared.
//!
//! The YAML layer maps 1:1 onto the description format; conversion into
//! `IntermediateAutomaton` only expands multi-character inputs. Nothing here
//! interprets state numbers, so out-of-range values survive until validation.

mod types;
mod yaml;

#[cfg(test)]
mod yaml_tests;

pub use types::{IntermediateAutomaton, TransitionGroup};
pub use yaml::{DescriptionError, parse_description};
