//! Semantic analysis of intermediate automata.
//!
//! - `validation` - DFA well-formedness checks
//! - `error` - validation error taxonomy

mod error;
mod validation;


pub use error::{ValidationError, ValidationErrorKind};
pub use validation::{ValidatedAutomaton, validate};
