//! Errors produced by description validation.
//!
//! Messages use the description's 1-indexed numbering. Only the error kind is
//! stable; message wording may change.

use automaton_core::State;
use automaton_core::utils::{code_point, pluralize, quote_symbol};

/// First well-formedness violation found in a description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("state count must be declared")]
    MissingStateCount,

    #[error("state count must be within [1-{max}]: {found}")]
    InvalidStateCount { found: i64, max: usize },

    #[error("start state must be a valid state from [1-{states}]: {}", describe_start(.found))]
    InvalidStartState { found: Option<State>, states: usize },

    #[error("accept states must be valid states from [1-{states}]: {found}")]
    InvalidAcceptState { found: State, states: usize },

    /// A group's output vector does not have exactly one entry per state.
    #[error(
        "transition group {group} must map {} exactly once: got {found} {}",
        each_state(.states),
        outputs_noun(.found)
    )]
    IncompleteTransition {
        group: usize,
        found: usize,
        states: usize,
    },

    #[error(
        "output states of transition group {group} must be valid states from [1-{states}]: {found}"
    )]
    InvalidOutputState {
        group: usize,
        found: State,
        states: usize,
    },

    /// A symbol appears more than once across all groups' inputs.
    #[error(
        "symbol {} ({}) must have exactly one transition function: declared in transition group {first}, redeclared in transition group {group}",
        symbol_label(.symbol),
        symbol_code(.symbol)
    )]
    NonDeterministicSymbol {
        symbol: char,
        first: usize,
        group: usize,
    },
}

/// Fieldless discriminant of `ValidationError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    MissingStateCount,
    InvalidStateCount,
    InvalidStartState,
    InvalidAcceptState,
    IncompleteTransition,
    InvalidOutputState,
    NonDeterministicSymbol,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingStateCount => ValidationErrorKind::MissingStateCount,
            Self::InvalidStateCount { .. } => ValidationErrorKind::InvalidStateCount,
            Self::InvalidStartState { .. } => ValidationErrorKind::InvalidStartState,
            Self::InvalidAcceptState { .. } => ValidationErrorKind::InvalidAcceptState,
            Self::IncompleteTransition { .. } => ValidationErrorKind::IncompleteTransition,
            Self::InvalidOutputState { .. } => ValidationErrorKind::InvalidOutputState,
            Self::NonDeterministicSymbol { .. } => ValidationErrorKind::NonDeterministicSymbol,
        }
    }
}

fn describe_start(found: &Option<State>) -> String {
    match found {
        Some(state) => state.to_string(),
        None => "missing".to_string(),
    }
}

fn each_state(states: &usize) -> String {
    match states {
        1 => "its single state".to_string(),
        n => format!("each of its {n} states"),
    }
}

fn outputs_noun(found: &usize) -> &'static str {
    pluralize(*found, "output", "outputs")
}

fn symbol_label(symbol: &char) -> String {
    quote_symbol(*symbol)
}

fn symbol_code(symbol: &char) -> String {
    code_point(*symbol)
}
