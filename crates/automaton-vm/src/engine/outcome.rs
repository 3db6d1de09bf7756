//! Result of a single recognition.

use automaton_core::State;

/// How a recognition ended.
///
/// None of these is an error: a word outside the language is an ordinary
/// result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The whole word was consumed and the final state accepts.
    Accepted(State),
    /// The whole word was consumed but the final state does not accept.
    Rejected(State),
    /// `symbol` at char `position` has no transition; the rest was not read.
    UnknownSymbol {
        position: usize,
        symbol: char,
        state: State,
    },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// State reached after consuming the whole word, if it was consumed.
    pub fn final_state(&self) -> Option<State> {
        match *self {
            Self::Accepted(state) | Self::Rejected(state) => Some(state),
            Self::UnknownSymbol { .. } => None,
        }
    }

    /// State the walk stopped in, whether or not the word was consumed.
    pub fn last_state(&self) -> State {
        match *self {
            Self::Accepted(state) | Self::Rejected(state) => state,
            Self::UnknownSymbol { state, .. } => state,
        }
    }
}
