//! YAML deserialization for automaton descriptions.

use serde::Deserialize;

use automaton_core::State;

use super::types::{IntermediateAutomaton, TransitionGroup};

/// Error during description parsing.
#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    /// Syntax error, or a value of the wrong shape for its key.
    #[error("unmarshal automaton yaml: {0}")]
    Malformed(#[source] serde_yaml::Error),
}

/// Parse a YAML description into an intermediate automaton.
pub fn parse_description(bytes: &[u8]) -> Result<IntermediateAutomaton, DescriptionError> {
    let raw: RawAutomaton = serde_yaml::from_slice(bytes).map_err(DescriptionError::Malformed)?;
    Ok(raw.into())
}

impl IntermediateAutomaton {
    /// Parse a YAML description from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, DescriptionError> {
        parse_description(yaml.as_bytes())
    }
}

/// Raw description matching the YAML format.
///
/// Every key is optional and `null` is accepted wherever a list is expected.
#[derive(Debug, Deserialize)]
struct RawAutomaton {
    #[serde(default)]
    states: Option<i64>,
    #[serde(default)]
    initial: Option<State>,
    #[serde(default)]
    finalstates: Option<Vec<State>>,
    #[serde(default)]
    transitions: Option<Vec<RawTransition>>,
}

#[derive(Debug, Deserialize)]
struct RawTransition {
    #[serde(default)]
    input: Option<String>,
    #[serde(default)]
    outputs: Option<Vec<State>>,
}

impl From<RawAutomaton> for IntermediateAutomaton {
    fn from(raw: RawAutomaton) -> Self {
        Self {
            state_count: raw.states,
            start_state: raw.initial,
            accept_states: raw.finalstates.unwrap_or_default(),
            transitions: raw
                .transitions
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<RawTransition> for TransitionGroup {
    fn from(raw: RawTransition) -> Self {
        Self {
            symbols: raw.input.map(|s| s.chars().collect()).unwrap_or_default(),
            outputs: raw.outputs.unwrap_or_default(),
        }
    }
}
