use automaton_table::CompiledAutomaton;

use crate::Result;
use crate::analyze::validate;
use crate::compile::compile;
use crate::description::parse_description;

/// Encode a YAML description into a compiled automaton.
///
/// Runs parse → validate → compile and returns the first failure, wrapped
/// with the stage it came from.
pub fn encode_automaton(description: &[u8]) -> Result<CompiledAutomaton> {
    let intermediate = parse_description(description)?;
    let validated = validate(intermediate)?;
    Ok(compile(validated))
}
