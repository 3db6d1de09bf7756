//! Shared logic for commands that need a compiled automaton.

use std::path::Path;

use automaton_compiler::{CompiledAutomaton, encode_automaton};
use automaton_core::Colors;

use super::description_loader::load_description;

/// Load and encode a description, exiting with status 1 on any failure.
pub fn load_automaton(
    description_path: Option<&Path>,
    description_text: Option<&str>,
    colors: Colors,
) -> CompiledAutomaton {
    let description = load_description(description_path, description_text)
        .unwrap_or_else(|msg| exit_with_error(&msg, colors));

    encode_automaton(&description).unwrap_or_else(|e| exit_with_error(&e.to_string(), colors))
}

pub fn exit_with_error(msg: &str, colors: Colors) -> ! {
    eprintln!("{}error{}: {}", colors.red, colors.reset, msg);
    std::process::exit(1);
}
