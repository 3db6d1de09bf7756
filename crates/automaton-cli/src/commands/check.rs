use std::path::PathBuf;

use automaton_core::Colors;

use super::run_common::load_automaton;

pub struct CheckArgs {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub color: bool,
}

/// Validate the description. Silent on success.
pub fn run(args: CheckArgs) {
    let colors = Colors::new(args.color);
    load_automaton(
        args.description_path.as_deref(),
        args.description_text.as_deref(),
        colors,
    );
}
