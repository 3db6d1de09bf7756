use std::path::PathBuf;

use automaton_core::Colors;

use super::run_common::load_automaton;

pub struct DumpArgs {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let colors = Colors::new(args.color);
    let automaton = load_automaton(
        args.description_path.as_deref(),
        args.description_text.as_deref(),
        colors,
    );

    print!("{}", automaton_table::dump(&automaton, colors));
}
