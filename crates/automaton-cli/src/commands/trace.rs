use std::path::PathBuf;

use automaton_core::Colors;
use automaton_vm::{PrintTracer, Recognizer, Verbosity};

use super::run_common::load_automaton;

pub struct TraceArgs {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub word: String,
    pub verbosity: Verbosity,
    pub color: bool,
}

/// Print the trace of one recognition. Exits with 1 when the word is rejected.
pub fn run(args: TraceArgs) {
    let colors = Colors::new(args.color);
    let automaton = load_automaton(
        args.description_path.as_deref(),
        args.description_text.as_deref(),
        colors,
    );

    let mut tracer = PrintTracer::builder()
        .verbosity(args.verbosity)
        .colored(colors.is_enabled())
        .build();
    let outcome = Recognizer::new(&automaton).execute_with(&args.word, &mut tracer);
    tracer.print();

    if !outcome.is_accepted() {
        std::process::exit(1);
    }
}
