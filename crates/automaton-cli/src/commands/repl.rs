use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use automaton_core::Colors;
use automaton_vm::Recognizer;

use super::description_loader::is_stdin;
use super::run_common::{exit_with_error, load_automaton};

pub const PROMPT: &str = "Enter a word to be recognized by the automaton: ";

pub struct ReplArgs {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub color: bool,
}

pub fn run(args: ReplArgs) {
    let colors = Colors::new(args.color);

    if args.description_text.is_none() && args.description_path.as_deref().is_some_and(is_stdin) {
        exit_with_error("repl reads words from stdin; pass the description as a file or -d", colors);
    }

    let automaton = load_automaton(
        args.description_path.as_deref(),
        args.description_text.as_deref(),
        colors,
    );

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    if let Err(e) = run_loop(Recognizer::new(&automaton), stdin, &mut stdout, colors) {
        exit_with_error(&e.to_string(), colors);
    }
}

/// Prompt, read a word, print the verdict. Stops at end of input.
pub fn run_loop(
    recognizer: Recognizer<'_>,
    mut input: impl BufRead,
    output: &mut impl Write,
    colors: Colors,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        let word = line.trim_end_matches(['\n', '\r']);
        let accepted = recognizer.recognize(word);
        writeln!(
            output,
            "Automaton recognizes '{}': {}{}{}",
            word,
            colors.verdict(accepted),
            accepted,
            colors.reset
        )?;
    }
}
