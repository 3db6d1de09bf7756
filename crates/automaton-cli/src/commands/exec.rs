use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use serde::Serialize;

use automaton_core::Colors;
use automaton_vm::Recognizer;

use super::description_loader::is_stdin;
use super::run_common::{exit_with_error, load_automaton};

pub struct ExecArgs {
    pub description_path: Option<PathBuf>,
    pub description_text: Option<String>,
    pub words: Vec<String>,
    pub pretty: bool,
    pub color: bool,
}

/// One line of `exec` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Verdict {
    pub word: String,
    pub accepted: bool,
}

pub fn run(args: ExecArgs) {
    let colors = Colors::new(args.color);
    let description_from_stdin = args
        .description_path
        .as_deref()
        .is_some_and(is_stdin);

    if args.words.is_empty() && args.description_text.is_none() && description_from_stdin {
        exit_with_error("description and words cannot both be from stdin", colors);
    }

    let automaton = load_automaton(
        args.description_path.as_deref(),
        args.description_text.as_deref(),
        colors,
    );
    let recognizer = Recognizer::new(&automaton);

    let words = if args.words.is_empty() {
        read_words(io::stdin().lock())
            .unwrap_or_else(|e| exit_with_error(&format!("failed to read stdin: {}", e), colors))
    } else {
        args.words
    };

    let verdicts = recognize_all(recognizer, words);

    let serialized = if args.pretty {
        serde_json::to_string_pretty(&verdicts)
    } else {
        serde_json::to_string(&verdicts)
    };
    let output = serialized
        .unwrap_or_else(|e| exit_with_error(&format!("failed to serialize output: {}", e), colors));

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", output) {
        exit_with_error(&format!("failed to write output: {}", e), colors);
    }
}

pub fn recognize_all(recognizer: Recognizer<'_>, words: Vec<String>) -> Vec<Verdict> {
    words
        .into_iter()
        .map(|word| {
            let accepted = recognizer.recognize(&word);
            Verdict { word, accepted }
        })
        .collect()
}

/// One word per line. Line terminators are not part of the word.
pub fn read_words(input: impl BufRead) -> io::Result<Vec<String>> {
    input
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_owned()))
        .collect()
}
